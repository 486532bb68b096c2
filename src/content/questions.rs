//! Knowledge-check and final-assessment question banks.

use super::QuestionSeed;

pub const MODULE_1: &[QuestionSeed] = &[
    QuestionSeed {
        text: "(SE Definition) According to Lesson 1.1, which of the following is the most accurate definition of social engineering?",
        options: [
            "The use of complex code to bypass a digital firewall.",
            "The practice of analyzing social media to improve network security.",
            "The art of manipulating people into giving up confidential information by exploiting psychological tricks.",
            "The process of building better, more secure computer hardware.",
        ],
        correct: 'c',
        explanation: "Correct! Lesson 1.1 defines social engineering as 'human hacking' that uses psychological tricks to manipulate people.",
        set: 1,
    },
    QuestionSeed {
        text: "(Key Distinction) What is the primary way social engineering differs from a traditional technical hack?",
        options: [
            "Social engineering is only used for pranks, while technical hacking is for serious crimes.",
            "Social engineering targets the human user to bypass security, while technical hacking targets vulnerabilities in software or systems.",
            "Social engineering requires advanced programming skills, while technical hacking does not.",
            "Social engineering can only be done over the phone, not through email.",
        ],
        correct: 'b',
        explanation: "Exactly! The core idea is that social engineers bypass technology by targeting the person. It's like being convinced to hand over the key to your own house.",
        set: 1,
    },
    QuestionSeed {
        text: "(Psychological Bias) You receive an email with the subject line \"URGENT: Your Student Portal Password Will Expire in 24 Hours!\" The email appears to be from the \"Registrar's Office\" and demands you click a link immediately. This attack primarily uses which two principles?",
        options: [
            "Liking and Social Proof",
            "Scarcity and Liking",
            "Authority and Urgency",
            "Scarcity and Authority",
        ],
        correct: 'c',
        explanation: "That's right! This attack uses Authority (pretending to be the Registrar) and Urgency (the 24-hour deadline) to make you act without thinking, just like the example in Lesson 1.2.",
        set: 1,
    },
    QuestionSeed {
        text: "(Common Motivation) Based on the examples in the lessons (Bitcoin scam, GCash requests), what is a common motivation for social engineers?",
        options: [
            "To test a company's firewall for weaknesses.",
            "To make new friends and connections online.",
            "To gain access to information or resources for personal or financial benefit.",
            "To help users become more skeptical and informed.",
        ],
        correct: 'c',
        explanation: "Correct. The examples consistently show that attackers are trying to get something valuable, whether it's money, account access, or personal information.",
        set: 1,
    },
    QuestionSeed {
        text: "(Concept Identification) True or False: The lessons state that a strong firewall and antivirus software are enough to stop all social engineering attacks.",
        options: [
            "True",
            "False",
            "—",
            "—",
        ],
        correct: 'b',
        explanation: "Correct, this is false. Lesson 1.1 emphasizes that social engineering's main strength is its ability to bypass technical defenses by targeting the user directly.",
        set: 1,
    },
    QuestionSeed {
        text: "(Psychological Bias) A pop-up ad for a mobile game says: \"🔥 FREE 1000 GEMS! 🔥 Limited to the first 500 players! Claim yours before they're gone!\" This tactic relies on the principle of:",
        options: [
            "Authority",
            "Liking",
            "Scarcity",
            "Social Proof",
        ],
        correct: 'c',
        explanation: "Perfect! By claiming the offer is 'limited to the first 500 players,' the scam creates a sense of Scarcity to pressure you into acting quickly.",
        set: 1,
    },
    QuestionSeed {
        text: "(Psychological Bias) You get a message on Messenger from a classmate that says, \"Hey, urgent! My GCash is down, please send ₱500 to this number. I'll pay you back tomorrow!\" This scam primarily exploits which psychological principle?",
        options: [
            "Authority",
            "Scarcity",
            "Liking",
            "Social Proof",
        ],
        correct: 'c',
        explanation: "That's it! Because the message appears to be from someone you know and trust (a classmate), it is exploiting the principle of Liking to lower your guard.",
        set: 1,
    },
    QuestionSeed {
        text: "(Concept Identification) The lessons refer to social engineering as \"human hacking\" because it:",
        options: [
            "Requires the hacker to be physically present.",
            "Can only be done by very friendly and popular people.",
            "Targets people's natural tendencies and psychology instead of computer code.",
            "Is a legal method for testing security.",
        ],
        correct: 'c',
        explanation: "Yes! This is the central concept from Lesson 1.1. It's called 'human hacking' because it exploits our brains 'shortcuts' and natural tendencies.",
        set: 1,
    },
    QuestionSeed {
        text: "(Key Distinction) Which of these scenarios describes a social engineering attack, as explained in the module?",
        options: [
            "A hacker discovers a flaw in a website's code that allows them to access a database.",
            "A scammer calls an employee, pretends to be from the IT department, and convinces them to reveal their password.",
            "A programmer writes a script that automatically tries thousands of different passwords on a login page.",
            "A network administrator installs a new firewall to block malicious traffic.",
        ],
        correct: 'b',
        explanation: "Correct! This is a classic example of social engineering where the attacker uses deception and impersonation to manipulate a person into compromising security.",
        set: 1,
    },
    QuestionSeed {
        text: "(Psychological Bias) A scammer creates a fake social media post for a giveaway, using bots to add thousands of likes and comments that say \"It works! I got my prize!\" to convince real users to participate. This is a clear example of an attacker using:",
        options: [
            "Authority",
            "Social Proof",
            "Urgency",
            "Liking",
        ],
        correct: 'b',
        explanation: "Exactly! This tactic uses Social Proof to make the scam seem legitimate because 'everyone else is doing it' and appears to be winning.",
        set: 1,
    },
];

pub const MODULE_2: &[QuestionSeed] = &[
    QuestionSeed {
        text: "What is the most common type of social engineering attack?",
        options: [
            "Pretexting",
            "Phishing",
            "Baiting",
            "Tailgating",
        ],
        correct: 'b',
        explanation: "Phishing is the most common type of social engineering attack, involving fraudulent emails, texts, or websites.",
        set: 1,
    },
    QuestionSeed {
        text: "What is spear phishing?",
        options: [
            "A general phishing attack sent to many people",
            "A targeted phishing attack against specific individuals or organizations",
            "A phishing attack using voice calls",
            "A phishing attack using physical media",
        ],
        correct: 'b',
        explanation: "Spear phishing is a targeted phishing attack against specific individuals or organizations.",
        set: 1,
    },
    QuestionSeed {
        text: "What is pretexting?",
        options: [
            "Creating fake websites",
            "Creating a fabricated scenario to obtain information",
            "Leaving infected USB drives",
            "Following someone through secure doors",
        ],
        correct: 'b',
        explanation: "Pretexting involves creating a fabricated scenario to obtain information by pretending to be someone else.",
        set: 1,
    },
    QuestionSeed {
        text: "What is baiting?",
        options: [
            "Using phone calls to trick people",
            "Using physical media to spread malware",
            "Creating fake identities",
            "Exploiting website vulnerabilities",
        ],
        correct: 'b',
        explanation: "Baiting uses physical media like infected USB drives to spread malware.",
        set: 1,
    },
    QuestionSeed {
        text: "What is quid pro quo?",
        options: [
            "A type of phishing attack",
            "Offering a service in exchange for information",
            "A physical security breach",
            "A website compromise",
        ],
        correct: 'b',
        explanation: "Quid pro quo involves offering a service in exchange for information or access.",
        set: 1,
    },
    QuestionSeed {
        text: "What is tailgating?",
        options: [
            "Following someone through secure doors",
            "Sending fraudulent emails",
            "Creating fake websites",
            "Using infected USB drives",
        ],
        correct: 'a',
        explanation: "Tailgating occurs when an unauthorized person follows an authorized person into a restricted area.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a watering hole attack?",
        options: [
            "Compromising frequently visited websites",
            "Using phone calls to trick people",
            "Leaving infected devices in public",
            "Creating fake identities",
        ],
        correct: 'a',
        explanation: "Watering hole attacks target websites that are likely to be visited by intended victims.",
        set: 2,
    },
    QuestionSeed {
        text: "Which attack type exploits human courtesy?",
        options: [
            "Phishing",
            "Pretexting",
            "Tailgating",
            "Baiting",
        ],
        correct: 'c',
        explanation: "Tailgating exploits human courtesy by following someone through secure doors.",
        set: 2,
    },
    QuestionSeed {
        text: "What is vishing?",
        options: [
            "Voice phishing using phone calls",
            "SMS phishing using text messages",
            "Email phishing",
            "Website phishing",
        ],
        correct: 'a',
        explanation: "Vishing is voice phishing using phone calls.",
        set: 2,
    },
    QuestionSeed {
        text: "What is whaling?",
        options: [
            "Phishing attacks targeting high-level executives",
            "General phishing attacks",
            "SMS phishing attacks",
            "Voice phishing attacks",
        ],
        correct: 'a',
        explanation: "Whaling refers to phishing attacks specifically targeting high-level executives.",
        set: 2,
    },
    QuestionSeed {
        text: "Which attack characteristic creates time pressure?",
        options: [
            "Authority",
            "Urgency",
            "Scarcity",
            "Social proof",
        ],
        correct: 'b',
        explanation: "Urgency creates time pressure to bypass rational thinking.",
        set: 3,
    },
    QuestionSeed {
        text: "What is smishing?",
        options: [
            "Email phishing",
            "SMS phishing using text messages",
            "Voice phishing",
            "Website phishing",
        ],
        correct: 'b',
        explanation: "Smishing is SMS phishing using text messages.",
        set: 3,
    },
    QuestionSeed {
        text: "Which attack type uses physical media?",
        options: [
            "Phishing",
            "Baiting",
            "Pretexting",
            "Quid pro quo",
        ],
        correct: 'b',
        explanation: "Baiting uses physical media like infected USB drives to spread malware.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the main goal of watering hole attacks?",
        options: [
            "To steal physical devices",
            "To infect visitors with malware",
            "To gain physical access",
            "To create fake identities",
        ],
        correct: 'b',
        explanation: "Watering hole attacks aim to infect visitors with malware by compromising frequently visited websites.",
        set: 3,
    },
    QuestionSeed {
        text: "Which attack type involves offering something in return?",
        options: [
            "Phishing",
            "Baiting",
            "Quid pro quo",
            "Tailgating",
        ],
        correct: 'c',
        explanation: "Quid pro quo involves offering a service in exchange for information or access.",
        set: 3,
    },
];

pub const MODULE_3: &[QuestionSeed] = &[
    QuestionSeed {
        text: "Which of the following is a red flag for email phishing?",
        options: [
            "Professional grammar and spelling",
            "Urgent or threatening language",
            "Personal greeting with your name",
            "Links to official websites",
        ],
        correct: 'b',
        explanation: "Urgent or threatening language is a common red flag in phishing emails.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do when you receive a suspicious email?",
        options: [
            "Click all links to investigate",
            "Reply with your personal information",
            "Don't click links or download attachments",
            "Forward it to all your contacts",
        ],
        correct: 'c',
        explanation: "You should never click links or download attachments from suspicious emails.",
        set: 1,
    },
    QuestionSeed {
        text: "How can you verify if a website is legitimate?",
        options: [
            "Check for HTTPS and padlock icon",
            "Ignore the URL completely",
            "Click on all pop-ups",
            "Enter your password immediately",
        ],
        correct: 'a',
        explanation: "Check for HTTPS and padlock icon to verify website legitimacy.",
        set: 1,
    },
    QuestionSeed {
        text: "What is caller ID spoofing?",
        options: [
            "A legitimate business practice",
            "When phone numbers are faked to appear legitimate",
            "A type of email phishing",
            "A security feature",
        ],
        correct: 'b',
        explanation: "Caller ID spoofing is when phone numbers are faked to appear legitimate.",
        set: 1,
    },
    QuestionSeed {
        text: "Which prevention strategy is most effective?",
        options: [
            "Using only strong passwords",
            "Multi-factor authentication",
            "Ignoring all emails",
            "Sharing passwords with colleagues",
        ],
        correct: 'b',
        explanation: "Multi-factor authentication adds an extra layer of security.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do if you suspect a phishing attempt?",
        options: [
            "Report it to your IT department",
            "Ignore it completely",
            "Share it on social media",
            "Reply to the sender",
        ],
        correct: 'a',
        explanation: "You should report suspicious phishing attempts to your IT department.",
        set: 2,
    },
    QuestionSeed {
        text: "Which of the following is NOT a phishing red flag?",
        options: [
            "Generic greetings like \"Dear Customer\"",
            "Requests for sensitive information",
            "Professional design and branding",
            "Urgent or threatening language",
        ],
        correct: 'c',
        explanation: "Professional design and branding is typically a sign of legitimacy, not phishing.",
        set: 2,
    },
    QuestionSeed {
        text: "What is vishing?",
        options: [
            "Email phishing",
            "Voice phishing using phone calls",
            "Website phishing",
            "SMS phishing",
        ],
        correct: 'b',
        explanation: "Vishing is voice phishing using phone calls.",
        set: 2,
    },
    QuestionSeed {
        text: "How can you check if a link is legitimate?",
        options: [
            "Click it immediately",
            "Hover over the link to see the actual URL",
            "Ignore the link completely",
            "Share it with friends",
        ],
        correct: 'b',
        explanation: "Hover over the link to see the actual URL before clicking.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you accidentally clicked a phishing link?",
        options: [
            "Ignore it completely",
            "Change your passwords and monitor accounts",
            "Share it on social media",
            "Reply to the sender",
        ],
        correct: 'b',
        explanation: "If you accidentally clicked a phishing link, change your passwords and monitor accounts.",
        set: 2,
    },
    QuestionSeed {
        text: "Which of the following is a legitimate request from a bank?",
        options: [
            "Email asking for your password",
            "Phone call demanding immediate payment",
            "Letter mailed to your address",
            "Text message with urgent action required",
        ],
        correct: 'c',
        explanation: "Banks typically send official communications through regular mail, not urgent emails or calls.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the purpose of multi-factor authentication?",
        options: [
            "To make logging in more difficult",
            "To add an extra layer of security",
            "To slow down internet speed",
            "To share passwords with others",
        ],
        correct: 'b',
        explanation: "Multi-factor authentication adds an extra layer of security beyond just passwords.",
        set: 3,
    },
    QuestionSeed {
        text: "Which of the following is a sign of a phishing website?",
        options: [
            "Professional design and branding",
            "HTTPS and padlock icon",
            "Request for unnecessary personal information",
            "Official company logo",
        ],
        correct: 'c',
        explanation: "Request for unnecessary personal information is a sign of a phishing website.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do with suspicious attachments?",
        options: [
            "Open them immediately",
            "Don't download or open them",
            "Forward them to friends",
            "Reply to the sender",
        ],
        correct: 'b',
        explanation: "You should never download or open suspicious attachments.",
        set: 3,
    },
    QuestionSeed {
        text: "How often should you update your software?",
        options: [
            "Never",
            "Only when forced",
            "Regularly to get security patches",
            "Once a year",
        ],
        correct: 'c',
        explanation: "You should update software regularly to get security patches that fix vulnerabilities.",
        set: 3,
    },
];

pub const MODULE_4: &[QuestionSeed] = &[
    QuestionSeed {
        text: "What is the minimum recommended password length?",
        options: [
            "8 characters",
            "12 characters",
            "6 characters",
            "16 characters",
        ],
        correct: 'b',
        explanation: "The minimum recommended password length is 12 characters for better security.",
        set: 1,
    },
    QuestionSeed {
        text: "What is multi-factor authentication (MFA)?",
        options: [
            "Using multiple passwords",
            "Adding an extra layer of security beyond passwords",
            "Using only biometric authentication",
            "Sharing passwords with others",
        ],
        correct: 'b',
        explanation: "MFA adds an extra layer of security by requiring multiple forms of verification.",
        set: 1,
    },
    QuestionSeed {
        text: "Which of the following is a strong password?",
        options: [
            "password123",
            "MyDogSpot2023!",
            "123456789",
            "qwerty",
        ],
        correct: 'b',
        explanation: "MyDogSpot2023! is strong because it has length, complexity, and includes symbols.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with passwords?",
        options: [
            "Share them with trusted friends",
            "Use the same password for all accounts",
            "Use different passwords for each account",
            "Write them on sticky notes",
        ],
        correct: 'c',
        explanation: "You should use different passwords for each account to minimize risk.",
        set: 1,
    },
    QuestionSeed {
        text: "What is a password manager?",
        options: [
            "A person who remembers your passwords",
            "Software that securely stores and generates passwords",
            "A notebook for writing passwords",
            "A website that shares passwords",
        ],
        correct: 'b',
        explanation: "A password manager is software that securely stores and generates passwords.",
        set: 1,
    },
    QuestionSeed {
        text: "Which of the following is NOT a type of MFA?",
        options: [
            "SMS text messages",
            "Authenticator apps",
            "Using the same password twice",
            "Biometric authentication",
        ],
        correct: 'c',
        explanation: "Using the same password twice is not a form of multi-factor authentication.",
        set: 2,
    },
    QuestionSeed {
        text: "What is shoulder surfing?",
        options: [
            "A type of password manager",
            "Watching someone type their password",
            "A security feature",
            "A type of malware",
        ],
        correct: 'b',
        explanation: "Shoulder surfing is watching someone type their password to steal it.",
        set: 2,
    },
    QuestionSeed {
        text: "How often should you change your passwords?",
        options: [
            "Never",
            "Only when forced",
            "Periodically and when compromised",
            "Every day",
        ],
        correct: 'c',
        explanation: "You should change passwords periodically and immediately when compromised.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a keylogger?",
        options: [
            "A type of password manager",
            "Malware that records keystrokes",
            "A security feature",
            "A type of MFA",
        ],
        correct: 'b',
        explanation: "A keylogger is malware that records keystrokes to steal passwords.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you avoid in passwords?",
        options: [
            "Uppercase letters",
            "Personal information like names and birthdays",
            "Numbers",
            "Symbols",
        ],
        correct: 'b',
        explanation: "You should avoid personal information like names and birthdays in passwords.",
        set: 2,
    },
    QuestionSeed {
        text: "What are the three factors of authentication?",
        options: [
            "Something you know, have, and are",
            "Something you see, hear, and touch",
            "Something you want, need, and like",
            "Something you buy, sell, and trade",
        ],
        correct: 'a',
        explanation: "The three factors are something you know (password), have (phone), and are (fingerprint).",
        set: 3,
    },
    QuestionSeed {
        text: "What is the best way to store passwords?",
        options: [
            "On sticky notes",
            "In a password manager",
            "In a text file on your computer",
            "Sharing them with friends",
        ],
        correct: 'b',
        explanation: "A password manager is the best way to securely store passwords.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do if your password is compromised?",
        options: [
            "Ignore it",
            "Change it immediately",
            "Share it with others",
            "Write it down",
        ],
        correct: 'b',
        explanation: "You should change compromised passwords immediately.",
        set: 3,
    },
    QuestionSeed {
        text: "What is biometric authentication?",
        options: [
            "Using passwords",
            "Using physical characteristics like fingerprints",
            "Using SMS codes",
            "Using email verification",
        ],
        correct: 'b',
        explanation: "Biometric authentication uses physical characteristics like fingerprints or face recognition.",
        set: 3,
    },
    QuestionSeed {
        text: "Why is MFA important?",
        options: [
            "It makes logging in faster",
            "It adds an extra layer of security",
            "It reduces password complexity",
            "It allows password sharing",
        ],
        correct: 'b',
        explanation: "MFA is important because it adds an extra layer of security beyond just passwords.",
        set: 3,
    },
];

pub const MODULE_5: &[QuestionSeed] = &[
    QuestionSeed {
        text: "What is a common social media security risk?",
        options: [
            "Using strong passwords",
            "Oversharing personal information",
            "Enabling two-factor authentication",
            "Using privacy settings",
        ],
        correct: 'b',
        explanation: "Oversharing personal information is a common social media security risk.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with friend requests from people you don't know?",
        options: [
            "Accept them immediately",
            "Ignore or decline them",
            "Share your personal information",
            "Send them money",
        ],
        correct: 'b',
        explanation: "You should ignore or decline friend requests from people you don't know.",
        set: 1,
    },
    QuestionSeed {
        text: "How often should you review your privacy settings?",
        options: [
            "Never",
            "Monthly",
            "Once a year",
            "Only when forced",
        ],
        correct: 'b',
        explanation: "You should review your privacy settings monthly to ensure they're still appropriate.",
        set: 1,
    },
    QuestionSeed {
        text: "What is location sharing?",
        options: [
            "A security feature",
            "Revealing your whereabouts and routines",
            "A type of password",
            "A social media app",
        ],
        correct: 'b',
        explanation: "Location sharing reveals your whereabouts and routines, which can be a security risk.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with suspicious links on social media?",
        options: [
            "Click them immediately",
            "Share them with friends",
            "Don't click them",
            "Reply to the sender",
        ],
        correct: 'c',
        explanation: "You should not click suspicious links on social media.",
        set: 1,
    },
    QuestionSeed {
        text: "What is a fake profile?",
        options: [
            "A legitimate business account",
            "An account created by attackers to gather information",
            "A verified account",
            "A private account",
        ],
        correct: 'b',
        explanation: "A fake profile is an account created by attackers to gather information.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you receive an urgent request for help on social media?",
        options: [
            "Send money immediately",
            "Verify the request through other means",
            "Share your personal information",
            "Ignore it completely",
        ],
        correct: 'b',
        explanation: "You should verify urgent requests for help through other means before responding.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a romance scam?",
        options: [
            "A legitimate dating service",
            "Building fake relationships to exploit victims",
            "A type of privacy setting",
            "A security feature",
        ],
        correct: 'b',
        explanation: "A romance scam involves building fake relationships to exploit victims.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do with too-good-to-be-true offers on social media?",
        options: [
            "Accept them immediately",
            "Be skeptical and investigate",
            "Share them with everyone",
            "Send personal information",
        ],
        correct: 'b',
        explanation: "You should be skeptical and investigate too-good-to-be-true offers.",
        set: 2,
    },
    QuestionSeed {
        text: "What is the best practice for social media passwords?",
        options: [
            "Use the same password for all platforms",
            "Use different passwords for each platform",
            "Share passwords with friends",
            "Never change passwords",
        ],
        correct: 'b',
        explanation: "You should use different passwords for each social media platform.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you're targeted by a social media scam?",
        options: [
            "Respond to the scammer",
            "Block and report the account",
            "Share your personal information",
            "Send money to resolve it",
        ],
        correct: 'b',
        explanation: "You should block and report the account if you're targeted by a social media scam.",
        set: 3,
    },
    QuestionSeed {
        text: "What information do attackers typically collect from social media?",
        options: [
            "Only public posts",
            "Personal details, work information, family details, and more",
            "Only profile pictures",
            "Only usernames",
        ],
        correct: 'b',
        explanation: "Attackers collect personal details, work information, family details, and much more.",
        set: 3,
    },
    QuestionSeed {
        text: "What is a job scam on social media?",
        options: [
            "A legitimate job posting",
            "Fake job offers to collect information",
            "A type of privacy setting",
            "A security feature",
        ],
        correct: 'b',
        explanation: "A job scam involves fake job offers designed to collect personal information.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do when using social media on shared devices?",
        options: [
            "Stay logged in",
            "Log out when done",
            "Share your password",
            "Ignore security warnings",
        ],
        correct: 'b',
        explanation: "You should log out when done using social media on shared devices.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the \"think before posting\" rule?",
        options: [
            "Post everything immediately",
            "Consider what information you're sharing before posting",
            "Ignore privacy concerns",
            "Share everything with everyone",
        ],
        correct: 'b',
        explanation: "The \"think before posting\" rule means considering what information you're sharing before posting.",
        set: 3,
    },
];

pub const FINAL_ASSESSMENT: &[QuestionSeed] = &[
    QuestionSeed {
        text: "What is the primary goal of social engineering attacks?",
        options: [
            "To damage computer hardware",
            "To manipulate people into revealing information or performing actions",
            "To improve network security",
            "To create new software programs",
        ],
        correct: 'b',
        explanation: "The primary goal of social engineering is to manipulate people into revealing confidential information or performing security-compromising actions.",
        set: 1,
    },
    QuestionSeed {
        text: "What is the \"weakest link\" in most security systems?",
        options: [
            "Firewall configuration",
            "Human psychology and behavior",
            "Password strength",
            "Network infrastructure",
        ],
        correct: 'b',
        explanation: "Human psychology and behavior is often considered the weakest link in security systems.",
        set: 1,
    },
    QuestionSeed {
        text: "Why is social engineering considered effective against organizations?",
        options: [
            "Because it requires expensive equipment",
            "Because it targets the weakest link: human psychology",
            "Because it only works on small companies",
            "Because it requires advanced technical skills",
        ],
        correct: 'b',
        explanation: "Social engineering targets human psychology, which is often the weakest link in security systems.",
        set: 1,
    },
    QuestionSeed {
        text: "Which of the following is NOT a common social engineering technique?",
        options: [
            "Building false trust",
            "Creating urgency",
            "Impersonating authority figures",
            "Direct network hacking",
        ],
        correct: 'd',
        explanation: "Direct network hacking is a technical attack method, not a social engineering technique.",
        set: 1,
    },
    QuestionSeed {
        text: "What is the most common type of social engineering attack?",
        options: [
            "Pretexting",
            "Phishing",
            "Baiting",
            "Tailgating",
        ],
        correct: 'b',
        explanation: "Phishing is the most common type of social engineering attack, involving fraudulent emails, texts, or websites.",
        set: 1,
    },
    QuestionSeed {
        text: "What is spear phishing?",
        options: [
            "A general phishing attack sent to many people",
            "A targeted phishing attack against specific individuals or organizations",
            "A phishing attack using voice calls",
            "A phishing attack using physical media",
        ],
        correct: 'b',
        explanation: "Spear phishing is a targeted phishing attack against specific individuals or organizations.",
        set: 1,
    },
    QuestionSeed {
        text: "What is pretexting?",
        options: [
            "Creating fake websites",
            "Creating a fabricated scenario to obtain information",
            "Leaving infected USB drives",
            "Following someone through secure doors",
        ],
        correct: 'b',
        explanation: "Pretexting involves creating a fabricated scenario to obtain information by pretending to be someone else.",
        set: 1,
    },
    QuestionSeed {
        text: "What is tailgating?",
        options: [
            "Following someone through secure doors",
            "Sending fraudulent emails",
            "Creating fake websites",
            "Using infected USB drives",
        ],
        correct: 'a',
        explanation: "Tailgating occurs when an unauthorized person follows an authorized person into a restricted area.",
        set: 1,
    },
    QuestionSeed {
        text: "Which of the following is a red flag for email phishing?",
        options: [
            "Professional grammar and spelling",
            "Urgent or threatening language",
            "Personal greeting with your name",
            "Links to official websites",
        ],
        correct: 'b',
        explanation: "Urgent or threatening language is a common red flag in phishing emails.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do when you receive a suspicious email?",
        options: [
            "Click all links to investigate",
            "Don't click links or download attachments",
            "Reply with your personal information",
            "Forward it to all your contacts",
        ],
        correct: 'b',
        explanation: "You should never click links or download attachments from suspicious emails.",
        set: 1,
    },
    QuestionSeed {
        text: "How can you verify if a website is legitimate?",
        options: [
            "Check for HTTPS and padlock icon",
            "Ignore the URL completely",
            "Click on all pop-ups",
            "Enter your password immediately",
        ],
        correct: 'a',
        explanation: "Check for HTTPS and padlock icon to verify website legitimacy.",
        set: 1,
    },
    QuestionSeed {
        text: "What is caller ID spoofing?",
        options: [
            "A legitimate business practice",
            "When phone numbers are faked to appear legitimate",
            "A type of email phishing",
            "A security feature",
        ],
        correct: 'b',
        explanation: "Caller ID spoofing is when phone numbers are faked to appear legitimate.",
        set: 1,
    },
    QuestionSeed {
        text: "What is the minimum recommended password length?",
        options: [
            "8 characters",
            "12 characters",
            "6 characters",
            "16 characters",
        ],
        correct: 'b',
        explanation: "The minimum recommended password length is 12 characters for better security.",
        set: 1,
    },
    QuestionSeed {
        text: "What is multi-factor authentication (MFA)?",
        options: [
            "Using multiple passwords",
            "Adding an extra layer of security beyond passwords",
            "Using only biometric authentication",
            "Sharing passwords with others",
        ],
        correct: 'b',
        explanation: "MFA adds an extra layer of security by requiring multiple forms of verification.",
        set: 1,
    },
    QuestionSeed {
        text: "Which of the following is a strong password?",
        options: [
            "password123",
            "MyDogSpot2023!",
            "123456789",
            "qwerty",
        ],
        correct: 'b',
        explanation: "MyDogSpot2023! is strong because it has length, complexity, and includes symbols.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with passwords?",
        options: [
            "Share them with trusted friends",
            "Use the same password for all accounts",
            "Use different passwords for each account",
            "Write them on sticky notes",
        ],
        correct: 'c',
        explanation: "You should use different passwords for each account to minimize risk.",
        set: 1,
    },
    QuestionSeed {
        text: "What is a common social media security risk?",
        options: [
            "Using strong passwords",
            "Oversharing personal information",
            "Enabling two-factor authentication",
            "Using privacy settings",
        ],
        correct: 'b',
        explanation: "Oversharing personal information is a common social media security risk.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with friend requests from people you don't know?",
        options: [
            "Accept them immediately",
            "Ignore or decline them",
            "Share your personal information",
            "Send them money",
        ],
        correct: 'b',
        explanation: "You should ignore or decline friend requests from people you don't know.",
        set: 1,
    },
    QuestionSeed {
        text: "What is a fake profile?",
        options: [
            "A legitimate business account",
            "An account created by attackers to gather information",
            "A verified account",
            "A private account",
        ],
        correct: 'b',
        explanation: "A fake profile is an account created by attackers to gather information.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do when leaving your workstation?",
        options: [
            "Leave it unlocked for convenience",
            "Lock your workstation",
            "Share your password with colleagues",
            "Ignore security warnings",
        ],
        correct: 'b',
        explanation: "You should always lock your workstation when stepping away.",
        set: 1,
    },
    QuestionSeed {
        text: "What is dumpster diving?",
        options: [
            "A recreational activity",
            "Searching through trash for sensitive information",
            "A type of password attack",
            "A security feature",
        ],
        correct: 'b',
        explanation: "Dumpster diving is searching through trash for sensitive information.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do with sensitive documents?",
        options: [
            "Leave them on your desk",
            "Shred them properly",
            "Throw them in the regular trash",
            "Share them with friends",
        ],
        correct: 'b',
        explanation: "You should shred sensitive documents properly to prevent information theft.",
        set: 1,
    },
    QuestionSeed {
        text: "What is the first step in incident response?",
        options: [
            "Panic and call everyone",
            "Stay calm and document everything",
            "Delete all evidence",
            "Ignore the incident",
        ],
        correct: 'b',
        explanation: "The first step is to stay calm and document everything about the incident.",
        set: 1,
    },
    QuestionSeed {
        text: "What should you do immediately after a social engineering incident?",
        options: [
            "Delete all related emails",
            "Change compromised passwords",
            "Share the incident on social media",
            "Ignore it completely",
        ],
        correct: 'b',
        explanation: "You should change compromised passwords immediately after a social engineering incident.",
        set: 1,
    },
    QuestionSeed {
        text: "Who should you report incidents to?",
        options: [
            "Only your friends",
            "Your supervisor, IT department, or security team",
            "Social media followers",
            "No one",
        ],
        correct: 'b',
        explanation: "You should report incidents to your supervisor, IT department, or security team.",
        set: 1,
    },
    QuestionSeed {
        text: "What emotion do social engineers commonly exploit?",
        options: [
            "Happiness and joy",
            "Fear, greed, and curiosity",
            "Sadness and depression",
            "Anger and frustration",
        ],
        correct: 'b',
        explanation: "Social engineers commonly exploit fear, greed, and curiosity to manipulate their targets.",
        set: 2,
    },
    QuestionSeed {
        text: "What is the relationship between technical security and social engineering?",
        options: [
            "Technical security prevents all social engineering attacks",
            "Social engineering can bypass even strong technical security",
            "They are completely unrelated",
            "Social engineering only works on weak technical security",
        ],
        correct: 'b',
        explanation: "Social engineering can bypass even the strongest technical security measures by manipulating human psychology.",
        set: 2,
    },
    QuestionSeed {
        text: "What makes social engineering different from traditional hacking?",
        options: [
            "It requires more technical skills",
            "It focuses on human psychology rather than technical vulnerabilities",
            "It only works on large organizations",
            "It requires expensive equipment",
        ],
        correct: 'b',
        explanation: "Social engineering focuses on human psychology and manipulation rather than exploiting technical vulnerabilities.",
        set: 2,
    },
    QuestionSeed {
        text: "What should organizations do to protect against social engineering?",
        options: [
            "Rely only on technical security measures",
            "Implement a combination of technical and human-focused security measures",
            "Ignore the threat as it only affects small companies",
            "Focus only on executive protection",
        ],
        correct: 'b',
        explanation: "Organizations should implement a combination of technical and human-focused security measures to protect against social engineering.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a watering hole attack?",
        options: [
            "Compromising frequently visited websites",
            "Using phone calls to trick people",
            "Leaving infected devices in public",
            "Creating fake identities",
        ],
        correct: 'a',
        explanation: "Watering hole attacks target websites that are likely to be visited by intended victims.",
        set: 2,
    },
    QuestionSeed {
        text: "What is vishing?",
        options: [
            "Voice phishing using phone calls",
            "SMS phishing using text messages",
            "Email phishing",
            "Website phishing",
        ],
        correct: 'a',
        explanation: "Vishing is voice phishing using phone calls.",
        set: 2,
    },
    QuestionSeed {
        text: "What is whaling?",
        options: [
            "Phishing attacks targeting high-level executives",
            "General phishing attacks",
            "SMS phishing attacks",
            "Voice phishing attacks",
        ],
        correct: 'a',
        explanation: "Whaling refers to phishing attacks specifically targeting high-level executives.",
        set: 2,
    },
    QuestionSeed {
        text: "What is quid pro quo?",
        options: [
            "A type of phishing attack",
            "Offering a service in exchange for information",
            "A physical security breach",
            "A website compromise",
        ],
        correct: 'b',
        explanation: "Quid pro quo involves offering a service in exchange for information or access.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you suspect a phishing attempt?",
        options: [
            "Report it to your IT department",
            "Ignore it completely",
            "Share it on social media",
            "Reply to the sender",
        ],
        correct: 'a',
        explanation: "You should report suspicious phishing attempts to your IT department.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you accidentally clicked a phishing link?",
        options: [
            "Ignore it completely",
            "Change your passwords and monitor accounts",
            "Share it on social media",
            "Reply to the sender",
        ],
        correct: 'b',
        explanation: "If you accidentally clicked a phishing link, change your passwords and monitor accounts.",
        set: 2,
    },
    QuestionSeed {
        text: "Which of the following is a legitimate request from a bank?",
        options: [
            "Email asking for your password",
            "Phone call demanding immediate payment",
            "Letter mailed to your address",
            "Text message with urgent action required",
        ],
        correct: 'c',
        explanation: "Banks typically send official communications through regular mail, not urgent emails or calls.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do with suspicious attachments?",
        options: [
            "Open them immediately",
            "Don't download or open them",
            "Forward them to friends",
            "Reply to the sender",
        ],
        correct: 'b',
        explanation: "You should never download or open suspicious attachments.",
        set: 2,
    },
    QuestionSeed {
        text: "What is shoulder surfing?",
        options: [
            "A type of password manager",
            "Watching someone type their password",
            "A security feature",
            "A type of malware",
        ],
        correct: 'b',
        explanation: "Shoulder surfing is watching someone type their password to steal it.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a keylogger?",
        options: [
            "A type of password manager",
            "Malware that records keystrokes",
            "A security feature",
            "A type of MFA",
        ],
        correct: 'b',
        explanation: "A keylogger is malware that records keystrokes to steal passwords.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you avoid in passwords?",
        options: [
            "Uppercase letters",
            "Personal information like names and birthdays",
            "Numbers",
            "Symbols",
        ],
        correct: 'b',
        explanation: "You should avoid personal information like names and birthdays in passwords.",
        set: 2,
    },
    QuestionSeed {
        text: "What is biometric authentication?",
        options: [
            "Using passwords",
            "Using physical characteristics like fingerprints",
            "Using SMS codes",
            "Using email verification",
        ],
        correct: 'b',
        explanation: "Biometric authentication uses physical characteristics like fingerprints or face recognition.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you receive an urgent request for help on social media?",
        options: [
            "Send money immediately",
            "Verify the request through other means",
            "Share your personal information",
            "Ignore it completely",
        ],
        correct: 'b',
        explanation: "You should verify urgent requests for help through other means before responding.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a romance scam?",
        options: [
            "A legitimate dating service",
            "Building fake relationships to exploit victims",
            "A type of privacy setting",
            "A security feature",
        ],
        correct: 'b',
        explanation: "A romance scam involves building fake relationships to exploit victims.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do with too-good-to-be-true offers on social media?",
        options: [
            "Accept them immediately",
            "Be skeptical and investigate",
            "Share them with everyone",
            "Send personal information",
        ],
        correct: 'b',
        explanation: "You should be skeptical and investigate too-good-to-be-true offers.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you see a stranger in a secure area?",
        options: [
            "Ignore them completely",
            "Challenge them and ask for identification",
            "Help them find what they're looking for",
            "Share sensitive information with them",
        ],
        correct: 'b',
        explanation: "You should challenge strangers and ask for identification when appropriate.",
        set: 2,
    },
    QuestionSeed {
        text: "What is a clean desk policy?",
        options: [
            "Keeping your desk messy",
            "Keeping work areas free of sensitive documents",
            "Sharing all documents with colleagues",
            "Ignoring security policies",
        ],
        correct: 'b',
        explanation: "A clean desk policy means keeping work areas free of sensitive documents.",
        set: 2,
    },
    QuestionSeed {
        text: "What is eavesdropping?",
        options: [
            "A type of exercise",
            "Listening to conversations in public areas",
            "A security feature",
            "A type of password",
        ],
        correct: 'b',
        explanation: "Eavesdropping is listening to conversations in public areas to gather information.",
        set: 2,
    },
    QuestionSeed {
        text: "What is containment in incident response?",
        options: [
            "Ignoring the problem",
            "Limiting damage and preventing further harm",
            "Deleting all evidence",
            "Sharing information with everyone",
        ],
        correct: 'b',
        explanation: "Containment means limiting damage and preventing further harm from the incident.",
        set: 2,
    },
    QuestionSeed {
        text: "What should you do if you suspect a data breach?",
        options: [
            "Ignore it completely",
            "Report it immediately and preserve evidence",
            "Delete all related files",
            "Share it on social media",
        ],
        correct: 'b',
        explanation: "You should report data breaches immediately and preserve evidence.",
        set: 2,
    },
    QuestionSeed {
        text: "What is the purpose of post-incident activities?",
        options: [
            "To forget about the incident",
            "To learn from the incident and improve security",
            "To blame others",
            "To hide the incident",
        ],
        correct: 'b',
        explanation: "Post-incident activities help learn from the incident and improve security.",
        set: 2,
    },
    QuestionSeed {
        text: "Which group is typically NOT a primary target of social engineering?",
        options: [
            "IT support staff",
            "Customer service representatives",
            "Security robots",
            "Executives and decision-makers",
        ],
        correct: 'c',
        explanation: "Security robots are not human and therefore cannot be manipulated through social engineering techniques.",
        set: 3,
    },
    QuestionSeed {
        text: "Which of the following best describes the impact of social engineering on organizations?",
        options: [
            "Only financial losses",
            "Only data breaches",
            "Multiple impacts including financial, reputational, and operational",
            "No significant impact",
        ],
        correct: 'c',
        explanation: "Social engineering can have multiple impacts including financial losses, data breaches, reputation damage, and operational disruption.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the first step in preventing social engineering attacks?",
        options: [
            "Installing firewalls",
            "Employee awareness and training",
            "Changing passwords regularly",
            "Updating software",
        ],
        correct: 'b',
        explanation: "Employee awareness and training is the first and most important step in preventing social engineering attacks.",
        set: 3,
    },
    QuestionSeed {
        text: "Which prevention strategy is most effective against social engineering?",
        options: [
            "Using complex passwords",
            "Regular security awareness training",
            "Installing antivirus software",
            "Using VPN connections",
        ],
        correct: 'b',
        explanation: "Regular security awareness training is the most effective strategy for preventing social engineering attacks.",
        set: 3,
    },
    QuestionSeed {
        text: "Which attack characteristic creates time pressure?",
        options: [
            "Authority",
            "Urgency",
            "Scarcity",
            "Social proof",
        ],
        correct: 'b',
        explanation: "Urgency creates time pressure to bypass rational thinking.",
        set: 3,
    },
    QuestionSeed {
        text: "What is smishing?",
        options: [
            "Email phishing",
            "SMS phishing using text messages",
            "Voice phishing",
            "Website phishing",
        ],
        correct: 'b',
        explanation: "Smishing is SMS phishing using text messages.",
        set: 3,
    },
    QuestionSeed {
        text: "Which attack type uses physical media?",
        options: [
            "Phishing",
            "Baiting",
            "Pretexting",
            "Quid pro quo",
        ],
        correct: 'b',
        explanation: "Baiting uses physical media like infected USB drives to spread malware.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the main goal of watering hole attacks?",
        options: [
            "To steal physical devices",
            "To infect visitors with malware",
            "To gain physical access",
            "To create fake identities",
        ],
        correct: 'b',
        explanation: "Watering hole attacks aim to infect visitors with malware by compromising frequently visited websites.",
        set: 3,
    },
    QuestionSeed {
        text: "What is the purpose of multi-factor authentication?",
        options: [
            "To make logging in more difficult",
            "To add an extra layer of security",
            "To slow down internet speed",
            "To share passwords with others",
        ],
        correct: 'b',
        explanation: "Multi-factor authentication adds an extra layer of security beyond just passwords.",
        set: 3,
    },
    QuestionSeed {
        text: "Which of the following is a sign of a phishing website?",
        options: [
            "Professional design and branding",
            "HTTPS and padlock icon",
            "Request for unnecessary personal information",
            "Official company logo",
        ],
        correct: 'c',
        explanation: "Request for unnecessary personal information is a sign of a phishing website.",
        set: 3,
    },
    QuestionSeed {
        text: "How often should you update your software?",
        options: [
            "Never",
            "Only when forced",
            "Regularly to get security patches",
            "Once a year",
        ],
        correct: 'c',
        explanation: "You should update software regularly to get security patches that fix vulnerabilities.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do if you receive a suspicious email?",
        options: [
            "Reply immediately",
            "Report it to IT and don't click any links",
            "Forward it to all your contacts",
            "Delete it without reporting",
        ],
        correct: 'b',
        explanation: "You should report suspicious emails to IT and not click any links.",
        set: 3,
    },
    QuestionSeed {
        text: "What are the three factors of authentication?",
        options: [
            "Something you know, have, and are",
            "Something you see, hear, and touch",
            "Something you want, need, and like",
            "Something you buy, sell, and trade",
        ],
        correct: 'a',
        explanation: "The three factors are something you know (password), have (phone), and are (fingerprint).",
        set: 3,
    },
    QuestionSeed {
        text: "What is the best way to store passwords?",
        options: [
            "On sticky notes",
            "In a password manager",
            "In a text file on your computer",
            "Sharing them with friends",
        ],
        correct: 'b',
        explanation: "A password manager is the best way to securely store passwords.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do if your password is compromised?",
        options: [
            "Ignore it",
            "Change it immediately",
            "Share it with others",
            "Write it down",
        ],
        correct: 'b',
        explanation: "You should change compromised passwords immediately.",
        set: 3,
    },
    QuestionSeed {
        text: "Why is MFA important?",
        options: [
            "It makes logging in faster",
            "It adds an extra layer of security",
            "It reduces password complexity",
            "It allows password sharing",
        ],
        correct: 'b',
        explanation: "MFA is important because it adds an extra layer of security beyond just passwords.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do if you're targeted by a social media scam?",
        options: [
            "Respond to the scammer",
            "Block and report the account",
            "Share your personal information",
            "Send money to resolve it",
        ],
        correct: 'b',
        explanation: "You should block and report the account if you're targeted by a social media scam.",
        set: 3,
    },
    QuestionSeed {
        text: "What information do attackers typically collect from social media?",
        options: [
            "Only public posts",
            "Personal details, work information, family details, and more",
            "Only profile pictures",
            "Only usernames",
        ],
        correct: 'b',
        explanation: "Attackers collect personal details, work information, family details, and much more.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do when using social media on shared devices?",
        options: [
            "Stay logged in",
            "Log out when done",
            "Share your password",
            "Ignore security warnings",
        ],
        correct: 'b',
        explanation: "You should log out when done using social media on shared devices.",
        set: 3,
    },
    QuestionSeed {
        text: "What is piggybacking?",
        options: [
            "A type of exercise",
            "Using someone else's access credentials",
            "A security feature",
            "A type of malware",
        ],
        correct: 'b',
        explanation: "Piggybacking is using someone else's access credentials to gain unauthorized access.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do with passwords at work?",
        options: [
            "Write them on sticky notes",
            "Keep them secure and never share them",
            "Share them with trusted colleagues",
            "Post them on your desk",
        ],
        correct: 'b',
        explanation: "You should keep passwords secure and never share them with anyone.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do with unattended mobile devices?",
        options: [
            "Take them for yourself",
            "Secure them or return them to the owner",
            "Ignore them completely",
            "Share them with others",
        ],
        correct: 'b',
        explanation: "You should secure unattended mobile devices or return them to the owner.",
        set: 3,
    },
    QuestionSeed {
        text: "What is forensic analysis?",
        options: [
            "Ignoring the problem",
            "Investigating the root cause of an incident",
            "Deleting evidence",
            "Sharing information publicly",
        ],
        correct: 'b',
        explanation: "Forensic analysis involves investigating the root cause of an incident.",
        set: 3,
    },
    QuestionSeed {
        text: "What is damage assessment?",
        options: [
            "Ignoring the problem",
            "Determining the full extent of an incident",
            "Deleting evidence",
            "Sharing information publicly",
        ],
        correct: 'b',
        explanation: "Damage assessment involves determining the full extent of an incident.",
        set: 3,
    },
    QuestionSeed {
        text: "What should you do during an incident?",
        options: [
            "Panic and run away",
            "Stay calm and follow incident response procedures",
            "Delete all evidence",
            "Ignore all warnings",
        ],
        correct: 'b',
        explanation: "You should stay calm and follow incident response procedures during an incident.",
        set: 3,
    },
];
