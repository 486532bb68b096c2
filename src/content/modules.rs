//! Static program content: the five learning modules in order.

use super::questions;
use super::{LessonSeed, ModuleSeed, ReferenceSeed, TopicSeed};
use crate::simulations::SimulationType;

pub const MODULES: &[ModuleSeed] = &[
    ModuleSeed {
        order: 1,
        name: "Introduction to Social Engineering",
        description: "What social engineering is, why it works, and the psychology attackers exploit",
        content: "Human Hacking: Why People Are the Target",
        simulation: None,
        estimated_minutes: 30,
        objectives: &[
            "Define social engineering and distinguish it from technical hacking",
            "Explain why human-based attacks succeed against well-defended systems",
            "Recognize the psychological principles attackers rely on",
            "Adopt a skeptical, verify-first mindset",
        ],
        lessons: &[
            LessonSeed {
                title: "Lesson 1.1 What is Social Engineering?",
                topics: &[
                    TopicSeed {
                        title: "Intro to Social Engineering and why it works (Human Hacking)",
                        body: "Social engineering is the art of manipulating people into giving up confidential information or performing actions that compromise security. Instead of breaking through a firewall, the attacker convinces someone on the inside to open the door.\n- Targets people rather than software\n- Exploits trust, helpfulness and fear\n- Often the first step of a larger technical attack",
                    },
                    TopicSeed {
                        title: "Core Lesson Content: The Anatomy of a Human-Based Attack",
                        body: "Most attacks follow the same arc:\n- Research: the attacker gathers details about the target from public sources\n- Hook: first contact through email, a call, a message or in person\n- Play: a believable story builds trust or pressure\n- Exit: the attacker leaves with credentials, money or access, ideally unnoticed",
                    },
                    TopicSeed {
                        title: "Lesson Conclusion: What is Social Engineering?",
                        body: "Strong passwords, firewalls and antivirus software cannot stop an attack that persuades you to bypass them. Recognizing manipulation is a security control in its own right.",
                    },
                ],
            },
            LessonSeed {
                title: "Lesson 1.2 The Psychology Behind the Deception",
                topics: &[
                    TopicSeed {
                        title: "Why Social Engineering Works",
                        body: "Attackers lean on mental shortcuts that normally help us decide quickly:\n- Authority: we comply with people who appear to be in charge\n- Urgency: deadlines push us to act before thinking\n- Scarcity: limited offers feel more valuable\n- Liking: we say yes to people we find friendly or familiar\n- Social proof: we follow what others seem to be doing\n- Reciprocity: a small favor creates a feeling of obligation",
                    },
                    TopicSeed {
                        title: "The Manipulator's Toolkit",
                        body: "Common techniques combine several principles at once: a spoofed message from the Registrar's Office with a 24-hour deadline uses authority and urgency together; a giveaway limited to the first 500 players uses scarcity. Name the lever being pulled and its power fades.",
                    },
                    TopicSeed {
                        title: "Module 1 Conclusion: The Power of an Informed Mindset",
                        body: "Pause, verify through a channel you already trust, and report anything suspicious. The remaining modules apply this mindset to specific attack types.",
                    },
                ],
            },
        ],
        references: &[
            ReferenceSeed {
                label: "CISA: Understanding and Recognizing Phishing",
                url: "https://www.cisa.gov/news-events/news/understanding-and-recognizing-phishing",
            },
            ReferenceSeed {
                label: "NIST: Phishing Resources",
                url: "https://www.nist.gov/itl/smallbusinesscyber/phishing",
            },
            ReferenceSeed {
                label: "Microsoft: Social engineering red flags",
                url: "https://www.microsoft.com/en/security/blog/2022/05/03/dont-fall-for-it-spotting-social-engineering-red-flags/",
            },
        ],
        questions: questions::MODULE_1,
    },
    ModuleSeed {
        order: 2,
        name: "Types of Social Engineering Attacks",
        description: "Understanding different types of social engineering attacks and their characteristics",
        content: "Common Types of Social Engineering Attacks",
        simulation: Some(SimulationType::QuidProQuo),
        estimated_minutes: 35,
        objectives: &[
            "Identify different types of social engineering attacks",
            "Understand the characteristics and methods of each attack type",
            "Recognize common attack patterns and techniques",
            "Learn how to identify and respond to different attack types",
        ],
        lessons: &[LessonSeed {
            title: "Lesson 2.1 Common Types of Social Engineering Attacks",
            topics: &[
                TopicSeed {
                    title: "1. Phishing Attacks",
                    body: "Phishing is the most common type of social engineering attack. Attackers send fraudulent emails, text messages, or create fake websites that appear to come from legitimate sources to steal sensitive information.\n- Email Phishing: Fraudulent emails pretending to be from trusted sources\n- Spear Phishing: Targeted phishing attacks against specific individuals or organizations\n- Whaling: Phishing attacks targeting high-level executives\n- Vishing: Voice phishing using phone calls\n- Smishing: SMS phishing using text messages",
                },
                TopicSeed {
                    title: "2. Pretexting",
                    body: "Pretexting involves creating a fabricated scenario to obtain information. Attackers pretend to be someone they're not, such as a co-worker, IT support, or a trusted authority figure.\n- Creating false identities\n- Building trust through deception\n- Using authority to gain compliance\n- Exploiting human helpfulness",
                },
                TopicSeed {
                    title: "3. Baiting",
                    body: "Baiting uses physical media to spread malware. Attackers leave infected USB drives, CDs, or other devices in public places, hoping someone will pick them up and use them.\n- Infected USB drives\n- Malicious CDs or DVDs\n- Compromised mobile devices\n- Fake software downloads",
                },
                TopicSeed {
                    title: "4. Quid Pro Quo",
                    body: "Quid pro quo attacks involve offering a service in exchange for information or access. Attackers promise something valuable in return for sensitive data.\n- Fake IT support calls\n- Software installation offers\n- Free security assessments\n- Technical assistance scams",
                },
                TopicSeed {
                    title: "5. Tailgating",
                    body: "Tailgating occurs when an unauthorized person follows an authorized person into a restricted area. This physical social engineering technique exploits human courtesy.\n- Following someone through secure doors\n- Piggybacking on access cards\n- Exploiting human courtesy\n- Physical access to restricted areas",
                },
                TopicSeed {
                    title: "6. Watering Hole Attacks",
                    body: "Watering hole attacks target websites that are likely to be visited by the intended victims. Attackers compromise these sites to infect visitors with malware.\n- Compromising frequently visited websites\n- Targeting specific user groups\n- Exploiting website vulnerabilities\n- Distributing malware to visitors",
                },
                TopicSeed {
                    title: "Attack Characteristics",
                    body: "- Urgency: Creating time pressure to bypass rational thinking\n- Authority: Impersonating someone in a position of power\n- Scarcity: Making offers seem limited or exclusive\n- Social Proof: Using peer pressure or group influence\n- Reciprocity: Offering something to create obligation",
                },
            ],
        }],
        references: &[
            ReferenceSeed {
                label: "CISA: Avoiding Social Engineering and Phishing Attacks",
                url: "https://www.cisa.gov/news-events/news/avoiding-social-engineering-and-phishing-attacks",
            },
        ],
        questions: questions::MODULE_2,
    },
    ModuleSeed {
        order: 3,
        name: "Phishing Detection and Prevention",
        description: "Learning how to identify and prevent phishing attacks",
        content: "How to Detect Phishing Attacks",
        simulation: Some(SimulationType::Phishing),
        estimated_minutes: 40,
        objectives: &[
            "Identify common phishing red flags in emails, websites, and phone calls",
            "Understand prevention strategies for different types of phishing",
            "Learn proper response procedures when encountering phishing attempts",
            "Develop skills to protect personal and organizational information",
        ],
        lessons: &[LessonSeed {
            title: "Lesson 3.1 How to Detect Phishing Attacks",
            topics: &[
                TopicSeed {
                    title: "Email Phishing Red Flags",
                    body: "- Urgent or threatening language: \"Your account will be suspended\"\n- Requests for sensitive information: Passwords, credit card numbers, SSN\n- Suspicious sender addresses: Slight variations in domain names\n- Generic greetings: \"Dear Customer\" instead of your name\n- Poor grammar and spelling: Professional companies rarely make these mistakes\n- Suspicious links: Hover over links to see actual URLs\n- Unexpected attachments: Files you weren't expecting",
                },
                TopicSeed {
                    title: "Website Phishing Indicators",
                    body: "- URL inconsistencies: Check the actual domain name\n- Missing security indicators: No HTTPS or padlock icon\n- Poor design quality: Unprofessional appearance\n- Request for unnecessary information: Banks don't ask for passwords via email\n- Pop-up forms: Legitimate sites rarely use pop-ups for login",
                },
                TopicSeed {
                    title: "Phone Phishing (Vishing) Signs",
                    body: "- Caller ID spoofing: Numbers can be faked\n- Pressure tactics: \"Act now or lose access\"\n- Requests for remote access: Never give control of your computer\n- Payment demands: Government agencies don't demand immediate payment\n- Threats of legal action: Scare tactics to create urgency",
                },
                TopicSeed {
                    title: "Prevention Strategies",
                    body: "- Verify sender identity: Contact the organization directly\n- Check URLs carefully: Look for misspellings or extra characters\n- Use multi-factor authentication: Adds an extra layer of security\n- Keep software updated: Patches fix security vulnerabilities\n- Use security software: Antivirus and anti-phishing tools\n- Report suspicious emails: Help protect others\n- Educate yourself and others: Stay informed about new tactics",
                },
                TopicSeed {
                    title: "What to Do If You Suspect Phishing",
                    body: "- Don't click links or download attachments\n- Don't provide personal information\n- Report the incident to your IT department\n- Forward suspicious emails to your security team\n- Change passwords if you suspect compromise\n- Monitor accounts for suspicious activity",
                },
            ],
        }],
        references: &[
            ReferenceSeed {
                label: "FTC: How to Recognize and Avoid Phishing Scams",
                url: "https://consumer.ftc.gov/articles/how-recognize-and-avoid-phishing-scams",
            },
            ReferenceSeed {
                label: "CISA: Understanding and Recognizing Phishing",
                url: "https://www.cisa.gov/news-events/news/understanding-and-recognizing-phishing",
            },
        ],
        questions: questions::MODULE_3,
    },
    ModuleSeed {
        order: 4,
        name: "Password Security and Authentication",
        description: "Understanding password security and authentication methods",
        content: "Password Security Best Practices",
        simulation: Some(SimulationType::Pretexting),
        estimated_minutes: 35,
        objectives: &[
            "Understand password security best practices",
            "Learn about multi-factor authentication methods",
            "Identify common password security mistakes",
            "Develop strategies to protect against password-based attacks",
        ],
        lessons: &[LessonSeed {
            title: "Lesson 4.1 Password Security Best Practices",
            topics: &[
                TopicSeed {
                    title: "Creating Strong Passwords",
                    body: "- Length: Use at least 12 characters\n- Complexity: Include uppercase, lowercase, numbers, and symbols\n- Uniqueness: Use different passwords for each account\n- Avoid common patterns: Don't use \"123456\" or \"password\"\n- No personal information: Avoid names, birthdays, or addresses",
                },
                TopicSeed {
                    title: "Password Management",
                    body: "- Use a password manager: Securely store and generate passwords\n- Regular updates: Change passwords periodically\n- Secure storage: Never write passwords on paper or share them\n- Backup recovery: Have a secure way to recover accounts",
                },
                TopicSeed {
                    title: "Multi-Factor Authentication (MFA)",
                    body: "MFA adds an extra layer of security by requiring multiple forms of verification:\n- Something you know: Password or PIN\n- Something you have: Phone, security key, or token\n- Something you are: Fingerprint, face recognition, or voice",
                },
                TopicSeed {
                    title: "Types of MFA",
                    body: "- SMS/Text messages: Codes sent to your phone\n- Authenticator apps: Time-based codes (Google Authenticator, Authy)\n- Hardware tokens: Physical devices that generate codes\n- Biometric authentication: Fingerprint, face, or voice recognition\n- Email verification: Codes sent to your email",
                },
                TopicSeed {
                    title: "Common Password Mistakes",
                    body: "- Using weak passwords: \"password\", \"123456\", \"qwerty\"\n- Reusing passwords: Same password for multiple accounts\n- Sharing passwords: Giving passwords to others\n- Storing insecurely: Writing passwords on sticky notes\n- Not updating: Using the same password for years",
                },
                TopicSeed {
                    title: "Password Recovery Security",
                    body: "- Security questions: Use answers that aren't easily guessable\n- Recovery email: Use a secure, separate email account\n- Backup codes: Store recovery codes securely\n- Account monitoring: Watch for suspicious activity",
                },
                TopicSeed {
                    title: "Social Engineering and Passwords",
                    body: "Attackers use various techniques to steal passwords:\n- Phishing: Fake login pages to capture passwords\n- Shoulder surfing: Watching you type passwords\n- Keyloggers: Malware that records keystrokes\n- Social manipulation: Tricking you into revealing passwords",
                },
            ],
        }],
        references: &[
            ReferenceSeed {
                label: "NIST SP 800-63B: Digital Identity Guidelines",
                url: "https://pages.nist.gov/800-63-3/sp800-63b.html",
            },
        ],
        questions: questions::MODULE_4,
    },
    ModuleSeed {
        order: 5,
        name: "Social Media Security",
        description: "Protecting yourself from social engineering attacks on social media",
        content: "Social Media Security Risks",
        simulation: Some(SimulationType::Baiting),
        estimated_minutes: 30,
        objectives: &[
            "Understand social media security risks and threats",
            "Learn privacy settings and safe practices",
            "Identify social engineering tactics on social media",
            "Develop strategies to protect personal information online",
        ],
        lessons: &[LessonSeed {
            title: "Lesson 5.1 Social Media Security Risks",
            topics: &[
                TopicSeed {
                    title: "Common Social Media Threats",
                    body: "- Fake profiles: Attackers create fake accounts to gather information\n- Oversharing: Revealing too much personal information\n- Location sharing: Revealing your whereabouts and routines\n- Fake contests and surveys: Collecting personal data\n- Malicious links: Clicking on harmful content\n- Social engineering scams: Manipulation through social connections",
                },
                TopicSeed {
                    title: "Information Attackers Collect",
                    body: "- Personal details: Full name, birth date, address, phone number\n- Work information: Company, job title, colleagues\n- Family details: Spouse, children, relatives\n- Hobbies and interests: Used for targeted attacks\n- Travel plans: When you'll be away from home\n- Financial information: Income, purchases, lifestyle",
                },
                TopicSeed {
                    title: "Privacy Settings Best Practices",
                    body: "- Review regularly: Check privacy settings monthly\n- Limit audience: Use \"Friends only\" or \"Private\" settings\n- Control tagging: Approve tags before they appear\n- Location services: Disable when not needed\n- Third-party apps: Limit access to your data\n- Search visibility: Control who can find your profile",
                },
                TopicSeed {
                    title: "Safe Social Media Practices",
                    body: "- Think before posting: Consider what information you're sharing\n- Verify friend requests: Only accept from people you know\n- Be cautious with links: Don't click suspicious URLs\n- Use strong passwords: Different passwords for each platform\n- Enable two-factor authentication: Add extra security\n- Log out when done: Especially on shared devices",
                },
                TopicSeed {
                    title: "Social Engineering on Social Media",
                    body: "Attackers use social media for various social engineering tactics:\n- Impersonation: Creating fake profiles of people you know\n- Fake emergencies: Claiming to need urgent help\n- Fake contests: Offering prizes in exchange for information\n- Romance scams: Building fake relationships to exploit\n- Job scams: Fake job offers to collect information",
                },
                TopicSeed {
                    title: "Red Flags to Watch For",
                    body: "- Unsolicited friend requests: From people you don't know\n- Urgent requests for help: Especially involving money\n- Too-good-to-be-true offers: Free prizes, job opportunities\n- Requests for personal information: Via private messages\n- Pressure tactics: \"Act now or miss out\"\n- Inconsistent stories: Details that don't add up",
                },
                TopicSeed {
                    title: "What to Do If You're Targeted",
                    body: "- Don't respond: Ignore suspicious messages\n- Block and report: Use platform reporting tools\n- Document everything: Screenshots of suspicious activity\n- Warn others: Alert friends and family\n- Change passwords: If you suspect compromise\n- Contact authorities: For serious threats or fraud",
                },
            ],
        }],
        references: &[
            ReferenceSeed {
                label: "CISA: Staying Safe on Social Networking Sites",
                url: "https://www.cisa.gov/news-events/news/staying-safe-social-networking-sites",
            },
        ],
        questions: questions::MODULE_5,
    },
];
