//! Email-borne lures: bank alerts, prize notices, password resets and overdue invoices.

use super::{Scenario, ScenarioBank, ScenarioContext, ScenarioOption, SimulationType};

pub struct PhishingBank;

impl ScenarioBank for PhishingBank {
    fn kind(&self) -> SimulationType {
        SimulationType::Phishing
    }

    fn scenarios(&self) -> &'static [Scenario] {
        SCENARIOS
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: 1,
        title: "Suspicious Email from Bank",
        description: "You receive an email claiming to be from your bank asking for account verification.",
        context: ScenarioContext::Email {
            sender: "security@yourbank.com",
            subject: "URGENT: Account Verification Required",
            body: "Dear Valued Customer,\n\nWe have detected suspicious activity on your account and need to verify your identity immediately.\n\nPlease click the link below to verify your account details:\n[VERIFY ACCOUNT]\n\nIf you do not verify within 24 hours, your account will be suspended.\n\nThank you,\nBank Security Team",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Click the link and provide information",
                correct: false,
                explanation: "Never click links in suspicious emails. Banks never ask for account verification via email.",
            },
            ScenarioOption {
                id: "b",
                text: "Forward to IT department",
                correct: true,
                explanation: "Forwarding suspicious emails to IT is the correct action for security threats.",
            },
            ScenarioOption {
                id: "c",
                text: "Reply with your account details",
                correct: false,
                explanation: "Never provide account details via email. This is a common phishing tactic.",
            },
            ScenarioOption {
                id: "d",
                text: "Delete the email",
                correct: false,
                explanation: "While deleting is okay, reporting to IT is better for security awareness.",
            },
        ],
    },
    Scenario {
        id: 2,
        title: "Prize Notification",
        description: "You receive an email claiming you won a prize.",
        context: ScenarioContext::Email {
            sender: "prizes@lottery.com",
            subject: "CONGRATULATIONS! You Won $10,000!",
            body: "Congratulations!\n\nYou have been selected as a winner in our annual lottery!\nYour prize: $10,000 USD\n\nTo claim your prize, please click the link below and provide your banking information:\n[CLAIM PRIZE]\n\nThis offer expires in 24 hours.\n\nBest regards,\nLottery Commission",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Click to claim your prize",
                correct: false,
                explanation: "This is likely a scam. Legitimate lotteries don't contact winners via email.",
            },
            ScenarioOption {
                id: "b",
                text: "Delete the email",
                correct: true,
                explanation: "Delete suspicious prize emails. If you didn't enter a lottery, you didn't win.",
            },
            ScenarioOption {
                id: "c",
                text: "Reply asking for more details",
                correct: false,
                explanation: "Don't engage with suspicious emails. This confirms your email is active.",
            },
            ScenarioOption {
                id: "d",
                text: "Forward to friends",
                correct: false,
                explanation: "Don't spread potential scams to others.",
            },
        ],
    },
    Scenario {
        id: 3,
        title: "Password Reset Request",
        description: "You receive an email about a password reset you didn't request.",
        context: ScenarioContext::Email {
            sender: "noreply@company.com",
            subject: "Password Reset Request",
            body: "Hello,\n\nWe received a request to reset your password for your account.\n\nIf you made this request, click the link below to reset your password:\n[RESET PASSWORD]\n\nIf you did not make this request, please ignore this email.\n\nBest regards,\nIT Support Team",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Click the reset link",
                correct: false,
                explanation: "If you didn't request a reset, this could be a phishing attempt.",
            },
            ScenarioOption {
                id: "b",
                text: "Go directly to the company website",
                correct: true,
                explanation: "Always go directly to the official website, never click email links.",
            },
            ScenarioOption {
                id: "c",
                text: "Reply to the email",
                correct: false,
                explanation: "Don't reply to suspicious emails. Contact IT directly if needed.",
            },
            ScenarioOption {
                id: "d",
                text: "Forward to IT security",
                correct: true,
                explanation: "Forwarding suspicious emails to IT security is a good practice.",
            },
        ],
    },
    Scenario {
        id: 4,
        title: "Invoice Payment",
        description: "You receive an email with an urgent invoice payment request.",
        context: ScenarioContext::Email {
            sender: "billing@supplier.com",
            subject: "URGENT: Invoice Payment Overdue",
            body: "Dear Customer,\n\nYour invoice #INV-2024-001 is overdue.\nAmount: $2,500.00\nDue Date: Yesterday\n\nPlease click the link below to make immediate payment:\n[PAY INVOICE]\n\nFailure to pay may result in legal action.\n\nThank you,\nBilling Department",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Click the payment link",
                correct: false,
                explanation: "Never click payment links in emails. Verify the invoice first.",
            },
            ScenarioOption {
                id: "b",
                text: "Contact the company directly",
                correct: true,
                explanation: "Contact the company directly using known contact information.",
            },
            ScenarioOption {
                id: "c",
                text: "Reply asking for invoice details",
                correct: false,
                explanation: "Don't engage with suspicious emails. Contact the company directly.",
            },
            ScenarioOption {
                id: "d",
                text: "Forward to accounting department",
                correct: true,
                explanation: "Forwarding to accounting for verification is appropriate.",
            },
        ],
    },
];
