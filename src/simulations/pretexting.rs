//! Phone pretexts where the caller borrows someone else's authority.

use super::{Scenario, ScenarioBank, ScenarioContext, ScenarioOption, SimulationType};

pub struct PretextingBank;

impl ScenarioBank for PretextingBank {
    fn kind(&self) -> SimulationType {
        SimulationType::Pretexting
    }

    fn scenarios(&self) -> &'static [Scenario] {
        SCENARIOS
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: 1,
        title: "IT Support Call",
        description: "Someone calls claiming to be from IT support.",
        context: ScenarioContext::Call {
            caller: "IT Support Department",
            script: "The caller says: \"Hello, this is IT Support. We've detected a virus on your computer and need to verify your account for security purposes. Can you please provide your username and password?\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide your password",
                correct: false,
                explanation: "Never give passwords over the phone. IT support should never ask for passwords.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their employee ID",
                correct: true,
                explanation: "Always verify the caller's identity before providing any information.",
            },
            ScenarioOption {
                id: "c",
                text: "Hang up immediately",
                correct: false,
                explanation: "While safe, it's better to verify first and then report if suspicious.",
            },
            ScenarioOption {
                id: "d",
                text: "Transfer to your supervisor",
                correct: true,
                explanation: "Escalating to supervisor is a good practice for suspicious calls.",
            },
        ],
    },
    Scenario {
        id: 2,
        title: "Vendor Verification",
        description: "Someone calls claiming to be from a vendor company.",
        context: ScenarioContext::Call {
            caller: "ABC Supplies Inc.",
            script: "The caller says: \"Hello, I'm calling from ABC Supplies. We need to verify your account information for our records. Can you confirm your company's billing address and account number?\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide the information",
                correct: false,
                explanation: "Never provide account information to unsolicited callers.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask them to send a written request",
                correct: true,
                explanation: "Legitimate vendors will send written requests for verification.",
            },
            ScenarioOption {
                id: "c",
                text: "Call them back using known number",
                correct: true,
                explanation: "Call back using the official number from your records.",
            },
            ScenarioOption {
                id: "d",
                text: "Transfer to purchasing department",
                correct: true,
                explanation: "Forwarding to the appropriate department is correct.",
            },
        ],
    },
    Scenario {
        id: 3,
        title: "Social Security Call",
        description: "Someone calls claiming to be from Social Security Administration.",
        context: ScenarioContext::Call {
            caller: "Social Security Administration",
            script: "The caller says: \"This is the Social Security Administration. We need to verify your Social Security number due to suspicious activity. Can you please provide your full SSN and date of birth?\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide your SSN",
                correct: false,
                explanation: "Never provide SSN over the phone. Government agencies don't call asking for SSN.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their badge number",
                correct: true,
                explanation: "Always ask for official identification from government callers.",
            },
            ScenarioOption {
                id: "c",
                text: "Hang up and call SSA directly",
                correct: true,
                explanation: "Call the official SSA number to verify if there's an issue.",
            },
            ScenarioOption {
                id: "d",
                text: "Provide partial information",
                correct: false,
                explanation: "Don't provide any personal information to unsolicited callers.",
            },
        ],
    },
    Scenario {
        id: 4,
        title: "Bank Security Alert",
        description: "Someone calls claiming to be from your bank's security department.",
        context: ScenarioContext::Call {
            caller: "Bank Security Department",
            script: "The caller says: \"This is Bank Security. We've detected fraudulent activity on your account. To protect your account, we need to verify your identity. Can you provide your account number and PIN?\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide account information",
                correct: false,
                explanation: "Banks never call asking for account numbers or PINs.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their employee ID",
                correct: true,
                explanation: "Always verify the caller's identity before providing any information.",
            },
            ScenarioOption {
                id: "c",
                text: "Call the bank directly",
                correct: true,
                explanation: "Call the official bank number to verify if there's an issue.",
            },
            ScenarioOption {
                id: "d",
                text: "Provide partial account number",
                correct: false,
                explanation: "Don't provide any account information to unsolicited callers.",
            },
        ],
    },
];
