//! Offers of help, licenses, training or discounts in exchange for access or data.

use super::{Scenario, ScenarioBank, ScenarioContext, ScenarioOption, SimulationType};

pub struct QuidProQuoBank;

impl ScenarioBank for QuidProQuoBank {
    fn kind(&self) -> SimulationType {
        SimulationType::QuidProQuo
    }

    fn scenarios(&self) -> &'static [Scenario] {
        SCENARIOS
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: 1,
        title: "IT Support Exchange",
        description: "Someone offers IT support in exchange for information.",
        context: ScenarioContext::Situation {
            text: "A caller says: \"I can help you fix your computer issues right now, but I need your login credentials to access the system. In return, I'll give you free tech support for a month.\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide your credentials",
                correct: false,
                explanation: "Never provide login credentials in exchange for services.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their official ID",
                correct: true,
                explanation: "Always verify the identity of anyone offering services.",
            },
            ScenarioOption {
                id: "c",
                text: "Decline the offer",
                correct: true,
                explanation: "Decline suspicious offers that require sensitive information.",
            },
            ScenarioOption {
                id: "d",
                text: "Ask your supervisor first",
                correct: true,
                explanation: "Consult with supervisor before accepting any external services.",
            },
        ],
    },
    Scenario {
        id: 2,
        title: "Software License Offer",
        description: "Someone offers free software in exchange for access.",
        context: ScenarioContext::Situation {
            text: "A vendor says: \"I can give you a free license for our premium software, but I need temporary access to your system to install it properly.\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Grant them access",
                correct: false,
                explanation: "Never grant system access to external parties without proper procedures.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask IT department to handle it",
                correct: true,
                explanation: "Let IT department handle all software installations and licensing.",
            },
            ScenarioOption {
                id: "c",
                text: "Ask for written documentation",
                correct: true,
                explanation: "Request proper documentation before accepting any software.",
            },
            ScenarioOption {
                id: "d",
                text: "Decline the offer",
                correct: true,
                explanation: "Decline offers that require system access from external parties.",
            },
        ],
    },
    Scenario {
        id: 3,
        title: "Training Exchange",
        description: "Someone offers training in exchange for company information.",
        context: ScenarioContext::Situation {
            text: "A consultant says: \"I'll provide free cybersecurity training for your team, but I need some information about your current security setup to customize the training.\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Provide security details",
                correct: false,
                explanation: "Don't share security information with external parties without proper authorization.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their credentials",
                correct: true,
                explanation: "Verify the consultant's credentials and authorization.",
            },
            ScenarioOption {
                id: "c",
                text: "Contact HR/management",
                correct: true,
                explanation: "Consult with HR or management before accepting external training offers.",
            },
            ScenarioOption {
                id: "d",
                text: "Use generic training materials",
                correct: true,
                explanation: "Use generic training materials that don't require sensitive information.",
            },
        ],
    },
    Scenario {
        id: 4,
        title: "Discount for Information",
        description: "Someone offers a discount in exchange for customer data.",
        context: ScenarioContext::Situation {
            text: "A vendor says: \"I can give you a 50% discount on our services if you can share some information about your customer base and their needs.\"",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Share customer information",
                correct: false,
                explanation: "Never share customer information in exchange for discounts.",
            },
            ScenarioOption {
                id: "b",
                text: "Ask for their privacy policy",
                correct: true,
                explanation: "Request their privacy policy and data handling procedures.",
            },
            ScenarioOption {
                id: "c",
                text: "Consult legal department",
                correct: true,
                explanation: "Consult with legal department before sharing any customer data.",
            },
            ScenarioOption {
                id: "d",
                text: "Decline the offer",
                correct: true,
                explanation: "Decline offers that require sharing sensitive customer information.",
            },
        ],
    },
];
