//! Physical and digital bait: found USB drives, free downloads, giveaways and attachments.

use super::{Scenario, ScenarioBank, ScenarioContext, ScenarioOption, SimulationType};

pub struct BaitingBank;

impl ScenarioBank for BaitingBank {
    fn kind(&self) -> SimulationType {
        SimulationType::Baiting
    }

    fn scenarios(&self) -> &'static [Scenario] {
        SCENARIOS
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: 1,
        title: "USB Drive Found",
        description: "You find a USB drive in the office parking lot.",
        context: ScenarioContext::Situation {
            text: "You find a USB drive labeled \"Employee Salaries 2024\" in the parking lot. It looks like someone dropped it.",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Plug it into your computer to find the owner",
                correct: false,
                explanation: "Never plug unknown USB drives into your computer. They may contain malware.",
            },
            ScenarioOption {
                id: "b",
                text: "Turn it in to IT security",
                correct: true,
                explanation: "Turn unknown devices over to IT security for safe handling.",
            },
            ScenarioOption {
                id: "c",
                text: "Leave it where you found it",
                correct: false,
                explanation: "Leaving it could allow others to pick it up and plug it in.",
            },
            ScenarioOption {
                id: "d",
                text: "Take it to lost and found",
                correct: false,
                explanation: "Lost and found may not have proper security protocols for unknown devices.",
            },
        ],
    },
    Scenario {
        id: 2,
        title: "Free Software Download",
        description: "You see an advertisement for free software.",
        context: ScenarioContext::Situation {
            text: "You see an ad for \"Free Office Suite 2024\" that claims to be a free alternative to Microsoft Office.",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Download and install it",
                correct: false,
                explanation: "Free software from unknown sources may contain malware.",
            },
            ScenarioOption {
                id: "b",
                text: "Research the software first",
                correct: true,
                explanation: "Always research software before downloading, especially free alternatives.",
            },
            ScenarioOption {
                id: "c",
                text: "Ask IT department",
                correct: true,
                explanation: "Consult IT department before installing any software on work computers.",
            },
            ScenarioOption {
                id: "d",
                text: "Download on personal computer first",
                correct: false,
                explanation: "Don't risk your personal computer either. Research first.",
            },
        ],
    },
    Scenario {
        id: 3,
        title: "Conference Giveaway",
        description: "You receive a free device at a conference.",
        context: ScenarioContext::Situation {
            text: "At a conference, a vendor gives you a free USB drive with their company logo and some promotional materials.",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Use it immediately to store files",
                correct: false,
                explanation: "Even branded USB drives from vendors can contain malware.",
            },
            ScenarioOption {
                id: "b",
                text: "Scan it with antivirus first",
                correct: true,
                explanation: "Always scan unknown devices before using them.",
            },
            ScenarioOption {
                id: "c",
                text: "Give it to IT for inspection",
                correct: true,
                explanation: "IT can properly inspect and test the device before use.",
            },
            ScenarioOption {
                id: "d",
                text: "Use it only on personal computer",
                correct: false,
                explanation: "Don't risk any computer. Scan or have IT inspect first.",
            },
        ],
    },
    Scenario {
        id: 4,
        title: "Email Attachment",
        description: "You receive an email with an interesting attachment.",
        context: ScenarioContext::Situation {
            text: "You receive an email with the subject \"Free Movie Tickets\" and an attachment called \"tickets.pdf.exe\".",
        },
        options: [
            ScenarioOption {
                id: "a",
                text: "Open the attachment",
                correct: false,
                explanation: "Never open suspicious attachments, especially .exe files disguised as documents.",
            },
            ScenarioOption {
                id: "b",
                text: "Delete the email",
                correct: true,
                explanation: "Delete suspicious emails with unexpected attachments.",
            },
            ScenarioOption {
                id: "c",
                text: "Forward to IT security",
                correct: true,
                explanation: "Forward suspicious emails to IT security for analysis.",
            },
            ScenarioOption {
                id: "d",
                text: "Scan with antivirus first",
                correct: false,
                explanation: "Don't even download suspicious attachments for scanning.",
            },
        ],
    },
];
