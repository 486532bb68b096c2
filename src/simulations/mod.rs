//! Scenario-based simulations.
//!
//! Each attack family is a `ScenarioBank` holding static scenarios. A
//! learner picks one option; evaluation is a plain equality check against
//! the options flagged correct.

mod baiting;
mod phishing;
mod pretexting;
mod quid_pro_quo;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use baiting::BaitingBank;
pub use phishing::PhishingBank;
pub use pretexting::PretextingBank;
pub use quid_pro_quo::QuidProQuoBank;

pub const SIMULATION_PASSING_SCORE: i64 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    Phishing,
    Pretexting,
    Baiting,
    QuidProQuo,
}

impl SimulationType {
    pub const ALL: [SimulationType; 4] = [
        SimulationType::Phishing,
        SimulationType::Pretexting,
        SimulationType::Baiting,
        SimulationType::QuidProQuo,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "phishing" => Some(Self::Phishing),
            "pretexting" => Some(Self::Pretexting),
            "baiting" => Some(Self::Baiting),
            "quid_pro_quo" | "quid-pro-quo" => Some(Self::QuidProQuo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phishing => "phishing",
            Self::Pretexting => "pretexting",
            Self::Baiting => "baiting",
            Self::QuidProQuo => "quid_pro_quo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Phishing => "Phishing",
            Self::Pretexting => "Pretexting",
            Self::Baiting => "Baiting",
            Self::QuidProQuo => "Quid Pro Quo",
        }
    }
}

impl std::fmt::Display for SimulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioContext {
    Email {
        sender: &'static str,
        subject: &'static str,
        body: &'static str,
    },
    Call {
        caller: &'static str,
        script: &'static str,
    },
    Situation {
        text: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioOption {
    pub id: &'static str,
    pub text: &'static str,
    pub correct: bool,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scenario {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub context: ScenarioContext,
    pub options: [ScenarioOption; 4],
}

/// What a learner sees before choosing: no answer key, no explanations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicScenario {
    pub simulation_type: SimulationType,
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub context: ScenarioContext,
    pub options: Vec<PublicOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicOption {
    pub id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionFeedback {
    pub id: &'static str,
    pub text: &'static str,
    pub correct: bool,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub scenario_id: u32,
    pub chosen_option: String,
    pub correct: bool,
    pub score: i64,
    pub passed: bool,
    pub explanation: &'static str,
    pub correct_options: Vec<&'static str>,
    pub feedback: Vec<OptionFeedback>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("unknown simulation type: {0}")]
    UnknownType(String),
    #[error("scenario {0} does not exist")]
    UnknownScenario(u32),
    #[error("option '{0}' is not part of this scenario")]
    UnknownOption(String),
    #[error("no scenarios available")]
    Empty,
}

pub trait ScenarioBank: Send + Sync {
    fn kind(&self) -> SimulationType;

    fn scenarios(&self) -> &'static [Scenario];

    fn random_scenario(&self) -> Result<&'static Scenario, SimulationError> {
        let mut rng = rand::rng();
        self.scenarios()
            .choose(&mut rng)
            .ok_or(SimulationError::Empty)
    }

    fn scenario_by_id(&self, id: u32) -> Option<&'static Scenario> {
        self.scenarios().iter().find(|scenario| scenario.id == id)
    }

    fn correct_options(&self, scenario: &Scenario) -> Vec<&'static str> {
        scenario
            .options
            .iter()
            .filter(|option| option.correct)
            .map(|option| option.id)
            .collect()
    }

    fn evaluate(&self, scenario: &Scenario, choice: &str) -> Result<Evaluation, SimulationError> {
        let choice = choice.trim().to_ascii_lowercase();
        let chosen = scenario
            .options
            .iter()
            .find(|option| option.id == choice)
            .ok_or_else(|| SimulationError::UnknownOption(choice.clone()))?;

        let score = if chosen.correct { 100 } else { 0 };

        Ok(Evaluation {
            scenario_id: scenario.id,
            chosen_option: choice,
            correct: chosen.correct,
            score,
            passed: score >= SIMULATION_PASSING_SCORE,
            explanation: chosen.explanation,
            correct_options: self.correct_options(scenario),
            feedback: scenario
                .options
                .iter()
                .map(|option| OptionFeedback {
                    id: option.id,
                    text: option.text,
                    correct: option.correct,
                    explanation: option.explanation,
                })
                .collect(),
        })
    }

    fn public_view(&self, scenario: &Scenario) -> PublicScenario {
        PublicScenario {
            simulation_type: self.kind(),
            id: scenario.id,
            title: scenario.title,
            description: scenario.description,
            context: scenario.context,
            options: scenario
                .options
                .iter()
                .map(|option| PublicOption {
                    id: option.id,
                    text: option.text,
                })
                .collect(),
        }
    }
}

static PHISHING: PhishingBank = PhishingBank;
static PRETEXTING: PretextingBank = PretextingBank;
static BAITING: BaitingBank = BaitingBank;
static QUID_PRO_QUO: QuidProQuoBank = QuidProQuoBank;

pub fn bank_for(kind: SimulationType) -> &'static dyn ScenarioBank {
    match kind {
        SimulationType::Phishing => &PHISHING,
        SimulationType::Pretexting => &PRETEXTING,
        SimulationType::Baiting => &BAITING,
        SimulationType::QuidProQuo => &QUID_PRO_QUO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in SimulationType::ALL {
            assert_eq!(SimulationType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SimulationType::parse("tailgating"), None);
    }

    #[test]
    fn every_bank_has_four_well_formed_scenarios() {
        for kind in SimulationType::ALL {
            let bank = bank_for(kind);
            assert_eq!(bank.kind(), kind);
            assert_eq!(bank.scenarios().len(), 4);
            for scenario in bank.scenarios() {
                assert!(!bank.correct_options(scenario).is_empty());
                let ids: Vec<&str> = scenario.options.iter().map(|o| o.id).collect();
                assert_eq!(ids, vec!["a", "b", "c", "d"]);
            }
        }
    }

    #[test]
    fn usb_drive_scenario_rewards_reporting() {
        let bank = bank_for(SimulationType::Baiting);
        let scenario = bank.scenario_by_id(1).expect("scenario 1");
        assert_eq!(scenario.title, "USB Drive Found");

        let plugged_in = bank.evaluate(scenario, "a").unwrap();
        assert!(!plugged_in.correct);
        assert_eq!(plugged_in.score, 0);
        assert!(!plugged_in.passed);

        let reported = bank.evaluate(scenario, "B").unwrap();
        assert!(reported.correct);
        assert_eq!(reported.score, 100);
        assert!(reported.passed);
        assert_eq!(reported.correct_options, vec!["b"]);
    }

    #[test]
    fn scenarios_with_several_safe_choices_accept_each() {
        let bank = bank_for(SimulationType::Phishing);
        let scenario = bank.scenario_by_id(3).expect("password reset scenario");
        assert!(bank.evaluate(scenario, "b").unwrap().correct);
        assert!(bank.evaluate(scenario, "d").unwrap().correct);
        assert!(!bank.evaluate(scenario, "a").unwrap().correct);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let bank = bank_for(SimulationType::Pretexting);
        let scenario = &bank.scenarios()[0];
        assert_eq!(
            bank.evaluate(scenario, "e").unwrap_err(),
            SimulationError::UnknownOption("e".to_string())
        );
    }

    #[test]
    fn public_view_hides_answer_key() {
        let bank = bank_for(SimulationType::QuidProQuo);
        let scenario = bank.random_scenario().unwrap();
        let view = serde_json::to_value(bank.public_view(scenario)).unwrap();
        let text = view.to_string();
        assert!(!text.contains("\"correct\""));
        assert!(!text.contains("explanation"));
        assert_eq!(view["simulationType"], "quid_pro_quo");
    }
}
