//! Code-embedded lesson text and question banks.
//!
//! Pure data: nothing here touches the database. `crate::seed` copies these
//! tables into SQLite so that ids are stable for progress tracking.

mod modules;
mod questions;

use crate::simulations::SimulationType;

pub use modules::MODULES;

/// Question set sizes differ per bank; the final assessment draws from
/// `FINAL_ASSESSMENT`, modules from their own `questions` slice.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSeed {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct: char,
    pub explanation: &'static str,
    pub set: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct TopicSeed {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LessonSeed {
    pub title: &'static str,
    pub topics: &'static [TopicSeed],
}

#[derive(Debug, Clone, Copy)]
pub struct ReferenceSeed {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ModuleSeed {
    pub order: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub simulation: Option<SimulationType>,
    pub estimated_minutes: i64,
    pub objectives: &'static [&'static str],
    pub lessons: &'static [LessonSeed],
    pub references: &'static [ReferenceSeed],
    pub questions: &'static [QuestionSeed],
}

pub fn module_by_order(order: i64) -> Option<&'static ModuleSeed> {
    MODULES.iter().find(|module| module.order == order)
}

pub fn final_assessment_questions() -> &'static [QuestionSeed] {
    questions::FINAL_ASSESSMENT
}

impl QuestionSeed {
    pub fn correct_answer(&self) -> String {
        self.correct.to_ascii_lowercase().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modules_are_ordered_and_contiguous() {
        let orders: Vec<i64> = MODULES.iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn only_first_module_has_no_simulation() {
        assert!(MODULES[0].simulation.is_none());
        let kinds: Vec<SimulationType> = MODULES[1..]
            .iter()
            .filter_map(|m| m.simulation)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SimulationType::QuidProQuo,
                SimulationType::Phishing,
                SimulationType::Pretexting,
                SimulationType::Baiting,
            ]
        );
    }

    #[test]
    fn every_question_has_a_valid_answer_key() {
        let banks = MODULES
            .iter()
            .flat_map(|m| m.questions.iter())
            .chain(final_assessment_questions().iter());
        for question in banks {
            assert!(
                matches!(question.correct, 'a'..='d'),
                "bad key for {}",
                question.text
            );
            assert!(question.set >= 1);
        }
    }

    #[test]
    fn each_module_can_fill_a_knowledge_check() {
        for module in MODULES {
            assert!(module.questions.len() >= 5, "module {}", module.order);
            assert!(!module.lessons.is_empty());
        }
    }

    #[test]
    fn final_bank_has_three_sets_of_twenty_five() {
        for set in 1..=3 {
            let count = final_assessment_questions()
                .iter()
                .filter(|q| q.set == set)
                .count();
            assert_eq!(count, 25);
        }
    }
}
