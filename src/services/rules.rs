//! Completion, unlock and retake rules.
//!
//! Everything here is a pure function over facts the services have already
//! loaded, so the decisions can be tested without a database.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config::ProgramRules;
use crate::response::AppError;

/// What the completion rule needs to know about one learner and one module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleFacts {
    pub content_viewed: bool,
    /// `(correct, total)` of the most recent knowledge check.
    pub latest_knowledge_check: Option<(i64, i64)>,
    pub has_simulation: bool,
    pub simulation_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Complete module {requires} before accessing this module")]
    ModuleLocked { requires: i64 },
    #[error("Maximum of {max} knowledge check attempts reached for this module")]
    RetakeLimit { max: i64 },
    #[error("Maximum attempts reached. Try again in {remaining_hours} hour(s)")]
    CoolingDown { remaining_hours: i64 },
    #[error("Complete all modules first ({completed}/{total} completed)")]
    ModulesIncomplete { completed: i64, total: i64 },
    #[error("Final assessment already passed")]
    AlreadyPassed,
    #[error("Pass the final assessment first")]
    FinalNotPassed,
    #[error("Survey already submitted")]
    SurveyAlreadySubmitted,
    #[error("Complete the feedback survey first")]
    SurveyRequired,
    #[error("Module completion requirements are not met")]
    CompletionRuleNotMet,
}

impl From<RuleViolation> for AppError {
    fn from(violation: RuleViolation) -> Self {
        let message = violation.to_string();
        match violation {
            RuleViolation::RetakeLimit { .. } | RuleViolation::CoolingDown { .. } => {
                AppError::too_many_requests(message)
            }
            RuleViolation::AlreadyPassed | RuleViolation::SurveyAlreadySubmitted => {
                AppError::conflict(message)
            }
            RuleViolation::CompletionRuleNotMet => AppError::validation(message),
            RuleViolation::ModuleLocked { .. }
            | RuleViolation::ModulesIncomplete { .. }
            | RuleViolation::FinalNotPassed
            | RuleViolation::SurveyRequired => AppError::forbidden(message),
        }
    }
}

/// Integer-truncated percentage; 0 when there were no questions.
pub fn knowledge_check_percentage(correct: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (correct.clamp(0, total) * 100) / total
}

pub fn is_module_complete(facts: &ModuleFacts, rules: &ProgramRules) -> bool {
    let score_ok = facts
        .latest_knowledge_check
        .map(|(correct, total)| {
            total > 0
                && knowledge_check_percentage(correct, total) >= rules.knowledge_check_passing_score
        })
        .unwrap_or(false);
    let simulation_ok = !facts.has_simulation || facts.simulation_completed;

    score_ok && simulation_ok && facts.content_viewed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ModuleAccess {
    Accessible,
    Locked { requires: i64 },
}

impl ModuleAccess {
    pub fn is_accessible(&self) -> bool {
        matches!(self, Self::Accessible)
    }

    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            Self::Accessible => Ok(()),
            Self::Locked { requires } => Err(RuleViolation::ModuleLocked { requires }),
        }
    }
}

/// Module `order` opens once module `order - 1` is complete. The first
/// module is always open.
pub fn module_access(order: i64, previous_complete: bool) -> ModuleAccess {
    if order <= 1 || previous_complete {
        ModuleAccess::Accessible
    } else {
        ModuleAccess::Locked {
            requires: order - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetakeDecision {
    pub allowed: bool,
    pub attempts_used: i64,
    pub attempts_remaining: i64,
}

impl RetakeDecision {
    pub fn into_result(self, rules: &ProgramRules) -> Result<Self, RuleViolation> {
        if self.allowed {
            Ok(self)
        } else {
            Err(RuleViolation::RetakeLimit {
                max: rules.max_attempts_per_module,
            })
        }
    }
}

pub fn knowledge_check_retake(attempts: i64, rules: &ProgramRules) -> RetakeDecision {
    let used = attempts.max(0);
    RetakeDecision {
        allowed: used < rules.max_attempts_per_module,
        attempts_used: used,
        attempts_remaining: (rules.max_attempts_per_module - used).max(0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AttemptWindow {
    #[serde(rename_all = "camelCase")]
    Allowed {
        attempts_remaining: usize,
        cooldown_reset: bool,
    },
    #[serde(rename_all = "camelCase")]
    CoolingDown {
        remaining_hours: i64,
        available_at: DateTime<Utc>,
    },
}

impl AttemptWindow {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    pub fn into_result(self) -> Result<usize, RuleViolation> {
        match self {
            Self::Allowed {
                attempts_remaining, ..
            } => Ok(attempts_remaining),
            Self::CoolingDown {
                remaining_hours, ..
            } => Err(RuleViolation::CoolingDown { remaining_hours }),
        }
    }
}

/// Replays the attempt history into windows of at most
/// `final_assessment_max_attempts`. A full window only gives way to a new
/// one when the cooldown has elapsed since the attempt that filled it.
pub fn final_assessment_window(
    attempt_times: &[DateTime<Utc>],
    now: DateTime<Utc>,
    rules: &ProgramRules,
) -> AttemptWindow {
    let max = rules.final_assessment_max_attempts.max(1);
    let cooldown = Duration::hours(rules.assessment_cooldown_hours);

    let mut sorted = attempt_times.to_vec();
    sorted.sort();

    let mut in_window = 0usize;
    let mut last: Option<DateTime<Utc>> = None;
    for at in sorted {
        if let Some(prev) = last {
            if in_window >= max && at - prev >= cooldown {
                in_window = 0;
            }
        }
        in_window += 1;
        last = Some(at);
    }

    match last {
        Some(prev) if in_window >= max => {
            let elapsed = now - prev;
            if elapsed >= cooldown {
                AttemptWindow::Allowed {
                    attempts_remaining: max,
                    cooldown_reset: true,
                }
            } else {
                let remaining = cooldown - elapsed;
                let remaining_hours = (remaining.num_minutes() + 59) / 60;
                AttemptWindow::CoolingDown {
                    remaining_hours: remaining_hours.max(1),
                    available_at: prev + cooldown,
                }
            }
        }
        _ => AttemptWindow::Allowed {
            attempts_remaining: max - in_window,
            cooldown_reset: false,
        },
    }
}

/// Rotates through the question sets: attempt 1 uses set 1, and so on.
pub fn question_set_for_attempt(attempt: i64, sets: i64) -> i64 {
    if sets <= 1 {
        return 1;
    }
    ((attempt.max(1) - 1) % sets) + 1
}

pub fn final_assessment_gate(
    completed_modules: i64,
    total_modules: i64,
    already_passed: bool,
) -> Result<(), RuleViolation> {
    if already_passed {
        return Err(RuleViolation::AlreadyPassed);
    }
    if completed_modules < total_modules {
        return Err(RuleViolation::ModulesIncomplete {
            completed: completed_modules,
            total: total_modules,
        });
    }
    Ok(())
}

pub fn survey_gate(final_passed: bool, survey_exists: bool) -> Result<(), RuleViolation> {
    if !final_passed {
        return Err(RuleViolation::FinalNotPassed);
    }
    if survey_exists {
        return Err(RuleViolation::SurveyAlreadySubmitted);
    }
    Ok(())
}

pub fn certificate_gate(final_passed: bool, survey_exists: bool) -> Result<(), RuleViolation> {
    if !final_passed {
        return Err(RuleViolation::FinalNotPassed);
    }
    if !survey_exists {
        return Err(RuleViolation::SurveyRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn rules() -> ProgramRules {
        ProgramRules::default()
    }

    fn at(hours: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + Duration::hours(hours)
    }

    fn complete_facts() -> ModuleFacts {
        ModuleFacts {
            content_viewed: true,
            latest_knowledge_check: Some((4, 5)),
            has_simulation: true,
            simulation_completed: true,
        }
    }

    #[test]
    fn percentage_truncates_and_handles_empty() {
        assert_eq!(knowledge_check_percentage(4, 5), 80);
        assert_eq!(knowledge_check_percentage(2, 3), 66);
        assert_eq!(knowledge_check_percentage(0, 0), 0);
        assert_eq!(knowledge_check_percentage(25, 25), 100);
    }

    #[test]
    fn module_completes_only_when_every_condition_holds() {
        let rules = rules();
        assert!(is_module_complete(&complete_facts(), &rules));

        let low_score = ModuleFacts {
            latest_knowledge_check: Some((3, 5)),
            ..complete_facts()
        };
        assert!(!is_module_complete(&low_score, &rules));

        let no_sim = ModuleFacts {
            simulation_completed: false,
            ..complete_facts()
        };
        assert!(!is_module_complete(&no_sim, &rules));

        let unviewed = ModuleFacts {
            content_viewed: false,
            ..complete_facts()
        };
        assert!(!is_module_complete(&unviewed, &rules));

        let never_checked = ModuleFacts {
            latest_knowledge_check: None,
            ..complete_facts()
        };
        assert!(!is_module_complete(&never_checked, &rules));
    }

    #[test]
    fn module_without_simulation_ignores_the_flag() {
        let facts = ModuleFacts {
            has_simulation: false,
            simulation_completed: false,
            ..complete_facts()
        };
        assert!(is_module_complete(&facts, &rules()));
    }

    #[test]
    fn first_module_is_always_open() {
        assert_eq!(module_access(1, false), ModuleAccess::Accessible);
        assert_eq!(module_access(3, true), ModuleAccess::Accessible);
        assert_eq!(module_access(3, false), ModuleAccess::Locked { requires: 2 });
        assert_eq!(
            module_access(4, false).into_result(),
            Err(RuleViolation::ModuleLocked { requires: 3 })
        );
    }

    #[test]
    fn retake_limit_is_ten_attempts() {
        let rules = rules();
        let ninth = knowledge_check_retake(9, &rules);
        assert!(ninth.allowed);
        assert_eq!(ninth.attempts_remaining, 1);

        let tenth = knowledge_check_retake(10, &rules);
        assert!(!tenth.allowed);
        assert_eq!(tenth.attempts_remaining, 0);
        assert_eq!(
            tenth.into_result(&rules),
            Err(RuleViolation::RetakeLimit { max: 10 })
        );
    }

    #[test]
    fn fresh_learner_has_a_full_window() {
        assert_eq!(
            final_assessment_window(&[], at(0), &rules()),
            AttemptWindow::Allowed {
                attempts_remaining: 3,
                cooldown_reset: false
            }
        );
    }

    #[test]
    fn third_attempt_starts_the_cooldown() {
        let times = [at(0), at(1), at(2)];
        match final_assessment_window(&times, at(3), &rules()) {
            AttemptWindow::CoolingDown {
                remaining_hours,
                available_at,
            } => {
                assert_eq!(remaining_hours, 47);
                assert_eq!(available_at, at(50));
            }
            other => panic!("expected cooldown, got {other:?}"),
        }
    }

    #[test]
    fn window_reopens_after_cooldown() {
        let times = [at(0), at(1), at(2)];
        assert_eq!(
            final_assessment_window(&times, at(50), &rules()),
            AttemptWindow::Allowed {
                attempts_remaining: 3,
                cooldown_reset: true
            }
        );

        let next_window = [at(0), at(1), at(2), at(51)];
        assert_eq!(
            final_assessment_window(&next_window, at(52), &rules()),
            AttemptWindow::Allowed {
                attempts_remaining: 2,
                cooldown_reset: false
            }
        );
    }

    #[test]
    fn partial_hours_round_up() {
        let times = [at(0), at(1), at(2)];
        let now = at(49) + Duration::minutes(30);
        assert!(matches!(
            final_assessment_window(&times, now, &rules()),
            AttemptWindow::CoolingDown {
                remaining_hours: 1,
                ..
            }
        ));
    }

    #[test]
    fn question_sets_rotate_by_attempt() {
        assert_eq!(question_set_for_attempt(1, 3), 1);
        assert_eq!(question_set_for_attempt(2, 3), 2);
        assert_eq!(question_set_for_attempt(3, 3), 3);
        assert_eq!(question_set_for_attempt(4, 3), 1);
        assert_eq!(question_set_for_attempt(7, 1), 1);
    }

    #[test]
    fn final_gate_requires_all_modules_and_no_prior_pass() {
        assert_eq!(final_assessment_gate(5, 5, false), Ok(()));
        assert_eq!(
            final_assessment_gate(4, 5, false),
            Err(RuleViolation::ModulesIncomplete {
                completed: 4,
                total: 5
            })
        );
        assert_eq!(
            final_assessment_gate(5, 5, true),
            Err(RuleViolation::AlreadyPassed)
        );
    }

    #[test]
    fn survey_and_certificate_gates() {
        assert_eq!(survey_gate(true, false), Ok(()));
        assert_eq!(survey_gate(false, false), Err(RuleViolation::FinalNotPassed));
        assert_eq!(
            survey_gate(true, true),
            Err(RuleViolation::SurveyAlreadySubmitted)
        );

        assert_eq!(certificate_gate(true, true), Ok(()));
        assert_eq!(certificate_gate(true, false), Err(RuleViolation::SurveyRequired));
        assert_eq!(certificate_gate(false, true), Err(RuleViolation::FinalNotPassed));
    }

    #[test]
    fn violations_map_to_http_statuses() {
        use axum::http::StatusCode;
        let locked: AppError = RuleViolation::ModuleLocked { requires: 1 }.into();
        assert_eq!(locked.status(), StatusCode::FORBIDDEN);
        let cooling: AppError = RuleViolation::CoolingDown { remaining_hours: 2 }.into();
        assert_eq!(cooling.status(), StatusCode::TOO_MANY_REQUESTS);
        let passed: AppError = RuleViolation::AlreadyPassed.into();
        assert_eq!(passed.status(), StatusCode::CONFLICT);
    }

    proptest! {
        #[test]
        fn percentage_stays_in_bounds(total in 0i64..200, correct in 0i64..200) {
            let correct = correct.min(total);
            let pct = knowledge_check_percentage(correct, total);
            prop_assert!((0..=100).contains(&pct));
        }

        #[test]
        fn remaining_attempts_never_exceed_window(offsets in prop::collection::vec(0i64..400, 0..12)) {
            let times: Vec<_> = offsets.iter().map(|h| at(*h)).collect();
            let window = final_assessment_window(&times, at(500), &rules());
            if let AttemptWindow::Allowed { attempts_remaining, .. } = window {
                prop_assert!(attempts_remaining >= 1);
                prop_assert!(attempts_remaining <= 3);
            }
        }

        #[test]
        fn waiting_longer_never_closes_an_open_window(
            offsets in prop::collection::vec(0i64..200, 0..8),
            wait in 0i64..100,
        ) {
            let times: Vec<_> = offsets.iter().map(|h| at(*h)).collect();
            let now = at(200);
            if final_assessment_window(&times, now, &rules()).is_allowed() {
                let later = now + Duration::hours(wait);
                prop_assert!(final_assessment_window(&times, later, &rules()).is_allowed());
            }
        }

        #[test]
        fn question_set_is_in_range(attempt in 1i64..1000, sets in 1i64..10) {
            let set = question_set_for_attempt(attempt, sets);
            prop_assert!(set >= 1 && set <= sets);
        }
    }
}
