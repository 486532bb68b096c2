use std::collections::HashMap;

use chrono::Utc;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ProgramRules;
use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::assessment::{AssessmentResultRecord, AssessmentType, NewAssessmentResult};
use crate::db::operations::content as content_ops;
use crate::db::operations::content::{QuestionBank, QuestionRecord};
use crate::db::operations::progress as progress_ops;
use crate::db::operations::simulation as simulation_ops;
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::module as module_service;
use crate::services::rules::{self, AttemptWindow, RuleViolation};
use crate::services::user as user_service;

pub const REVIEW_ITEMS: usize = 5;
const ANSWER_KEYS: [&str; 4] = ["a", "b", "c", "d"];

/// Submitted answers keyed by question id.
///
/// JSON bodies carry an `answers` object. Form bodies post one field per
/// question, either `question_<id>=<key>` or `answers[<id>]=<key>`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, Value>")]
pub struct AnswerSheet {
    pub answers: HashMap<i64, String>,
    pub time_taken: Option<i64>,
}

impl From<HashMap<String, Value>> for AnswerSheet {
    fn from(fields: HashMap<String, Value>) -> Self {
        let mut sheet = AnswerSheet::default();
        for (key, value) in fields {
            match key.as_str() {
                "answers" => {
                    if let Value::Object(map) = value {
                        for (id, answer) in map {
                            let id = id.trim().parse::<i64>();
                            if let (Ok(id), Some(answer)) = (id, answer.as_str()) {
                                sheet.answers.insert(id, answer.to_string());
                            }
                        }
                    }
                }
                "timeTaken" | "time_taken" => {
                    sheet.time_taken = value
                        .as_i64()
                        .or_else(|| value.as_str().and_then(|raw| raw.trim().parse().ok()));
                }
                field => {
                    if let (Some(id), Some(answer)) = (answer_field_id(field), value.as_str()) {
                        sheet.answers.insert(id, answer.to_string());
                    }
                }
            }
        }
        sheet
    }
}

fn answer_field_id(field: &str) -> Option<i64> {
    field
        .strip_prefix("question_")
        .or_else(|| field.strip_prefix("answers[")?.strip_suffix(']'))?
        .trim()
        .parse()
        .ok()
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicChoice {
    pub key: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: i64,
    pub question_text: String,
    pub options: Vec<PublicChoice>,
}

impl From<&QuestionRecord> for PublicQuestion {
    fn from(question: &QuestionRecord) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            options: ANSWER_KEYS
                .into_iter()
                .map(|key| PublicChoice {
                    key,
                    text: question.option_text(key).unwrap_or_default().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedAssessment {
    pub attempt_id: i64,
    pub assessment_type: AssessmentType,
    pub module_id: Option<i64>,
    pub question_set: i64,
    pub passing_score: i64,
    pub attempt_number: i64,
    pub attempts_remaining: i64,
    pub questions: Vec<PublicQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetail {
    pub question_id: i64,
    pub question_text: String,
    pub selected: Option<String>,
    pub selected_text: Option<String>,
    pub correct_answer: String,
    pub correct_text: Option<String>,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub correct: i64,
    pub total: i64,
    pub percentage: i64,
    pub details: Vec<AnswerDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerProblems {
    pub missing: Vec<i64>,
    pub invalid: Vec<i64>,
}

impl AnswerProblems {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if !self.invalid.is_empty() {
            return Err(AppError::validation(format!(
                "{} answer(s) are not one of a, b, c, d",
                self.invalid.len()
            )));
        }
        if !self.missing.is_empty() {
            return Err(AppError::validation(format!(
                "Please answer all questions ({} unanswered)",
                self.missing.len()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeCheckOutcome {
    pub result_id: i64,
    pub module_id: i64,
    pub correct: i64,
    pub total: i64,
    pub percentage: i64,
    pub passed: bool,
    pub passing_score: i64,
    pub attempts_used: i64,
    pub attempts_remaining: i64,
    pub module_completed: bool,
    pub simulation_pending: bool,
    pub review: Vec<AnswerDetail>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalAssessmentOutcome {
    pub result_id: i64,
    pub correct: i64,
    pub total: i64,
    pub percentage: i64,
    pub passed: bool,
    pub passing_score: i64,
    pub window: AttemptWindow,
    pub review: Vec<AnswerDetail>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(flatten)]
    pub result: AssessmentResultRecord,
    pub percentage: i64,
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTypeStatistics {
    pub assessment_type: AssessmentType,
    pub total_attempts: i64,
    pub passed_attempts: i64,
    pub average_percentage: f64,
    pub pass_rate: f64,
    pub best_percentage: i64,
    pub participants: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComparison {
    pub assessment_type: AssessmentType,
    pub attempts: i64,
    pub best_percentage: Option<i64>,
    pub latest_percentage: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalAssessmentStatus {
    pub eligible: bool,
    pub reason: Option<String>,
    pub passed: bool,
    pub best_percentage: Option<i64>,
    pub modules_completed: i64,
    pub total_modules: i64,
    pub total_attempts: i64,
    pub window: AttemptWindow,
    pub passing_score: i64,
    pub question_count: usize,
    pub max_attempts_per_window: usize,
    pub cooldown_hours: i64,
}

/// Scores answers against the key. Answers are compared case-insensitively;
/// unanswered questions count as wrong.
pub fn grade(questions: &[QuestionRecord], answers: &HashMap<i64, String>) -> Grade {
    let details: Vec<AnswerDetail> = questions
        .iter()
        .map(|question| {
            let selected = answers
                .get(&question.id)
                .map(|answer| answer.trim().to_ascii_lowercase())
                .filter(|answer| !answer.is_empty());
            let correct_answer = question.correct_answer.trim().to_ascii_lowercase();
            let is_correct = selected.as_deref() == Some(correct_answer.as_str());
            AnswerDetail {
                question_id: question.id,
                question_text: question.question_text.clone(),
                selected_text: selected
                    .as_deref()
                    .and_then(|key| question.option_text(key))
                    .map(str::to_string),
                correct_text: question.option_text(&correct_answer).map(str::to_string),
                selected,
                correct_answer,
                is_correct,
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let correct = details.iter().filter(|d| d.is_correct).count() as i64;
    let total = details.len() as i64;
    Grade {
        correct,
        total,
        percentage: rules::knowledge_check_percentage(correct, total),
        details,
    }
}

pub fn validate_answers(question_ids: &[i64], answers: &HashMap<i64, String>) -> AnswerProblems {
    let mut problems = AnswerProblems::default();
    for id in question_ids {
        match answers.get(id).map(|a| a.trim()) {
            None | Some("") => problems.missing.push(*id),
            Some(answer) if !ANSWER_KEYS.contains(&answer.to_ascii_lowercase().as_str()) => {
                problems.invalid.push(*id)
            }
            Some(_) => {}
        }
    }
    problems
}

fn sample_questions(pool: &[QuestionRecord], count: usize) -> Vec<QuestionRecord> {
    let mut rng = rand::rng();
    pool.choose_multiple(&mut rng, count.min(pool.len()))
        .cloned()
        .collect()
}

fn last_review_items(details: &[AnswerDetail]) -> Vec<AnswerDetail> {
    details[details.len().saturating_sub(REVIEW_ITEMS)..].to_vec()
}

pub async fn start_knowledge_check(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module_id: i64,
) -> Result<IssuedAssessment, AppError> {
    let module = module_service::load_module(proxy, module_id).await?;
    module_service::ensure_accessible(proxy, rules, user_id, &module).await?;

    let progress = module_service::start_module(proxy, user_id, module_id).await?;
    let retake = rules::knowledge_check_retake(progress.attempts, rules).into_result(rules)?;

    let sets = content_ops::question_set_count(proxy, QuestionBank::KnowledgeCheck, Some(module_id))
        .await?;
    let attempt_number = progress.attempts + 1;
    let question_set = rules::question_set_for_attempt(attempt_number, sets);

    let count = rules.knowledge_check_question_count;
    let mut pool = content_ops::module_questions(proxy, module_id, Some(question_set)).await?;
    if pool.len() < count {
        pool = content_ops::module_questions(proxy, module_id, None).await?;
    }
    if pool.is_empty() {
        return Err(AppError::not_found("No questions available for this module"));
    }

    let questions = sample_questions(&pool, count);
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();

    assessment_ops::consume_attempts(proxy, user_id, AssessmentType::KnowledgeCheck, Some(module_id))
        .await?;
    let attempt_id = assessment_ops::insert_attempt(
        proxy,
        user_id,
        AssessmentType::KnowledgeCheck,
        Some(module_id),
        &ids,
        question_set,
    )
    .await?;
    tracing::debug!(user_id, module_id, attempt_id, question_set, "knowledge check issued");

    Ok(IssuedAssessment {
        attempt_id,
        assessment_type: AssessmentType::KnowledgeCheck,
        module_id: Some(module_id),
        question_set,
        passing_score: rules.knowledge_check_passing_score,
        attempt_number,
        attempts_remaining: retake.attempts_remaining,
        questions: questions.iter().map(PublicQuestion::from).collect(),
    })
}

pub async fn submit_knowledge_check(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module_id: i64,
    sheet: AnswerSheet,
) -> Result<KnowledgeCheckOutcome, AppError> {
    let module = module_service::load_module(proxy, module_id).await?;
    module_service::ensure_accessible(proxy, rules, user_id, &module).await?;

    let progress = progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    rules::knowledge_check_retake(progress.attempts, rules).into_result(rules)?;

    let attempt = assessment_ops::latest_open_attempt(
        proxy,
        user_id,
        AssessmentType::KnowledgeCheck,
        Some(module_id),
    )
    .await?;

    let (questions, question_set) = match &attempt {
        Some(attempt) => (
            content_ops::questions_by_ids(proxy, QuestionBank::KnowledgeCheck, &attempt.question_ids)
                .await?,
            Some(attempt.question_set),
        ),
        None => {
            // No issued attempt: grade the answered questions of this module,
            // but still demand a full-size quiz.
            let all = content_ops::module_questions(proxy, module_id, None).await?;
            let expected = rules.knowledge_check_question_count.min(all.len());
            let answered: Vec<QuestionRecord> = all
                .into_iter()
                .filter(|q| sheet.answers.contains_key(&q.id))
                .collect();
            if answered.len() < expected {
                return Err(AppError::validation(format!(
                    "Please answer all questions ({} of {expected} answered)",
                    answered.len()
                )));
            }
            (answered, None)
        }
    };
    if questions.is_empty() {
        return Err(AppError::not_found("No questions available for this module"));
    }

    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    validate_answers(&ids, &sheet.answers).into_result()?;

    let graded = grade(&questions, &sheet.answers);
    let passed = graded.percentage >= rules.knowledge_check_passing_score;

    let result_id = assessment_ops::insert_result(
        proxy,
        &NewAssessmentResult {
            user_id,
            assessment_type: AssessmentType::KnowledgeCheck,
            module_id: Some(module_id),
            correct_answers: graded.correct,
            total_questions: graded.total,
            time_taken: sheet.time_taken.filter(|t| *t >= 0),
            passed,
            answers_data: serde_json::json!({
                "questionSet": question_set,
                "percentage": graded.percentage,
                "details": graded.details,
            }),
        },
    )
    .await?;

    progress_ops::record_knowledge_check(proxy, user_id, module_id, graded.percentage).await?;
    assessment_ops::consume_attempts(proxy, user_id, AssessmentType::KnowledgeCheck, Some(module_id))
        .await?;

    let module_completed = module_service::sync_completion(proxy, rules, user_id, &module).await?;
    user_service::refresh_counters(proxy, user_id).await?;

    let simulation_pending = module.has_simulation
        && !simulation_ops::has_completed_for_module(proxy, user_id, module_id).await?;
    let attempts_used = progress.attempts + 1;

    tracing::info!(
        user_id,
        module_id,
        percentage = graded.percentage,
        passed,
        module_completed,
        "knowledge check submitted"
    );

    Ok(KnowledgeCheckOutcome {
        result_id,
        module_id,
        correct: graded.correct,
        total: graded.total,
        percentage: graded.percentage,
        passed,
        passing_score: rules.knowledge_check_passing_score,
        attempts_used,
        attempts_remaining: (rules.max_attempts_per_module - attempts_used).max(0),
        module_completed,
        simulation_pending,
        review: last_review_items(&graded.details),
    })
}

/// Completed module count and whether the final assessment was ever passed.
async fn final_gate(proxy: &DatabaseProxy, user_id: i64) -> Result<(i64, bool), AppError> {
    let completed = progress_ops::count_completed(proxy, user_id).await?;
    let passed = assessment_ops::first_passed(proxy, user_id, AssessmentType::FinalAssessment)
        .await?
        .is_some();
    Ok((completed, passed))
}

pub async fn start_final_assessment(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<IssuedAssessment, AppError> {
    let (completed, passed) = final_gate(proxy, user_id).await?;
    rules::final_assessment_gate(completed, rules.total_modules, passed)?;

    let times = assessment_ops::final_attempt_times(proxy, user_id).await?;
    let remaining = rules::final_assessment_window(&times, Utc::now(), rules).into_result()?;

    let attempt_number = times.len() as i64 + 1;
    let sets = content_ops::question_set_count(proxy, QuestionBank::FinalAssessment, None).await?;
    let question_set = rules::question_set_for_attempt(attempt_number, sets);

    let count = rules.final_assessment_question_count;
    let mut pool = content_ops::final_questions(proxy, Some(question_set)).await?;
    if pool.len() < count {
        pool = content_ops::final_questions(proxy, None).await?;
    }
    if pool.is_empty() {
        return Err(AppError::not_found("No final assessment questions available"));
    }

    let questions = sample_questions(&pool, count);
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();

    assessment_ops::consume_attempts(proxy, user_id, AssessmentType::FinalAssessment, None).await?;
    let attempt_id = assessment_ops::insert_attempt(
        proxy,
        user_id,
        AssessmentType::FinalAssessment,
        None,
        &ids,
        question_set,
    )
    .await?;
    tracing::debug!(user_id, attempt_id, question_set, "final assessment issued");

    Ok(IssuedAssessment {
        attempt_id,
        assessment_type: AssessmentType::FinalAssessment,
        module_id: None,
        question_set,
        passing_score: rules.final_assessment_passing_score,
        attempt_number,
        attempts_remaining: remaining as i64,
        questions: questions.iter().map(PublicQuestion::from).collect(),
    })
}

pub async fn submit_final_assessment(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    sheet: AnswerSheet,
) -> Result<FinalAssessmentOutcome, AppError> {
    let (completed, passed_before) = final_gate(proxy, user_id).await?;
    rules::final_assessment_gate(completed, rules.total_modules, passed_before)?;

    let times = assessment_ops::final_attempt_times(proxy, user_id).await?;
    rules::final_assessment_window(&times, Utc::now(), rules).into_result()?;

    let attempt =
        assessment_ops::latest_open_attempt(proxy, user_id, AssessmentType::FinalAssessment, None)
            .await?
            .ok_or_else(|| AppError::bad_request("Start the final assessment before submitting"))?;

    let questions =
        content_ops::questions_by_ids(proxy, QuestionBank::FinalAssessment, &attempt.question_ids)
            .await?;
    let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    validate_answers(&ids, &sheet.answers).into_result()?;

    let graded = grade(&questions, &sheet.answers);
    let passed = graded.percentage >= rules.final_assessment_passing_score;

    let result_id = assessment_ops::insert_result(
        proxy,
        &NewAssessmentResult {
            user_id,
            assessment_type: AssessmentType::FinalAssessment,
            module_id: None,
            correct_answers: graded.correct,
            total_questions: graded.total,
            time_taken: sheet.time_taken.filter(|t| *t >= 0),
            passed,
            answers_data: serde_json::json!({
                "questionSet": attempt.question_set,
                "percentage": graded.percentage,
                "details": graded.details,
            }),
        },
    )
    .await?;
    assessment_ops::consume_attempts(proxy, user_id, AssessmentType::FinalAssessment, None).await?;
    user_service::refresh_counters(proxy, user_id).await?;

    tracing::info!(
        user_id,
        percentage = graded.percentage,
        passed,
        "final assessment submitted"
    );

    let times = assessment_ops::final_attempt_times(proxy, user_id).await?;
    Ok(FinalAssessmentOutcome {
        result_id,
        correct: graded.correct,
        total: graded.total,
        percentage: graded.percentage,
        passed,
        passing_score: rules.final_assessment_passing_score,
        window: rules::final_assessment_window(&times, Utc::now(), rules),
        review: last_review_items(&graded.details),
    })
}

pub async fn history(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: Option<AssessmentType>,
) -> Result<Vec<HistoryItem>, AppError> {
    let names: HashMap<i64, String> = content_ops::list_modules(proxy)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();
    let results = assessment_ops::results_for_user(proxy, user_id, assessment_type, None).await?;
    Ok(results
        .into_iter()
        .map(|result| HistoryItem {
            percentage: result.percentage(),
            module_name: result.module_id.and_then(|id| names.get(&id).cloned()),
            result,
        })
        .collect())
}

pub async fn best_score(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
) -> Result<Option<i64>, AppError> {
    Ok(assessment_ops::best_percentage(proxy, user_id, assessment_type).await?)
}

pub async fn statistics(
    proxy: &DatabaseProxy,
    assessment_type: AssessmentType,
) -> Result<AssessmentTypeStatistics, AppError> {
    let stats = assessment_ops::stats(proxy, Some(assessment_type), None, None).await?;
    Ok(AssessmentTypeStatistics {
        assessment_type,
        total_attempts: stats.total_attempts,
        passed_attempts: stats.passed_attempts,
        average_percentage: user_service::round1(stats.average_percentage.unwrap_or(0.0)),
        pass_rate: user_service::round1(stats.pass_rate()),
        best_percentage: stats.best_percentage.unwrap_or(0),
        participants: stats.participants,
    })
}

pub async fn progress_comparison(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Vec<ScoreComparison>, AppError> {
    let mut comparison = Vec::with_capacity(AssessmentType::ALL.len());
    for kind in AssessmentType::ALL {
        let results = assessment_ops::results_for_user(proxy, user_id, Some(kind), None).await?;
        comparison.push(ScoreComparison {
            assessment_type: kind,
            attempts: results.len() as i64,
            best_percentage: results.iter().map(|r| r.percentage()).max(),
            latest_percentage: results.first().map(|r| r.percentage()),
        });
    }
    Ok(comparison)
}

pub async fn final_assessment_status(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<FinalAssessmentStatus, AppError> {
    let (completed, passed) = final_gate(proxy, user_id).await?;
    let times = assessment_ops::final_attempt_times(proxy, user_id).await?;
    let window = rules::final_assessment_window(&times, Utc::now(), rules);

    let reason = match rules::final_assessment_gate(completed, rules.total_modules, passed) {
        Err(violation) => Some(violation.to_string()),
        Ok(()) => match window {
            AttemptWindow::CoolingDown {
                remaining_hours, ..
            } => Some(RuleViolation::CoolingDown { remaining_hours }.to_string()),
            AttemptWindow::Allowed { .. } => None,
        },
    };

    Ok(FinalAssessmentStatus {
        eligible: reason.is_none(),
        reason,
        passed,
        best_percentage: best_score(proxy, user_id, AssessmentType::FinalAssessment).await?,
        modules_completed: completed,
        total_modules: rules.total_modules,
        total_attempts: times.len() as i64,
        window,
        passing_score: rules.final_assessment_passing_score,
        question_count: rules.final_assessment_question_count,
        max_attempts_per_window: rules.final_assessment_max_attempts,
        cooldown_hours: rules.assessment_cooldown_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct: &str) -> QuestionRecord {
        QuestionRecord {
            id,
            module_id: Some(1),
            question_text: format!("Question {id}"),
            option_a: "Alpha".to_string(),
            option_b: "Bravo".to_string(),
            option_c: "Charlie".to_string(),
            option_d: "Delta".to_string(),
            correct_answer: correct.to_string(),
            explanation: "Because".to_string(),
            question_set: 1,
        }
    }

    fn answers(pairs: &[(i64, &str)]) -> HashMap<i64, String> {
        pairs.iter().map(|(id, a)| (*id, a.to_string())).collect()
    }

    #[test]
    fn grading_is_case_insensitive_and_truncates() {
        let questions = vec![question(1, "a"), question(2, "b"), question(3, "c")];
        let graded = grade(&questions, &answers(&[(1, "A"), (2, " b "), (3, "d")]));
        assert_eq!(graded.correct, 2);
        assert_eq!(graded.total, 3);
        assert_eq!(graded.percentage, 66);
        assert!(graded.details[0].is_correct);
        assert_eq!(graded.details[2].selected_text.as_deref(), Some("Delta"));
        assert_eq!(graded.details[2].correct_text.as_deref(), Some("Charlie"));
    }

    #[test]
    fn four_of_five_passes_the_knowledge_check() {
        let questions: Vec<_> = (1..=5).map(|id| question(id, "a")).collect();
        let graded = grade(
            &questions,
            &answers(&[(1, "a"), (2, "a"), (3, "a"), (4, "a"), (5, "b")]),
        );
        assert_eq!(graded.percentage, 80);
        assert!(graded.percentage >= ProgramRules::default().knowledge_check_passing_score);
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let questions = vec![question(1, "a"), question(2, "b")];
        let graded = grade(&questions, &answers(&[(1, "a")]));
        assert_eq!(graded.correct, 1);
        assert_eq!(graded.details[1].selected, None);
    }

    #[test]
    fn validation_reports_missing_and_invalid() {
        let problems = validate_answers(&[1, 2, 3], &answers(&[(1, "e"), (2, "C")]));
        assert_eq!(problems.invalid, vec![1]);
        assert_eq!(problems.missing, vec![3]);
        assert!(problems.into_result().is_err());

        assert!(validate_answers(&[1], &answers(&[(1, "d")])).is_empty());
    }

    #[test]
    fn review_keeps_the_last_five() {
        let questions: Vec<_> = (1..=7).map(|id| question(id, "a")).collect();
        let graded = grade(&questions, &HashMap::new());
        let review = last_review_items(&graded.details);
        let ids: Vec<i64> = review.iter().map(|d| d.question_id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn sampling_never_repeats_or_overflows() {
        let pool: Vec<_> = (1..=3).map(|id| question(id, "a")).collect();
        let sample = sample_questions(&pool, 5);
        assert_eq!(sample.len(), 3);
        let mut ids: Vec<i64> = sample.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn answer_sheet_accepts_numeric_string_keys() {
        let sheet: AnswerSheet = serde_json::from_value(serde_json::json!({
            "answers": { "12": "a", "13": "B" },
            "timeTaken": 95
        }))
        .unwrap();
        assert_eq!(sheet.answers.get(&12).map(String::as_str), Some("a"));
        assert_eq!(sheet.time_taken, Some(95));
    }

    #[test]
    fn answer_sheet_reads_flat_form_fields() {
        let sheet: AnswerSheet = serde_json::from_value(serde_json::json!({
            "question_7": "c",
            "answers[8]": "d",
            "timeTaken": "42",
            "moduleId": "3"
        }))
        .unwrap();
        assert_eq!(sheet.answers.len(), 2);
        assert_eq!(sheet.answers.get(&7).map(String::as_str), Some("c"));
        assert_eq!(sheet.answers.get(&8).map(String::as_str), Some("d"));
        assert_eq!(sheet.time_taken, Some(42));
    }

    #[test]
    fn answer_field_id_ignores_other_fields() {
        assert_eq!(answer_field_id("question_15"), Some(15));
        assert_eq!(answer_field_id("answers[16]"), Some(16));
        assert_eq!(answer_field_id("answers[16"), None);
        assert_eq!(answer_field_id("question_x"), None);
        assert_eq!(answer_field_id("moduleId"), None);
    }

    #[test]
    fn public_question_hides_the_key() {
        let view = serde_json::to_value(PublicQuestion::from(&question(9, "c"))).unwrap();
        let text = view.to_string();
        assert!(!text.contains("correct"));
        assert!(!text.contains("explanation"));
        assert_eq!(view["options"][2]["text"], "Charlie");
    }
}
