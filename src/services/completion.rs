//! Post-program steps: the feedback survey and the completion certificate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::assessment::AssessmentType;
use crate::db::operations::feedback as feedback_ops;
use crate::db::operations::feedback::{NewSurvey, SurveyRecord};
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::module as module_service;
use crate::services::rules;
use crate::services::user as user_service;
use crate::validators;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveySubmission {
    pub rating: Option<i64>,
    #[serde(alias = "feedback_text", alias = "feedbackText")]
    pub feedback: Option<String>,
    #[serde(alias = "difficulty_level", alias = "difficultyLevel")]
    pub difficulty: Option<String>,
    #[serde(alias = "module_id")]
    pub module_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStatus {
    pub final_assessment_passed: bool,
    pub submitted: bool,
    pub can_submit: bool,
    pub survey: Option<SurveyRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub certificate_id: String,
    pub recipient_name: String,
    pub username: String,
    pub completed_at: DateTime<Utc>,
    pub final_percentage: i64,
    pub program: &'static str,
}

pub const PROGRAM_TITLE: &str = "Social Engineering Awareness Program";

/// First 16 hex chars of `sha256("{user_id}:{completed_at}")`.
pub fn certificate_id(user_id: i64, completed_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{user_id}:{}", completed_at.to_rfc3339()).as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(16);
    id
}

async fn final_passed(proxy: &DatabaseProxy, user_id: i64) -> Result<bool, AppError> {
    Ok(
        assessment_ops::first_passed(proxy, user_id, AssessmentType::FinalAssessment)
            .await?
            .is_some(),
    )
}

pub async fn survey_status(proxy: &DatabaseProxy, user_id: i64) -> Result<SurveyStatus, AppError> {
    let passed = final_passed(proxy, user_id).await?;
    let survey = feedback_ops::find_user_survey(proxy, user_id).await?;
    Ok(SurveyStatus {
        final_assessment_passed: passed,
        submitted: survey.is_some(),
        can_submit: rules::survey_gate(passed, survey.is_some()).is_ok(),
        survey,
    })
}

pub async fn submit_survey(
    proxy: &DatabaseProxy,
    user_id: i64,
    submission: SurveySubmission,
) -> Result<SurveyRecord, AppError> {
    let passed = final_passed(proxy, user_id).await?;
    let existing = feedback_ops::find_user_survey(proxy, user_id).await?;
    rules::survey_gate(passed, existing.is_some())?;

    let rating = submission
        .rating
        .ok_or(validators::ValidationError::Required("rating"))?;
    validators::validate_rating(rating)?;

    let feedback_text = match submission.feedback.as_deref() {
        Some(raw) => {
            let cleaned = validators::sanitize_input(raw);
            validators::validate_feedback(&cleaned)?;
            (!cleaned.is_empty()).then_some(cleaned)
        }
        None => None,
    };
    let difficulty_level = match submission.difficulty.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(validators::validate_difficulty(raw)?),
    };
    if let Some(module_id) = submission.module_id {
        module_service::load_module(proxy, module_id).await?;
    }

    let id = feedback_ops::insert_survey(
        proxy,
        &NewSurvey {
            user_id,
            module_id: submission.module_id,
            rating,
            feedback_text,
            difficulty_level,
        },
    )
    .await?;
    tracing::info!(user_id, survey_id = id, rating, "survey submitted");

    feedback_ops::find_user_survey(proxy, user_id)
        .await?
        .ok_or_else(|| AppError::internal("survey missing after insert"))
}

pub async fn certificate(proxy: &DatabaseProxy, user_id: i64) -> Result<Certificate, AppError> {
    let passing = assessment_ops::first_passed(proxy, user_id, AssessmentType::FinalAssessment).await?;
    let survey_exists = feedback_ops::find_user_survey(proxy, user_id).await?.is_some();
    rules::certificate_gate(passing.is_some(), survey_exists)?;
    let passing = passing.ok_or_else(|| AppError::forbidden("Final assessment not passed"))?;

    let user = user_service::load_user(proxy, user_id).await?;
    let recipient_name = if user.full_name.trim().is_empty() {
        user.username.clone()
    } else {
        user.full_name.clone()
    };

    Ok(Certificate {
        certificate_id: certificate_id(user.id, passing.created_at),
        recipient_name,
        username: user.username,
        completed_at: passing.created_at,
        final_percentage: passing.percentage(),
        program: PROGRAM_TITLE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn certificate_id_is_stable_and_short() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let first = certificate_id(7, at);
        assert_eq!(first.len(), 16);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, certificate_id(7, at));
        assert_ne!(first, certificate_id(8, at));
    }

    #[test]
    fn survey_submission_accepts_form_field_names() {
        let parsed: SurveySubmission = serde_json::from_value(serde_json::json!({
            "rating": 4,
            "feedback_text": "useful",
            "difficulty_level": "medium"
        }))
        .unwrap();
        assert_eq!(parsed.rating, Some(4));
        assert_eq!(parsed.feedback.as_deref(), Some("useful"));
        assert_eq!(parsed.difficulty.as_deref(), Some("medium"));
    }
}
