use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite};

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    Baseline,
    KnowledgeCheck,
    FinalAssessment,
    FollowUp,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 4] = [
        AssessmentType::Baseline,
        AssessmentType::KnowledgeCheck,
        AssessmentType::FinalAssessment,
        AssessmentType::FollowUp,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "baseline" => Some(Self::Baseline),
            "knowledge_check" => Some(Self::KnowledgeCheck),
            "final_assessment" => Some(Self::FinalAssessment),
            "follow_up" => Some(Self::FollowUp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::KnowledgeCheck => "knowledge_check",
            Self::FinalAssessment => "final_assessment",
            Self::FollowUp => "follow_up",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResultRecord {
    pub id: i64,
    pub user_id: i64,
    pub assessment_type: String,
    pub module_id: Option<i64>,
    pub score: i64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub time_taken: Option<i64>,
    pub passed: bool,
    pub answers_data: Option<Json<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
}

impl AssessmentResultRecord {
    pub fn percentage(&self) -> i64 {
        if self.total_questions <= 0 {
            0
        } else {
            self.correct_answers * 100 / self.total_questions
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAssessmentResult {
    pub user_id: i64,
    pub assessment_type: AssessmentType,
    pub module_id: Option<i64>,
    pub correct_answers: i64,
    pub total_questions: i64,
    pub time_taken: Option<i64>,
    pub passed: bool,
    pub answers_data: serde_json::Value,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttemptRecord {
    pub id: i64,
    pub user_id: i64,
    pub assessment_type: String,
    pub module_id: Option<i64>,
    pub question_ids: Json<Vec<i64>>,
    pub question_set: i64,
    pub consumed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStats {
    pub total_attempts: i64,
    pub passed_attempts: i64,
    pub average_percentage: Option<f64>,
    pub best_percentage: Option<i64>,
    pub participants: i64,
}

impl AssessmentStats {
    pub fn pass_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.passed_attempts as f64 / self.total_attempts as f64 * 100.0
        }
    }
}

const RESULT_COLUMNS: &str = r#"
    "id", "user_id", "assessment_type", "module_id", "score", "total_questions",
    "correct_answers", "time_taken", "passed", "answers_data", "created_at"
"#;

/// Integer percentage as stored rows compute it in SQL.
const PERCENT_EXPR: &str =
    r#"CASE WHEN "total_questions" > 0 THEN ("correct_answers" * 100) / "total_questions" ELSE 0 END"#;

pub async fn insert_result(
    proxy: &DatabaseProxy,
    result: &NewAssessmentResult,
) -> Result<i64, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO "assessment_results" (
            "user_id", "assessment_type", "module_id", "score", "total_questions",
            "correct_answers", "time_taken", "passed", "answers_data", "created_at"
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(result.user_id)
    .bind(result.assessment_type.as_str())
    .bind(result.module_id)
    .bind(result.correct_answers)
    .bind(result.total_questions)
    .bind(result.correct_answers)
    .bind(result.time_taken)
    .bind(result.passed)
    .bind(Json(&result.answers_data))
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(inserted.last_insert_rowid())
}

pub async fn find_result(
    proxy: &DatabaseProxy,
    result_id: i64,
) -> Result<Option<AssessmentResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentResultRecord>(&format!(
        r#"SELECT {RESULT_COLUMNS} FROM "assessment_results" WHERE "id" = ?"#
    ))
    .bind(result_id)
    .fetch_optional(proxy.pool())
    .await
}

/// Newest first, optionally narrowed by type and module.
pub async fn results_for_user(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: Option<AssessmentType>,
    module_id: Option<i64>,
) -> Result<Vec<AssessmentResultRecord>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        r#"SELECT {RESULT_COLUMNS} FROM "assessment_results" WHERE "user_id" = "#
    ));
    builder.push_bind(user_id);
    if let Some(kind) = assessment_type {
        builder
            .push(r#" AND "assessment_type" = "#)
            .push_bind(kind.as_str());
    }
    if let Some(module_id) = module_id {
        builder.push(r#" AND "module_id" = "#).push_bind(module_id);
    }
    builder.push(r#" ORDER BY "created_at" DESC, "id" DESC"#);
    builder
        .build_query_as::<AssessmentResultRecord>()
        .fetch_all(proxy.pool())
        .await
}

pub async fn latest_result(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
    module_id: Option<i64>,
) -> Result<Option<AssessmentResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentResultRecord>(&format!(
        r#"
        SELECT {RESULT_COLUMNS} FROM "assessment_results"
        WHERE "user_id" = ? AND "assessment_type" = ? AND "module_id" IS ?
        ORDER BY "created_at" DESC, "id" DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .bind(assessment_type.as_str())
    .bind(module_id)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn count_results(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
    module_id: Option<i64>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM "assessment_results"
        WHERE "user_id" = ? AND "assessment_type" = ? AND "module_id" IS ?
        "#,
    )
    .bind(user_id)
    .bind(assessment_type.as_str())
    .bind(module_id)
    .fetch_one(proxy.pool())
    .await
}

/// Creation times of every final-assessment attempt, oldest first.
pub async fn final_attempt_times(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Vec<DateTime<Utc>>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT "created_at" FROM "assessment_results"
        WHERE "user_id" = ? AND "assessment_type" = 'final_assessment'
        ORDER BY "created_at" ASC, "id" ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(proxy.pool())
    .await
}

pub async fn first_passed(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
) -> Result<Option<AssessmentResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentResultRecord>(&format!(
        r#"
        SELECT {RESULT_COLUMNS} FROM "assessment_results"
        WHERE "user_id" = ? AND "assessment_type" = ? AND "passed" = 1
        ORDER BY "created_at" ASC, "id" ASC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .bind(assessment_type.as_str())
    .fetch_optional(proxy.pool())
    .await
}

pub async fn best_percentage(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar(&format!(
        r#"
        SELECT MAX({PERCENT_EXPR}) FROM "assessment_results"
        WHERE "user_id" = ? AND "assessment_type" = ?
        "#
    ))
    .bind(user_id)
    .bind(assessment_type.as_str())
    .fetch_one(proxy.pool())
    .await
}

pub async fn sum_scores(proxy: &DatabaseProxy, user_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COALESCE(SUM("score"), 0) FROM "assessment_results" WHERE "user_id" = ?"#)
        .bind(user_id)
        .fetch_one(proxy.pool())
        .await
}

pub async fn has_perfect_score(proxy: &DatabaseProxy, user_id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM "assessment_results"
        WHERE "user_id" = ? AND "total_questions" > 0 AND "correct_answers" = "total_questions"
        "#,
    )
    .bind(user_id)
    .fetch_one(proxy.pool())
    .await?;
    Ok(count > 0)
}

/// Aggregates for one type, optionally restricted to a user or a module.
pub async fn stats(
    proxy: &DatabaseProxy,
    assessment_type: Option<AssessmentType>,
    user_id: Option<i64>,
    module_id: Option<i64>,
) -> Result<AssessmentStats, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        r#"
        SELECT
            COUNT(*) AS "total_attempts",
            COALESCE(SUM(CASE WHEN "passed" = 1 THEN 1 ELSE 0 END), 0) AS "passed_attempts",
            AVG({PERCENT_EXPR}) AS "average_percentage",
            MAX({PERCENT_EXPR}) AS "best_percentage",
            COUNT(DISTINCT "user_id") AS "participants"
        FROM "assessment_results"
        WHERE 1 = 1
        "#
    ));
    if let Some(kind) = assessment_type {
        builder
            .push(r#" AND "assessment_type" = "#)
            .push_bind(kind.as_str());
    }
    if let Some(user_id) = user_id {
        builder.push(r#" AND "user_id" = "#).push_bind(user_id);
    }
    if let Some(module_id) = module_id {
        builder.push(r#" AND "module_id" = "#).push_bind(module_id);
    }
    builder
        .build_query_as::<AssessmentStats>()
        .fetch_one(proxy.pool())
        .await
}

/// Per-result integer percentages, used for distribution buckets.
pub async fn percentages(
    proxy: &DatabaseProxy,
    assessment_type: AssessmentType,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar(&format!(
        r#"SELECT {PERCENT_EXPR} FROM "assessment_results" WHERE "assessment_type" = ?"#
    ))
    .bind(assessment_type.as_str())
    .fetch_all(proxy.pool())
    .await
}

pub async fn recent_for_user(
    proxy: &DatabaseProxy,
    user_id: i64,
    since: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<AssessmentResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentResultRecord>(&format!(
        r#"
        SELECT {RESULT_COLUMNS} FROM "assessment_results"
        WHERE "user_id" = ? AND "created_at" >= ?
        ORDER BY "created_at" DESC, "id" DESC
        LIMIT ?
        "#
    ))
    .bind(user_id)
    .bind(since)
    .bind(limit)
    .fetch_all(proxy.pool())
    .await
}

pub async fn insert_attempt(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
    module_id: Option<i64>,
    question_ids: &[i64],
    question_set: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "assessment_attempts" (
            "user_id", "assessment_type", "module_id", "question_ids", "question_set", "consumed", "created_at"
        ) VALUES (?, ?, ?, ?, ?, 0, ?)
        "#,
    )
    .bind(user_id)
    .bind(assessment_type.as_str())
    .bind(module_id)
    .bind(Json(question_ids))
    .bind(question_set)
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn latest_open_attempt(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
    module_id: Option<i64>,
) -> Result<Option<AttemptRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttemptRecord>(
        r#"
        SELECT "id", "user_id", "assessment_type", "module_id", "question_ids",
               "question_set", "consumed", "created_at"
        FROM "assessment_attempts"
        WHERE "user_id" = ? AND "assessment_type" = ? AND "module_id" IS ? AND "consumed" = 0
        ORDER BY "id" DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(assessment_type.as_str())
    .bind(module_id)
    .fetch_optional(proxy.pool())
    .await
}

/// Closes every open attempt for the user/type/module triple.
pub async fn consume_attempts(
    proxy: &DatabaseProxy,
    user_id: i64,
    assessment_type: AssessmentType,
    module_id: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE "assessment_attempts" SET "consumed" = 1
        WHERE "user_id" = ? AND "assessment_type" = ? AND "module_id" IS ? AND "consumed" = 0
        "#,
    )
    .bind(user_id)
    .bind(assessment_type.as_str())
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(result.rows_affected())
}
