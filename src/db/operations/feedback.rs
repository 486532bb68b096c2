use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub id: i64,
    pub user_id: i64,
    pub module_id: Option<i64>,
    pub rating: i64,
    pub feedback_text: Option<String>,
    pub difficulty_level: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSurvey {
    pub user_id: i64,
    pub module_id: Option<i64>,
    pub rating: i64,
    pub feedback_text: Option<String>,
    pub difficulty_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total_responses: i64,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyCount {
    pub difficulty_level: String,
    pub count: i64,
}

pub async fn insert_survey(proxy: &DatabaseProxy, survey: &NewSurvey) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "feedback_surveys" (
            "user_id", "module_id", "rating", "feedback_text", "difficulty_level", "created_at"
        ) VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(survey.user_id)
    .bind(survey.module_id)
    .bind(survey.rating)
    .bind(&survey.feedback_text)
    .bind(&survey.difficulty_level)
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_user_survey(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Option<SurveyRecord>, sqlx::Error> {
    sqlx::query_as::<_, SurveyRecord>(
        r#"
        SELECT "id", "user_id", "module_id", "rating", "feedback_text", "difficulty_level", "created_at"
        FROM "feedback_surveys"
        WHERE "user_id" = ?
        ORDER BY "id" ASC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn stats(
    proxy: &DatabaseProxy,
    module_id: Option<i64>,
) -> Result<FeedbackStats, sqlx::Error> {
    match module_id {
        Some(module_id) => {
            sqlx::query_as::<_, FeedbackStats>(
                r#"
                SELECT COUNT(*) AS "total_responses", AVG("rating") AS "average_rating"
                FROM "feedback_surveys" WHERE "module_id" = ?
                "#,
            )
            .bind(module_id)
            .fetch_one(proxy.pool())
            .await
        }
        None => {
            sqlx::query_as::<_, FeedbackStats>(
                r#"
                SELECT COUNT(*) AS "total_responses", AVG("rating") AS "average_rating"
                FROM "feedback_surveys"
                "#,
            )
            .fetch_one(proxy.pool())
            .await
        }
    }
}

pub async fn difficulty_distribution(
    proxy: &DatabaseProxy,
) -> Result<Vec<DifficultyCount>, sqlx::Error> {
    sqlx::query_as::<_, DifficultyCount>(
        r#"
        SELECT "difficulty_level", COUNT(*) AS "count"
        FROM "feedback_surveys"
        WHERE "difficulty_level" IS NOT NULL
        GROUP BY "difficulty_level"
        ORDER BY "difficulty_level"
        "#,
    )
    .fetch_all(proxy.pool())
    .await
}

pub async fn recent_surveys(
    proxy: &DatabaseProxy,
    limit: i64,
) -> Result<Vec<SurveyRecord>, sqlx::Error> {
    sqlx::query_as::<_, SurveyRecord>(
        r#"
        SELECT "id", "user_id", "module_id", "rating", "feedback_text", "difficulty_level", "created_at"
        FROM "feedback_surveys"
        ORDER BY "created_at" DESC, "id" DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(proxy.pool())
    .await
}
