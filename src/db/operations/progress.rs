use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "not_started" => Some(Self::NotStarted),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: i64,
    pub user_id: i64,
    pub module_id: i64,
    pub status: String,
    pub score: Option<i64>,
    pub attempts: i64,
    pub time_spent: i64,
    pub content_viewed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProgressRecord {
    pub fn status(&self) -> ProgressStatus {
        ProgressStatus::parse(&self.status).unwrap_or(ProgressStatus::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        self.status() == ProgressStatus::Completed
    }
}

/// Fields written by an explicit progress update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    pub status: Option<ProgressStatus>,
    pub score: Option<i64>,
    pub time_spent: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgressStats {
    pub started: i64,
    pub completed: i64,
    pub average_score: Option<f64>,
    pub average_time_spent: Option<f64>,
}

const PROGRESS_COLUMNS: &str = r#"
    "id", "user_id", "module_id", "status", "score", "attempts", "time_spent",
    "content_viewed", "completed_at", "created_at", "updated_at"
"#;

pub async fn find_progress(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<Option<ProgressRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProgressRecord>(&format!(
        r#"SELECT {PROGRESS_COLUMNS} FROM "user_progress" WHERE "user_id" = ? AND "module_id" = ?"#
    ))
    .bind(user_id)
    .bind(module_id)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn progress_for_user(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Vec<ProgressRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProgressRecord>(&format!(
        r#"SELECT {PROGRESS_COLUMNS} FROM "user_progress" WHERE "user_id" = ? ORDER BY "module_id""#
    ))
    .bind(user_id)
    .fetch_all(proxy.pool())
    .await
}

/// Returns the record, creating a `not_started` one when none exists.
pub async fn ensure_progress(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<ProgressRecord, sqlx::Error> {
    let now = Utc::now();
    sqlx::query(
        r#"
        INSERT INTO "user_progress" ("user_id", "module_id", "status", "created_at", "updated_at")
        VALUES (?, ?, 'not_started', ?, ?)
        ON CONFLICT ("user_id", "module_id") DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(module_id)
    .bind(now)
    .bind(now)
    .execute(proxy.pool())
    .await?;

    find_progress(proxy, user_id, module_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

pub async fn mark_started(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "user_progress" SET "status" = 'in_progress', "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ? AND "status" = 'not_started'
        "#,
    )
    .bind(Utc::now())
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn mark_content_viewed(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "user_progress" SET "content_viewed" = 1, "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ?
        "#,
    )
    .bind(Utc::now())
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

/// Counts one knowledge-check attempt and stores its percentage.
pub async fn record_knowledge_check(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    percentage: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "user_progress"
        SET "attempts" = "attempts" + 1,
            "score" = ?,
            "status" = CASE WHEN "status" = 'not_started' THEN 'in_progress' ELSE "status" END,
            "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ?
        "#,
    )
    .bind(percentage)
    .bind(Utc::now())
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

/// Sets `completed`; keeps the first completion time if already set.
pub async fn mark_completed(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    sqlx::query(
        r#"
        UPDATE "user_progress"
        SET "status" = 'completed', "completed_at" = COALESCE("completed_at", ?), "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ?
        "#,
    )
    .bind(now)
    .bind(now)
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn apply_update(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    update: &ProgressUpdate,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    let status = update.status.map(|s| s.as_str());
    let completed_at = match update.status {
        Some(ProgressStatus::Completed) => Some(now),
        _ => None,
    };
    sqlx::query(
        r#"
        UPDATE "user_progress"
        SET "status" = COALESCE(?, "status"),
            "score" = COALESCE(?, "score"),
            "time_spent" = COALESCE(?, "time_spent"),
            "completed_at" = CASE
                WHEN ? = 'completed' THEN COALESCE("completed_at", ?)
                WHEN ? IS NOT NULL THEN NULL
                ELSE "completed_at"
            END,
            "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ?
        "#,
    )
    .bind(status)
    .bind(update.score)
    .bind(update.time_spent)
    .bind(status)
    .bind(completed_at)
    .bind(status)
    .bind(now)
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn add_time_spent(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    minutes: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "user_progress" SET "time_spent" = "time_spent" + ?, "updated_at" = ?
        WHERE "user_id" = ? AND "module_id" = ?
        "#,
    )
    .bind(minutes)
    .bind(Utc::now())
    .bind(user_id)
    .bind(module_id)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn count_completed(proxy: &DatabaseProxy, user_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM "user_progress" WHERE "user_id" = ? AND "status" = 'completed'"#,
    )
    .bind(user_id)
    .fetch_one(proxy.pool())
    .await
}

pub async fn module_stats(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<ModuleProgressStats, sqlx::Error> {
    sqlx::query_as::<_, ModuleProgressStats>(
        r#"
        SELECT
            COUNT(*) AS "started",
            COALESCE(SUM(CASE WHEN "status" = 'completed' THEN 1 ELSE 0 END), 0) AS "completed",
            AVG("score") AS "average_score",
            AVG("time_spent") AS "average_time_spent"
        FROM "user_progress"
        WHERE "module_id" = ? AND "status" != 'not_started'
        "#,
    )
    .bind(module_id)
    .fetch_one(proxy.pool())
    .await
}

pub async fn upsert_topic_progress(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    topic_id: i64,
    completed: bool,
) -> Result<(), sqlx::Error> {
    let completed_at = completed.then(Utc::now);
    sqlx::query(
        r#"
        INSERT INTO "topic_progress" ("user_id", "module_id", "topic_id", "is_completed", "completed_at")
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT ("user_id", "topic_id") DO UPDATE SET
            "is_completed" = excluded."is_completed",
            "completed_at" = excluded."completed_at"
        "#,
    )
    .bind(user_id)
    .bind(module_id)
    .bind(topic_id)
    .bind(completed)
    .bind(completed_at)
    .execute(proxy.pool())
    .await?;
    Ok(())
}

pub async fn completed_topic_ids(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT "topic_id" FROM "topic_progress"
        WHERE "user_id" = ? AND "module_id" = ? AND "is_completed" = 1
        ORDER BY "topic_id"
        "#,
    )
    .bind(user_id)
    .bind(module_id)
    .fetch_all(proxy.pool())
    .await
}
