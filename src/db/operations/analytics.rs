use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserCounts {
    pub total: i64,
    pub admins: i64,
    pub learners: i64,
}

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCounts {
    pub total_records: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub average_score: Option<f64>,
    pub total_time_spent: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSnapshot {
    pub user_id: i64,
    pub modules_completed: i64,
    pub total_score: i64,
    pub simulations_completed: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub day: String,
    pub count: i64,
}

/// Event streams that can be bucketed per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailySeries {
    Registrations,
    ModuleCompletions,
    Assessments,
    Simulations,
}

impl DailySeries {
    fn sql(self) -> &'static str {
        match self {
            DailySeries::Registrations => {
                r#"SELECT substr("created_at", 1, 10) AS "day", COUNT(*) AS "count"
                   FROM "users" WHERE "created_at" >= ?
                   GROUP BY "day" ORDER BY "day""#
            }
            DailySeries::ModuleCompletions => {
                r#"SELECT substr("completed_at", 1, 10) AS "day", COUNT(*) AS "count"
                   FROM "user_progress" WHERE "completed_at" IS NOT NULL AND "completed_at" >= ?
                   GROUP BY "day" ORDER BY "day""#
            }
            DailySeries::Assessments => {
                r#"SELECT substr("created_at", 1, 10) AS "day", COUNT(*) AS "count"
                   FROM "assessment_results" WHERE "created_at" >= ?
                   GROUP BY "day" ORDER BY "day""#
            }
            DailySeries::Simulations => {
                r#"SELECT substr("created_at", 1, 10) AS "day", COUNT(*) AS "count"
                   FROM "simulation_results" WHERE "created_at" >= ?
                   GROUP BY "day" ORDER BY "day""#
            }
        }
    }
}

pub async fn user_counts(proxy: &DatabaseProxy) -> Result<UserCounts, sqlx::Error> {
    sqlx::query_as::<_, UserCounts>(
        r#"
        SELECT
            COUNT(*) AS "total",
            COALESCE(SUM(CASE WHEN "is_admin" = 1 THEN 1 ELSE 0 END), 0) AS "admins",
            COALESCE(SUM(CASE WHEN "is_admin" = 0 THEN 1 ELSE 0 END), 0) AS "learners"
        FROM "users"
        "#,
    )
    .fetch_one(proxy.pool())
    .await
}

pub async fn count_active_users(
    proxy: &DatabaseProxy,
    since: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "users" WHERE "updated_at" >= ?"#)
        .bind(since)
        .fetch_one(proxy.pool())
        .await
}

pub async fn count_simulation_modules(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "modules" WHERE "has_simulation" = 1"#)
        .fetch_one(proxy.pool())
        .await
}

pub async fn progress_counts(proxy: &DatabaseProxy) -> Result<ProgressCounts, sqlx::Error> {
    sqlx::query_as::<_, ProgressCounts>(
        r#"
        SELECT
            COUNT(*) AS "total_records",
            COALESCE(SUM(CASE WHEN "status" = 'completed' THEN 1 ELSE 0 END), 0) AS "completed",
            COALESCE(SUM(CASE WHEN "status" = 'in_progress' THEN 1 ELSE 0 END), 0) AS "in_progress",
            AVG("score") AS "average_score",
            COALESCE(SUM("time_spent"), 0) AS "total_time_spent"
        FROM "user_progress"
        "#,
    )
    .fetch_one(proxy.pool())
    .await
}

pub async fn learner_snapshots(proxy: &DatabaseProxy) -> Result<Vec<LearnerSnapshot>, sqlx::Error> {
    sqlx::query_as::<_, LearnerSnapshot>(
        r#"
        SELECT "id" AS "user_id", "modules_completed", "total_score", "simulations_completed"
        FROM "users"
        WHERE "is_admin" = 0
        ORDER BY "id"
        "#,
    )
    .fetch_all(proxy.pool())
    .await
}

pub async fn daily_counts(
    proxy: &DatabaseProxy,
    series: DailySeries,
    since: DateTime<Utc>,
) -> Result<Vec<DailyCount>, sqlx::Error> {
    sqlx::query_as::<_, DailyCount>(series.sql())
        .bind(since)
        .fetch_all(proxy.pool())
        .await
}
