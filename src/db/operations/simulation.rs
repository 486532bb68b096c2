use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite};

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResultRecord {
    pub id: i64,
    pub user_id: i64,
    pub module_id: Option<i64>,
    pub simulation_type: String,
    pub scenario_id: i64,
    pub chosen_option: String,
    pub correct: bool,
    pub score: i64,
    pub completed: bool,
    pub time_taken: Option<i64>,
    pub decisions_made: Option<Json<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSimulationResult {
    pub user_id: i64,
    pub module_id: Option<i64>,
    pub simulation_type: String,
    pub scenario_id: i64,
    pub chosen_option: String,
    pub correct: bool,
    pub score: i64,
    pub completed: bool,
    pub time_taken: Option<i64>,
    pub decisions_made: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStats {
    pub total_attempts: i64,
    pub completed_attempts: i64,
    pub correct_attempts: i64,
    pub average_score: Option<f64>,
    pub best_score: Option<i64>,
    pub participants: i64,
}

impl SimulationStats {
    pub fn completion_rate(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            self.completed_attempts as f64 / self.total_attempts as f64 * 100.0
        }
    }
}

const RESULT_COLUMNS: &str = r#"
    "id", "user_id", "module_id", "simulation_type", "scenario_id", "chosen_option",
    "correct", "score", "completed", "time_taken", "decisions_made", "created_at"
"#;

pub async fn insert_result(
    proxy: &DatabaseProxy,
    result: &NewSimulationResult,
) -> Result<i64, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO "simulation_results" (
            "user_id", "module_id", "simulation_type", "scenario_id", "chosen_option",
            "correct", "score", "completed", "time_taken", "decisions_made", "created_at"
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(result.user_id)
    .bind(result.module_id)
    .bind(&result.simulation_type)
    .bind(result.scenario_id)
    .bind(&result.chosen_option)
    .bind(result.correct)
    .bind(result.score)
    .bind(result.completed)
    .bind(result.time_taken)
    .bind(Json(&result.decisions_made))
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(inserted.last_insert_rowid())
}

pub async fn results_for_user(
    proxy: &DatabaseProxy,
    user_id: i64,
    simulation_type: Option<&str>,
    module_id: Option<i64>,
) -> Result<Vec<SimulationResultRecord>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        r#"SELECT {RESULT_COLUMNS} FROM "simulation_results" WHERE "user_id" = "#
    ));
    builder.push_bind(user_id);
    if let Some(kind) = simulation_type {
        builder
            .push(r#" AND "simulation_type" = "#)
            .push_bind(kind.to_string());
    }
    if let Some(module_id) = module_id {
        builder.push(r#" AND "module_id" = "#).push_bind(module_id);
    }
    builder.push(r#" ORDER BY "created_at" DESC, "id" DESC"#);
    builder
        .build_query_as::<SimulationResultRecord>()
        .fetch_all(proxy.pool())
        .await
}

pub async fn has_completed_for_module(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM "simulation_results"
        WHERE "user_id" = ? AND "module_id" = ? AND "completed" = 1
        "#,
    )
    .bind(user_id)
    .bind(module_id)
    .fetch_one(proxy.pool())
    .await?;
    Ok(count > 0)
}

pub async fn count_completed(proxy: &DatabaseProxy, user_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM "simulation_results" WHERE "user_id" = ? AND "completed" = 1"#,
    )
    .bind(user_id)
    .fetch_one(proxy.pool())
    .await
}

pub async fn stats(
    proxy: &DatabaseProxy,
    simulation_type: Option<&str>,
    user_id: Option<i64>,
) -> Result<SimulationStats, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        r#"
        SELECT
            COUNT(*) AS "total_attempts",
            COALESCE(SUM(CASE WHEN "completed" = 1 THEN 1 ELSE 0 END), 0) AS "completed_attempts",
            COALESCE(SUM(CASE WHEN "correct" = 1 THEN 1 ELSE 0 END), 0) AS "correct_attempts",
            AVG("score") AS "average_score",
            MAX("score") AS "best_score",
            COUNT(DISTINCT "user_id") AS "participants"
        FROM "simulation_results"
        WHERE 1 = 1
        "#,
    );
    if let Some(kind) = simulation_type {
        builder
            .push(r#" AND "simulation_type" = "#)
            .push_bind(kind.to_string());
    }
    if let Some(user_id) = user_id {
        builder.push(r#" AND "user_id" = "#).push_bind(user_id);
    }
    builder
        .build_query_as::<SimulationStats>()
        .fetch_one(proxy.pool())
        .await
}

pub async fn recent_for_user(
    proxy: &DatabaseProxy,
    user_id: i64,
    since: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<SimulationResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, SimulationResultRecord>(&format!(
        r#"
        SELECT {RESULT_COLUMNS} FROM "simulation_results"
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
