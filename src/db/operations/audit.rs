use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<String>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn record(
    proxy: &DatabaseProxy,
    user_id: Option<i64>,
    action: &str,
    target_type: &str,
    target_id: Option<String>,
    details: Option<String>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "audit_logs" ("user_id", "action", "target_type", "target_id", "details", "created_at")
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(action)
    .bind(target_type)
    .bind(target_id)
    .bind(details)
    .bind(Utc::now())
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn recent(proxy: &DatabaseProxy, limit: i64) -> Result<Vec<AuditRecord>, sqlx::Error> {
    sqlx::query_as::<_, AuditRecord>(
        r#"
        SELECT "id", "user_id", "action", "target_type", "target_id", "details", "created_at"
        FROM "audit_logs"
        ORDER BY "id" DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(proxy.pool())
    .await
}
