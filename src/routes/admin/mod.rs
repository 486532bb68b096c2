use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::config::ProgramRules;
use crate::db::operations::audit as audit_ops;
use crate::response::{ok, AppError};
use crate::services::analytics::{self as analytics_service, SystemOverview};
use crate::services::user::{self as user_service, PerformerSummary};
use crate::state::AppState;

mod maintenance;
mod modules;
mod users;

const TOP_PERFORMERS: i64 = 10;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(overview))
        .route("/analytics", get(analytics))
        .route("/settings", get(settings))
        .route("/audit-logs", get(audit_logs))
        .nest("/users", users::router())
        .nest("/modules", modules::router())
        .nest("/maintenance", maintenance::router())
}

/// Best-effort audit trail; a failed insert is logged and does not fail the request.
pub(super) async fn record_audit(
    state: &AppState,
    actor: &AuthUser,
    action: &str,
    target_type: &str,
    target_id: Option<String>,
    details: Option<String>,
) {
    if let Err(err) =
        audit_ops::record(state.db(), Some(actor.id), action, target_type, target_id, details).await
    {
        tracing::warn!(error = %err, action, "failed to write audit log");
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminOverview {
    overview: SystemOverview,
    top_performers: Vec<PerformerSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsResponse {
    rules: ProgramRules,
    allow_admin_maintenance: bool,
    expose_reset_tokens: bool,
    cookie_secure: bool,
    bootstrap_admin: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuditQuery {
    limit: Option<i64>,
}

async fn overview(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(AdminOverview {
        overview: analytics_service::system_overview(state.db()).await?,
        top_performers: user_service::top_performers(state.db(), state.rules(), TOP_PERFORMERS)
            .await?,
    }))
}

async fn analytics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(analytics_service::report(state.db(), state.rules()).await?))
}

async fn settings(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    ok(SettingsResponse {
        rules: config.rules.clone(),
        allow_admin_maintenance: config.allow_admin_maintenance,
        expose_reset_tokens: config.expose_reset_tokens,
        cookie_secure: config.auth.cookie_secure,
        bootstrap_admin: config.admin.username.clone(),
    })
}

async fn audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    Ok(ok(audit_ops::recent(state.db(), limit).await?))
}
