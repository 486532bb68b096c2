use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Router};

use crate::auth::AuthUser;
use crate::response::{ok, AppError};
use crate::seed;
use crate::services::user as user_service;
use crate::state::AppState;

use super::record_audit;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seed", post(reseed))
        .route("/cleanup-tokens", post(cleanup_tokens))
}

fn ensure_enabled(state: &AppState) -> Result<(), AppError> {
    if state.config().allow_admin_maintenance {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Maintenance endpoints are disabled (set ALLOW_ADMIN_MAINTENANCE=true)",
        ))
    }
}

async fn reseed(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    ensure_enabled(&state)?;
    let report = seed::seed_content(state.db()).await?;
    record_audit(
        &state,
        &admin,
        "seed_content",
        "system",
        None,
        Some(format!(
            "modules={} questions={} final_questions={}",
            report.modules_created, report.questions_created, report.final_questions_created
        )),
    )
    .await;
    Ok(ok(report))
}

async fn cleanup_tokens(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    ensure_enabled(&state)?;
    let cleanup = user_service::cleanup_expired_tokens(state.db()).await?;
    record_audit(
        &state,
        &admin,
        "cleanup_tokens",
        "system",
        None,
        Some(format!(
            "reset_tokens={} sessions={}",
            cleanup.reset_tokens_removed, cleanup.sessions_removed
        )),
    )
    .await;
    Ok(ok(cleanup))
}
