use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Router};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::response::{ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::progress::{self as progress_service, ProgressPayload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(overall).post(update))
        .route("/modules/:id", get(module_details))
        .route("/modules/:id/time", post(add_time))
        .route("/activity", get(activity))
        .route("/achievements", get(achievements))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TimeRequest {
    minutes: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActivityQuery {
    days: Option<i64>,
    limit: Option<usize>,
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        progress_service::dashboard(state.db(), state.rules(), user.id).await?,
    ))
}

async fn overall(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        progress_service::overall_progress(state.db(), state.rules(), user.id).await?,
    ))
}

async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(payload): JsonOrForm<ProgressPayload>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        progress_service::update_progress(state.db(), state.rules(), user.id, payload).await?,
    ))
}

async fn module_details(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        progress_service::module_progress_details(state.db(), user.id, module_id).await?,
    ))
}

async fn add_time(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
    JsonOrForm(body): JsonOrForm<TimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        progress_service::add_time_spent(state.db(), user.id, module_id, body.minutes).await?,
    ))
}

async fn activity(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ActivityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let days = query.days.unwrap_or(progress_service::DEFAULT_ACTIVITY_DAYS);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    Ok(ok(
        progress_service::recent_activity(state.db(), user.id, days, limit).await?,
    ))
}

async fn achievements(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(progress_service::achievements(state.db(), user.id).await?))
}
