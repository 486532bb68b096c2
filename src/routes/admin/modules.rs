use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Extension, Router};

use crate::auth::AuthUser;
use crate::response::{ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::analytics as analytics_service;
use crate::services::module::{self as module_service, ModuleContentPatch};
use crate::state::AppState;

use super::record_audit;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_modules))
        .route("/:id", put(update_module))
}

async fn list_modules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(analytics_service::module_analytics(state.db()).await?))
}

async fn update_module(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(module_id): Path<i64>,
    JsonOrForm(patch): JsonOrForm<ModuleContentPatch>,
) -> Result<impl IntoResponse, AppError> {
    let module = module_service::update_module_content(state.db(), module_id, patch).await?;
    record_audit(
        &state,
        &admin,
        "update_module",
        "module",
        Some(module.id.to_string()),
        Some(module.name.clone()),
    )
    .await;
    Ok(ok(module))
}
