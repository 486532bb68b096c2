use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};

use crate::auth::AuthUser;
use crate::response::{created, ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::assessment::{self as assessment_service, AnswerSheet};
use crate::services::module as module_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(learning_path))
        .route("/:id", get(view_module))
        .route("/:id/eligibility", get(eligibility))
        .route(
            "/:id/assessment",
            get(start_knowledge_check).post(submit_knowledge_check),
        )
}

async fn learning_path(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        module_service::learning_path(state.db(), state.rules(), user.id).await?,
    ))
}

async fn view_module(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        module_service::view_module(state.db(), state.rules(), user.id, module_id).await?,
    ))
}

async fn eligibility(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        module_service::check_eligibility(state.db(), state.rules(), user.id, module_id).await?,
    ))
}

async fn start_knowledge_check(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let issued =
        assessment_service::start_knowledge_check(state.db(), state.rules(), user.id, module_id)
            .await?;
    Ok(ok(issued))
}

async fn submit_knowledge_check(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(module_id): Path<i64>,
    JsonOrForm(sheet): JsonOrForm<AnswerSheet>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = assessment_service::submit_knowledge_check(
        state.db(),
        state.rules(),
        user.id,
        module_id,
        sheet,
    )
    .await?;
    Ok(created(outcome))
}
