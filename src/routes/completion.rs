use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};

use crate::auth::AuthUser;
use crate::response::{created, ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::assessment::{self as assessment_service, AnswerSheet};
use crate::services::completion::{self as completion_service, SurveySubmission};
use crate::state::AppState;

pub fn final_assessment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(final_status).post(submit_final))
        .route("/questions", get(start_final))
}

pub fn survey_router() -> Router<AppState> {
    Router::new().route("/", get(survey_status).post(submit_survey))
}

async fn final_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        assessment_service::final_assessment_status(state.db(), state.rules(), user.id).await?,
    ))
}

async fn start_final(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        assessment_service::start_final_assessment(state.db(), state.rules(), user.id).await?,
    ))
}

async fn submit_final(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(sheet): JsonOrForm<AnswerSheet>,
) -> Result<impl IntoResponse, AppError> {
    let outcome =
        assessment_service::submit_final_assessment(state.db(), state.rules(), user.id, sheet)
            .await?;
    Ok(created(outcome))
}

async fn survey_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(completion_service::survey_status(state.db(), user.id).await?))
}

async fn submit_survey(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(submission): JsonOrForm<SurveySubmission>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(
        completion_service::submit_survey(state.db(), user.id, submission).await?,
    ))
}

pub async fn certificate(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(completion_service::certificate(state.db(), user.id).await?))
}
