use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::db::operations::user::UserRecord;
use crate::response::{ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::progress::{self as progress_service, Achievement};
use crate::services::user::{self as user_service, ProfilePatch, UserStatistics};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile).put(update_profile))
        .route("/password", put(change_password))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    user: UserRecord,
    statistics: UserStatistics,
    achievements: Vec<Achievement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ChangePasswordRequest {
    #[serde(alias = "current_password")]
    current_password: Option<String>,
    #[serde(alias = "new_password")]
    new_password: Option<String>,
    #[serde(alias = "confirm_password")]
    confirm_password: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let record = user_service::load_user(state.db(), user.id).await?;
    let statistics = user_service::user_statistics(state.db(), state.rules(), user.id).await?;
    let achievements = progress_service::achievements(state.db(), user.id).await?;
    Ok(ok(ProfileResponse {
        user: record,
        statistics,
        achievements,
    }))
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(patch): JsonOrForm<ProfilePatch>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(
        user_service::update_profile(state.db(), user.id, patch).await?,
    ))
}

async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonOrForm(body): JsonOrForm<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let current = body.current_password.unwrap_or_default();
    let new_password = body.new_password.unwrap_or_default();
    if current.is_empty() || new_password.is_empty() {
        return Err(AppError::validation(
            "currentPassword and newPassword are required",
        ));
    }
    if let Some(confirm) = body.confirm_password.as_deref() {
        if confirm != new_password {
            return Err(AppError::validation("Passwords do not match"));
        }
    }

    user_service::change_password(
        state.db(),
        state.config().auth.bcrypt_cost,
        user.id,
        &current,
        &new_password,
    )
    .await?;
    Ok(ok(MessageResponse {
        message: "Password updated, please log in again",
    }))
}
