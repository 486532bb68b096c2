use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::db::operations::user::UserRecord;
use crate::response::{created, ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::progress::{self as progress_service, ActivityItem, OverallProgress};
use crate::services::user::{self as user_service, ProfilePatch, RegistrationInput, UserStatistics};
use crate::state::AppState;

use super::record_audit;

const DETAIL_ACTIVITY_DAYS: i64 = 30;
const DETAIL_ACTIVITY_LIMIT: usize = 20;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(user_detail).put(update_user).delete(delete_user))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListUsersQuery {
    q: Option<String>,
    role: Option<String>,
    page: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CreateUserRequest {
    #[serde(flatten)]
    input: RegistrationInput,
    is_admin: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UpdateUserRequest {
    #[serde(flatten)]
    patch: ProfilePatch,
    is_admin: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDetail {
    user: UserRecord,
    statistics: UserStatistics,
    progress: OverallProgress,
    recent_activity: Vec<ActivityItem>,
}

async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = user_service::list_users(
        state.db(),
        query.q,
        query.role.as_deref(),
        query.page.unwrap_or(1),
    )
    .await?;
    Ok(ok(page))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    JsonOrForm(body): JsonOrForm<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = user_service::create_user(
        state.db(),
        state.config().auth.bcrypt_cost,
        body.input,
        body.is_admin,
    )
    .await?;
    record_audit(
        &state,
        &admin,
        "create_user",
        "user",
        Some(user.id.to_string()),
        Some(format!("username={} admin={}", user.username, user.is_admin)),
    )
    .await;
    Ok(created(user))
}

async fn user_detail(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = user_service::load_user(state.db(), user_id).await?;
    let statistics = user_service::user_statistics(state.db(), state.rules(), user_id).await?;
    let progress = progress_service::overall_progress(state.db(), state.rules(), user_id).await?;
    let recent_activity = progress_service::recent_activity(
        state.db(),
        user_id,
        DETAIL_ACTIVITY_DAYS,
        DETAIL_ACTIVITY_LIMIT,
    )
    .await?;

    Ok(ok(UserDetail {
        user,
        statistics,
        progress,
        recent_activity,
    }))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(user_id): Path<i64>,
    JsonOrForm(body): JsonOrForm<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user_id == admin.id && body.is_admin == Some(false) {
        return Err(AppError::validation("You cannot remove your own admin role"));
    }
    let user =
        user_service::admin_update_user(state.db(), user_id, body.patch, body.is_admin).await?;
    record_audit(
        &state,
        &admin,
        "update_user",
        "user",
        Some(user.id.to_string()),
        body.is_admin.map(|flag| format!("admin={flag}")),
    )
    .await;
    Ok(ok(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let removed = user_service::delete_user(
        state.db(),
        admin.id,
        user_id,
        &state.config().admin.username,
    )
    .await?;
    record_audit(
        &state,
        &admin,
        "delete_user",
        "user",
        Some(removed.id.to_string()),
        Some(format!("username={}", removed.username)),
    )
    .await;
    Ok(ok(removed))
}
