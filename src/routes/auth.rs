use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};

use crate::auth::{self as auth_core, AuthUser, IssuedSession};
use crate::db::operations::user::UserRecord;
use crate::middleware::auth::require_auth;
use crate::response::{created, ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::user::{self as user_service, RegistrationInput};
use crate::state::AppState;
use crate::validators::required;

pub fn router(state: AppState) -> Router<AppState> {
    let session_routes = Router::new()
        .route("/me", get(me))
        .route("/logout", post(logout))
        .layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .merge(session_routes)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ForgotPasswordRequest {
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResetPasswordRequest {
    token: Option<String>,
    password: Option<String>,
    #[serde(alias = "confirm_password")]
    confirm_password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    user: UserRecord,
    token: String,
    expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForgotPasswordResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reset_token: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

fn with_cookie(mut res: Response, cookie: Option<HeaderValue>) -> Response {
    if let Some(cookie) = cookie {
        res.headers_mut().append(SET_COOKIE, cookie);
    }
    res
}

fn session_response(
    state: &AppState,
    status: StatusCode,
    user: UserRecord,
    session: IssuedSession,
) -> Response {
    let cookie = auth_core::session_cookie(
        &session.token,
        session.expires_at,
        state.config().auth.cookie_secure,
    );
    let body = SessionResponse {
        user,
        token: session.token,
        expires_at: session.expires_at,
    };
    let res = if status == StatusCode::CREATED {
        created(body).into_response()
    } else {
        ok(body).into_response()
    };
    with_cookie(res, cookie)
}

async fn register(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<RegistrationInput>,
) -> Result<Response, AppError> {
    let user =
        user_service::create_user(state.db(), state.config().auth.bcrypt_cost, input, false).await?;
    let session = auth_core::issue_session(state.db(), &state.config().auth, user.id).await?;
    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok(session_response(&state, StatusCode::CREATED, user, session))
}

async fn login(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<LoginRequest>,
) -> Result<Response, AppError> {
    let username = required(body.username.as_deref(), "username")?;
    let password = body
        .password
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::validation("password is required"))?;

    let user = user_service::authenticate(state.db(), username, password).await?;
    let session = auth_core::issue_session(state.db(), &state.config().auth, user.id).await?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(session_response(&state, StatusCode::OK, user, session))
}

async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = auth_core::extract_token(&headers) {
        auth_core::revoke_session(state.db(), &token).await?;
    }
    tracing::info!(user_id = user.id, "user logged out");
    let res = ok(MessageResponse {
        message: "Logged out",
    })
    .into_response();
    Ok(with_cookie(
        res,
        auth_core::clear_session_cookie(state.config().auth.cookie_secure),
    ))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(user_service::load_user(state.db(), user.id).await?))
}

async fn forgot_password(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = required(body.email.as_deref(), "email")?;
    let token = user_service::request_password_reset(state.db(), email).await?;

    Ok(ok(ForgotPasswordResponse {
        message: "If that email is registered, a reset link has been issued",
        reset_token: token.filter(|_| state.config().expose_reset_tokens),
    }))
}

async fn reset_password(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = required(body.token.as_deref(), "token")?;
    let password = body.password.as_deref().unwrap_or_default();
    let confirm = body.confirm_password.as_deref().unwrap_or_default();
    if password.is_empty() {
        return Err(AppError::validation("password is required"));
    }
    if password != confirm {
        return Err(AppError::validation("Passwords do not match"));
    }

    user_service::reset_password(state.db(), state.config().auth.bcrypt_cost, token, password)
        .await?;
    Ok(ok(MessageResponse {
        message: "Password has been reset, please log in",
    }))
}
