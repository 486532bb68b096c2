use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::{AuthError, AuthUser};
use crate::response::AppError;
use crate::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = crate::auth::extract_token(req.headers()) else {
        return AppError::from(AuthError::MissingToken).into_response();
    };

    match crate::auth::verify_request_token(state.db(), &state.config().auth, &token).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "rejected request token");
            AppError::from(err).into_response()
        }
    }
}

/// Runs after `require_auth`; rejects callers without the admin flag.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    match req.extensions().get::<AuthUser>() {
        Some(user) if user.is_admin => next.run(req).await,
        Some(_) => AppError::forbidden("Administrator access required").into_response(),
        None => AppError::from(AuthError::MissingToken).into_response(),
    }
}
