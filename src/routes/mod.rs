mod admin;
mod auth;
mod completion;
mod health;
mod history;
mod modules;
mod profile;
mod progress;
mod simulations;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::middleware::auth::{require_admin, require_auth};
use crate::middleware::rate_limit::auth_rate_limit;
use crate::middleware::security_headers;
use crate::response::{ok, AppError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let learner = Router::new()
        .route("/api/dashboard", get(progress::dashboard))
        .nest("/api/modules", modules::router())
        .nest("/api/final-assessment", completion::final_assessment_router())
        .nest("/api/survey", completion::survey_router())
        .route("/api/certificate", get(completion::certificate))
        .nest("/api/simulations", simulations::router())
        .nest("/api/profile", profile::router())
        .nest("/api/progress", progress::router())
        .nest("/api/history", history::router());

    let admin = Router::new().nest(
        "/api/admin",
        admin::router().layer(middleware::from_fn(require_admin)),
    );

    let protected = learner
        .merge(admin)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(root))
        .nest(
            "/api/auth",
            auth::router(state.clone()).layer(middleware::from_fn(auth_rate_limit)),
        )
        .merge(protected)
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Banner {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

async fn root() -> impl IntoResponse {
    ok(Banner {
        service: "awareness-backend",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

async fn fallback_handler() -> AppError {
    AppError::not_found("Endpoint not found")
}

/// Request body accepted as JSON or as an urlencoded form. Rejections use the
/// regular error envelope.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| Self(value))
                .map_err(|rejection| AppError::validation(rejection.body_text()))
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| Self(value))
                .map_err(|rejection| AppError::validation(rejection.body_text()))
        }
    }
}
