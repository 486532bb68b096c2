pub mod auth;
pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod simulations;
pub mod state;
pub mod validators;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::DatabaseProxy;
use crate::seed::AdminSeedError;
use crate::state::AppState;

/// Builds the full application router over an already connected database.
pub fn create_app_with(config: Arc<Config>, db_proxy: Arc<DatabaseProxy>) -> axum::Router {
    let state = AppState::new(db_proxy, config);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Seeds course content and the bootstrap administrator. Both steps are
/// idempotent and run on every start.
pub async fn bootstrap(proxy: &DatabaseProxy, config: &Config) -> Result<(), AdminSeedError> {
    let report = seed::seed_content(proxy).await?;
    if report.is_empty() {
        tracing::debug!("content already seeded");
    } else {
        tracing::info!(
            modules = report.modules_created,
            lessons = report.lessons_created,
            topics = report.topics_created,
            questions = report.questions_created,
            final_questions = report.final_questions_created,
            "seeded course content"
        );
    }
    seed::ensure_admin(proxy, &config.admin, config.auth.bcrypt_cost).await?;
    Ok(())
}
