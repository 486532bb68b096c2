use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::db::operations::assessment::AssessmentType;
use crate::db::operations::simulation::SimulationResultRecord;
use crate::response::{ok, AppError};
use crate::services::assessment::{self as assessment_service, HistoryItem, ScoreComparison};
use crate::services::simulation as simulation_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assessments", get(assessments))
        .route("/simulations", get(simulations))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypeFilter {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentHistory {
    results: Vec<HistoryItem>,
    comparison: Vec<ScoreComparison>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationHistory {
    results: Vec<SimulationResultRecord>,
    total: usize,
    correct: usize,
}

async fn assessments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(filter): Query<TypeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let kind = match filter.kind.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            AssessmentType::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown assessment type: {raw}")))?,
        ),
    };
    Ok(ok(AssessmentHistory {
        results: assessment_service::history(state.db(), user.id, kind).await?,
        comparison: assessment_service::progress_comparison(state.db(), user.id).await?,
    }))
}

async fn simulations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(filter): Query<TypeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let kind = match filter.kind.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(simulation_service::parse_kind(raw)?),
    };
    let results = simulation_service::history(state.db(), user.id, kind).await?;
    Ok(ok(SimulationHistory {
        total: results.len(),
        correct: results.iter().filter(|r| r.correct).count(),
        results,
    }))
}
