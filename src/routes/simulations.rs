use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::response::{created, ok, AppError};
use crate::routes::JsonOrForm;
use crate::services::simulation as simulation_service;
use crate::simulations::SimulationType;
use crate::state::AppState;
use crate::validators::required;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_types))
        .route("/:kind", get(scenario).post(submit))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ScenarioQuery {
    #[serde(alias = "scenario_id", alias = "scenarioId")]
    scenario: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DecisionRequest {
    #[serde(alias = "scenario_id")]
    scenario_id: Option<u32>,
    #[serde(alias = "decision", alias = "selected_option", alias = "selectedOption")]
    choice: Option<String>,
    #[serde(alias = "time_taken")]
    time_taken: Option<i64>,
    #[serde(alias = "module_id")]
    module_id: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulationTypeItem {
    simulation_type: SimulationType,
    label: &'static str,
}

async fn list_types() -> impl IntoResponse {
    ok(SimulationType::ALL
        .iter()
        .map(|kind| SimulationTypeItem {
            simulation_type: *kind,
            label: kind.label(),
        })
        .collect::<Vec<_>>())
}

async fn scenario(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(kind): Path<String>,
    Query(query): Query<ScenarioQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kind = simulation_service::parse_kind(&kind)?;
    let view = simulation_service::scenario_for_user(
        state.db(),
        state.rules(),
        user.id,
        kind,
        query.scenario,
    )
    .await?;
    Ok(ok(view))
}

async fn submit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(kind): Path<String>,
    JsonOrForm(body): JsonOrForm<DecisionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let kind = simulation_service::parse_kind(&kind)?;
    let scenario_id = body
        .scenario_id
        .ok_or_else(|| AppError::validation("scenarioId is required"))?;
    let choice = required(body.choice.as_deref(), "choice")?;

    let outcome = simulation_service::submit(
        state.db(),
        state.rules(),
        user.id,
        kind,
        scenario_id,
        choice,
        body.time_taken,
        body.module_id,
    )
    .await?;
    Ok(created(outcome))
}
