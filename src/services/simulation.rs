use serde::Serialize;

use crate::config::ProgramRules;
use crate::db::operations::content::ModuleRecord;
use crate::db::operations::simulation as simulation_ops;
use crate::db::operations::simulation::{NewSimulationResult, SimulationResultRecord};
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::module::{self as module_service, ModuleRef};
use crate::services::user as user_service;
use crate::simulations::{bank_for, Evaluation, PublicScenario, SimulationError, SimulationType};

impl From<SimulationError> for AppError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::UnknownScenario(_) => AppError::not_found(err.to_string()),
            SimulationError::Empty => AppError::not_found(err.to_string()),
            SimulationError::UnknownType(_) | SimulationError::UnknownOption(_) => {
                AppError::validation(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub scenario: PublicScenario,
    pub module: Option<ModuleRef>,
    pub previously_completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub result_id: i64,
    pub module_id: Option<i64>,
    pub module_completed: bool,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationTypeStatistics {
    pub simulation_type: SimulationType,
    pub total_attempts: i64,
    pub completed_attempts: i64,
    pub correct_attempts: i64,
    pub average_score: f64,
    pub completion_rate: f64,
    pub best_score: i64,
    pub participants: i64,
}

pub fn parse_kind(raw: &str) -> Result<SimulationType, AppError> {
    SimulationType::parse(raw).ok_or_else(|| SimulationError::UnknownType(raw.to_string()).into())
}

pub fn scenario_for(
    kind: SimulationType,
    scenario_id: Option<u32>,
) -> Result<PublicScenario, AppError> {
    let bank = bank_for(kind);
    let scenario = match scenario_id {
        Some(id) => bank
            .scenario_by_id(id)
            .ok_or(SimulationError::UnknownScenario(id))?,
        None => bank.random_scenario()?,
    };
    Ok(bank.public_view(scenario))
}

/// Picks the module a simulation belongs to: the explicit id when given,
/// otherwise the first module configured with this simulation type.
async fn resolve_module(
    proxy: &DatabaseProxy,
    kind: SimulationType,
    module_id: Option<i64>,
) -> Result<Option<ModuleRecord>, AppError> {
    match module_id {
        Some(id) => {
            let module = module_service::load_module(proxy, id).await?;
            if module.simulation_type.as_deref() != Some(kind.as_str()) {
                return Err(AppError::validation(format!(
                    "Module {} does not run the {} simulation",
                    module.id,
                    kind.label()
                )));
            }
            Ok(Some(module))
        }
        None => Ok(module_service::modules_by_simulation_type(proxy, kind)
            .await?
            .into_iter()
            .next()),
    }
}

pub async fn scenario_for_user(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    kind: SimulationType,
    scenario_id: Option<u32>,
) -> Result<ScenarioView, AppError> {
    let module = resolve_module(proxy, kind, None).await?;
    let previously_completed = match &module {
        Some(module) => {
            module_service::ensure_accessible(proxy, rules, user_id, module).await?;
            simulation_ops::has_completed_for_module(proxy, user_id, module.id).await?
        }
        None => false,
    };

    Ok(ScenarioView {
        scenario: scenario_for(kind, scenario_id)?,
        module: module.as_ref().map(ModuleRef::from),
        previously_completed,
    })
}

#[allow(clippy::too_many_arguments)]
pub async fn submit(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    kind: SimulationType,
    scenario_id: u32,
    choice: &str,
    time_taken: Option<i64>,
    module_id: Option<i64>,
) -> Result<SimulationOutcome, AppError> {
    let module = resolve_module(proxy, kind, module_id).await?;
    if let Some(module) = &module {
        module_service::ensure_accessible(proxy, rules, user_id, module).await?;
    }

    let bank = bank_for(kind);
    let scenario = bank
        .scenario_by_id(scenario_id)
        .ok_or(SimulationError::UnknownScenario(scenario_id))?;
    let evaluation = bank.evaluate(scenario, choice)?;

    let result_id = simulation_ops::insert_result(
        proxy,
        &NewSimulationResult {
            user_id,
            module_id: module.as_ref().map(|m| m.id),
            simulation_type: kind.as_str().to_string(),
            scenario_id: i64::from(scenario.id),
            chosen_option: evaluation.chosen_option.clone(),
            correct: evaluation.correct,
            score: evaluation.score,
            completed: true,
            time_taken: time_taken.filter(|t| *t >= 0),
            decisions_made: serde_json::json!({
                "scenarioTitle": scenario.title,
                "chosenOption": evaluation.chosen_option,
                "correct": evaluation.correct,
                "correctOptions": evaluation.correct_options,
            }),
        },
    )
    .await?;

    user_service::refresh_counters(proxy, user_id).await?;
    let module_completed = match &module {
        Some(module) => module_service::sync_completion(proxy, rules, user_id, module).await?,
        None => false,
    };

    tracing::info!(
        user_id,
        simulation = %kind,
        scenario_id,
        correct = evaluation.correct,
        module_completed,
        "simulation submitted"
    );

    Ok(SimulationOutcome {
        result_id,
        module_id: module.map(|m| m.id),
        module_completed,
        evaluation,
    })
}

pub async fn history(
    proxy: &DatabaseProxy,
    user_id: i64,
    kind: Option<SimulationType>,
) -> Result<Vec<SimulationResultRecord>, AppError> {
    Ok(simulation_ops::results_for_user(proxy, user_id, kind.map(|k| k.as_str()), None).await?)
}

pub async fn statistics(
    proxy: &DatabaseProxy,
    kind: SimulationType,
) -> Result<SimulationTypeStatistics, AppError> {
    let stats = simulation_ops::stats(proxy, Some(kind.as_str()), None).await?;
    Ok(SimulationTypeStatistics {
        simulation_type: kind,
        total_attempts: stats.total_attempts,
        completed_attempts: stats.completed_attempts,
        correct_attempts: stats.correct_attempts,
        average_score: user_service::round1(stats.average_score.unwrap_or(0.0)),
        completion_rate: user_service::round1(stats.completion_rate()),
        best_score: stats.best_score.unwrap_or(0),
        participants: stats.participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn unknown_kind_is_a_validation_error() {
        let err = parse_kind("tailgating").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_kind("quid-pro-quo").unwrap(), SimulationType::QuidProQuo);
    }

    #[test]
    fn scenario_lookup_by_id() {
        let scenario = scenario_for(SimulationType::Baiting, Some(1)).unwrap();
        assert_eq!(scenario.id, 1);
        let missing = scenario_for(SimulationType::Baiting, Some(99)).unwrap_err();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn random_scenario_belongs_to_the_bank() {
        let scenario = scenario_for(SimulationType::Phishing, None).unwrap();
        assert_eq!(scenario.simulation_type, SimulationType::Phishing);
        assert_eq!(scenario.options.len(), 4);
    }
}
