use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ProgramRules;
use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::assessment::{AssessmentResultRecord, AssessmentType};
use crate::db::operations::content as content_ops;
use crate::db::operations::content::ModuleRecord;
use crate::db::operations::feedback as feedback_ops;
use crate::db::operations::progress as progress_ops;
use crate::db::operations::progress::{ProgressStatus, ProgressUpdate};
use crate::db::operations::simulation as simulation_ops;
use crate::db::operations::simulation::SimulationResultRecord;
use crate::db::operations::user::UserRecord;
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::assessment::{self as assessment_service, FinalAssessmentStatus};
use crate::services::module::{self as module_service, LearningPathEntry, ModuleRef, ProgressView};
use crate::services::rules;
use crate::services::user::{self as user_service, AssessmentSummary, SimulationSummary, UserStatistics};
use crate::simulations::SimulationType;

pub const DEFAULT_ACTIVITY_DAYS: i64 = 7;
pub const DASHBOARD_ACTIVITY_LIMIT: usize = 5;
const SPEED_LEARNER_MINUTES: i64 = 30;

/// Body of `POST /api/progress`, accepted as JSON or a form. The progress
/// score belongs to the knowledge check and is not accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressPayload {
    #[serde(alias = "module_id")]
    pub module_id: Option<i64>,
    #[serde(alias = "topic_id")]
    pub topic_id: Option<i64>,
    pub completed: Option<bool>,
    pub status: Option<String>,
    #[serde(alias = "time_spent")]
    pub time_spent: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicToggle {
    pub topic_id: i64,
    pub completed: bool,
    pub completed_topics: usize,
    pub total_topics: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdateOutcome {
    pub module_id: i64,
    pub progress: ProgressView,
    pub topic: Option<TopicToggle>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgressLine {
    pub module_id: i64,
    pub name: String,
    pub display_order: i64,
    pub progress: ProgressView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    pub modules_completed: i64,
    pub total_modules: i64,
    pub completion_percentage: i64,
    pub modules: Vec<ModuleProgressLine>,
    pub assessments: AssessmentSummary,
    pub simulations: SimulationSummary,
    pub total_time_spent: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgressDetails {
    pub module: ModuleRecord,
    pub progress: ProgressView,
    pub completed_topic_ids: Vec<i64>,
    pub assessments: Vec<AssessmentResultRecord>,
    pub simulations: Vec<SimulationResultRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Assessment,
    Simulation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub module_id: Option<i64>,
    pub score: i64,
    pub passed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: UserRecord,
    pub statistics: UserStatistics,
    pub learning_path: Vec<LearningPathEntry>,
    pub next_module: Option<ModuleRef>,
    pub completed_modules: Vec<ModuleRef>,
    pub recent_activity: Vec<ActivityItem>,
    pub achievements: Vec<Achievement>,
    pub final_assessment: FinalAssessmentStatus,
    pub survey_submitted: bool,
    pub survey_available: bool,
    pub certificate_available: bool,
}

/// Facts the achievement rules look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementFacts {
    pub modules_completed: i64,
    pub has_perfect_score: bool,
    pub simulations_completed: i64,
    pub fast_completion: bool,
}

pub fn evaluate_achievements(facts: &AchievementFacts) -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_module",
            title: "First Steps",
            description: "Complete your first module",
            earned: facts.modules_completed >= 1,
        },
        Achievement {
            id: "half_way",
            title: "Halfway There",
            description: "Complete four modules",
            earned: facts.modules_completed >= 4,
        },
        Achievement {
            id: "perfect_score",
            title: "Perfect Score",
            description: "Answer every question of an assessment correctly",
            earned: facts.has_perfect_score,
        },
        Achievement {
            id: "simulation_master",
            title: "Simulation Master",
            description: "Complete three simulations",
            earned: facts.simulations_completed >= 3,
        },
        Achievement {
            id: "speed_learner",
            title: "Speed Learner",
            description: "Complete a module in under 30 minutes",
            earned: facts.fast_completion,
        },
    ]
}

pub async fn overall_progress(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<OverallProgress, AppError> {
    let modules = content_ops::list_modules(proxy).await?;
    let mut progress = module_service::progress_for_modules(proxy, user_id).await?;
    let statistics = user_service::user_statistics(proxy, rules, user_id).await?;

    let lines: Vec<ModuleProgressLine> = modules
        .into_iter()
        .map(|module| ModuleProgressLine {
            progress: progress
                .remove(&module.id)
                .unwrap_or_else(|| ProgressView::empty(module.id)),
            module_id: module.id,
            name: module.name,
            display_order: module.display_order,
        })
        .collect();
    let total_time_spent = lines.iter().map(|line| line.progress.time_spent).sum();

    Ok(OverallProgress {
        modules_completed: statistics.modules_completed,
        total_modules: statistics.total_modules,
        completion_percentage: statistics.completion_percentage,
        modules: lines,
        assessments: statistics.assessments,
        simulations: statistics.simulations,
        total_time_spent,
    })
}

pub async fn module_progress_details(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<ModuleProgressDetails, AppError> {
    let with_progress = module_service::module_with_progress(proxy, module_id, user_id).await?;
    let assessments = assessment_ops::results_for_user(
        proxy,
        user_id,
        Some(AssessmentType::KnowledgeCheck),
        Some(module_id),
    )
    .await?;
    let simulations = simulation_ops::results_for_user(proxy, user_id, None, Some(module_id)).await?;
    let completed_topic_ids = progress_ops::completed_topic_ids(proxy, user_id, module_id).await?;

    Ok(ModuleProgressDetails {
        module: with_progress.module,
        progress: with_progress.progress,
        completed_topic_ids,
        assessments,
        simulations,
    })
}

pub async fn update_progress(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    payload: ProgressPayload,
) -> Result<ProgressUpdateOutcome, AppError> {
    let module_id = payload
        .module_id
        .ok_or_else(|| AppError::validation("moduleId is required"))?;
    let module = module_service::load_module(proxy, module_id).await?;
    module_service::ensure_accessible(proxy, rules, user_id, &module).await?;
    module_service::start_module(proxy, user_id, module_id).await?;

    let topic = match payload.topic_id {
        Some(topic_id) => Some(toggle_topic(proxy, user_id, module_id, topic_id, payload.completed).await?),
        None => {
            update_module_progress(proxy, rules, user_id, &module, &payload).await?;
            None
        }
    };

    let progress = progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    Ok(ProgressUpdateOutcome {
        module_id,
        progress: ProgressView::from(&progress),
        topic,
    })
}

async fn toggle_topic(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    topic_id: i64,
    completed: Option<bool>,
) -> Result<TopicToggle, AppError> {
    if !content_ops::topic_belongs_to_module(proxy, topic_id, module_id).await? {
        return Err(AppError::not_found("Topic not found in this module"));
    }
    let completed = completed.unwrap_or(true);
    progress_ops::upsert_topic_progress(proxy, user_id, module_id, topic_id, completed).await?;

    let total_topics = content_ops::topics_for_module(proxy, module_id).await?.len();
    let completed_topics = progress_ops::completed_topic_ids(proxy, user_id, module_id)
        .await?
        .len();
    tracing::debug!(user_id, module_id, topic_id, completed, "topic progress updated");

    Ok(TopicToggle {
        topic_id,
        completed,
        completed_topics,
        total_topics,
    })
}

async fn update_module_progress(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module: &ModuleRecord,
    payload: &ProgressPayload,
) -> Result<(), AppError> {
    let status = match payload.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            ProgressStatus::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Invalid status: {raw}")))?,
        ),
    };
    if let Some(time_spent) = payload.time_spent {
        if time_spent < 0 {
            return Err(AppError::validation("Time spent cannot be negative"));
        }
    }

    let current = progress_ops::ensure_progress(proxy, user_id, module.id).await?;
    if current.is_completed() && matches!(status, Some(s) if s != ProgressStatus::Completed) {
        return Err(AppError::conflict("Module is already completed"));
    }

    if status == Some(ProgressStatus::Completed) {
        module_service::complete_module(proxy, rules, user_id, module.id).await?;
        if let Some(time_spent) = payload.time_spent {
            progress_ops::apply_update(
                proxy,
                user_id,
                module.id,
                &ProgressUpdate {
                    time_spent: Some(time_spent),
                    ..Default::default()
                },
            )
            .await?;
        }
        return Ok(());
    }

    progress_ops::apply_update(
        proxy,
        user_id,
        module.id,
        &ProgressUpdate {
            status,
            score: None,
            time_spent: payload.time_spent,
        },
    )
    .await?;
    user_service::refresh_counters(proxy, user_id).await?;
    Ok(())
}

pub async fn add_time_spent(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
    minutes: i64,
) -> Result<ProgressView, AppError> {
    if minutes <= 0 {
        return Err(AppError::validation("Minutes must be positive"));
    }
    module_service::load_module(proxy, module_id).await?;
    progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    progress_ops::add_time_spent(proxy, user_id, module_id, minutes).await?;
    let progress = progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    Ok(ProgressView::from(&progress))
}

/// Assessments and simulations from the last `days`, newest first.
pub async fn recent_activity(
    proxy: &DatabaseProxy,
    user_id: i64,
    days: i64,
    limit: usize,
) -> Result<Vec<ActivityItem>, AppError> {
    let since = Utc::now() - Duration::days(days.max(1));
    let fetch = limit.max(1) as i64;
    let names: HashMap<i64, String> = content_ops::list_modules(proxy)
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();

    let assessments = assessment_ops::recent_for_user(proxy, user_id, since, fetch).await?;
    let simulations = simulation_ops::recent_for_user(proxy, user_id, since, fetch).await?;

    let mut items: Vec<ActivityItem> = assessments
        .into_iter()
        .map(|result| {
            let title = match (AssessmentType::parse(&result.assessment_type), result.module_id) {
                (Some(AssessmentType::FinalAssessment), _) => "Final Assessment".to_string(),
                (_, Some(id)) => match names.get(&id) {
                    Some(name) => format!("Knowledge Check: {name}"),
                    None => "Knowledge Check".to_string(),
                },
                _ => "Assessment".to_string(),
            };
            ActivityItem {
                kind: ActivityKind::Assessment,
                title,
                module_id: result.module_id,
                score: result.percentage(),
                passed: result.passed,
                created_at: result.created_at,
            }
        })
        .chain(simulations.into_iter().map(|result| {
            let label = SimulationType::parse(&result.simulation_type)
                .map(|kind| kind.label())
                .unwrap_or("Simulation");
            ActivityItem {
                kind: ActivityKind::Simulation,
                title: format!("{label} Simulation"),
                module_id: result.module_id,
                score: result.score,
                passed: result.correct,
                created_at: result.created_at,
            }
        }))
        .collect();

    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(limit);
    Ok(items)
}

pub async fn achievements(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Vec<Achievement>, AppError> {
    let records = progress_ops::progress_for_user(proxy, user_id).await?;
    let facts = AchievementFacts {
        modules_completed: records.iter().filter(|r| r.is_completed()).count() as i64,
        has_perfect_score: assessment_ops::has_perfect_score(proxy, user_id).await?,
        simulations_completed: simulation_ops::count_completed(proxy, user_id).await?,
        fast_completion: records.iter().any(|r| {
            r.is_completed() && r.time_spent > 0 && r.time_spent < SPEED_LEARNER_MINUTES
        }),
    };
    Ok(evaluate_achievements(&facts))
}

pub async fn dashboard(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<Dashboard, AppError> {
    let user = user_service::load_user(proxy, user_id).await?;
    let statistics = user_service::user_statistics(proxy, rules, user_id).await?;
    let learning_path = module_service::learning_path(proxy, rules, user_id).await?;
    let next_module = module_service::next_available_module(proxy, rules, user_id)
        .await?
        .as_ref()
        .map(ModuleRef::from);
    let completed_modules: Vec<ModuleRef> = module_service::completed_modules(proxy, user_id)
        .await?
        .iter()
        .map(ModuleRef::from)
        .collect();
    let recent_activity =
        recent_activity(proxy, user_id, DEFAULT_ACTIVITY_DAYS, DASHBOARD_ACTIVITY_LIMIT).await?;
    let achievements = achievements(proxy, user_id).await?;
    let final_assessment = assessment_service::final_assessment_status(proxy, rules, user_id).await?;
    let survey_submitted = feedback_ops::find_user_survey(proxy, user_id).await?.is_some();

    Ok(Dashboard {
        survey_available: rules::survey_gate(final_assessment.passed, survey_submitted).is_ok(),
        certificate_available: rules::certificate_gate(final_assessment.passed, survey_submitted)
            .is_ok(),
        user,
        statistics,
        learning_path,
        next_module,
        completed_modules,
        recent_activity,
        achievements,
        final_assessment,
        survey_submitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earned(facts: AchievementFacts) -> Vec<&'static str> {
        evaluate_achievements(&facts)
            .into_iter()
            .filter(|a| a.earned)
            .map(|a| a.id)
            .collect()
    }

    #[test]
    fn new_learner_has_no_achievements() {
        assert!(earned(AchievementFacts::default()).is_empty());
    }

    #[test]
    fn thresholds_unlock_achievements() {
        let facts = AchievementFacts {
            modules_completed: 4,
            has_perfect_score: true,
            simulations_completed: 3,
            fast_completion: false,
        };
        assert_eq!(
            earned(facts),
            vec!["first_module", "half_way", "perfect_score", "simulation_master"]
        );
    }

    #[test]
    fn progress_payload_accepts_snake_and_camel_case() {
        let camel: ProgressPayload =
            serde_json::from_value(serde_json::json!({"moduleId": 2, "topicId": 7})).unwrap();
        assert_eq!(camel.module_id, Some(2));
        assert_eq!(camel.topic_id, Some(7));

        let snake: ProgressPayload =
            serde_json::from_value(serde_json::json!({"module_id": 3, "time_spent": 12})).unwrap();
        assert_eq!(snake.module_id, Some(3));
        assert_eq!(snake.time_spent, Some(12));
    }
}
