use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ProgramRules;
use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::assessment::{AssessmentStats, AssessmentType};
use crate::db::operations::content as content_ops;
use crate::db::operations::content::{ModuleRecord, ModuleUpdate, ReferenceRecord};
use crate::db::operations::feedback as feedback_ops;
use crate::db::operations::feedback::FeedbackStats;
use crate::db::operations::progress as progress_ops;
use crate::db::operations::progress::{ModuleProgressStats, ProgressRecord, ProgressStatus};
use crate::db::operations::simulation as simulation_ops;
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::rules::{self, ModuleAccess, ModuleFacts, RetakeDecision, RuleViolation};
use crate::services::user as user_service;
use crate::simulations::SimulationType;
use crate::validators::sanitize_input;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub module_id: i64,
    pub status: ProgressStatus,
    pub score: Option<i64>,
    pub attempts: i64,
    pub time_spent: i64,
    pub content_viewed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressView {
    pub fn empty(module_id: i64) -> Self {
        Self {
            module_id,
            status: ProgressStatus::NotStarted,
            score: None,
            attempts: 0,
            time_spent: 0,
            content_viewed: false,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProgressStatus::Completed
    }
}

impl From<&ProgressRecord> for ProgressView {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            module_id: record.module_id,
            status: record.status(),
            score: record.score,
            attempts: record.attempts,
            time_spent: record.time_spent,
            content_viewed: record.content_viewed,
            completed_at: record.completed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleWithProgress {
    #[serde(flatten)]
    pub module: ModuleRecord,
    pub progress: ProgressView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicView {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonView {
    pub id: i64,
    pub title: String,
    pub topics: Vec<TopicView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleView {
    pub module: ModuleRecord,
    pub lessons: Vec<LessonView>,
    pub references: Vec<ReferenceRecord>,
    pub progress: ProgressView,
    pub total_topics: usize,
    pub completed_topics: usize,
    pub topic_completion_percentage: i64,
    pub first_incomplete_topic: Option<i64>,
    pub latest_knowledge_check_score: Option<i64>,
    pub knowledge_check: RetakeDecision,
    pub fully_completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRef {
    pub id: i64,
    pub name: String,
    pub display_order: i64,
}

impl From<&ModuleRecord> for ModuleRef {
    fn from(module: &ModuleRecord) -> Self {
        Self {
            id: module.id,
            name: module.name.clone(),
            display_order: module.display_order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: String,
    pub prerequisite: Option<ModuleRef>,
    /// Every module ordered before this one.
    pub prerequisites: Vec<ModuleRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathEntry {
    #[serde(flatten)]
    pub module: ModuleRecord,
    pub progress: ProgressView,
    pub accessible: bool,
    pub fully_completed: bool,
    pub locked_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStatistics {
    pub module: ModuleRecord,
    pub question_count: i64,
    pub progress: ModuleProgressStats,
    pub knowledge_check: AssessmentStats,
    pub knowledge_check_pass_rate: f64,
    pub feedback: FeedbackStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleContentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub has_simulation: Option<bool>,
    pub simulation_type: Option<String>,
}

pub async fn load_module(proxy: &DatabaseProxy, module_id: i64) -> Result<ModuleRecord, AppError> {
    content_ops::find_module(proxy, module_id)
        .await?
        .ok_or_else(|| AppError::not_found("Module not found"))
}

pub async fn progress_for_modules(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<HashMap<i64, ProgressView>, AppError> {
    let modules = content_ops::list_modules(proxy).await?;
    let records = progress_ops::progress_for_user(proxy, user_id).await?;

    let mut by_module: HashMap<i64, ProgressView> = records
        .iter()
        .map(|record| (record.module_id, ProgressView::from(record)))
        .collect();
    for module in &modules {
        by_module
            .entry(module.id)
            .or_insert_with(|| ProgressView::empty(module.id));
    }
    Ok(by_module)
}

pub async fn module_with_progress(
    proxy: &DatabaseProxy,
    module_id: i64,
    user_id: i64,
) -> Result<ModuleWithProgress, AppError> {
    let module = load_module(proxy, module_id).await?;
    let progress = progress_ops::find_progress(proxy, user_id, module_id)
        .await?
        .map(|record| ProgressView::from(&record))
        .unwrap_or_else(|| ProgressView::empty(module_id));
    Ok(ModuleWithProgress { module, progress })
}

pub async fn module_facts(
    proxy: &DatabaseProxy,
    user_id: i64,
    module: &ModuleRecord,
) -> Result<ModuleFacts, AppError> {
    let progress = progress_ops::find_progress(proxy, user_id, module.id).await?;
    let latest = assessment_ops::latest_result(
        proxy,
        user_id,
        AssessmentType::KnowledgeCheck,
        Some(module.id),
    )
    .await?;
    let simulation_completed = if module.has_simulation {
        simulation_ops::has_completed_for_module(proxy, user_id, module.id).await?
    } else {
        false
    };

    Ok(ModuleFacts {
        content_viewed: progress.map(|p| p.content_viewed).unwrap_or(false),
        latest_knowledge_check: latest.map(|r| (r.correct_answers, r.total_questions)),
        has_simulation: module.has_simulation,
        simulation_completed,
    })
}

pub async fn is_module_fully_completed(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module: &ModuleRecord,
) -> Result<bool, AppError> {
    let facts = module_facts(proxy, user_id, module).await?;
    Ok(rules::is_module_complete(&facts, rules))
}

pub async fn module_access_for(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module: &ModuleRecord,
) -> Result<ModuleAccess, AppError> {
    if module.display_order <= 1 {
        return Ok(rules::module_access(module.display_order, true));
    }
    let previous_complete =
        match content_ops::find_module_by_order(proxy, module.display_order - 1).await? {
            Some(previous) => is_module_fully_completed(proxy, rules, user_id, &previous).await?,
            None => true,
        };
    Ok(rules::module_access(module.display_order, previous_complete))
}

pub async fn ensure_accessible(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module: &ModuleRecord,
) -> Result<(), AppError> {
    let access = module_access_for(proxy, rules, user_id, module).await?;
    if let ModuleAccess::Locked { requires } = access {
        tracing::debug!(user_id, module_id = module.id, requires, "module locked");
    }
    access.into_result()?;
    Ok(())
}

/// Marks the module complete when the completion rule now holds. Returns
/// whether the module is complete afterwards.
pub async fn sync_completion(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module: &ModuleRecord,
) -> Result<bool, AppError> {
    let facts = module_facts(proxy, user_id, module).await?;
    if !rules::is_module_complete(&facts, rules) {
        return Ok(false);
    }

    let progress = progress_ops::ensure_progress(proxy, user_id, module.id).await?;
    if !progress.is_completed() {
        progress_ops::mark_completed(proxy, user_id, module.id).await?;
        user_service::refresh_counters(proxy, user_id).await?;
        tracing::info!(user_id, module_id = module.id, "module completed");
    }
    Ok(true)
}

pub async fn start_module(
    proxy: &DatabaseProxy,
    user_id: i64,
    module_id: i64,
) -> Result<ProgressRecord, AppError> {
    progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    progress_ops::mark_started(proxy, user_id, module_id).await?;
    Ok(progress_ops::ensure_progress(proxy, user_id, module_id).await?)
}

pub async fn view_module(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module_id: i64,
) -> Result<ModuleView, AppError> {
    let module = load_module(proxy, module_id).await?;
    ensure_accessible(proxy, rules, user_id, &module).await?;

    start_module(proxy, user_id, module_id).await?;
    progress_ops::mark_content_viewed(proxy, user_id, module_id).await?;
    let fully_completed = sync_completion(proxy, rules, user_id, &module).await?;

    let lessons = content_ops::lessons_for_module(proxy, module_id).await?;
    let topics = content_ops::topics_for_module(proxy, module_id).await?;
    let references = content_ops::references_for_module(proxy, module_id).await?;
    let done: HashSet<i64> = progress_ops::completed_topic_ids(proxy, user_id, module_id)
        .await?
        .into_iter()
        .collect();

    let lesson_views: Vec<LessonView> = lessons
        .iter()
        .map(|lesson| LessonView {
            id: lesson.id,
            title: lesson.title.clone(),
            topics: topics
                .iter()
                .filter(|topic| topic.lesson_id == lesson.id)
                .map(|topic| TopicView {
                    id: topic.id,
                    title: topic.title.clone(),
                    body: topic.body.clone(),
                    completed: done.contains(&topic.id),
                })
                .collect(),
        })
        .collect();

    let total_topics = topics.len();
    let completed_topics = topics.iter().filter(|t| done.contains(&t.id)).count();
    let first_incomplete_topic = lesson_views
        .iter()
        .flat_map(|lesson| lesson.topics.iter())
        .find(|topic| !topic.completed)
        .map(|topic| topic.id);

    let progress = progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    let latest = assessment_ops::latest_result(
        proxy,
        user_id,
        AssessmentType::KnowledgeCheck,
        Some(module_id),
    )
    .await?;

    Ok(ModuleView {
        lessons: lesson_views,
        references,
        total_topics,
        completed_topics,
        topic_completion_percentage: rules::knowledge_check_percentage(
            completed_topics as i64,
            total_topics as i64,
        ),
        first_incomplete_topic,
        latest_knowledge_check_score: latest.map(|r| r.percentage()),
        knowledge_check: rules::knowledge_check_retake(progress.attempts, rules),
        progress: ProgressView::from(&progress),
        fully_completed,
        module,
    })
}

/// Explicit completion request. Refused unless the completion rule holds.
pub async fn complete_module(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module_id: i64,
) -> Result<ProgressRecord, AppError> {
    let module = load_module(proxy, module_id).await?;
    if !is_module_fully_completed(proxy, rules, user_id, &module).await? {
        return Err(RuleViolation::CompletionRuleNotMet.into());
    }

    progress_ops::ensure_progress(proxy, user_id, module_id).await?;
    progress_ops::mark_completed(proxy, user_id, module_id).await?;
    user_service::refresh_counters(proxy, user_id).await?;

    Ok(progress_ops::ensure_progress(proxy, user_id, module_id).await?)
}

pub async fn completed_modules(
    proxy: &DatabaseProxy,
    user_id: i64,
) -> Result<Vec<ModuleRecord>, AppError> {
    let progress = progress_for_modules(proxy, user_id).await?;
    let modules = content_ops::list_modules(proxy).await?;
    Ok(modules
        .into_iter()
        .filter(|module| {
            progress
                .get(&module.id)
                .map(ProgressView::is_completed)
                .unwrap_or(false)
        })
        .collect())
}

pub async fn next_available_module(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<Option<ModuleRecord>, AppError> {
    let path = learning_path(proxy, rules, user_id).await?;
    Ok(path
        .into_iter()
        .find(|entry| entry.accessible && !entry.fully_completed)
        .map(|entry| entry.module))
}

pub async fn prerequisites(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<Vec<ModuleRecord>, AppError> {
    let module = load_module(proxy, module_id).await?;
    let modules = content_ops::list_modules(proxy).await?;
    Ok(modules
        .into_iter()
        .filter(|m| m.display_order < module.display_order)
        .collect())
}

pub async fn check_eligibility(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
    module_id: i64,
) -> Result<Eligibility, AppError> {
    let module = load_module(proxy, module_id).await?;
    let prerequisites: Vec<ModuleRef> = prerequisites(proxy, module_id)
        .await?
        .iter()
        .map(ModuleRef::from)
        .collect();
    match module_access_for(proxy, rules, user_id, &module).await? {
        ModuleAccess::Accessible => Ok(Eligibility {
            eligible: true,
            reason: "Module is available".to_string(),
            prerequisite: None,
            prerequisites,
        }),
        ModuleAccess::Locked { requires } => {
            let prerequisite = content_ops::find_module_by_order(proxy, requires).await?;
            let reason = match &prerequisite {
                Some(prev) => format!("Complete \"{}\" to unlock this module", prev.name),
                None => RuleViolation::ModuleLocked { requires }.to_string(),
            };
            Ok(Eligibility {
                eligible: false,
                reason,
                prerequisite: prerequisite.as_ref().map(ModuleRef::from),
                prerequisites,
            })
        }
    }
}

pub async fn module_statistics(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<ModuleStatistics, AppError> {
    let module = load_module(proxy, module_id).await?;
    let progress = progress_ops::module_stats(proxy, module_id).await?;
    let knowledge_check =
        assessment_ops::stats(proxy, Some(AssessmentType::KnowledgeCheck), None, Some(module_id))
            .await?;
    let feedback = feedback_ops::stats(proxy, Some(module_id)).await?;
    let question_count = content_ops::count_module_questions(proxy, module_id).await?;

    Ok(ModuleStatistics {
        module,
        question_count,
        progress,
        knowledge_check_pass_rate: knowledge_check.pass_rate(),
        knowledge_check,
        feedback,
    })
}

/// Every module in order, with progress and whether the learner may open it.
pub async fn learning_path(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
    user_id: i64,
) -> Result<Vec<LearningPathEntry>, AppError> {
    let modules = content_ops::list_modules(proxy).await?;
    let mut progress = progress_for_modules(proxy, user_id).await?;

    let mut entries = Vec::with_capacity(modules.len());
    let mut previous: Option<(String, bool)> = None;
    for module in modules {
        let fully_completed = is_module_fully_completed(proxy, rules, user_id, &module).await?;
        let previous_complete = previous.as_ref().map(|(_, done)| *done).unwrap_or(true);
        let access = rules::module_access(module.display_order, previous_complete);
        let locked_reason = match (&access, &previous) {
            (ModuleAccess::Locked { .. }, Some((name, _))) => {
                Some(format!("Complete \"{name}\" to unlock this module"))
            }
            (ModuleAccess::Locked { requires }, None) => {
                Some(RuleViolation::ModuleLocked { requires: *requires }.to_string())
            }
            _ => None,
        };

        previous = Some((module.name.clone(), fully_completed));
        entries.push(LearningPathEntry {
            progress: progress
                .remove(&module.id)
                .unwrap_or_else(|| ProgressView::empty(module.id)),
            accessible: access.is_accessible(),
            fully_completed,
            locked_reason,
            module,
        });
    }
    Ok(entries)
}

pub async fn update_module_content(
    proxy: &DatabaseProxy,
    module_id: i64,
    patch: ModuleContentPatch,
) -> Result<ModuleRecord, AppError> {
    let current = load_module(proxy, module_id).await?;

    let name = match patch.name.map(|n| sanitize_input(&n)) {
        Some(name) if name.is_empty() => {
            return Err(AppError::validation("Module name cannot be empty"));
        }
        other => other,
    };

    let simulation_type = match patch.simulation_type.as_deref().map(str::trim) {
        None => None,
        Some("") => Some(None),
        Some(raw) => {
            let kind = SimulationType::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown simulation type: {raw}")))?;
            Some(Some(kind.as_str().to_string()))
        }
    };

    let has_simulation = patch.has_simulation.unwrap_or(current.has_simulation);
    let effective_type = match &simulation_type {
        Some(kind) => kind.clone(),
        None => current.simulation_type.clone(),
    };
    if has_simulation && effective_type.is_none() {
        return Err(AppError::validation(
            "A simulation type is required when the module has a simulation",
        ));
    }

    let update = ModuleUpdate {
        name,
        description: patch.description.map(|d| d.trim().to_string()),
        content: patch.content,
        has_simulation: patch.has_simulation,
        simulation_type: if has_simulation {
            simulation_type
        } else {
            Some(None)
        },
    };
    content_ops::update_module(proxy, module_id, &update).await?;
    tracing::info!(module_id, "module content updated");

    load_module(proxy, module_id).await
}

pub async fn modules_by_simulation_type(
    proxy: &DatabaseProxy,
    kind: SimulationType,
) -> Result<Vec<ModuleRecord>, AppError> {
    Ok(content_ops::modules_by_simulation_type(proxy, kind.as_str()).await?)
}
