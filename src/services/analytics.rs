use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::ProgramRules;
use crate::db::operations::analytics as analytics_ops;
use crate::db::operations::analytics::{DailyCount, DailySeries, ProgressCounts};
use crate::db::operations::assessment as assessment_ops;
use crate::db::operations::assessment::AssessmentType;
use crate::db::operations::content as content_ops;
use crate::db::operations::feedback as feedback_ops;
use crate::db::operations::feedback::{DifficultyCount, SurveyRecord};
use crate::db::operations::simulation as simulation_ops;
use crate::db::DatabaseProxy;
use crate::response::AppError;
use crate::services::assessment::{self as assessment_service, AssessmentTypeStatistics};
use crate::services::module::{self as module_service, ModuleRef, ModuleStatistics};
use crate::services::simulation::{self as simulation_service, SimulationTypeStatistics};
use crate::services::user::{completion_percentage, round1};
use crate::simulations::SimulationType;

pub const ACTIVE_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_TREND_DAYS: i64 = 30;
const MAX_TREND_DAYS: i64 = 365;
const RECENT_FEEDBACK_LIMIT: i64 = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub total: i64,
    pub admins: i64,
    pub learners: i64,
    pub active: i64,
    pub active_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOverview {
    pub total: i64,
    pub with_simulations: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOverview {
    pub total: i64,
    pub passed: i64,
    pub pass_rate: f64,
    pub average_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOverview {
    pub total: i64,
    pub completed: i64,
    pub completion_rate: f64,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackOverview {
    pub total_responses: i64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOverview {
    pub users: UserOverview,
    pub modules: ModuleOverview,
    pub progress: ProgressCounts,
    pub assessments: AssessmentOverview,
    pub simulations: SimulationOverview,
    pub feedback: FeedbackOverview,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDistribution {
    pub excellent: i64,
    pub good: i64,
    pub average: i64,
    pub below_average: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionDistribution {
    pub all_modules: i64,
    pub half_or_more: i64,
    pub some_modules: i64,
    pub not_started: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    pub learners: i64,
    pub performance_distribution: PerformanceDistribution,
    pub completion_distribution: CompletionDistribution,
    pub average_modules_completed: f64,
    pub average_completion_percentage: f64,
    pub average_total_score: f64,
    pub average_simulations_completed: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalytics {
    pub days: i64,
    pub since: DateTime<Utc>,
    pub registrations: Vec<DailyCount>,
    pub module_completions: Vec<DailyCount>,
    pub assessments: Vec<DailyCount>,
    pub simulations: Vec<DailyCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCount {
    pub range: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentTypeAnalytics {
    #[serde(flatten)]
    pub statistics: AssessmentTypeStatistics,
    pub distribution: Vec<BucketCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFeedback {
    pub module: ModuleRef,
    pub total_responses: i64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalytics {
    pub overall: FeedbackOverview,
    pub by_module: Vec<ModuleFeedback>,
    pub difficulty_distribution: Vec<DifficultyCount>,
    pub recent: Vec<SurveyRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub generated_at: DateTime<Utc>,
    pub overview: SystemOverview,
    pub user_performance: UserPerformance,
    pub modules: Vec<ModuleStatistics>,
    pub trends: TrendAnalytics,
    pub assessments: Vec<AssessmentTypeAnalytics>,
    pub simulations: Vec<SimulationTypeStatistics>,
    pub feedback: FeedbackAnalytics,
}

pub const SCORE_BUCKETS: [&str; 6] = ["90-100", "80-89", "70-79", "60-69", "50-59", "below_50"];

pub fn score_bucket(percentage: i64) -> &'static str {
    match percentage {
        p if p >= 90 => "90-100",
        p if p >= 80 => "80-89",
        p if p >= 70 => "70-79",
        p if p >= 60 => "60-69",
        p if p >= 50 => "50-59",
        _ => "below_50",
    }
}

pub fn score_distribution(percentages: &[i64]) -> Vec<BucketCount> {
    SCORE_BUCKETS
        .iter()
        .map(|&range| BucketCount {
            range,
            count: percentages.iter().filter(|&&p| score_bucket(p) == range).count() as i64,
        })
        .collect()
}

impl PerformanceDistribution {
    pub fn record(&mut self, completion_percentage: i64) {
        match completion_percentage {
            p if p >= 90 => self.excellent += 1,
            p if p >= 70 => self.good += 1,
            p if p >= 50 => self.average += 1,
            _ => self.below_average += 1,
        }
    }
}

impl CompletionDistribution {
    pub fn record(&mut self, modules_completed: i64, total_modules: i64) {
        match modules_completed {
            n if n >= total_modules => self.all_modules += 1,
            n if n >= 4 => self.half_or_more += 1,
            n if n > 0 => self.some_modules += 1,
            _ => self.not_started += 1,
        }
    }
}

fn percent(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        0.0
    } else {
        round1(part as f64 / whole as f64 * 100.0)
    }
}

fn mean(sum: i64, count: i64) -> f64 {
    if count <= 0 {
        0.0
    } else {
        round1(sum as f64 / count as f64)
    }
}

pub async fn system_overview(proxy: &DatabaseProxy) -> Result<SystemOverview, AppError> {
    let users = analytics_ops::user_counts(proxy).await?;
    let active = analytics_ops::count_active_users(
        proxy,
        Utc::now() - Duration::days(ACTIVE_WINDOW_DAYS),
    )
    .await?;
    let assessments = assessment_ops::stats(proxy, None, None, None).await?;
    let simulations = simulation_ops::stats(proxy, None, None).await?;
    let feedback = feedback_ops::stats(proxy, None).await?;

    Ok(SystemOverview {
        users: UserOverview {
            active_percentage: percent(active, users.total),
            total: users.total,
            admins: users.admins,
            learners: users.learners,
            active,
        },
        modules: ModuleOverview {
            total: content_ops::count_modules(proxy).await?,
            with_simulations: analytics_ops::count_simulation_modules(proxy).await?,
        },
        progress: analytics_ops::progress_counts(proxy).await?,
        assessments: AssessmentOverview {
            total: assessments.total_attempts,
            passed: assessments.passed_attempts,
            pass_rate: round1(assessments.pass_rate()),
            average_percentage: round1(assessments.average_percentage.unwrap_or(0.0)),
        },
        simulations: SimulationOverview {
            total: simulations.total_attempts,
            completed: simulations.completed_attempts,
            completion_rate: round1(simulations.completion_rate()),
            average_score: round1(simulations.average_score.unwrap_or(0.0)),
        },
        feedback: FeedbackOverview {
            total_responses: feedback.total_responses,
            average_rating: round1(feedback.average_rating.unwrap_or(0.0)),
        },
    })
}

pub async fn user_performance(
    proxy: &DatabaseProxy,
    rules: &ProgramRules,
) -> Result<UserPerformance, AppError> {
    let learners = analytics_ops::learner_snapshots(proxy).await?;
    let count = learners.len() as i64;

    let mut performance = PerformanceDistribution::default();
    let mut completion = CompletionDistribution::default();
    let (mut modules_sum, mut percentage_sum, mut score_sum, mut simulation_sum) = (0, 0, 0, 0);
    for learner in &learners {
        let percentage = completion_percentage(learner.modules_completed, rules.total_modules);
        performance.record(percentage);
        completion.record(learner.modules_completed, rules.total_modules);
        modules_sum += learner.modules_completed;
        percentage_sum += percentage;
        score_sum += learner.total_score;
        simulation_sum += learner.simulations_completed;
    }

    Ok(UserPerformance {
        learners: count,
        performance_distribution: performance,
        completion_distribution: completion,
        average_modules_completed: mean(modules_sum, count),
        average_completion_percentage: mean(percentage_sum, count),
        average_total_score: mean(score_sum, count),
        average_simulations_completed: mean(simulation_sum, count),
    })
}

pub async fn module_analytics(proxy: &DatabaseProxy) -> Result<Vec<ModuleStatistics>, AppError> {
    let modules = content_ops::list_modules(proxy).await?;
    let mut out = Vec::with_capacity(modules.len());
    for module in modules {
        out.push(module_service::module_statistics(proxy, module.id).await?);
    }
    Ok(out)
}

pub async fn trend_analytics(proxy: &DatabaseProxy, days: i64) -> Result<TrendAnalytics, AppError> {
    let days = days.clamp(1, MAX_TREND_DAYS);
    let since = Utc::now() - Duration::days(days);
    Ok(TrendAnalytics {
        days,
        since,
        registrations: analytics_ops::daily_counts(proxy, DailySeries::Registrations, since).await?,
        module_completions: analytics_ops::daily_counts(proxy, DailySeries::ModuleCompletions, since)
            .await?,
        assessments: analytics_ops::daily_counts(proxy, DailySeries::Assessments, since).await?,
        simulations: analytics_ops::daily_counts(proxy, DailySeries::Simulations, since).await?,
    })
}

pub async fn assessment_analytics(
    proxy: &DatabaseProxy,
) -> Result<Vec<AssessmentTypeAnalytics>, AppError> {
    let mut out = Vec::with_capacity(AssessmentType::ALL.len());
    for kind in AssessmentType::ALL {
        let percentages = assessment_ops::percentages(proxy, kind).await?;
        out.push(AssessmentTypeAnalytics {
            statistics: assessment_service::statistics(proxy, kind).await?,
            distribution: score_distribution(&percentages),
        });
    }
    Ok(out)
}

pub async fn simulation_analytics(
    proxy: &DatabaseProxy,
) -> Result<Vec<SimulationTypeStatistics>, AppError> {
    let mut out = Vec::with_capacity(SimulationType::ALL.len());
    for kind in SimulationType::ALL {
        out.push(simulation_service::statistics(proxy, kind).await?);
    }
    Ok(out)
}

pub async fn feedback_analytics(proxy: &DatabaseProxy) -> Result<FeedbackAnalytics, AppError> {
    let overall = feedback_ops::stats(proxy, None).await?;
    let mut by_module = Vec::new();
    for module in content_ops::list_modules(proxy).await? {
        let stats = feedback_ops::stats(proxy, Some(module.id)).await?;
        by_module.push(ModuleFeedback {
            module: ModuleRef::from(&module),
            total_responses: stats.total_responses,
            average_rating: round1(stats.average_rating.unwrap_or(0.0)),
        });
    }

    Ok(FeedbackAnalytics {
        overall: FeedbackOverview {
            total_responses: overall.total_responses,
            average_rating: round1(overall.average_rating.unwrap_or(0.0)),
        },
        by_module,
        difficulty_distribution: feedback_ops::difficulty_distribution(proxy).await?,
        recent: feedback_ops::recent_surveys(proxy, RECENT_FEEDBACK_LIMIT).await?,
    })
}

pub async fn report(proxy: &DatabaseProxy, rules: &ProgramRules) -> Result<AnalyticsReport, AppError> {
    Ok(AnalyticsReport {
        generated_at: Utc::now(),
        overview: system_overview(proxy).await?,
        user_performance: user_performance(proxy, rules).await?,
        modules: module_analytics(proxy).await?,
        trends: trend_analytics(proxy, DEFAULT_TREND_DAYS).await?,
        assessments: assessment_analytics(proxy).await?,
        simulations: simulation_analytics(proxy).await?,
        feedback: feedback_analytics(proxy).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        assert_eq!(score_bucket(100), "90-100");
        assert_eq!(score_bucket(90), "90-100");
        assert_eq!(score_bucket(89), "80-89");
        assert_eq!(score_bucket(70), "70-79");
        assert_eq!(score_bucket(50), "50-59");
        assert_eq!(score_bucket(49), "below_50");
        assert_eq!(score_bucket(0), "below_50");
    }

    #[test]
    fn distribution_keeps_bucket_order() {
        let buckets = score_distribution(&[95, 91, 85, 40, 0, 72]);
        let ranges: Vec<_> = buckets.iter().map(|b| b.range).collect();
        assert_eq!(ranges, SCORE_BUCKETS.to_vec());
        let counts: Vec<_> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 0, 0, 2]);
    }

    #[test]
    fn learner_distributions() {
        let mut performance = PerformanceDistribution::default();
        for p in [100, 90, 80, 60, 20, 0] {
            performance.record(p);
        }
        assert_eq!(
            performance,
            PerformanceDistribution {
                excellent: 2,
                good: 1,
                average: 1,
                below_average: 2
            }
        );

        let mut completion = CompletionDistribution::default();
        for n in [5, 4, 2, 0, 0] {
            completion.record(n, 5);
        }
        assert_eq!(
            completion,
            CompletionDistribution {
                all_modules: 1,
                half_or_more: 1,
                some_modules: 1,
                not_started: 2
            }
        );
    }

    #[test]
    fn percent_handles_empty_denominator() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(mean(10, 4), 2.5);
    }
}
