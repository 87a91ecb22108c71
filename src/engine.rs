// ABOUTME: InsightsEngine facade running strategies and analytics branches concurrently
// ABOUTME: Bounds every branch with a timeout and degrades failures to default results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Insights Engine
//!
//! Stateless facade over injected stores. Each request builds a fresh learner
//! profile, fans out over the recommendation strategies and the analytics
//! branches, and fans back in before ranking or deriving schedules, milestones
//! and tips.
//!
//! No branch can fail a request. A branch that errors or exceeds the
//! configured budget is logged and contributes its default: no candidates, an
//! absent pattern, no forecasts, or an empty profile.

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future::join_all;
use learnpath_core::errors::{AppError, AppResult};
use learnpath_core::models::{
    LearningInsights, LearningPattern, LearningTip, MilestoneProjection, OptimalSchedule,
    ProgressPrediction, Recommendation, UserId, UserProfile,
};
use learnpath_intelligence::{
    InsightsSummarizer, LearningPatternAnalyzer, MilestoneProjector, ProgressPredictor,
    RecommendationAggregator, ScheduleOptimizer, TipGenerator,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::logging::AppLogger;
use crate::profile::UserProfileBuilder;
use crate::store::{ActivityStore, ContentCatalog, SnapshotStore};
use crate::strategies::{default_strategies, RecommendationStrategy};
use crate::utils::branch_timeout::with_branch_timeout;

/// Branch name of profile building
pub const PROFILE_BRANCH: &str = "profile";
/// Branch name of pattern mining
pub const PATTERNS_BRANCH: &str = "patterns";
/// Branch name of completion forecasting
pub const PREDICTIONS_BRANCH: &str = "predictions";

/// Every result set for one learner, computed in a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Learner
    pub user_id: UserId,
    /// Reference instant of every date-dependent value
    pub generated_at: DateTime<Utc>,
    /// Ranked recommendations
    pub recommendations: Vec<Recommendation>,
    /// Mined pattern, absent without recent activity
    pub pattern: Option<LearningPattern>,
    /// Completion forecasts
    pub predictions: Vec<ProgressPrediction>,
    /// Weekly study plan
    pub schedule: OptimalSchedule,
    /// Dated milestones, earliest first
    pub milestones: Vec<MilestoneProjection>,
    /// Learning tips, highest priority first
    pub tips: Vec<LearningTip>,
    /// Strengths, improvements, and next milestone
    pub insights: LearningInsights,
    /// Branches that failed or timed out, empty when everything succeeded
    pub degraded_branches: Vec<String>,
}

/// Ranked recommendations plus the strategies that degraded
struct RankedCandidates {
    recommendations: Vec<Recommendation>,
    degraded: Vec<String>,
}

/// Recommendation and forecasting facade
pub struct InsightsEngine {
    activity: Arc<dyn ActivityStore>,
    config: EngineConfig,
    profiles: UserProfileBuilder,
    strategies: Vec<Arc<dyn RecommendationStrategy>>,
    aggregator: RecommendationAggregator,
    analyzer: LearningPatternAnalyzer,
    predictor: ProgressPredictor,
    projector: MilestoneProjector,
    optimizer: ScheduleOptimizer,
    tips: TipGenerator,
    clock: Option<DateTime<Utc>>,
}

impl InsightsEngine {
    /// Create an engine over the given stores with the built-in strategies
    #[must_use]
    pub fn new(
        activity: Arc<dyn ActivityStore>,
        catalog: Arc<dyn ContentCatalog>,
        config: EngineConfig,
    ) -> Self {
        let intelligence = &config.intelligence;
        let strategies = default_strategies(&activity, &catalog, &intelligence.recommendation);

        Self {
            profiles: UserProfileBuilder::new(Arc::clone(&activity)),
            strategies,
            aggregator: RecommendationAggregator::new(intelligence.recommendation.dedup_policy),
            analyzer: LearningPatternAnalyzer::new(intelligence.pattern.clone()),
            predictor: ProgressPredictor::new(intelligence.prediction.clone()),
            projector: MilestoneProjector::new(intelligence.milestones.clone()),
            optimizer: ScheduleOptimizer::new(intelligence.schedule.clone()),
            tips: TipGenerator::new(intelligence.tips.clone()),
            activity,
            config,
            clock: None,
        }
    }

    /// Create an engine whose activity store and catalog are the same snapshot
    #[must_use]
    pub fn from_snapshot(store: SnapshotStore, config: EngineConfig) -> Self {
        let store = Arc::new(store);
        Self::new(Arc::clone(&store) as Arc<dyn ActivityStore>, store, config)
    }

    /// Replace the strategies; emission order is the order given
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<Arc<dyn RecommendationStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Pin the reference instant used for windows and dates
    #[must_use]
    pub const fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reference instant of the next computation
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Recommendation count for a requested limit; zero is raised to one
    #[must_use]
    pub fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit.unwrap_or(self.config.default_limit).max(1)
    }

    /// Weekly target for a requested value, validated
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error for negative or non-finite hours
    pub fn target_hours(&self, target_hours: Option<f64>) -> AppResult<f64> {
        validate_target_hours(target_hours.unwrap_or(self.config.default_target_hours))
    }

    /// Ranked, deduplicated recommendations
    #[instrument(skip(self), fields(operation = "recommend"))]
    pub async fn recommend(&self, user_id: UserId, limit: Option<usize>) -> Vec<Recommendation> {
        let started = Instant::now();
        let limit = self.effective_limit(limit);

        let (profile, profile_degraded) = self.profile(user_id).await;
        let ranked = self.rank(&profile, limit).await;

        let degraded = ranked.degraded.len() + usize::from(profile_degraded);
        AppLogger::log_engine_request(user_id, "recommend", elapsed_ms(started), degraded);
        ranked.recommendations
    }

    /// Learning pattern over the recent activity window, absent without activity
    #[instrument(skip(self), fields(operation = "analyze_learning_patterns"))]
    pub async fn analyze_learning_patterns(&self, user_id: UserId) -> Option<LearningPattern> {
        let started = Instant::now();
        let pattern = self.guarded(user_id, PATTERNS_BRANCH, self.pattern(user_id)).await;
        AppLogger::log_engine_request(
            user_id,
            "analyze_learning_patterns",
            elapsed_ms(started),
            usize::from(pattern.is_none()),
        );
        pattern.flatten()
    }

    /// Completion forecasts for every unfinished active enrollment
    #[instrument(skip(self), fields(operation = "predict_program_completion"))]
    pub async fn predict_program_completion(&self, user_id: UserId) -> Vec<ProgressPrediction> {
        let started = Instant::now();
        let predictions = self
            .guarded(user_id, PREDICTIONS_BRANCH, self.predictions(user_id))
            .await;
        AppLogger::log_engine_request(
            user_id,
            "predict_program_completion",
            elapsed_ms(started),
            usize::from(predictions.is_none()),
        );
        predictions.unwrap_or_default()
    }

    /// Weekly study plan; the default target applies when `target_hours` is `None`
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error carrying `user_id` for negative or
    /// non-finite hours
    #[instrument(skip(self), fields(operation = "generate_optimal_schedule"))]
    pub async fn generate_optimal_schedule(
        &self,
        user_id: UserId,
        target_hours: Option<f64>,
    ) -> AppResult<OptimalSchedule> {
        let hours = self
            .target_hours(target_hours)
            .map_err(|e| e.with_user_id(user_id))?;
        let pattern = self.analyze_learning_patterns(user_id).await;
        Ok(self.optimizer.optimize(pattern.as_ref(), hours))
    }

    /// Halfway and completion milestones, earliest first
    #[instrument(skip(self), fields(operation = "project_milestones"))]
    pub async fn project_milestones(&self, user_id: UserId) -> Vec<MilestoneProjection> {
        let predictions = self.predict_program_completion(user_id).await;
        self.projector.project(&predictions, self.today())
    }

    /// Rule-based tips, generic ones without a pattern
    #[instrument(skip(self), fields(operation = "generate_learning_tips"))]
    pub async fn generate_learning_tips(&self, user_id: UserId) -> Vec<LearningTip> {
        let pattern = self.analyze_learning_patterns(user_id).await;
        self.tips.generate(pattern.as_ref())
    }

    /// Strengths, improvement areas, and next milestone
    #[instrument(skip(self), fields(operation = "learning_insights"))]
    pub async fn learning_insights(&self, user_id: UserId) -> LearningInsights {
        let started = Instant::now();
        let (profile, degraded) = self.profile(user_id).await;
        AppLogger::log_engine_request(
            user_id,
            "learning_insights",
            elapsed_ms(started),
            usize::from(degraded),
        );
        if degraded {
            InsightsSummarizer::fallback()
        } else {
            InsightsSummarizer::summarize(&profile)
        }
    }

    /// Every result set in one request with all branches run concurrently
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error for negative or non-finite hours
    #[instrument(skip(self), fields(operation = "insights_report"))]
    pub async fn insights_report(
        &self,
        user_id: UserId,
        limit: Option<usize>,
        target_hours: Option<f64>,
    ) -> AppResult<InsightsReport> {
        let started = Instant::now();
        let hours = self
            .target_hours(target_hours)
            .map_err(|e| e.with_user_id(user_id))?;
        let limit = self.effective_limit(limit);
        let generated_at = self.now();

        let ((profile, profile_degraded, ranked), pattern, predictions) = tokio::join!(
            async {
                let (profile, degraded) = self.profile(user_id).await;
                let ranked = self.rank(&profile, limit).await;
                (profile, degraded, ranked)
            },
            self.guarded(user_id, PATTERNS_BRANCH, self.pattern(user_id)),
            self.guarded(user_id, PREDICTIONS_BRANCH, self.predictions(user_id)),
        );

        let mut degraded_branches = Vec::new();
        if profile_degraded {
            degraded_branches.push(PROFILE_BRANCH.to_owned());
        }
        degraded_branches.extend(ranked.degraded);
        if pattern.is_none() {
            degraded_branches.push(PATTERNS_BRANCH.to_owned());
        }
        if predictions.is_none() {
            degraded_branches.push(PREDICTIONS_BRANCH.to_owned());
        }

        let pattern = pattern.flatten();
        let predictions = predictions.unwrap_or_default();
        let insights = if profile_degraded {
            InsightsSummarizer::fallback()
        } else {
            InsightsSummarizer::summarize(&profile)
        };

        let report = InsightsReport {
            user_id,
            generated_at,
            recommendations: ranked.recommendations,
            schedule: self.optimizer.optimize(pattern.as_ref(), hours),
            milestones: self
                .projector
                .project(&predictions, generated_at.date_naive()),
            tips: self.tips.generate(pattern.as_ref()),
            insights,
            pattern,
            predictions,
            degraded_branches,
        };

        AppLogger::log_engine_request(
            user_id,
            "insights_report",
            elapsed_ms(started),
            report.degraded_branches.len(),
        );
        Ok(report)
    }

    /// Learner profile, or an empty one when profile building timed out
    async fn profile(&self, user_id: UserId) -> (UserProfile, bool) {
        let now = self.now();
        let built = self
            .guarded(user_id, PROFILE_BRANCH, async {
                Ok::<_, AppError>(self.profiles.build(user_id, now).await)
            })
            .await;
        match built {
            Some(profile) => (profile, false),
            None => (UserProfile::empty(user_id, now), true),
        }
    }

    /// Run every strategy concurrently, then deduplicate and rank in emission order
    async fn rank(&self, profile: &UserProfile, limit: usize) -> RankedCandidates {
        let outputs = join_all(self.strategies.iter().map(|strategy| {
            self.guarded(profile.user_id, strategy.name(), strategy.recommend(profile))
        }))
        .await;

        let mut candidates = Vec::new();
        let mut degraded = Vec::new();
        for (strategy, output) in self.strategies.iter().zip(outputs) {
            match output {
                Some(found) => {
                    debug!(
                        user_id = profile.user_id,
                        strategy = strategy.name(),
                        candidates = found.len(),
                        "Strategy finished"
                    );
                    candidates.extend(found);
                }
                None => degraded.push(strategy.name().to_owned()),
            }
        }

        RankedCandidates {
            recommendations: self.aggregator.aggregate(candidates, limit),
            degraded,
        }
    }

    async fn pattern(&self, user_id: UserId) -> AppResult<Option<LearningPattern>> {
        let window = self.analyzer.window(self.now());
        let rows = self.activity.session_timings(user_id, &window).await?;
        Ok(self.analyzer.analyze(&rows))
    }

    async fn predictions(&self, user_id: UserId) -> AppResult<Vec<ProgressPrediction>> {
        let progress = self.activity.program_progress(user_id).await?;
        Ok(self.predictor.predict(&progress, self.today()))
    }

    /// Run a branch under the configured budget, logging and discarding failures
    async fn guarded<T, F>(&self, user_id: UserId, branch: &str, operation: F) -> Option<T>
    where
        F: Future<Output = AppResult<T>> + Send,
        T: Send,
    {
        match with_branch_timeout(branch, self.config.branch_timeout(), operation).await {
            Ok(value) => Some(value),
            Err(e) => {
                AppLogger::log_branch_degraded(user_id, branch, &e.to_string());
                None
            }
        }
    }
}

/// Reject negative and non-finite weekly targets
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when `hours` is negative, NaN, or infinite
pub fn validate_target_hours(hours: f64) -> AppResult<f64> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(hours)
    } else {
        Err(AppError::out_of_range(format!(
            "target hours per week must be a non-negative number, got {hours}"
        )))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
