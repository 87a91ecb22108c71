// ABOUTME: Intelligence configuration for recommendation ranking and progress analytics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `recommendation` - Strategy priors, limits, neighbor discovery and dedup policy
//! - `pattern` - Activity window used for learning pattern mining
//! - `prediction` - Completion forecasts and milestone confidence
//! - `advice` - Schedule optimizer and tip generator thresholds

pub mod advice;
pub mod pattern;
pub mod prediction;
pub mod recommendation;

pub use advice::{ScheduleConfig, SlotTimes, TipConfig};
pub use learnpath_core::errors::ConfigError;
pub use pattern::PatternConfig;
pub use prediction::{ConfidenceMapping, MilestoneConfig, PredictionConfig};
pub use recommendation::{
    DedupPolicy, NeighborConfig, RecommendationConfig, StrategyLimits, StrategyPriors,
};

use learnpath_core::constants::recommendation::MAX_CONFIDENCE;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Recommendation strategies and aggregation
    pub recommendation: RecommendationConfig,
    /// Learning pattern analyzer
    pub pattern: PatternConfig,
    /// Progress predictor
    pub prediction: PredictionConfig,
    /// Milestone projector
    pub milestones: MilestoneConfig,
    /// Schedule optimizer
    pub schedule: ScheduleConfig,
    /// Tip generator
    pub tips: TipConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let priors = &self.recommendation.priors;
        if [
            priors.sequential,
            priors.knowledge_gap,
            priors.content_based,
            priors.collaborative,
        ]
        .iter()
        .any(|&p| p > MAX_CONFIDENCE)
        {
            return Err(ConfigError::ValueOutOfRange(
                "strategy confidence priors must be within 0..=100",
            ));
        }

        if self.recommendation.neighbors.min_shared_completions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "neighbors must share at least one completion",
            ));
        }

        let pattern = &self.pattern;
        if pattern.window_days == 0 || pattern.max_rows == 0 || pattern.streak_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "pattern window, row cap and streak window must be positive",
            ));
        }

        self.validate_prediction()?;
        self.validate_advice()?;

        Ok(())
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let prediction = &self.prediction;
        if !prediction.min_lessons_per_day.is_finite() || prediction.min_lessons_per_day <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_lessons_per_day must be a positive number",
            ));
        }
        if prediction.min_days_active == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_days_active must be at least 1",
            ));
        }
        if prediction.low_min_completed > prediction.high_min_completed
            || prediction.low_min_days > prediction.high_min_days
        {
            return Err(ConfigError::InvalidRange(
                "low confidence thresholds must not exceed high confidence thresholds",
            ));
        }

        let milestones = &self.milestones;
        if !(0.0..1.0).contains(&milestones.halfway_fraction) || milestones.halfway_percent > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "halfway milestone must lie strictly before completion",
            ));
        }
        for mapping in [
            &milestones.halfway_confidence,
            &milestones.completion_confidence,
        ] {
            if mapping.low > mapping.medium || mapping.medium > mapping.high {
                return Err(ConfigError::InvalidRange(
                    "milestone confidence must be ordered low <= medium <= high",
                ));
            }
            if mapping.high > MAX_CONFIDENCE {
                return Err(ConfigError::ValueOutOfRange(
                    "milestone confidence must be within 0..=100",
                ));
            }
        }
        Ok(())
    }

    fn validate_advice(&self) -> Result<(), ConfigError> {
        let schedule = &self.schedule;
        if schedule.max_entries == 0 || schedule.min_session_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "schedule entries and minimum session length must be positive",
            ));
        }

        let tips = &self.tips;
        if tips.short_session_minutes >= tips.long_session_minutes {
            return Err(ConfigError::InvalidRange(
                "short_session_minutes must be < long_session_minutes",
            ));
        }
        if tips.low_consistency > 100 || tips.low_streak > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "tip score thresholds must be within 0..=100",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Recommendation overrides
        Self::apply_env_var(
            "LEARNPATH_DEDUP_POLICY",
            &mut self.recommendation.dedup_policy,
        )?;
        Self::apply_env_var(
            "LEARNPATH_DEFAULT_ESTIMATED_MINUTES",
            &mut self.recommendation.default_estimated_minutes,
        )?;
        Self::apply_env_var(
            "LEARNPATH_MIN_SHARED_COMPLETIONS",
            &mut self.recommendation.neighbors.min_shared_completions,
        )?;
        Self::apply_env_var(
            "LEARNPATH_MAX_NEIGHBORS",
            &mut self.recommendation.neighbors.max_neighbors,
        )?;

        // Pattern overrides
        Self::apply_env_var(
            "LEARNPATH_PATTERN_WINDOW_DAYS",
            &mut self.pattern.window_days,
        )?;
        Self::apply_env_var("LEARNPATH_PATTERN_MAX_ROWS", &mut self.pattern.max_rows)?;

        // Prediction overrides
        Self::apply_env_var(
            "LEARNPATH_MIN_LESSONS_PER_DAY",
            &mut self.prediction.min_lessons_per_day,
        )?;

        Ok(self)
    }
}
