// ABOUTME: Completion forecast and milestone configuration
// ABOUTME: Velocity floor, confidence-level thresholds, and milestone confidence mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_core::constants::milestones::{
    COMPLETION_HIGH, COMPLETION_LOW, COMPLETION_MEDIUM, HALFWAY_FRACTION, HALFWAY_HIGH,
    HALFWAY_LOW, HALFWAY_MEDIUM, HALFWAY_PERCENT,
};
use learnpath_core::constants::prediction::{
    HIGH_CONFIDENCE_MIN_COMPLETED, HIGH_CONFIDENCE_MIN_DAYS, LOW_CONFIDENCE_MIN_COMPLETED,
    LOW_CONFIDENCE_MIN_DAYS, MIN_DAYS_ACTIVE, MIN_LESSONS_PER_DAY,
};
use learnpath_core::models::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Progress Predictor Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Velocity floor in lessons per day
    pub min_lessons_per_day: f64,
    /// Smallest divisor for active days
    pub min_days_active: u32,
    /// Completed lessons needed for `high`
    pub high_min_completed: u32,
    /// Active days needed for `high`
    pub high_min_days: u32,
    /// Fewer completed lessons than this is `low`
    pub low_min_completed: u32,
    /// Fewer active days than this is `low`
    pub low_min_days: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_lessons_per_day: MIN_LESSONS_PER_DAY,
            min_days_active: MIN_DAYS_ACTIVE,
            high_min_completed: HIGH_CONFIDENCE_MIN_COMPLETED,
            high_min_days: HIGH_CONFIDENCE_MIN_DAYS,
            low_min_completed: LOW_CONFIDENCE_MIN_COMPLETED,
            low_min_days: LOW_CONFIDENCE_MIN_DAYS,
        }
    }
}

/// Numeric confidence for each forecast confidence level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceMapping {
    /// Value for `high`
    pub high: u8,
    /// Value for `medium`
    pub medium: u8,
    /// Value for `low`
    pub low: u8,
}

impl ConfidenceMapping {
    /// Numeric confidence for a level
    #[must_use]
    pub const fn for_level(&self, level: ConfidenceLevel) -> u8 {
        match level {
            ConfidenceLevel::High => self.high,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::Low => self.low,
        }
    }
}

/// Milestone Projector Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneConfig {
    /// Fraction of lessons marking the halfway milestone
    pub halfway_fraction: f64,
    /// Progress percentage below which the halfway milestone is projected
    pub halfway_percent: u8,
    /// Confidence for halfway milestones
    pub halfway_confidence: ConfidenceMapping,
    /// Confidence for completion milestones
    pub completion_confidence: ConfidenceMapping,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            halfway_fraction: HALFWAY_FRACTION,
            halfway_percent: HALFWAY_PERCENT,
            halfway_confidence: ConfidenceMapping {
                high: HALFWAY_HIGH,
                medium: HALFWAY_MEDIUM,
                low: HALFWAY_LOW,
            },
            completion_confidence: ConfidenceMapping {
                high: COMPLETION_HIGH,
                medium: COMPLETION_MEDIUM,
                low: COMPLETION_LOW,
            },
        }
    }
}
