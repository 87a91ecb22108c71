// ABOUTME: Milestone projection deriving dated halfway and completion markers from forecasts
// ABOUTME: Interpolates the halfway date linearly and maps confidence levels to fixed scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::MilestoneConfig;
use crate::progress_predictor::add_days;
use chrono::NaiveDate;
use learnpath_core::models::{MilestoneProjection, ProgressPrediction};

/// Milestone projector
#[derive(Debug, Clone, Default)]
pub struct MilestoneProjector {
    config: MilestoneConfig,
}

impl MilestoneProjector {
    /// Create a projector with explicit configuration
    #[must_use]
    pub const fn new(config: MilestoneConfig) -> Self {
        Self { config }
    }

    /// Halfway and completion milestones for each forecast, earliest first
    #[must_use]
    pub fn project(
        &self,
        predictions: &[ProgressPrediction],
        today: NaiveDate,
    ) -> Vec<MilestoneProjection> {
        let mut milestones = Vec::with_capacity(predictions.len() * 2);

        for prediction in predictions {
            if prediction.progress_percent < self.config.halfway_percent {
                milestones.push(self.halfway(prediction, today));
            }
            milestones.push(MilestoneProjection {
                label: format!("Complete {}", prediction.program_title),
                estimated_date: prediction.estimated_completion_date,
                confidence: self
                    .config
                    .completion_confidence
                    .for_level(prediction.confidence_level),
                description: "Program successfully completed".to_owned(),
            });
        }

        milestones.sort_by_key(|milestone| milestone.estimated_date);
        milestones
    }

    fn halfway(&self, prediction: &ProgressPrediction, today: NaiveDate) -> MilestoneProjection {
        let total = f64::from(prediction.total_lessons());
        let halfway_lessons = (total * self.config.halfway_fraction).ceil();
        let lessons_to_halfway =
            (halfway_lessons - f64::from(prediction.lessons_completed)).max(0.0);
        let share_of_remaining =
            lessons_to_halfway / f64::from(prediction.lessons_remaining.max(1));
        let days_to_halfway =
            (share_of_remaining * f64::from(prediction.days_until_completion)).ceil() as u32;

        MilestoneProjection {
            label: format!("50% of {}", prediction.program_title),
            estimated_date: add_days(today, days_to_halfway),
            confidence: self
                .config
                .halfway_confidence
                .for_level(prediction.confidence_level),
            description: "Halfway through your learning journey".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::models::ConfidenceLevel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
    }

    fn prediction(
        title: &str,
        completed: u32,
        remaining: u32,
        days: u32,
        level: ConfidenceLevel,
    ) -> ProgressPrediction {
        let total = completed + remaining;
        ProgressPrediction {
            program_id: 1,
            program_title: title.to_owned(),
            progress_percent: (f64::from(completed) / f64::from(total) * 100.0).round() as u8,
            lessons_completed: completed,
            lessons_remaining: remaining,
            estimated_completion_date: add_days(date(2025, 1, 1), days),
            days_until_completion: days,
            confidence_level: level,
        }
    }

    #[test]
    fn early_program_gets_halfway_and_completion() {
        let milestones = MilestoneProjector::default().project(
            &[prediction("Rust", 2, 8, 4, ConfidenceLevel::Low)],
            date(2025, 1, 1),
        );

        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].label, "50% of Rust");
        // 3 of 8 remaining lessons over 4 days
        assert_eq!(milestones[0].estimated_date, date(2025, 1, 3));
        assert_eq!(milestones[0].confidence, 50);
        assert_eq!(milestones[1].label, "Complete Rust");
        assert_eq!(milestones[1].estimated_date, date(2025, 1, 5));
        assert_eq!(milestones[1].confidence, 55);
    }

    #[test]
    fn past_halfway_only_projects_completion() {
        let milestones = MilestoneProjector::default().project(
            &[prediction("Go", 6, 4, 2, ConfidenceLevel::High)],
            date(2025, 1, 1),
        );

        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].confidence, 90);
    }

    #[test]
    fn milestones_sorted_by_date() {
        let milestones = MilestoneProjector::default().project(
            &[
                prediction("Slow", 1, 9, 45, ConfidenceLevel::Low),
                prediction("Fast", 5, 5, 3, ConfidenceLevel::Medium),
            ],
            date(2025, 1, 1),
        );

        let dates: Vec<NaiveDate> = milestones.iter().map(|m| m.estimated_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(milestones.len(), 3);
    }
}
