// ABOUTME: Completion-date forecasting for enrolled programs from historical velocity
// ABOUTME: Applies a minimum velocity floor and buckets each forecast into a confidence level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::PredictionConfig;
use chrono::{Days, NaiveDate};
use learnpath_core::models::{ConfidenceLevel, ProgramProgress, ProgressPrediction};
use tracing::debug;

/// Progress predictor
#[derive(Debug, Clone, Default)]
pub struct ProgressPredictor {
    config: PredictionConfig,
}

impl ProgressPredictor {
    /// Create a predictor with explicit configuration
    #[must_use]
    pub const fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    /// Forecast completion for every unfinished program
    ///
    /// Programs without published lessons or with nothing remaining are
    /// skipped. Velocity is `completed / days_active`, never below the
    /// configured floor.
    #[must_use]
    pub fn predict(
        &self,
        programs: &[ProgramProgress],
        today: NaiveDate,
    ) -> Vec<ProgressPrediction> {
        programs
            .iter()
            .filter_map(|program| self.predict_program(program, today))
            .collect()
    }

    fn predict_program(
        &self,
        program: &ProgramProgress,
        today: NaiveDate,
    ) -> Option<ProgressPrediction> {
        if program.total_lessons == 0 {
            return None;
        }
        let completed = program.completed_lessons.min(program.total_lessons);
        let remaining = program.total_lessons - completed;
        if remaining == 0 {
            debug!(program_id = program.program_id, "program complete, no forecast");
            return None;
        }

        let days_active = program.days_active.max(self.config.min_days_active).max(1);
        let lessons_per_day = f64::from(completed) / f64::from(days_active);
        let velocity = lessons_per_day.max(self.config.min_lessons_per_day);
        let days_until_completion = (f64::from(remaining) / velocity).ceil() as u32;

        let progress_percent =
            (f64::from(completed) / f64::from(program.total_lessons) * 100.0).round() as u8;

        Some(ProgressPrediction {
            program_id: program.program_id,
            program_title: program.program_title.clone(),
            progress_percent,
            lessons_completed: completed,
            lessons_remaining: remaining,
            estimated_completion_date: add_days(today, days_until_completion),
            days_until_completion,
            confidence_level: self.confidence_level(completed, days_active),
        })
    }

    /// `high` needs enough completions over enough days; too few of either is `low`
    #[must_use]
    pub const fn confidence_level(&self, completed: u32, days_active: u32) -> ConfidenceLevel {
        if completed >= self.config.high_min_completed && days_active >= self.config.high_min_days
        {
            ConfidenceLevel::High
        } else if completed < self.config.low_min_completed
            || days_active < self.config.low_min_days
        {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::Medium
        }
    }
}

/// Calendar arithmetic that saturates instead of overflowing
pub(crate) fn add_days(day: NaiveDate, days: u32) -> NaiveDate {
    day.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
