// ABOUTME: Weekly study schedule built from a learning pattern and a time budget
// ABOUTME: Anchors on the most productive day and falls back to a fixed plan for new learners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::ScheduleConfig;
use chrono::Weekday;
use learnpath_core::models::{LearningPattern, OptimalSchedule, StudySession};
use std::iter;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Fixed plan for learners with no recent activity: day, time, minutes, reason
const DEFAULT_SESSIONS: [(Weekday, &str, u32, &str); 3] = [
    (Weekday::Mon, "19:00", 30, "Start the week strong"),
    (Weekday::Wed, "19:00", 30, "Midweek boost"),
    (Weekday::Sat, "10:00", 60, "Weekend focus time"),
];

/// Days filled after the anchor day, in order; a day equal to the anchor is dropped
const FALLBACK_DAYS: [(Weekday, &str); 2] = [
    (Weekday::Wed, "Midweek consistency"),
    (Weekday::Sat, "Weekend consolidation"),
];

/// Schedule optimizer
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptimizer {
    config: ScheduleConfig,
}

impl ScheduleOptimizer {
    /// Create an optimizer with explicit configuration
    #[must_use]
    pub const fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Build a weekly plan
    ///
    /// `target_hours_per_week` must already be validated as finite and
    /// non-negative.
    #[must_use]
    pub fn optimize(
        &self,
        pattern: Option<&LearningPattern>,
        target_hours_per_week: f64,
    ) -> OptimalSchedule {
        let target_minutes = target_hours_per_week * MINUTES_PER_HOUR;
        let weekly_goal_minutes = target_minutes.round() as u32;

        let Some(pattern) = pattern else {
            return self.default_schedule(weekly_goal_minutes);
        };

        let session_minutes = pattern
            .avg_session_minutes
            .max(self.config.min_session_minutes);
        let sessions_per_week = (target_minutes / f64::from(session_minutes)).ceil() as u32;
        let minutes_per_session = if sessions_per_week == 0 {
            0
        } else {
            (target_minutes / f64::from(sessions_per_week)).round() as u32
        };

        let time = self
            .config
            .slot_times
            .for_slot(pattern.best_time_of_day)
            .to_owned();
        let anchor = pattern.most_productive_day;

        let entries = iter::once((anchor, "Your most productive day and time"))
            .chain(
                FALLBACK_DAYS
                    .into_iter()
                    .filter(|(day, _)| *day != anchor),
            )
            .take((sessions_per_week as usize).min(self.config.max_entries))
            .map(|(day, reason)| StudySession {
                day,
                time: time.clone(),
                duration_minutes: minutes_per_session,
                reason: reason.to_owned(),
            })
            .collect();

        OptimalSchedule {
            sessions: entries,
            weekly_goal_minutes,
            sessions_per_week,
        }
    }

    fn default_schedule(&self, weekly_goal_minutes: u32) -> OptimalSchedule {
        let sessions = DEFAULT_SESSIONS
            .iter()
            .take(self.config.default_sessions_per_week as usize)
            .map(|&(day, time, duration_minutes, reason)| StudySession {
                day,
                time: time.to_owned(),
                duration_minutes,
                reason: reason.to_owned(),
            })
            .collect();

        OptimalSchedule {
            sessions,
            weekly_goal_minutes,
            sessions_per_week: self.config.default_sessions_per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::models::TimeOfDay;

    fn pattern(day: Weekday, slot: TimeOfDay, avg_minutes: u32) -> LearningPattern {
        LearningPattern {
            best_time_of_day: slot,
            most_productive_day: day,
            avg_session_minutes: avg_minutes,
            preferred_content_type: "video".to_owned(),
            consistency_score: 40,
            streak_potential: 30,
        }
    }

    #[test]
    fn no_pattern_returns_fixed_plan() {
        let schedule = ScheduleOptimizer::default().optimize(None, 3.0);

        assert_eq!(schedule.sessions_per_week, 3);
        assert_eq!(schedule.weekly_goal_minutes, 180);
        let days: Vec<Weekday> = schedule.sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, [Weekday::Mon, Weekday::Wed, Weekday::Sat]);
    }

    #[test]
    fn personalized_plan_anchors_on_best_day() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Thu, TimeOfDay::Morning, 60)), 3.0);

        assert_eq!(schedule.sessions_per_week, 3);
        assert_eq!(schedule.sessions.len(), 3);
        assert_eq!(schedule.sessions[0].day, Weekday::Thu);
        assert_eq!(schedule.sessions[0].time, "09:00");
        assert_eq!(schedule.sessions[0].duration_minutes, 60);
        assert_eq!(schedule.sessions[1].day, Weekday::Wed);
        assert_eq!(schedule.sessions[2].day, Weekday::Sat);
    }

    #[test]
    fn anchor_on_fallback_day_shortens_plan() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Wed, TimeOfDay::Evening, 30)), 3.0);

        let days: Vec<Weekday> = schedule.sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, [Weekday::Wed, Weekday::Sat]);
        assert_eq!(schedule.sessions_per_week, 6);
        assert_eq!(schedule.sessions[0].time, "19:00");
        assert_eq!(schedule.sessions[1].reason, "Weekend consolidation");
    }

    #[test]
    fn monday_is_never_a_fallback_day() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Sat, TimeOfDay::Morning, 30)), 3.0);

        let days: Vec<Weekday> = schedule.sessions.iter().map(|s| s.day).collect();
        assert_eq!(days, [Weekday::Sat, Weekday::Wed]);
    }

    #[test]
    fn long_sessions_need_fewer_entries() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Sun, TimeOfDay::Night, 120)), 3.0);

        assert_eq!(schedule.sessions_per_week, 2);
        assert_eq!(schedule.sessions.len(), 2);
        assert_eq!(schedule.sessions[0].duration_minutes, 90);
        assert_eq!(schedule.sessions[0].time, "21:00");
    }

    #[test]
    fn unrecorded_watch_time_counts_as_one_minute() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Mon, TimeOfDay::Afternoon, 0)), 1.0);

        assert_eq!(schedule.sessions_per_week, 60);
        assert_eq!(schedule.sessions.len(), 3);
        assert_eq!(schedule.sessions[0].duration_minutes, 1);
    }

    #[test]
    fn zero_budget_yields_empty_plan() {
        let schedule = ScheduleOptimizer::default()
            .optimize(Some(&pattern(Weekday::Mon, TimeOfDay::Afternoon, 20)), 0.0);

        assert_eq!(schedule.sessions_per_week, 0);
        assert!(schedule.sessions.is_empty());
        assert_eq!(schedule.weekly_goal_minutes, 0);
    }
}
