// ABOUTME: Schedule and learning-tip configuration
// ABOUTME: Default weekly target, slot clock times, and the thresholds behind each tip rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_core::constants::schedule::{
    AFTERNOON_TIME, DEFAULT_SESSIONS_PER_WEEK, EVENING_TIME, MAX_SCHEDULE_ENTRIES,
    MIN_SESSION_MINUTES, MORNING_TIME, NIGHT_TIME,
};
use learnpath_core::constants::tips::{
    LONG_SESSION_MINUTES, LOW_CONSISTENCY_THRESHOLD, LOW_STREAK_THRESHOLD, SHORT_SESSION_MINUTES,
    VIDEO_CONTENT_TYPE,
};
use learnpath_core::models::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Representative clock time for each time-of-day slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotTimes {
    /// Morning slot
    pub morning: String,
    /// Afternoon slot
    pub afternoon: String,
    /// Evening slot
    pub evening: String,
    /// Night slot
    pub night: String,
}

impl SlotTimes {
    /// Clock time for a slot
    #[must_use]
    pub fn for_slot(&self, slot: TimeOfDay) -> &str {
        match slot {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
            TimeOfDay::Night => &self.night,
        }
    }
}

impl Default for SlotTimes {
    fn default() -> Self {
        Self {
            morning: MORNING_TIME.to_owned(),
            afternoon: AFTERNOON_TIME.to_owned(),
            evening: EVENING_TIME.to_owned(),
            night: NIGHT_TIME.to_owned(),
        }
    }
}

/// Schedule Optimizer Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Sessions in the fixed schedule for learners without a pattern
    pub default_sessions_per_week: u32,
    /// Upper bound on personalized entries
    pub max_entries: usize,
    /// Smallest session length used as a divisor
    pub min_session_minutes: u32,
    /// Clock time per slot
    pub slot_times: SlotTimes,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            default_sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
            max_entries: MAX_SCHEDULE_ENTRIES,
            min_session_minutes: MIN_SESSION_MINUTES,
            slot_times: SlotTimes::default(),
        }
    }
}

/// Tip Generator Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipConfig {
    /// Consistency below this triggers an engagement tip
    pub low_consistency: u8,
    /// Streak potential below this triggers a motivation tip
    pub low_streak: u8,
    /// Sessions shorter than this trigger an efficiency tip
    pub short_session_minutes: u32,
    /// Sessions longer than this trigger a retention tip
    pub long_session_minutes: u32,
    /// Preferred content type that triggers the quiz tip
    pub passive_content_type: String,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            low_consistency: LOW_CONSISTENCY_THRESHOLD,
            low_streak: LOW_STREAK_THRESHOLD,
            short_session_minutes: SHORT_SESSION_MINUTES,
            long_session_minutes: LONG_SESSION_MINUTES,
            passive_content_type: VIDEO_CONTENT_TYPE.to_owned(),
        }
    }
}
