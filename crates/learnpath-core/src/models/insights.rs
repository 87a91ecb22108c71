// ABOUTME: Computed insight records: learning patterns, forecasts, schedules, milestones, tips
// ABOUTME: Request-scoped outputs serialized as plain records for callers that own transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::ProgramId;
use crate::constants::pattern::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MORNING_START_HOUR, NIGHT_START_HOUR,
};

/// Full English weekday name (`Monday`, `Tuesday`, ...)
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter writing weekdays as full English names
mod weekday_serde {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Weekday>().map_err(serde::de::Error::custom)
    }
}

/// Time-of-day bucket for completions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 21:59
    Evening,
    /// 22:00 - 05:59
    Night,
}

impl TimeOfDay {
    /// Buckets in tie-breaking order
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Bucket an hour of day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= MORNING_START_HOUR && hour < AFTERNOON_START_HOUR {
            Self::Morning
        } else if hour >= AFTERNOON_START_HOUR && hour < EVENING_START_HOUR {
            Self::Afternoon
        } else if hour >= EVENING_START_HOUR && hour < NIGHT_START_HOUR {
            Self::Evening
        } else {
            Self::Night
        }
    }

    /// Position in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 1,
            Self::Evening => 2,
            Self::Night => 3,
        }
    }
}

/// Mined habits over the recent activity window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPattern {
    /// Time slot with the most completions
    pub best_time_of_day: TimeOfDay,
    /// Weekday with the most completions
    #[serde(with = "weekday_serde")]
    pub most_productive_day: Weekday,
    /// Mean watch time per completion, rounded minutes
    pub avg_session_minutes: u32,
    /// Most frequent content type
    pub preferred_content_type: String,
    /// Share of window days with activity, `[0, 100]`
    pub consistency_score: u8,
    /// Recent consecutive-day run, `[0, 100]`
    pub streak_potential: u8,
}

/// Coarse trust bucket for a completion forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Enough completions over enough days
    High,
    /// Neither high nor low
    Medium,
    /// Too few completions or active days
    Low,
}

/// Completion forecast for one enrolled program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPrediction {
    /// Program identifier
    pub program_id: ProgramId,
    /// Program title
    pub program_title: String,
    /// Completed share, `[0, 100]`
    pub progress_percent: u8,
    /// Lessons completed so far
    pub lessons_completed: u32,
    /// Lessons still to complete, always positive
    pub lessons_remaining: u32,
    /// Forecast completion day
    pub estimated_completion_date: NaiveDate,
    /// Days from today until completion
    pub days_until_completion: u32,
    /// Trust bucket
    pub confidence_level: ConfidenceLevel,
}

impl ProgressPrediction {
    /// Published lessons in the program
    #[must_use]
    pub const fn total_lessons(&self) -> u32 {
        self.lessons_completed + self.lessons_remaining
    }
}

/// One suggested study slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    /// Day of the week
    #[serde(with = "weekday_serde")]
    pub day: Weekday,
    /// Clock time, `HH:MM`
    pub time: String,
    /// Planned length
    pub duration_minutes: u32,
    /// Why this slot was chosen
    pub reason: String,
}

/// Weekly study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSchedule {
    /// Suggested slots in priority order
    pub sessions: Vec<StudySession>,
    /// Weekly study target in minutes
    pub weekly_goal_minutes: u32,
    /// Sessions needed per week to reach the goal
    pub sessions_per_week: u32,
}

/// Dated progress milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneProjection {
    /// Short label naming the program
    pub label: String,
    /// Projected day
    pub estimated_date: NaiveDate,
    /// Confidence in `[0, 100]`
    pub confidence: u8,
    /// Longer description
    pub description: String,
}

/// Area a learning tip addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    /// Keeping the learner going
    Motivation,
    /// Getting more out of study time
    Efficiency,
    /// Remembering what was learned
    Retention,
    /// Showing up regularly
    Engagement,
}

/// Tip ordering bucket; declaration order is sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    /// Shown first
    High,
    /// Shown second
    Medium,
    /// Shown last
    Low,
}

/// Qualitative, rule-based advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTip {
    /// Area addressed
    pub category: TipCategory,
    /// Advice text
    pub text: String,
    /// Ordering bucket
    pub priority: TipPriority,
}

impl LearningTip {
    /// Convenience constructor
    #[must_use]
    pub fn new(category: TipCategory, text: impl Into<String>, priority: TipPriority) -> Self {
        Self {
            category,
            text: text.into(),
            priority,
        }
    }
}

/// Strengths, improvement areas, and the next journey milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningInsights {
    /// Topics the learner is strong in
    pub strengths: Vec<String>,
    /// Topics to revisit
    pub improvements: Vec<String>,
    /// Next qualitative milestone
    pub next_milestone: String,
}
