// ABOUTME: Activity aggregate types returned by the activity store
// ABOUTME: Quiz results, session timings, per-program progress, and the analysis window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{LessonId, ModuleId, ProgramId};
use crate::constants::pattern::{ANALYSIS_WINDOW_DAYS, MAX_ACTIVITY_ROWS};

/// One graded quiz attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Quiz lesson
    pub lesson_id: LessonId,
    /// Module containing the quiz
    pub module_id: ModuleId,
    /// Module title, used as the topic name
    pub module_title: String,
    /// Score in `[0, 100]`
    pub score: f64,
    /// When the attempt was recorded, if known
    pub completed_at: Option<DateTime<Utc>>,
}

/// Quiz aggregates for a learner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizPerformance {
    /// Mean quiz score, `None` when the learner has no graded quizzes
    pub average_score: Option<f64>,
    /// Individual graded attempts, most recent first
    pub results: Vec<QuizResult>,
}

/// A completed lesson inside the analysis window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTiming {
    /// Completion instant
    pub completed_at: DateTime<Utc>,
    /// Recorded watch time in seconds
    pub watch_seconds: u64,
    /// Lesson content type (`video`, `text`, `quiz`, ...)
    pub content_type: String,
}

/// Aggregate progress of a learner through one actively enrolled program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramProgress {
    /// Program identifier
    pub program_id: ProgramId,
    /// Program title
    pub program_title: String,
    /// Published lessons in the program
    pub total_lessons: u32,
    /// Published lessons the learner completed
    pub completed_lessons: u32,
    /// Distinct calendar days with a completion in this program
    pub days_active: u32,
}

/// Time window for session mining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    /// End of the window (inclusive)
    pub ends_at: DateTime<Utc>,
    /// Window length in days
    pub days: u32,
    /// Most recent rows kept
    pub max_rows: usize,
}

impl ActivityWindow {
    /// Standard 30-day, 100-row window ending at `ends_at`
    #[must_use]
    pub const fn ending_at(ends_at: DateTime<Utc>) -> Self {
        Self {
            ends_at,
            days: ANALYSIS_WINDOW_DAYS,
            max_rows: MAX_ACTIVITY_ROWS,
        }
    }

    /// Earliest instant inside the window
    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.ends_at - Duration::days(i64::from(self.days))
    }

    /// Whether an instant falls inside the window
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.starts_at() && instant <= self.ends_at
    }
}
