// ABOUTME: Learner profile snapshot consumed by every recommendation strategy
// ABOUTME: Completed lessons, enrollments, quiz performance, weak topics, and learning speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{LessonId, ProgramId, UserId};
use crate::constants::profile::{FAST_WATCH_SECONDS, SLOW_WATCH_SECONDS};

/// How quickly a learner works through lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningSpeed {
    /// Mean watch time under 10 minutes
    Fast,
    /// Between the fast and slow thresholds
    Average,
    /// Mean watch time over 20 minutes
    Slow,
}

impl LearningSpeed {
    /// Classify a mean watch time in seconds
    #[must_use]
    pub fn from_mean_watch_seconds(seconds: f64) -> Self {
        if seconds < FAST_WATCH_SECONDS {
            Self::Fast
        } else if seconds > SLOW_WATCH_SECONDS {
            Self::Slow
        } else {
            Self::Average
        }
    }
}

/// Snapshot of a learner built fresh for each request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Learner identifier
    pub user_id: UserId,
    /// Lessons the learner completed
    pub completed_lessons: BTreeSet<LessonId>,
    /// Active enrollments in enrollment order; the first entry drives content-based matching
    pub enrolled_programs: Vec<ProgramId>,
    /// Mean quiz score in `[0, 100]`
    pub avg_quiz_score: f64,
    /// Module titles with quiz scores under 70, most recent first, at most 5
    pub weak_topics: Vec<String>,
    /// Module titles with quiz scores of 80 or more, most recent first
    pub strong_topics: Vec<String>,
    /// Speed bucket from mean watch time
    pub learning_speed: LearningSpeed,
    /// Most recent completion, or the build instant for learners with none
    pub last_active_date: DateTime<Utc>,
}

impl UserProfile {
    /// Empty profile used when every sub-aggregate is unavailable
    #[must_use]
    pub fn empty(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            completed_lessons: BTreeSet::new(),
            enrolled_programs: Vec::new(),
            avg_quiz_score: 0.0,
            weak_topics: Vec::new(),
            strong_topics: Vec::new(),
            learning_speed: LearningSpeed::from_mean_watch_seconds(0.0),
            last_active_date: now,
        }
    }

    /// Whether the learner has at least one active enrollment
    #[must_use]
    pub fn has_enrollments(&self) -> bool {
        !self.enrolled_programs.is_empty()
    }

    /// The weak topic remediation targets first
    #[must_use]
    pub fn strongest_weak_topic(&self) -> Option<&str> {
        self.weak_topics.first().map(String::as_str)
    }
}
