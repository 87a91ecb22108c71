// ABOUTME: Learner profile builder aggregating raw activity into a UserProfile snapshot
// ABOUTME: Queries the activity store concurrently and fails soft on every sub-aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # User Profile Builder
//!
//! Builds the [`UserProfile`] every recommendation strategy consumes. Each
//! sub-aggregate (completions, enrollments, quiz performance, watch time, last
//! activity) is read independently; a failing read is logged and replaced by
//! an empty or zero value so the profile is always produced.

use chrono::{DateTime, Utc};
use learnpath_core::constants::profile::{
    MAX_WEAK_TOPICS, STRENGTH_SCORE_THRESHOLD, WEAK_TOPIC_SCORE_THRESHOLD,
};
use learnpath_core::errors::AppResult;
use learnpath_core::models::{LearningSpeed, QuizResult, UserId, UserProfile};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::ActivityStore;

/// Builds learner profiles from an activity store
#[derive(Clone)]
pub struct UserProfileBuilder {
    activity: Arc<dyn ActivityStore>,
}

impl UserProfileBuilder {
    /// Create a builder reading from `activity`
    #[must_use]
    pub fn new(activity: Arc<dyn ActivityStore>) -> Self {
        Self { activity }
    }

    /// Build a profile for `user_id`
    ///
    /// `now` becomes the last active date for learners with no completions.
    pub async fn build(&self, user_id: UserId, now: DateTime<Utc>) -> UserProfile {
        let store = self.activity.as_ref();
        let (completed, enrollments, quiz, watch, last_active) = tokio::join!(
            store.completed_lesson_ids(user_id),
            store.active_enrollments(user_id),
            store.quiz_performance(user_id),
            store.average_watch_seconds(user_id),
            store.last_active_at(user_id),
        );

        let quiz = self.or_default(user_id, "quiz_performance", quiz);
        let mean_watch = self
            .or_default(user_id, "average_watch_seconds", watch)
            .unwrap_or(0.0);

        let profile = UserProfile {
            user_id,
            completed_lessons: self.or_default(user_id, "completed_lesson_ids", completed),
            enrolled_programs: self.or_default(user_id, "active_enrollments", enrollments),
            avg_quiz_score: quiz.average_score.unwrap_or(0.0),
            weak_topics: weak_topics(&quiz.results),
            strong_topics: strong_topics(&quiz.results),
            learning_speed: LearningSpeed::from_mean_watch_seconds(mean_watch),
            last_active_date: self
                .or_default(user_id, "last_active_at", last_active)
                .unwrap_or(now),
        };

        debug!(
            user_id,
            completed = profile.completed_lessons.len(),
            enrollments = profile.enrolled_programs.len(),
            weak_topics = profile.weak_topics.len(),
            speed = ?profile.learning_speed,
            "Built learner profile"
        );

        profile
    }

    fn or_default<T: Default>(&self, user_id: UserId, aggregate: &str, result: AppResult<T>) -> T {
        result.unwrap_or_else(|e| {
            warn!(
                user_id,
                store = self.activity.name(),
                aggregate,
                error = %e,
                "Profile aggregate unavailable, using empty value"
            );
            T::default()
        })
    }
}

/// Module titles scored under the weak threshold, most recent first, deduplicated and capped
#[must_use]
pub fn weak_topics(results: &[QuizResult]) -> Vec<String> {
    let mut topics = distinct_topics(results, |score| score < WEAK_TOPIC_SCORE_THRESHOLD);
    topics.truncate(MAX_WEAK_TOPICS);
    topics
}

/// Module titles scored at or above the strength threshold, most recent first, deduplicated
#[must_use]
pub fn strong_topics(results: &[QuizResult]) -> Vec<String> {
    distinct_topics(results, |score| score >= STRENGTH_SCORE_THRESHOLD)
}

fn distinct_topics(results: &[QuizResult], keep: impl Fn(f64) -> bool) -> Vec<String> {
    let mut seen = HashSet::new();
    results
        .iter()
        .filter(|result| keep(result.score))
        .filter(|result| seen.insert(result.module_title.as_str()))
        .map(|result| result.module_title.clone())
        .collect()
}
