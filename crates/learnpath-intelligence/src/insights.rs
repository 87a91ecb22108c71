// ABOUTME: Learning insights summary of strengths, improvement areas, and the next milestone
// ABOUTME: Derived from a learner profile with fixed fallbacks for new or unreadable learners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_core::constants::insights::{
    ALMOST_DONE_PERCENT, ASSUMED_REMAINING_LESSONS, HALFWAY_PERCENT, MAX_IMPROVEMENTS,
    MAX_STRENGTHS, QUARTER_PERCENT,
};
use learnpath_core::models::{LearningInsights, UserProfile};

/// Summarizes a profile into human-readable insights
pub struct InsightsSummarizer;

impl InsightsSummarizer {
    /// Strengths, improvement areas, and next milestone for a profile
    #[must_use]
    pub fn summarize(profile: &UserProfile) -> LearningInsights {
        let strengths = if profile.strong_topics.is_empty() {
            vec!["You're just getting started!".to_owned()]
        } else {
            profile
                .strong_topics
                .iter()
                .take(MAX_STRENGTHS)
                .cloned()
                .collect()
        };

        let improvements = if profile.weak_topics.is_empty() {
            vec!["Keep practicing and growing".to_owned()]
        } else {
            profile
                .weak_topics
                .iter()
                .take(MAX_IMPROVEMENTS)
                .cloned()
                .collect()
        };

        LearningInsights {
            strengths,
            improvements,
            next_milestone: Self::next_milestone(profile.completed_lessons.len()).to_owned(),
        }
    }

    /// Summary used when the profile could not be read
    #[must_use]
    pub fn fallback() -> LearningInsights {
        LearningInsights {
            strengths: Vec::new(),
            improvements: Vec::new(),
            next_milestone: "Start your learning journey today".to_owned(),
        }
    }

    /// Milestone text for a completed lesson count
    #[must_use]
    pub fn next_milestone(completed: usize) -> &'static str {
        let horizon = (completed + ASSUMED_REMAINING_LESSONS).max(1);
        let percent = (completed as f64 / horizon as f64 * 100.0).round() as u32;

        if percent >= ALMOST_DONE_PERCENT {
            "Almost done with your program!"
        } else if percent >= HALFWAY_PERCENT {
            "Halfway through your learning journey"
        } else if percent >= QUARTER_PERCENT {
            "A quarter of your journey completed"
        } else {
            "Complete your first lesson"
        }
    }
}
