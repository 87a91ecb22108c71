// ABOUTME: Rule-based learning tips derived from a mined learning pattern
// ABOUTME: Fixed thresholds select tips; output is stably ordered high, medium, low
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::TipConfig;
use learnpath_core::models::{
    weekday_name, LearningPattern, LearningTip, TipCategory, TipPriority,
};

/// Tip generator
#[derive(Debug, Clone, Default)]
pub struct TipGenerator {
    config: TipConfig,
}

impl TipGenerator {
    /// Create a generator with explicit configuration
    #[must_use]
    pub const fn new(config: TipConfig) -> Self {
        Self { config }
    }

    /// Tips for a learner, falling back to starter tips without a pattern
    #[must_use]
    pub fn generate(&self, pattern: Option<&LearningPattern>) -> Vec<LearningTip> {
        let Some(pattern) = pattern else {
            return Self::starter_tips();
        };

        let mut tips = Vec::new();

        if pattern.consistency_score < self.config.low_consistency {
            tips.push(LearningTip::new(
                TipCategory::Engagement,
                "Try to learn a little every day; even 10 minutes helps build consistency",
                TipPriority::High,
            ));
        }

        if pattern.streak_potential < self.config.low_streak {
            tips.push(LearningTip::new(
                TipCategory::Motivation,
                "Build your streak! Daily activity increases your chance of success by 40%",
                TipPriority::Medium,
            ));
        }

        if pattern.avg_session_minutes < self.config.short_session_minutes {
            tips.push(LearningTip::new(
                TipCategory::Efficiency,
                "Consider longer sessions (20-30 min) for deeper focus and better retention",
                TipPriority::Medium,
            ));
        } else if pattern.avg_session_minutes > self.config.long_session_minutes {
            tips.push(LearningTip::new(
                TipCategory::Retention,
                "Split long sessions into shorter blocks with breaks for better retention",
                TipPriority::Low,
            ));
        }

        if pattern.preferred_content_type == self.config.passive_content_type {
            tips.push(LearningTip::new(
                TipCategory::Retention,
                "Try taking quizzes after videos to reinforce what you learned",
                TipPriority::Medium,
            ));
        }

        tips.push(LearningTip::new(
            TipCategory::Motivation,
            format!(
                "You're most productive on {}. Plan your most important lessons for that day!",
                weekday_name(pattern.most_productive_day)
            ),
            TipPriority::High,
        ));

        tips.sort_by_key(|tip| tip.priority);
        tips
    }

    fn starter_tips() -> Vec<LearningTip> {
        vec![
            LearningTip::new(
                TipCategory::Motivation,
                "Start small: 15 minutes a day is enough to get going",
                TipPriority::High,
            ),
            LearningTip::new(
                TipCategory::Efficiency,
                "Pick a fixed time to learn for better consistency",
                TipPriority::High,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use learnpath_core::models::TimeOfDay;

    fn pattern(avg_minutes: u32, consistency: u8, streak: u8, content: &str) -> LearningPattern {
        LearningPattern {
            best_time_of_day: TimeOfDay::Evening,
            most_productive_day: Weekday::Tue,
            avg_session_minutes: avg_minutes,
            preferred_content_type: content.to_owned(),
            consistency_score: consistency,
            streak_potential: streak,
        }
    }

    #[test]
    fn starter_tips_without_pattern() {
        let tips = TipGenerator::default().generate(None);
        assert_eq!(tips.len(), 2);
        assert!(tips.iter().all(|t| t.priority == TipPriority::High));
        assert_eq!(tips[0].category, TipCategory::Motivation);
        assert_eq!(tips[1].category, TipCategory::Efficiency);
    }

    #[test]
    fn short_inconsistent_sessions() {
        let tips = TipGenerator::default().generate(Some(&pattern(10, 40, 80, "text")));

        let engagement: Vec<_> = tips
            .iter()
            .filter(|t| t.category == TipCategory::Engagement)
            .collect();
        assert_eq!(engagement.len(), 1);
        assert_eq!(engagement[0].priority, TipPriority::High);

        let efficiency: Vec<_> = tips
            .iter()
            .filter(|t| t.category == TipCategory::Efficiency)
            .collect();
        assert_eq!(efficiency.len(), 1);
        assert_eq!(efficiency[0].priority, TipPriority::Medium);

        let day_tips: Vec<_> = tips
            .iter()
            .filter(|t| t.category == TipCategory::Motivation && t.text.contains("Tuesday"))
            .collect();
        assert_eq!(day_tips.len(), 1);
    }

    #[test]
    fn sorted_high_medium_low_and_stable() {
        let tips = TipGenerator::default().generate(Some(&pattern(90, 20, 10, "video")));

        let priorities: Vec<TipPriority> = tips.iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            [
                TipPriority::High,
                TipPriority::High,
                TipPriority::Medium,
                TipPriority::Medium,
                TipPriority::Low,
            ]
        );
        // engagement was emitted before the always-present motivation tip
        assert_eq!(tips[0].category, TipCategory::Engagement);
        assert_eq!(tips[1].category, TipCategory::Motivation);
        assert_eq!(tips[4].category, TipCategory::Retention);
    }

    #[test]
    fn healthy_pattern_only_gets_reinforcement() {
        let tips = TipGenerator::default().generate(Some(&pattern(30, 90, 90, "quiz")));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].priority, TipPriority::High);
    }
}
