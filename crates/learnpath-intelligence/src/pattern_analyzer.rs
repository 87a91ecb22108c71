// ABOUTME: Learning pattern analysis over a recent window of lesson completions
// ABOUTME: Mines best time slot, best weekday, session length, modality, consistency and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::PatternConfig;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use learnpath_core::models::{ActivityWindow, LearningPattern, SessionTiming, TimeOfDay};
use std::collections::{BTreeMap, BTreeSet};

/// Weekdays in tie-breaking order
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Learning pattern analyzer
#[derive(Debug, Clone, Default)]
pub struct LearningPatternAnalyzer {
    config: PatternConfig,
}

impl LearningPatternAnalyzer {
    /// Create an analyzer with explicit configuration
    #[must_use]
    pub const fn new(config: PatternConfig) -> Self {
        Self { config }
    }

    /// Window this analyzer mines, ending at `now`
    #[must_use]
    pub const fn window(&self, now: DateTime<Utc>) -> ActivityWindow {
        ActivityWindow {
            ends_at: now,
            days: self.config.window_days,
            max_rows: self.config.max_rows,
        }
    }

    /// Mine a pattern from completion rows, most recent first
    ///
    /// Rows beyond the configured cap are ignored. Returns `None` when there
    /// is no activity at all; callers fall back to fixed defaults.
    #[must_use]
    pub fn analyze(&self, rows: &[SessionTiming]) -> Option<LearningPattern> {
        let rows = &rows[..rows.len().min(self.config.max_rows)];
        if rows.is_empty() {
            return None;
        }

        let mut slot_counts = [0_u32; 4];
        let mut day_counts = [0_u32; 7];
        let mut content_counts: BTreeMap<&str, u32> = BTreeMap::new();
        let mut active_dates: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut total_watch_seconds = 0_u64;

        for row in rows {
            let at = row.completed_at;
            slot_counts[TimeOfDay::from_hour(at.hour()).index()] += 1;
            day_counts[at.weekday().num_days_from_monday() as usize] += 1;
            *content_counts.entry(row.content_type.as_str()).or_insert(0) += 1;
            active_dates.insert(at.date_naive());
            total_watch_seconds += row.watch_seconds;
        }

        let best_time_of_day = TimeOfDay::ALL[first_max_index(&slot_counts)];
        let most_productive_day = WEEKDAYS[first_max_index(&day_counts)];
        let preferred_content_type = content_counts
            .iter()
            .fold(None::<(&str, u32)>, |best, (&kind, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((kind, count)),
            })
            .map(|(kind, _)| kind.to_owned())
            .unwrap_or_default();

        let avg_session_minutes = (total_watch_seconds as f64
            / rows.len() as f64
            / SECONDS_PER_MINUTE)
            .round() as u32;

        Some(LearningPattern {
            best_time_of_day,
            most_productive_day,
            avg_session_minutes,
            preferred_content_type,
            consistency_score: self.consistency_score(active_dates.len()),
            streak_potential: self.streak_potential(&active_dates),
        })
    }

    /// Share of window days with any activity
    fn consistency_score(&self, distinct_active_days: usize) -> u8 {
        let window_days = f64::from(self.config.window_days.max(1));
        percent(distinct_active_days as f64 / window_days)
    }

    /// Consecutive-day run over the most recent active dates
    ///
    /// Counts gaps of at most one day between successive recent dates,
    /// starting from the most recent and stopping at the first larger gap.
    fn streak_potential(&self, active_dates: &BTreeSet<NaiveDate>) -> u8 {
        let streak_window = self.config.streak_window_days.max(1);
        let recent: Vec<NaiveDate> = active_dates
            .iter()
            .rev()
            .take(streak_window)
            .copied()
            .collect();

        let consecutive = recent
            .windows(2)
            .take_while(|pair| {
                (pair[0] - pair[1]).num_days() <= self.config.max_streak_gap_days
            })
            .count();

        percent(consecutive as f64 / streak_window as f64)
    }
}

/// Index of the first maximum, so earlier entries win ties
fn first_max_index(counts: &[u32]) -> usize {
    counts
        .iter()
        .enumerate()
        .fold((0, 0), |(best_idx, best), (idx, &count)| {
            if count > best {
                (idx, count)
            } else {
                (best_idx, best)
            }
        })
        .0
}

/// Round a ratio to a percentage clamped to `[0, 100]`
fn percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn row(completed_at: DateTime<Utc>, watch_seconds: u64, content_type: &str) -> SessionTiming {
        SessionTiming {
            completed_at,
            watch_seconds,
            content_type: content_type.to_owned(),
        }
    }

    #[test]
    fn no_rows_means_no_pattern() {
        assert!(LearningPatternAnalyzer::default().analyze(&[]).is_none());
    }

    #[test]
    fn mines_slot_day_and_modality() {
        // 2025-03-05 is a Wednesday
        let rows = vec![
            row(at(2025, 3, 5, 19), 600, "video"),
            row(at(2025, 3, 5, 20), 1200, "video"),
            row(at(2025, 3, 4, 9), 600, "quiz"),
        ];

        let pattern = LearningPatternAnalyzer::default().analyze(&rows).unwrap();

        assert_eq!(pattern.best_time_of_day, TimeOfDay::Evening);
        assert_eq!(pattern.most_productive_day, Weekday::Wed);
        assert_eq!(pattern.preferred_content_type, "video");
        assert_eq!(pattern.avg_session_minutes, 13);
        assert_eq!(pattern.consistency_score, 7);
    }

    #[test]
    fn ties_resolve_in_canonical_order() {
        // Tuesday morning quiz vs Monday night video: one each
        let rows = vec![
            row(at(2025, 3, 4, 8), 0, "video"),
            row(at(2025, 3, 3, 23), 0, "quiz"),
        ];
        let pattern = LearningPatternAnalyzer::default().analyze(&rows).unwrap();

        assert_eq!(pattern.best_time_of_day, TimeOfDay::Morning);
        assert_eq!(pattern.most_productive_day, Weekday::Mon);
        assert_eq!(pattern.preferred_content_type, "quiz");
        assert_eq!(pattern.avg_session_minutes, 0);
    }

    #[test]
    fn seven_consecutive_days_score_six_gaps() {
        let end = at(2025, 3, 10, 12);
        let rows: Vec<SessionTiming> = (0..7)
            .map(|offset| row(end - Duration::days(offset), 300, "text"))
            .collect();

        let pattern = LearningPatternAnalyzer::default().analyze(&rows);
        assert_eq!(pattern.map(|p| p.streak_potential), Some(86));
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let end = at(2025, 3, 10, 12);
        let rows = vec![
            row(end, 300, "text"),
            row(end - Duration::days(1), 300, "text"),
            row(end - Duration::days(3), 300, "text"),
            row(end - Duration::days(4), 300, "text"),
        ];

        let pattern = LearningPatternAnalyzer::default().analyze(&rows);
        assert_eq!(pattern.map(|p| p.streak_potential), Some(14));
    }

    #[test]
    fn scores_stay_in_range_for_dense_history() {
        let end = at(2025, 3, 31, 12);
        let rows: Vec<SessionTiming> = (0..100)
            .map(|i| row(end - Duration::hours(i * 7), 900, "video"))
            .collect();

        let pattern = LearningPatternAnalyzer::default().analyze(&rows).unwrap();
        assert!(pattern.consistency_score <= 100);
        assert!(pattern.streak_potential <= 100);
    }

    #[test]
    fn rows_beyond_cap_are_ignored() {
        let config = PatternConfig {
            max_rows: 1,
            ..PatternConfig::default()
        };
        let rows = vec![
            row(at(2025, 3, 5, 9), 60, "quiz"),
            row(at(2025, 3, 4, 20), 6000, "video"),
        ];
        let pattern = LearningPatternAnalyzer::new(config).analyze(&rows).unwrap();
        assert_eq!(pattern.preferred_content_type, "quiz");
        assert_eq!(pattern.avg_session_minutes, 1);
    }
}
