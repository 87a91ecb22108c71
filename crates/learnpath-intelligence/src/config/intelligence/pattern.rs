// ABOUTME: Learning pattern mining configuration: window length, row cap, and streak window
// ABOUTME: Defaults mine the last 30 days, 100 most recent completions, 7 recent dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_core::constants::pattern::{
    ANALYSIS_WINDOW_DAYS, MAX_ACTIVITY_ROWS, MAX_STREAK_GAP_DAYS, STREAK_WINDOW_DAYS,
};
use serde::{Deserialize, Serialize};

/// Pattern Analyzer Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Days of history mined
    pub window_days: u32,
    /// Most recent rows kept
    pub max_rows: usize,
    /// Distinct recent dates used for streak potential
    pub streak_window_days: usize,
    /// Largest gap between dates that keeps a streak alive
    pub max_streak_gap_days: i64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            window_days: ANALYSIS_WINDOW_DAYS,
            max_rows: MAX_ACTIVITY_ROWS,
            streak_window_days: STREAK_WINDOW_DAYS,
            max_streak_gap_days: MAX_STREAK_GAP_DAYS,
        }
    }
}
