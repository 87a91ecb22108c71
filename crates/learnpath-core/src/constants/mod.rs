// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rule thresholds, strategy priors, and default values for the LearnPath engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Every fixed number the heuristics depend on lives here, grouped by the
//! component that consumes it. Configuration defaults are built from these
//! values, and tests assert against them by name.

/// Learner profile thresholds
pub mod profile {
    /// Quiz score below which a module counts as a weak topic
    pub const WEAK_TOPIC_SCORE_THRESHOLD: f64 = 70.0;
    /// Quiz score at or above which a module counts as a strength
    pub const STRENGTH_SCORE_THRESHOLD: f64 = 80.0;
    /// Maximum number of weak topics kept on a profile
    pub const MAX_WEAK_TOPICS: usize = 5;
    /// Mean watch time (seconds) below which a learner is fast (10 minutes)
    pub const FAST_WATCH_SECONDS: f64 = 600.0;
    /// Mean watch time (seconds) above which a learner is slow (20 minutes)
    pub const SLOW_WATCH_SECONDS: f64 = 1200.0;
}

/// Recommendation strategy priors and per-strategy limits
pub mod recommendation {
    /// Sequential strategy confidence prior
    pub const SEQUENTIAL_CONFIDENCE: u8 = 95;
    /// Knowledge-gap strategy confidence prior
    pub const KNOWLEDGE_GAP_CONFIDENCE: u8 = 80;
    /// Collaborative strategy confidence prior
    pub const COLLABORATIVE_CONFIDENCE: u8 = 75;
    /// Content-based strategy confidence prior
    pub const CONTENT_BASED_CONFIDENCE: u8 = 70;

    /// Next lessons per enrolled program
    pub const SEQUENTIAL_LIMIT: usize = 3;
    /// Remedial lessons for the strongest weak topic
    pub const KNOWLEDGE_GAP_LIMIT: usize = 2;
    /// Similar programs at the same difficulty
    pub const CONTENT_BASED_LIMIT: usize = 2;
    /// Lessons completed by neighbors
    pub const COLLABORATIVE_LIMIT: usize = 2;

    /// Shared completions needed for another learner to count as a neighbor
    pub const MIN_SHARED_COMPLETIONS: usize = 3;
    /// Maximum neighbors considered
    pub const MAX_NEIGHBORS: usize = 10;

    /// Estimated lesson length when the catalog has none
    pub const DEFAULT_ESTIMATED_MINUTES: u32 = 15;
    /// Recommendations returned when the caller does not specify a limit
    pub const DEFAULT_LIMIT: usize = 10;
    /// Upper bound on any confidence value
    pub const MAX_CONFIDENCE: u8 = 100;
}

/// Learning pattern mining
pub mod pattern {
    /// Days of activity considered
    pub const ANALYSIS_WINDOW_DAYS: u32 = 30;
    /// Most recent rows considered within the window
    pub const MAX_ACTIVITY_ROWS: usize = 100;
    /// Distinct recent dates considered for streak potential
    pub const STREAK_WINDOW_DAYS: usize = 7;
    /// Largest gap (days) between two dates that keeps a streak alive
    pub const MAX_STREAK_GAP_DAYS: i64 = 1;

    /// Morning slot starts at this hour (inclusive)
    pub const MORNING_START_HOUR: u32 = 6;
    /// Afternoon slot starts at this hour (inclusive)
    pub const AFTERNOON_START_HOUR: u32 = 12;
    /// Evening slot starts at this hour (inclusive)
    pub const EVENING_START_HOUR: u32 = 18;
    /// Night slot starts at this hour (inclusive) and wraps to morning
    pub const NIGHT_START_HOUR: u32 = 22;
}

/// Completion forecasting
pub mod prediction {
    /// Velocity floor so forecasts stay finite for idle learners
    pub const MIN_LESSONS_PER_DAY: f64 = 0.2;
    /// Minimum active days used as a divisor
    pub const MIN_DAYS_ACTIVE: u32 = 1;
    /// Completed lessons needed for a high-confidence forecast
    pub const HIGH_CONFIDENCE_MIN_COMPLETED: u32 = 5;
    /// Active days needed for a high-confidence forecast
    pub const HIGH_CONFIDENCE_MIN_DAYS: u32 = 3;
    /// Forecasts with fewer completed lessons are low confidence
    pub const LOW_CONFIDENCE_MIN_COMPLETED: u32 = 2;
    /// Forecasts with fewer active days are low confidence
    pub const LOW_CONFIDENCE_MIN_DAYS: u32 = 2;
}

/// Milestone projection
pub mod milestones {
    /// Progress fraction of the halfway milestone
    pub const HALFWAY_FRACTION: f64 = 0.5;
    /// Progress percentage below which the halfway milestone is projected
    pub const HALFWAY_PERCENT: u8 = 50;

    /// Halfway milestone confidence for a high-confidence forecast
    pub const HALFWAY_HIGH: u8 = 85;
    /// Halfway milestone confidence for a medium-confidence forecast
    pub const HALFWAY_MEDIUM: u8 = 70;
    /// Halfway milestone confidence for a low-confidence forecast
    pub const HALFWAY_LOW: u8 = 50;

    /// Completion milestone confidence for a high-confidence forecast
    pub const COMPLETION_HIGH: u8 = 90;
    /// Completion milestone confidence for a medium-confidence forecast
    pub const COMPLETION_MEDIUM: u8 = 75;
    /// Completion milestone confidence for a low-confidence forecast
    pub const COMPLETION_LOW: u8 = 55;
}

/// Study schedule generation
pub mod schedule {
    /// Weekly study target when the caller gives none
    pub const DEFAULT_TARGET_HOURS_PER_WEEK: f64 = 3.0;
    /// Sessions in the default schedule
    pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 3;
    /// Upper bound on personalized schedule entries
    pub const MAX_SCHEDULE_ENTRIES: usize = 3;
    /// Shortest session length used as a divisor
    pub const MIN_SESSION_MINUTES: u32 = 1;

    /// Representative clock time for the morning slot
    pub const MORNING_TIME: &str = "09:00";
    /// Representative clock time for the afternoon slot
    pub const AFTERNOON_TIME: &str = "14:00";
    /// Representative clock time for the evening slot
    pub const EVENING_TIME: &str = "19:00";
    /// Representative clock time for the night slot
    pub const NIGHT_TIME: &str = "21:00";
}

/// Learning tip rules
pub mod tips {
    /// Consistency below this triggers an engagement tip
    pub const LOW_CONSISTENCY_THRESHOLD: u8 = 50;
    /// Streak potential below this triggers a motivation tip
    pub const LOW_STREAK_THRESHOLD: u8 = 60;
    /// Sessions shorter than this (minutes) trigger an efficiency tip
    pub const SHORT_SESSION_MINUTES: u32 = 15;
    /// Sessions longer than this (minutes) trigger a retention tip
    pub const LONG_SESSION_MINUTES: u32 = 60;
    /// Content type that triggers the quiz retention tip
    pub const VIDEO_CONTENT_TYPE: &str = "video";
}

/// Learning insights summary
pub mod insights {
    /// Strength topics reported
    pub const MAX_STRENGTHS: usize = 3;
    /// Improvement topics reported
    pub const MAX_IMPROVEMENTS: usize = 3;
    /// Lessons assumed still ahead when estimating journey completion
    pub const ASSUMED_REMAINING_LESSONS: usize = 10;
    /// Completion percentage for the "almost done" milestone
    pub const ALMOST_DONE_PERCENT: u32 = 75;
    /// Completion percentage for the "halfway" milestone
    pub const HALFWAY_PERCENT: u32 = 50;
    /// Completion percentage for the "quarter" milestone
    pub const QUARTER_PERCENT: u32 = 25;
}

/// Engine runtime defaults
pub mod engine {
    /// Time budget for each independent branch of a request
    pub const DEFAULT_BRANCH_TIMEOUT_MS: u64 = 5_000;
    /// Environment variable overriding the branch timeout
    pub const ENV_BRANCH_TIMEOUT_MS: &str = "LEARNPATH_BRANCH_TIMEOUT_MS";
    /// Environment variable overriding the default recommendation limit
    pub const ENV_DEFAULT_LIMIT: &str = "LEARNPATH_DEFAULT_LIMIT";
    /// Environment variable overriding the weekly study target
    pub const ENV_TARGET_HOURS: &str = "LEARNPATH_TARGET_HOURS_PER_WEEK";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const LEARNPATH_ENGINE: &str = "learnpath-engine";
}
