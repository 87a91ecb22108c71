// ABOUTME: Learning analytics algorithms for the LearnPath engine
// ABOUTME: Aggregation, pattern mining, forecasting, scheduling, tips, and insights summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LearnPath Intelligence
//!
//! Pure, synchronous algorithms over data already read from the stores.
//! Nothing in this crate performs I/O; every function is deterministic for
//! a given input and reference date.
//!
//! ## Modules
//!
//! - **aggregator**: Deduplicate and rank recommendation candidates
//! - **`pattern_analyzer`**: Mine time-of-day, weekday, modality, consistency and streaks
//! - **`progress_predictor`**: Completion forecasts from historical velocity
//! - **milestones**: Halfway and completion milestones from forecasts
//! - **`schedule_optimizer`**: Weekly study plans from a pattern and a budget
//! - **tips**: Rule-based learning tips
//! - **insights**: Strengths, improvement areas, and next milestone
//! - **config**: `IntelligenceConfig` and its domain sections

/// Intelligence configuration
pub mod config;

/// Recommendation deduplication and ranking
pub mod aggregator;

/// Learning pattern mining
pub mod pattern_analyzer;

/// Program completion forecasting
pub mod progress_predictor;

/// Milestone projection
pub mod milestones;

/// Weekly schedule optimization
pub mod schedule_optimizer;

/// Rule-based learning tips
pub mod tips;

/// Learning insights summary
pub mod insights;

pub use aggregator::RecommendationAggregator;
pub use config::IntelligenceConfig;
pub use insights::InsightsSummarizer;
pub use milestones::MilestoneProjector;
pub use pattern_analyzer::LearningPatternAnalyzer;
pub use progress_predictor::ProgressPredictor;
pub use schedule_optimizer::ScheduleOptimizer;
pub use tips::TipGenerator;
