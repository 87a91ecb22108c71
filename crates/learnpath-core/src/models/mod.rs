// ABOUTME: Core data models shared by stores, algorithms, and the engine facade
// ABOUTME: Catalog rows, activity aggregates, learner profiles, and computed result records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All computed records are request-scoped values: nothing here is persisted
//! by the engine. Store rows (`LessonSummary`, `SessionTiming`, ...) are what
//! the external activity store and content catalog hand back; result records
//! (`Recommendation`, `LearningPattern`, ...) are what callers receive.

/// Activity aggregates read from the activity store
pub mod activity;
/// Catalog rows read from the content catalog
pub mod catalog;
/// Computed pattern, forecast, schedule, milestone, and tip records
pub mod insights;
/// Learner profile snapshot
pub mod profile;
/// Recommendation records
pub mod recommendation;

pub use activity::{ActivityWindow, ProgramProgress, QuizPerformance, QuizResult, SessionTiming};
pub use catalog::{LessonSummary, ProgramSummary};
pub use insights::{
    weekday_name, ConfidenceLevel, LearningInsights, LearningPattern, LearningTip,
    MilestoneProjection, OptimalSchedule, ProgressPrediction, StudySession, TimeOfDay,
    TipCategory, TipPriority,
};
pub use profile::{LearningSpeed, UserProfile};
pub use recommendation::{Recommendation, RecommendationMetadata, RecommendationType};

/// Learner identifier
pub type UserId = i64;
/// Program identifier
pub type ProgramId = i64;
/// Module identifier
pub type ModuleId = i64;
/// Lesson identifier
pub type LessonId = i64;
