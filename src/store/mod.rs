// ABOUTME: Read-only store traits the engine consumes for learner activity and catalog structure
// ABOUTME: Defines the ActivityStore and ContentCatalog contracts plus the in-memory snapshot store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Store Contracts
//!
//! The engine owns no persistence. Everything it knows about a learner or the
//! catalog arrives through two read-only traits:
//!
//! - [`ActivityStore`]: completions, enrollments, quiz scores, session timing,
//!   and neighbor discovery for collaborative filtering
//! - [`ContentCatalog`]: lesson ordering, topic search, and program lookup
//!
//! Both traits return `AppResult` so implementations can report failures; the
//! engine turns every failure into a logged, degraded result. Implementations
//! must only ever recommend published lessons and programs; only
//! [`ContentCatalog::program`] resolves unpublished ones.
//!
//! [`SnapshotStore`] implements both traits over an in-memory
//! [`LearningSnapshot`] and backs the CLI and the test suite.

/// In-memory snapshot store
pub mod memory;

pub use memory::{
    CatalogLesson, CatalogModule, CatalogProgram, EnrollmentRecord, EnrollmentStatus,
    LearningSnapshot, LessonProgressRecord, SnapshotStore,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learnpath_core::errors::AppResult;
use learnpath_core::models::{
    ActivityWindow, LessonId, LessonSummary, ProgramId, ProgramProgress, ProgramSummary,
    QuizPerformance, SessionTiming, UserId,
};
use std::collections::BTreeSet;

/// Read-only learner activity aggregates
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Store name used in logs
    fn name(&self) -> &'static str;

    /// Ids of every lesson the learner completed
    async fn completed_lesson_ids(&self, user_id: UserId) -> AppResult<BTreeSet<LessonId>>;

    /// Active enrollments in enrollment order
    async fn active_enrollments(&self, user_id: UserId) -> AppResult<Vec<ProgramId>>;

    /// Every enrolled program whatever its status, in enrollment order
    async fn enrolled_program_ids(&self, user_id: UserId) -> AppResult<Vec<ProgramId>>;

    /// Quiz-only scores, most recent first, with their average
    async fn quiz_performance(&self, user_id: UserId) -> AppResult<QuizPerformance>;

    /// Mean watch time over completed lessons, `None` when nothing was recorded
    async fn average_watch_seconds(&self, user_id: UserId) -> AppResult<Option<f64>>;

    /// Most recent completion instant
    async fn last_active_at(&self, user_id: UserId) -> AppResult<Option<DateTime<Utc>>>;

    /// Completed lessons inside the window, most recent first, capped at `window.max_rows`
    async fn session_timings(
        &self,
        user_id: UserId,
        window: &ActivityWindow,
    ) -> AppResult<Vec<SessionTiming>>;

    /// Other learners sharing at least `min_shared` completions, most overlap first
    async fn neighbor_users(
        &self,
        user_id: UserId,
        min_shared: usize,
        max_neighbors: usize,
    ) -> AppResult<Vec<UserId>>;

    /// Lessons the neighbors completed, excluding `exclude`, most neighbors first
    async fn neighbor_completed_lessons(
        &self,
        neighbors: &[UserId],
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>>;

    /// Per-program lesson totals, completions, and active days for active enrollments
    async fn program_progress(&self, user_id: UserId) -> AppResult<Vec<ProgramProgress>>;
}

/// Read-only catalog structure
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Catalog name used in logs
    fn name(&self) -> &'static str;

    /// Next lessons of a program in module order then lesson order, skipping `exclude`
    async fn next_lessons(
        &self,
        program_id: ProgramId,
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>>;

    /// Lessons whose own or module title contains `topic`, case-insensitively
    async fn lessons_by_topic(
        &self,
        topic: &str,
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>>;

    /// A program by id, published or not
    async fn program(&self, program_id: ProgramId) -> AppResult<Option<ProgramSummary>>;

    /// Published programs at a difficulty, most enrolled first, skipping `exclude`
    async fn similar_published_programs(
        &self,
        difficulty: Option<&str>,
        exclude: &[ProgramId],
        limit: usize,
    ) -> AppResult<Vec<ProgramSummary>>;
}
