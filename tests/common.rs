// ABOUTME: Shared test fixtures for LearnPath integration tests
// ABOUTME: Snapshot catalog, learner activity, pinned clock, and fault-injecting stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    dead_code,
    missing_docs
)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use learnpath_engine::config::EngineConfig;
use learnpath_engine::engine::InsightsEngine;
use learnpath_engine::errors::{AppError, AppResult};
use learnpath_engine::models::{
    ActivityWindow, LessonId, LessonSummary, ProgramId, ProgramProgress, QuizPerformance,
    SessionTiming, UserId,
};
use learnpath_engine::store::{ActivityStore, LearningSnapshot, SnapshotStore};
use serde_json::json;
use std::collections::{BTreeSet, HashSet};
use std::env;
use std::sync::{Arc, Once};
use std::time::Duration;
use tokio::time::sleep;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Learner with enrollments, quizzes, neighbors, and recent activity
pub const ACTIVE_LEARNER: UserId = 1;
/// Learner with no rows at all
pub const NEW_LEARNER: UserId = 99;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Reference instant of every fixture computation: Sunday 2025-06-15 12:00 UTC
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Snapshot JSON shared by every integration test
pub fn snapshot_json() -> serde_json::Value {
    json!({
        "programs": [
            {
                "id": 1, "title": "Rust Foundations", "slug": "rust-foundations",
                "difficulty": "beginner",
                "modules": [
                    {
                        "id": 11, "title": "Traits", "order_index": 2,
                        "lessons": [
                            { "id": 115, "title": "Trait objects", "order_index": 4, "content_type": "video" },
                            { "id": 111, "title": "Defining traits", "order_index": 1, "content_type": "video", "estimated_minutes": 20 },
                            { "id": 112, "title": "Traits quiz", "order_index": 2, "content_type": "quiz" },
                            { "id": 113, "title": "Draft lesson", "order_index": 3, "content_type": "text", "is_published": false },
                            { "id": 114, "title": "Generics", "order_index": 3, "content_type": "video", "difficulty": "intermediate" }
                        ]
                    },
                    {
                        "id": 10, "title": "Ownership", "order_index": 1,
                        "lessons": [
                            { "id": 101, "title": "Moves and copies", "order_index": 1, "content_type": "video", "estimated_minutes": 12 },
                            { "id": 102, "title": "Borrowing", "order_index": 2, "content_type": "text" },
                            { "id": 103, "title": "Ownership quiz", "order_index": 3, "content_type": "quiz" }
                        ]
                    }
                ]
            },
            {
                "id": 2, "title": "Async Rust", "slug": "async-rust", "difficulty": "beginner",
                "description": "Futures, executors and pinning",
                "modules": [
                    {
                        "id": 20, "title": "Futures", "order_index": 1,
                        "lessons": [
                            { "id": 201, "title": "Polling futures", "order_index": 1, "content_type": "video" },
                            { "id": 202, "title": "Ownership across await points", "order_index": 2, "content_type": "text" }
                        ]
                    }
                ]
            },
            {
                "id": 3, "title": "Web Services", "slug": "web-services", "difficulty": "beginner",
                "modules": [
                    {
                        "id": 30, "title": "Routing", "order_index": 1,
                        "lessons": [
                            { "id": 301, "title": "Handlers", "order_index": 1, "content_type": "video" }
                        ]
                    }
                ]
            },
            {
                "id": 4, "title": "Embedded Rust", "slug": "embedded-rust", "difficulty": "advanced",
                "modules": [
                    {
                        "id": 40, "title": "Registers", "order_index": 1,
                        "lessons": [
                            { "id": 401, "title": "Memory-mapped IO", "order_index": 1, "content_type": "video" }
                        ]
                    }
                ]
            },
            {
                "id": 5, "title": "Unreleased Course", "slug": "unreleased", "difficulty": "beginner",
                "is_published": false,
                "modules": [
                    {
                        "id": 50, "title": "Ownership preview", "order_index": 1,
                        "lessons": [
                            { "id": 501, "title": "Preview", "order_index": 1, "content_type": "video" }
                        ]
                    }
                ]
            }
        ],
        "enrollments": [
            { "user_id": 1, "program_id": 1 },
            { "user_id": 1, "program_id": 4, "status": "paused" },
            { "user_id": 2, "program_id": 1 },
            { "user_id": 2, "program_id": 2 },
            { "user_id": 3, "program_id": 1 },
            { "user_id": 3, "program_id": 2 },
            { "user_id": 4, "program_id": 3 },
            { "user_id": 5, "program_id": 2, "status": "completed" },
            { "user_id": 6, "program_id": 5 },
            { "user_id": 7, "program_id": 5 },
            { "user_id": 8, "program_id": 5 },
            { "user_id": 9, "program_id": 5 }
        ],
        "progress": [
            { "user_id": 1, "lesson_id": 101, "is_completed": true, "completed_at": "2025-06-14T19:30:00Z", "watch_seconds": 600 },
            { "user_id": 1, "lesson_id": 102, "is_completed": true, "completed_at": "2025-06-13T19:10:00Z", "watch_seconds": 900 },
            { "user_id": 1, "lesson_id": 103, "is_completed": true, "completed_at": "2025-06-12T20:00:00Z", "watch_seconds": 300, "quiz_score": 55.0 },
            { "user_id": 1, "lesson_id": 112, "is_completed": true, "completed_at": "2025-06-10T09:00:00Z", "watch_seconds": 600, "quiz_score": 90.0 },
            { "user_id": 1, "lesson_id": 111, "is_completed": false, "watch_seconds": 120 },

            { "user_id": 2, "lesson_id": 101, "is_completed": true, "completed_at": "2025-05-01T10:00:00Z", "watch_seconds": 500 },
            { "user_id": 2, "lesson_id": 102, "is_completed": true, "completed_at": "2025-05-02T10:00:00Z", "watch_seconds": 500 },
            { "user_id": 2, "lesson_id": 103, "is_completed": true, "completed_at": "2025-05-03T10:00:00Z", "watch_seconds": 500, "quiz_score": 85.0 },
            { "user_id": 2, "lesson_id": 111, "is_completed": true, "completed_at": "2025-05-04T10:00:00Z", "watch_seconds": 500 },
            { "user_id": 2, "lesson_id": 201, "is_completed": true, "completed_at": "2025-05-05T10:00:00Z", "watch_seconds": 500 },

            { "user_id": 3, "lesson_id": 101, "is_completed": true, "completed_at": "2025-05-01T18:00:00Z", "watch_seconds": 700 },
            { "user_id": 3, "lesson_id": 102, "is_completed": true, "completed_at": "2025-05-01T19:00:00Z", "watch_seconds": 700 },
            { "user_id": 3, "lesson_id": 112, "is_completed": true, "completed_at": "2025-05-02T18:00:00Z", "watch_seconds": 700, "quiz_score": 75.0 },
            { "user_id": 3, "lesson_id": 111, "is_completed": true, "completed_at": "2025-05-03T18:00:00Z", "watch_seconds": 700 },
            { "user_id": 3, "lesson_id": 202, "is_completed": true, "completed_at": "2025-05-04T18:00:00Z", "watch_seconds": 700 },
            { "user_id": 3, "lesson_id": 301, "is_completed": true, "completed_at": "2025-05-05T18:00:00Z", "watch_seconds": 700 },

            { "user_id": 4, "lesson_id": 101, "is_completed": true, "completed_at": "2025-05-01T08:00:00Z", "watch_seconds": 400 },
            { "user_id": 4, "lesson_id": 301, "is_completed": true, "completed_at": "2025-05-02T08:00:00Z", "watch_seconds": 400 }
        ]
    })
}

/// Parsed fixture snapshot
pub fn fixture_snapshot() -> LearningSnapshot {
    serde_json::from_value(snapshot_json()).unwrap()
}

/// Fixture snapshot store
pub fn fixture_store() -> SnapshotStore {
    SnapshotStore::new(fixture_snapshot())
}

/// Engine over the fixture snapshot with the clock pinned to [`fixture_now`]
pub fn fixture_engine() -> InsightsEngine {
    init_test_logging();
    InsightsEngine::from_snapshot(fixture_store(), EngineConfig::default()).with_clock(fixture_now())
}

/// Activity store wrapper that fails or stalls selected operations
pub struct FaultyActivityStore {
    inner: SnapshotStore,
    failing: HashSet<&'static str>,
    slow: HashSet<&'static str>,
    delay: Duration,
}

impl FaultyActivityStore {
    pub fn new(inner: SnapshotStore) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            slow: HashSet::new(),
            delay: Duration::from_secs(5),
        }
    }

    /// Make `operation` return a data-unavailable error
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Make `operation` sleep for `delay` before answering
    pub fn slow(mut self, operation: &'static str, delay: Duration) -> Self {
        self.slow.insert(operation);
        self.delay = delay;
        self
    }

    async fn gate(&self, operation: &'static str) -> AppResult<()> {
        if self.slow.contains(operation) {
            sleep(self.delay).await;
        }
        if self.failing.contains(operation) {
            return Err(AppError::data_unavailable("faulty", format!("{operation} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for FaultyActivityStore {
    fn name(&self) -> &'static str {
        "faulty"
    }

    async fn completed_lesson_ids(&self, user_id: UserId) -> AppResult<BTreeSet<LessonId>> {
        self.gate("completed_lesson_ids").await?;
        self.inner.completed_lesson_ids(user_id).await
    }

    async fn active_enrollments(&self, user_id: UserId) -> AppResult<Vec<ProgramId>> {
        self.gate("active_enrollments").await?;
        self.inner.active_enrollments(user_id).await
    }

    async fn enrolled_program_ids(&self, user_id: UserId) -> AppResult<Vec<ProgramId>> {
        self.gate("enrolled_program_ids").await?;
        self.inner.enrolled_program_ids(user_id).await
    }

    async fn quiz_performance(&self, user_id: UserId) -> AppResult<QuizPerformance> {
        self.gate("quiz_performance").await?;
        self.inner.quiz_performance(user_id).await
    }

    async fn average_watch_seconds(&self, user_id: UserId) -> AppResult<Option<f64>> {
        self.gate("average_watch_seconds").await?;
        self.inner.average_watch_seconds(user_id).await
    }

    async fn last_active_at(&self, user_id: UserId) -> AppResult<Option<DateTime<Utc>>> {
        self.gate("last_active_at").await?;
        self.inner.last_active_at(user_id).await
    }

    async fn session_timings(
        &self,
        user_id: UserId,
        window: &ActivityWindow,
    ) -> AppResult<Vec<SessionTiming>> {
        self.gate("session_timings").await?;
        self.inner.session_timings(user_id, window).await
    }

    async fn neighbor_users(
        &self,
        user_id: UserId,
        min_shared: usize,
        max_neighbors: usize,
    ) -> AppResult<Vec<UserId>> {
        self.gate("neighbor_users").await?;
        self.inner.neighbor_users(user_id, min_shared, max_neighbors).await
    }

    async fn neighbor_completed_lessons(
        &self,
        neighbors: &[UserId],
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>> {
        self.gate("neighbor_completed_lessons").await?;
        self.inner
            .neighbor_completed_lessons(neighbors, exclude, limit)
            .await
    }

    async fn program_progress(&self, user_id: UserId) -> AppResult<Vec<ProgramProgress>> {
        self.gate("program_progress").await?;
        self.inner.program_progress(user_id).await
    }
}

/// Engine whose activity store is `faulty` and whose catalog is the plain fixture
pub fn faulty_engine(faulty: FaultyActivityStore, branch_timeout: Duration) -> InsightsEngine {
    init_test_logging();
    let config = EngineConfig::default().with_branch_timeout(branch_timeout);
    InsightsEngine::new(Arc::new(faulty), Arc::new(fixture_store()), config).with_clock(fixture_now())
}
