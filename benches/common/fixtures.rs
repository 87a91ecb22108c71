// ABOUTME: Benchmark fixtures generating realistic learner activity and catalogs
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic learner activity.
//!
//! Every generator is a pure function of its index, so runs are comparable.

use chrono::{DateTime, Duration, TimeZone, Utc};
use learnpath_engine::models::{
    ProgramProgress, Recommendation, RecommendationMetadata, RecommendationType, SessionTiming,
};
use learnpath_engine::store::LearningSnapshot;
use serde_json::{json, Value};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 rows) - a casual learner
    Small,
    /// Medium dataset (100 rows) - a full analysis window
    Medium,
    /// Large dataset (1000 rows) - stress case
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1_000,
        }
    }
}

/// Fixed reference instant so generated data never drifts between runs
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

const CONTENT_TYPES: [&str; 3] = ["video", "text", "quiz"];

/// Completions spread over the last month with varying hours and content
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_session_timings(size: BatchSize) -> Vec<SessionTiming> {
    let now = reference_now();
    (0..size.count())
        .map(|index| SessionTiming {
            completed_at: now
                - Duration::days((index % 30) as i64)
                - Duration::hours(((index * 7) % 24) as i64),
            watch_seconds: 120 + ((index * 137) % 1800) as u64,
            content_type: CONTENT_TYPES[index % CONTENT_TYPES.len()].to_owned(),
        })
        .collect()
}

/// Candidates from four strategies with roughly one duplicate id in five
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_candidates(size: BatchSize) -> Vec<Recommendation> {
    let priors = [95_u8, 80, 75, 70];
    (0..size.count())
        .map(|index| Recommendation {
            id: format!("lesson-{}", index - index / 5),
            kind: RecommendationType::Lesson,
            title: format!("Lesson {index}"),
            description: None,
            reason: "Benchmark candidate".to_owned(),
            confidence: priors[index % priors.len()],
            metadata: RecommendationMetadata {
                lesson_id: Some(index as i64),
                estimated_minutes: Some(15),
                ..RecommendationMetadata::default()
            },
        })
        .collect()
}

/// Progress rows for a learner enrolled in many programs
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_program_progress(size: BatchSize) -> Vec<ProgramProgress> {
    (0..size.count())
        .map(|index| {
            let total = 10 + (index % 40) as u32;
            ProgramProgress {
                program_id: index as i64,
                program_title: format!("Program {index}"),
                total_lessons: total,
                completed_lessons: (index as u32 * 3) % total,
                days_active: 1 + (index % 20) as u32,
            }
        })
        .collect()
}

/// Catalog of `programs` programs with 3 modules of 5 lessons, plus
/// `learners` learners who each completed a sliding slice of program 1
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_snapshot(programs: usize, learners: usize) -> LearningSnapshot {
    let now = reference_now();

    let catalog: Vec<Value> = (1..=programs)
        .map(|p| {
            let modules: Vec<Value> = (0..3)
                .map(|m| {
                    let module_id = p * 10 + m;
                    let lessons: Vec<Value> = (0..5)
                        .map(|l| {
                            json!({
                                "id": module_id * 10 + l,
                                "title": format!("Lesson {l} of module {module_id}"),
                                "order_index": l,
                                "content_type": CONTENT_TYPES[l % CONTENT_TYPES.len()],
                                "estimated_minutes": 10 + l * 5
                            })
                        })
                        .collect();
                    json!({
                        "id": module_id,
                        "title": format!("Topic {}", m % 2),
                        "order_index": m,
                        "lessons": lessons
                    })
                })
                .collect();
            json!({
                "id": p,
                "title": format!("Program {p}"),
                "slug": format!("program-{p}"),
                "difficulty": if p % 2 == 0 { "beginner" } else { "intermediate" },
                "modules": modules
            })
        })
        .collect();

    let mut enrollments = Vec::new();
    let mut progress = Vec::new();
    for user in 1..=learners {
        enrollments.push(json!({ "user_id": user, "program_id": 1 }));
        enrollments.push(json!({ "user_id": user, "program_id": 1 + user % programs }));
        for step in 0..6 {
            let module_id = 10 + (user + step) % 3;
            let lesson_id = module_id * 10 + (user + step) % 5;
            progress.push(json!({
                "user_id": user,
                "lesson_id": lesson_id,
                "is_completed": true,
                "completed_at": now - Duration::days(((user + step) % 28) as i64),
                "watch_seconds": 300 + step * 60,
                "quiz_score": if lesson_id % 5 == 2 { Some(50 + (user * 7) % 50) } else { None }
            }));
        }
    }

    serde_json::from_value(json!({
        "programs": catalog,
        "enrollments": enrollments,
        "progress": progress
    }))
    .unwrap_or_default()
}
