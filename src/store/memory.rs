// ABOUTME: In-memory snapshot store implementing both the activity store and the content catalog
// ABOUTME: Loads a serde LearningSnapshot (catalog, enrollments, progress rows) from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Snapshot Store
//!
//! A read-only, in-memory rendition of the learning database: programs with
//! their modules and lessons, enrollments, and per-user lesson progress rows.
//! All query semantics the engine depends on live here, including published
//! filtering, catalog ordering, neighbor discovery, popularity ranking, and
//! the recent-activity window.

use super::{ActivityStore, ContentCatalog};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use learnpath_core::errors::AppResult;
use learnpath_core::models::{
    ActivityWindow, LessonId, LessonSummary, ModuleId, ProgramId, ProgramProgress,
    ProgramSummary, QuizPerformance, QuizResult, SessionTiming, UserId,
};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Content type marking quiz lessons
const QUIZ_CONTENT_TYPE: &str = "quiz";

const fn published_default() -> bool {
    true
}

/// Program with its ordered modules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProgram {
    /// Program identifier
    pub id: ProgramId,
    /// Display title
    pub title: String,
    /// Optional summary
    #[serde(default)]
    pub description: Option<String>,
    /// URL slug
    pub slug: String,
    /// Difficulty level such as `beginner`
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Only published programs are recommended
    #[serde(default = "published_default")]
    pub is_published: bool,
    /// Modules in any order; `order_index` decides sequence
    #[serde(default)]
    pub modules: Vec<CatalogModule>,
}

/// Module with its ordered lessons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogModule {
    /// Module identifier
    pub id: ModuleId,
    /// Module title, also used as the quiz topic
    pub title: String,
    /// Position within the program
    #[serde(default)]
    pub order_index: i32,
    /// Lessons in any order; `order_index` decides sequence
    #[serde(default)]
    pub lessons: Vec<CatalogLesson>,
}

/// Single lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLesson {
    /// Lesson identifier
    pub id: LessonId,
    /// Display title
    pub title: String,
    /// Optional summary
    #[serde(default)]
    pub description: Option<String>,
    /// Position within the module
    #[serde(default)]
    pub order_index: i32,
    /// Modality such as `video`, `text`, or `quiz`
    pub content_type: String,
    /// Expected duration
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Only published lessons are recommended or counted
    #[serde(default = "published_default")]
    pub is_published: bool,
}

/// Enrollment lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    /// Currently studying
    #[default]
    Active,
    /// Finished the program
    Completed,
    /// Paused by the learner
    Paused,
    /// Left the program
    Cancelled,
}

/// A learner's enrollment in a program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Learner
    pub user_id: UserId,
    /// Program
    pub program_id: ProgramId,
    /// Lifecycle state
    #[serde(default)]
    pub status: EnrollmentStatus,
}

/// A learner's progress on one lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonProgressRecord {
    /// Learner
    pub user_id: UserId,
    /// Lesson
    pub lesson_id: LessonId,
    /// Whether the lesson was completed
    #[serde(default)]
    pub is_completed: bool,
    /// Completion instant
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Time spent watching or reading
    #[serde(default)]
    pub watch_seconds: Option<u64>,
    /// Score for quiz lessons
    #[serde(default)]
    pub quiz_score: Option<f64>,
}

/// Complete learning dataset the snapshot store serves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningSnapshot {
    /// Catalog
    #[serde(default)]
    pub programs: Vec<CatalogProgram>,
    /// Enrollments in enrollment order
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
    /// Lesson progress rows
    #[serde(default)]
    pub progress: Vec<LessonProgressRecord>,
}

/// Position of a lesson inside the catalog
#[derive(Debug, Clone, Copy)]
struct LessonLocation {
    program: usize,
    module: usize,
    lesson: usize,
}

/// In-memory store over a [`LearningSnapshot`]
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot: LearningSnapshot,
    lesson_index: HashMap<LessonId, LessonLocation>,
    program_index: HashMap<ProgramId, usize>,
}

impl SnapshotStore {
    /// Index a snapshot; modules and lessons are put into catalog order
    #[must_use]
    pub fn new(mut snapshot: LearningSnapshot) -> Self {
        let mut lesson_index = HashMap::new();
        let mut program_index = HashMap::new();

        for (p, program) in snapshot.programs.iter_mut().enumerate() {
            program.modules.sort_by_key(|module| (module.order_index, module.id));
            program_index.insert(program.id, p);
            for (m, module) in program.modules.iter_mut().enumerate() {
                module.lessons.sort_by_key(|lesson| (lesson.order_index, lesson.id));
                for (l, lesson) in module.lessons.iter().enumerate() {
                    lesson_index.insert(
                        lesson.id,
                        LessonLocation {
                            program: p,
                            module: m,
                            lesson: l,
                        },
                    );
                }
            }
        }

        debug!(
            programs = snapshot.programs.len(),
            lessons = lesson_index.len(),
            progress_rows = snapshot.progress.len(),
            "Indexed learning snapshot"
        );

        Self {
            snapshot,
            lesson_index,
            program_index,
        }
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not describe a snapshot
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot: LearningSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The underlying snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &LearningSnapshot {
        &self.snapshot
    }

    fn location(&self, lesson_id: LessonId) -> Option<(&CatalogProgram, &CatalogModule, &CatalogLesson)> {
        let loc = self.lesson_index.get(&lesson_id)?;
        let program = self.snapshot.programs.get(loc.program)?;
        let module = program.modules.get(loc.module)?;
        let lesson = module.lessons.get(loc.lesson)?;
        Some((program, module, lesson))
    }

    fn summarize(
        program: &CatalogProgram,
        module: &CatalogModule,
        lesson: &CatalogLesson,
    ) -> LessonSummary {
        LessonSummary {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            module_id: module.id,
            module_title: module.title.clone(),
            program_id: program.id,
            program_slug: program.slug.clone(),
            estimated_minutes: lesson.estimated_minutes,
            difficulty: lesson.difficulty.clone(),
        }
    }

    fn program_summary(&self, program: &CatalogProgram) -> ProgramSummary {
        let enrollment_count = self
            .snapshot
            .enrollments
            .iter()
            .filter(|e| e.program_id == program.id)
            .count() as u64;
        ProgramSummary {
            id: program.id,
            title: program.title.clone(),
            description: program.description.clone(),
            slug: program.slug.clone(),
            difficulty: program.difficulty.clone(),
            enrollment_count,
        }
    }

    /// Published lessons of published programs in catalog order
    fn recommendable_lessons(
        &self,
    ) -> impl Iterator<Item = (&CatalogProgram, &CatalogModule, &CatalogLesson)> {
        self.snapshot
            .programs
            .iter()
            .filter(|program| program.is_published)
            .flat_map(|program| {
                program.modules.iter().flat_map(move |module| {
                    module
                        .lessons
                        .iter()
                        .filter(|lesson| lesson.is_published)
                        .map(move |lesson| (program, module, lesson))
                })
            })
    }

    fn completed_rows(&self, user_id: UserId) -> impl Iterator<Item = &LessonProgressRecord> {
        self.snapshot
            .progress
            .iter()
            .filter(move |row| row.user_id == user_id && row.is_completed)
    }

    fn completed_set(&self, user_id: UserId) -> BTreeSet<LessonId> {
        self.completed_rows(user_id).map(|row| row.lesson_id).collect()
    }
}

#[async_trait]
impl ActivityStore for SnapshotStore {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn completed_lesson_ids(&self, user_id: UserId) -> AppResult<BTreeSet<LessonId>> {
        Ok(self.completed_set(user_id))
    }

    async fn active_enrollments(&self, user_id: UserId) -> AppResult<Vec<ProgramId>> {
        let mut programs = Vec::new();
        for enrollment in &self.snapshot.enrollments {
            if enrollment.user_id == user_id
                && enrollment.status == EnrollmentStatus::Active
                && !programs.contains(&enrollment.program_id)
            {
                programs.push(enrollment.program_id);
            }
        }
        Ok(programs)
    }

    async fn enrolled_program_ids(&self, user_id: UserId) -> AppResult<Vec<ProgramId>> {
        let mut programs = Vec::new();
        for enrollment in &self.snapshot.enrollments {
            if enrollment.user_id == user_id && !programs.contains(&enrollment.program_id) {
                programs.push(enrollment.program_id);
            }
        }
        Ok(programs)
    }

    async fn quiz_performance(&self, user_id: UserId) -> AppResult<QuizPerformance> {
        let mut results: Vec<QuizResult> = self
            .snapshot
            .progress
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| {
                let score = row.quiz_score?;
                let (_, module, lesson) = self.location(row.lesson_id)?;
                (lesson.content_type == QUIZ_CONTENT_TYPE).then(|| QuizResult {
                    lesson_id: lesson.id,
                    module_id: module.id,
                    module_title: module.title.clone(),
                    score,
                    completed_at: row.completed_at,
                })
            })
            .collect();

        // Most recent first; undated attempts last
        results.sort_by_key(|result| Reverse(result.completed_at));

        let average_score = if results.is_empty() {
            None
        } else {
            Some(results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64)
        };

        Ok(QuizPerformance {
            average_score,
            results,
        })
    }

    async fn average_watch_seconds(&self, user_id: UserId) -> AppResult<Option<f64>> {
        let watched: Vec<u64> = self
            .completed_rows(user_id)
            .filter_map(|row| row.watch_seconds)
            .collect();
        if watched.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            watched.iter().sum::<u64>() as f64 / watched.len() as f64,
        ))
    }

    async fn last_active_at(&self, user_id: UserId) -> AppResult<Option<DateTime<Utc>>> {
        Ok(self
            .snapshot
            .progress
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| row.completed_at)
            .max())
    }

    async fn session_timings(
        &self,
        user_id: UserId,
        window: &ActivityWindow,
    ) -> AppResult<Vec<SessionTiming>> {
        let mut rows: Vec<SessionTiming> = self
            .completed_rows(user_id)
            .filter_map(|row| {
                let completed_at = row.completed_at.filter(|at| window.contains(*at))?;
                let (_, _, lesson) = self.location(row.lesson_id)?;
                Some(SessionTiming {
                    completed_at,
                    watch_seconds: row.watch_seconds.unwrap_or(0),
                    content_type: lesson.content_type.clone(),
                })
            })
            .collect();

        rows.sort_by_key(|row| Reverse(row.completed_at));
        rows.truncate(window.max_rows);
        Ok(rows)
    }

    async fn neighbor_users(
        &self,
        user_id: UserId,
        min_shared: usize,
        max_neighbors: usize,
    ) -> AppResult<Vec<UserId>> {
        let mine = self.completed_set(user_id);
        if mine.is_empty() {
            return Ok(Vec::new());
        }

        let mut shared: HashMap<UserId, BTreeSet<LessonId>> = HashMap::new();
        for row in &self.snapshot.progress {
            if row.user_id != user_id && row.is_completed && mine.contains(&row.lesson_id) {
                shared.entry(row.user_id).or_default().insert(row.lesson_id);
            }
        }

        let mut neighbors: Vec<(UserId, usize)> = shared
            .into_iter()
            .map(|(other, lessons)| (other, lessons.len()))
            .filter(|&(_, count)| count >= min_shared)
            .collect();
        neighbors.sort_by_key(|&(other, count)| (Reverse(count), other));
        neighbors.truncate(max_neighbors);

        Ok(neighbors.into_iter().map(|(other, _)| other).collect())
    }

    async fn neighbor_completed_lessons(
        &self,
        neighbors: &[UserId],
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>> {
        let mut completed_by: HashMap<LessonId, BTreeSet<UserId>> = HashMap::new();
        for row in &self.snapshot.progress {
            if row.is_completed
                && neighbors.contains(&row.user_id)
                && !exclude.contains(&row.lesson_id)
            {
                completed_by.entry(row.lesson_id).or_default().insert(row.user_id);
            }
        }

        let mut ranked: Vec<(LessonId, usize)> = completed_by
            .into_iter()
            .map(|(lesson, users)| (lesson, users.len()))
            .collect();
        ranked.sort_by_key(|&(lesson, count)| (Reverse(count), lesson));

        Ok(ranked
            .into_iter()
            .filter_map(|(lesson_id, _)| {
                let (program, module, lesson) = self.location(lesson_id)?;
                (program.is_published && lesson.is_published)
                    .then(|| Self::summarize(program, module, lesson))
            })
            .take(limit)
            .collect())
    }

    async fn program_progress(&self, user_id: UserId) -> AppResult<Vec<ProgramProgress>> {
        let completed = self.completed_set(user_id);
        let enrollments = self.active_enrollments(user_id).await?;
        let mut progress = Vec::with_capacity(enrollments.len());

        for program_id in enrollments {
            let Some(program) = self
                .program_index
                .get(&program_id)
                .and_then(|&idx| self.snapshot.programs.get(idx))
            else {
                continue;
            };

            let lessons: BTreeSet<LessonId> = program
                .modules
                .iter()
                .flat_map(|module| module.lessons.iter())
                .filter(|lesson| lesson.is_published)
                .map(|lesson| lesson.id)
                .collect();
            if lessons.is_empty() {
                continue;
            }

            let active_days: BTreeSet<NaiveDate> = self
                .completed_rows(user_id)
                .filter(|row| lessons.contains(&row.lesson_id))
                .filter_map(|row| row.completed_at.map(|at| at.date_naive()))
                .collect();

            progress.push(ProgramProgress {
                program_id,
                program_title: program.title.clone(),
                total_lessons: lessons.len() as u32,
                completed_lessons: lessons.intersection(&completed).count() as u32,
                days_active: active_days.len() as u32,
            });
        }

        Ok(progress)
    }
}

#[async_trait]
impl ContentCatalog for SnapshotStore {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    async fn next_lessons(
        &self,
        program_id: ProgramId,
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>> {
        Ok(self
            .recommendable_lessons()
            .filter(|(program, _, lesson)| {
                program.id == program_id && !exclude.contains(&lesson.id)
            })
            .take(limit)
            .map(|(program, module, lesson)| Self::summarize(program, module, lesson))
            .collect())
    }

    async fn lessons_by_topic(
        &self,
        topic: &str,
        exclude: &BTreeSet<LessonId>,
        limit: usize,
    ) -> AppResult<Vec<LessonSummary>> {
        let needle = topic.to_lowercase();
        Ok(self
            .recommendable_lessons()
            .filter(|(_, module, lesson)| {
                !exclude.contains(&lesson.id)
                    && (lesson.title.to_lowercase().contains(&needle)
                        || module.title.to_lowercase().contains(&needle))
            })
            .take(limit)
            .map(|(program, module, lesson)| Self::summarize(program, module, lesson))
            .collect())
    }

    async fn program(&self, program_id: ProgramId) -> AppResult<Option<ProgramSummary>> {
        Ok(self
            .program_index
            .get(&program_id)
            .and_then(|&idx| self.snapshot.programs.get(idx))
            .map(|program| self.program_summary(program)))
    }

    async fn similar_published_programs(
        &self,
        difficulty: Option<&str>,
        exclude: &[ProgramId],
        limit: usize,
    ) -> AppResult<Vec<ProgramSummary>> {
        // An unknown difficulty matches nothing
        let Some(difficulty) = difficulty else {
            return Ok(Vec::new());
        };

        let mut programs: Vec<ProgramSummary> = self
            .snapshot
            .programs
            .iter()
            .filter(|program| {
                program.is_published
                    && !exclude.contains(&program.id)
                    && program.difficulty.as_deref() == Some(difficulty)
            })
            .map(|program| self.program_summary(program))
            .collect();

        programs.sort_by_key(|program| (Reverse(program.enrollment_count), program.id));
        programs.truncate(limit);
        Ok(programs)
    }
}
