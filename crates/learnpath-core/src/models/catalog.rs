// ABOUTME: Catalog row types returned by content catalog lookups
// ABOUTME: Lightweight lesson and program summaries carrying display and ranking fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{LessonId, ModuleId, ProgramId};

/// A published lesson as returned by catalog queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSummary {
    /// Lesson identifier
    pub id: LessonId,
    /// Lesson title
    pub title: String,
    /// Optional long description
    pub description: Option<String>,
    /// Containing module
    pub module_id: ModuleId,
    /// Containing module title (used in recommendation reasons)
    pub module_title: String,
    /// Containing program
    pub program_id: ProgramId,
    /// Containing program slug
    pub program_slug: String,
    /// Author-estimated duration
    pub estimated_minutes: Option<u32>,
    /// Difficulty label, if the lesson carries one
    pub difficulty: Option<String>,
}

/// A published program as returned by catalog queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSummary {
    /// Program identifier
    pub id: ProgramId,
    /// Program title
    pub title: String,
    /// Optional long description
    pub description: Option<String>,
    /// URL slug
    pub slug: String,
    /// Difficulty label shared by similar programs
    pub difficulty: Option<String>,
    /// Number of enrollments across all learners (popularity proxy)
    pub enrollment_count: u64,
}
