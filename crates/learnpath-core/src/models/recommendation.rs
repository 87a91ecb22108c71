// ABOUTME: Recommendation record produced by strategies and ranked by the aggregator
// ABOUTME: Identity is the strategy-prefixed id; confidence is a fixed per-strategy prior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{LessonId, LessonSummary, ProgramSummary};
use crate::constants::recommendation::MAX_CONFIDENCE;

/// What kind of content a recommendation points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    /// A single lesson
    Lesson,
    /// A whole module
    Module,
    /// A whole program
    Program,
}

/// Optional navigation and sizing hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    /// Slug of the program that holds the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_slug: Option<String>,
    /// Lesson identifier for lesson recommendations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<LessonId>,
    /// Estimated minutes to complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    /// Difficulty label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// A suggested piece of content with a human-readable justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Strategy-prefixed identity, e.g. `lesson-42`
    pub id: String,
    /// Content kind
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    /// Display title
    pub title: String,
    /// Optional long description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Why this was suggested
    pub reason: String,
    /// Ranking prior in `[0, 100]`
    pub confidence: u8,
    /// Navigation and sizing hints
    pub metadata: RecommendationMetadata,
}

impl Recommendation {
    /// Build a lesson recommendation with the given id prefix
    ///
    /// `default_minutes` fills in the estimate when the catalog has none.
    #[must_use]
    pub fn for_lesson(
        prefix: &str,
        lesson: &LessonSummary,
        reason: String,
        confidence: u8,
        default_minutes: u32,
    ) -> Self {
        Self {
            id: format!("{prefix}-{}", lesson.id),
            kind: RecommendationType::Lesson,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            reason,
            confidence: confidence.min(MAX_CONFIDENCE),
            metadata: RecommendationMetadata {
                program_slug: Some(lesson.program_slug.clone()),
                lesson_id: Some(lesson.id),
                estimated_minutes: Some(lesson.estimated_minutes.unwrap_or(default_minutes)),
                difficulty: lesson.difficulty.clone(),
            },
        }
    }

    /// Build a program recommendation with the given id prefix
    #[must_use]
    pub fn for_program(prefix: &str, program: &ProgramSummary, reason: String, confidence: u8) -> Self {
        Self {
            id: format!("{prefix}-{}", program.id),
            kind: RecommendationType::Program,
            title: program.title.clone(),
            description: program.description.clone(),
            reason,
            confidence: confidence.min(MAX_CONFIDENCE),
            metadata: RecommendationMetadata {
                program_slug: Some(program.slug.clone()),
                lesson_id: None,
                estimated_minutes: None,
                difficulty: program.difficulty.clone(),
            },
        }
    }
}
