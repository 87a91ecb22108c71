// ABOUTME: Sequential strategy recommending the next unfinished lessons of enrolled programs
// ABOUTME: Highest-trust strategy since it follows explicit enrollment intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use learnpath_core::errors::AppResult;
use learnpath_core::models::{Recommendation, UserProfile};
use learnpath_intelligence::config::intelligence::RecommendationConfig;
use std::sync::Arc;
use tracing::{debug, warn};

use super::RecommendationStrategy;
use crate::store::ContentCatalog;

/// Id prefix of sequential candidates
pub const ID_PREFIX: &str = "lesson";

/// Next lessons in catalog order for every active enrollment
pub struct SequentialStrategy {
    catalog: Arc<dyn ContentCatalog>,
    config: RecommendationConfig,
}

impl SequentialStrategy {
    /// Create a sequential strategy
    #[must_use]
    pub fn new(catalog: Arc<dyn ContentCatalog>, config: RecommendationConfig) -> Self {
        Self { catalog, config }
    }
}

#[async_trait]
impl RecommendationStrategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn recommend(&self, profile: &UserProfile) -> AppResult<Vec<Recommendation>> {
        let mut candidates = Vec::new();

        // A failing program is skipped so the others still contribute
        for &program_id in &profile.enrolled_programs {
            let lessons = match self
                .catalog
                .next_lessons(
                    program_id,
                    &profile.completed_lessons,
                    self.config.limits.sequential_per_program,
                )
                .await
            {
                Ok(lessons) => lessons,
                Err(e) => {
                    warn!(program_id, error = %e, "Skipping program with unavailable lessons");
                    continue;
                }
            };

            debug!(program_id, next = lessons.len(), "Sequential lessons found");

            candidates.extend(lessons.iter().map(|lesson| {
                Recommendation::for_lesson(
                    ID_PREFIX,
                    lesson,
                    format!("Next step in {}", lesson.module_title),
                    self.config.priors.sequential,
                    self.config.default_estimated_minutes,
                )
            }));
        }

        Ok(candidates)
    }
}
