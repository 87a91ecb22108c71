// ABOUTME: Knowledge gap strategy recommending remedial lessons for the strongest weak topic
// ABOUTME: Matches lesson or module titles against the most recent low-scoring quiz topic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use learnpath_core::errors::AppResult;
use learnpath_core::models::{Recommendation, UserProfile};
use learnpath_intelligence::config::intelligence::RecommendationConfig;
use std::sync::Arc;

use super::RecommendationStrategy;
use crate::store::ContentCatalog;

/// Id prefix of knowledge gap candidates
pub const ID_PREFIX: &str = "gap";

/// Remedial lessons for a diagnosed weakness
pub struct KnowledgeGapStrategy {
    catalog: Arc<dyn ContentCatalog>,
    config: RecommendationConfig,
}

impl KnowledgeGapStrategy {
    /// Create a knowledge gap strategy
    #[must_use]
    pub fn new(catalog: Arc<dyn ContentCatalog>, config: RecommendationConfig) -> Self {
        Self { catalog, config }
    }
}

#[async_trait]
impl RecommendationStrategy for KnowledgeGapStrategy {
    fn name(&self) -> &'static str {
        "knowledge_gap"
    }

    async fn recommend(&self, profile: &UserProfile) -> AppResult<Vec<Recommendation>> {
        let Some(topic) = profile.strongest_weak_topic() else {
            return Ok(Vec::new());
        };

        let lessons = self
            .catalog
            .lessons_by_topic(
                topic,
                &profile.completed_lessons,
                self.config.limits.knowledge_gap,
            )
            .await?;

        Ok(lessons
            .iter()
            .map(|lesson| {
                Recommendation::for_lesson(
                    ID_PREFIX,
                    lesson,
                    format!("Strengthen your knowledge of {}", lesson.module_title),
                    self.config.priors.knowledge_gap,
                    self.config.default_estimated_minutes,
                )
            })
            .collect())
    }
}
