// ABOUTME: Content based strategy recommending popular programs at the learner's difficulty
// ABOUTME: Anchored on the first active enrollment, skipping every program the learner ever joined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use learnpath_core::errors::AppResult;
use learnpath_core::models::{Recommendation, UserProfile};
use learnpath_intelligence::config::intelligence::RecommendationConfig;
use std::sync::Arc;

use super::RecommendationStrategy;
use crate::store::{ActivityStore, ContentCatalog};

/// Id prefix of content based candidates
pub const ID_PREFIX: &str = "program";

/// Similar published programs the learner is not enrolled in
pub struct ContentBasedStrategy {
    activity: Arc<dyn ActivityStore>,
    catalog: Arc<dyn ContentCatalog>,
    config: RecommendationConfig,
}

impl ContentBasedStrategy {
    /// Create a content based strategy
    #[must_use]
    pub fn new(
        activity: Arc<dyn ActivityStore>,
        catalog: Arc<dyn ContentCatalog>,
        config: RecommendationConfig,
    ) -> Self {
        Self {
            activity,
            catalog,
            config,
        }
    }
}

#[async_trait]
impl RecommendationStrategy for ContentBasedStrategy {
    fn name(&self) -> &'static str {
        "content_based"
    }

    async fn recommend(&self, profile: &UserProfile) -> AppResult<Vec<Recommendation>> {
        let Some(&anchor_id) = profile.enrolled_programs.first() else {
            return Ok(Vec::new());
        };
        // The anchor may be unpublished; only candidates must be published
        let Some(anchor) = self.catalog.program(anchor_id).await? else {
            return Ok(Vec::new());
        };
        let enrolled = self.activity.enrolled_program_ids(profile.user_id).await?;

        let programs = self
            .catalog
            .similar_published_programs(
                anchor.difficulty.as_deref(),
                &enrolled,
                self.config.limits.content_based,
            )
            .await?;

        Ok(programs
            .iter()
            .map(|program| {
                Recommendation::for_program(
                    ID_PREFIX,
                    program,
                    "Popular program at your level".to_owned(),
                    self.config.priors.content_based,
                )
            })
            .collect())
    }
}
