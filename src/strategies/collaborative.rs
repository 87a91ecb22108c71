// ABOUTME: Collaborative strategy recommending lessons completed by similar learners
// ABOUTME: Neighbors share a minimum number of completions; lessons rank by neighbor count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use learnpath_core::errors::AppResult;
use learnpath_core::models::{Recommendation, UserProfile};
use learnpath_intelligence::config::intelligence::RecommendationConfig;
use std::sync::Arc;
use tracing::debug;

use super::RecommendationStrategy;
use crate::store::ActivityStore;

/// Id prefix of collaborative candidates
pub const ID_PREFIX: &str = "collab";

/// Peer-behavior candidates from neighboring learners
pub struct CollaborativeStrategy {
    activity: Arc<dyn ActivityStore>,
    config: RecommendationConfig,
}

impl CollaborativeStrategy {
    /// Create a collaborative strategy
    #[must_use]
    pub fn new(activity: Arc<dyn ActivityStore>, config: RecommendationConfig) -> Self {
        Self { activity, config }
    }
}

#[async_trait]
impl RecommendationStrategy for CollaborativeStrategy {
    fn name(&self) -> &'static str {
        "collaborative"
    }

    async fn recommend(&self, profile: &UserProfile) -> AppResult<Vec<Recommendation>> {
        let neighbors = self
            .activity
            .neighbor_users(
                profile.user_id,
                self.config.neighbors.min_shared_completions,
                self.config.neighbors.max_neighbors,
            )
            .await?;

        if neighbors.is_empty() {
            return Ok(Vec::new());
        }
        debug!(user_id = profile.user_id, neighbors = neighbors.len(), "Neighbors found");

        let lessons = self
            .activity
            .neighbor_completed_lessons(
                &neighbors,
                &profile.completed_lessons,
                self.config.limits.collaborative,
            )
            .await?;

        Ok(lessons
            .iter()
            .map(|lesson| {
                Recommendation::for_lesson(
                    ID_PREFIX,
                    lesson,
                    "Popular with learners like you".to_owned(),
                    self.config.priors.collaborative,
                    self.config.default_estimated_minutes,
                )
            })
            .collect())
    }
}
