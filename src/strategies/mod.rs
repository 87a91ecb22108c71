// ABOUTME: Recommendation strategy contract and the four built-in strategies
// ABOUTME: Sequential, knowledge gap, content based, and collaborative candidate generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Strategies
//!
//! Every strategy is an independent, side-effect-free candidate generator over
//! a [`UserProfile`] plus read-only store lookups. Strategies never share
//! mutable state, so the engine runs them concurrently and joins the results
//! in the fixed order returned by [`default_strategies`].
//!
//! Confidence values are fixed per-strategy priors encoding a trust ordering,
//! not computed probabilities.

/// Next lessons of enrolled programs
pub mod sequential;
/// Remedial lessons for the strongest weak topic
pub mod knowledge_gap;
/// Popular programs at the learner's level
pub mod content_based;
/// Lessons completed by similar learners
pub mod collaborative;

pub use collaborative::CollaborativeStrategy;
pub use content_based::ContentBasedStrategy;
pub use knowledge_gap::KnowledgeGapStrategy;
pub use sequential::SequentialStrategy;

use async_trait::async_trait;
use learnpath_core::errors::AppResult;
use learnpath_core::models::{Recommendation, UserProfile};
use learnpath_intelligence::config::intelligence::RecommendationConfig;
use std::sync::Arc;

use crate::store::{ActivityStore, ContentCatalog};

/// Candidate generator contract
#[async_trait]
pub trait RecommendationStrategy: Send + Sync {
    /// Strategy name used in logs and degraded-branch reports
    fn name(&self) -> &'static str;

    /// Produce zero or more candidates for a learner
    ///
    /// # Errors
    ///
    /// Returns an error if a store lookup fails; the engine degrades it to no candidates
    async fn recommend(&self, profile: &UserProfile) -> AppResult<Vec<Recommendation>>;
}

/// The four built-in strategies in emission order
///
/// Order matters for deduplication: with last-write-wins a later strategy's
/// duplicate replaces an earlier one.
#[must_use]
pub fn default_strategies(
    activity: &Arc<dyn ActivityStore>,
    catalog: &Arc<dyn ContentCatalog>,
    config: &RecommendationConfig,
) -> Vec<Arc<dyn RecommendationStrategy>> {
    vec![
        Arc::new(SequentialStrategy::new(Arc::clone(catalog), config.clone())),
        Arc::new(KnowledgeGapStrategy::new(Arc::clone(catalog), config.clone())),
        Arc::new(ContentBasedStrategy::new(
            Arc::clone(activity),
            Arc::clone(catalog),
            config.clone(),
        )),
        Arc::new(CollaborativeStrategy::new(Arc::clone(activity), config.clone())),
    ]
}
