// ABOUTME: Recommendation configuration: per-strategy confidence priors, limits, and dedup policy
// ABOUTME: Defaults encode the trust ordering enrollment > weakness > peers > catalog similarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Configuration
//!
//! Confidence values are ranking priors, not probabilities. They order the
//! strategies by how much explicit intent each one reflects.

use learnpath_core::constants::recommendation::{
    COLLABORATIVE_CONFIDENCE, COLLABORATIVE_LIMIT, CONTENT_BASED_CONFIDENCE, CONTENT_BASED_LIMIT,
    DEFAULT_ESTIMATED_MINUTES, KNOWLEDGE_GAP_CONFIDENCE, KNOWLEDGE_GAP_LIMIT, MAX_NEIGHBORS,
    MIN_SHARED_COMPLETIONS, SEQUENTIAL_CONFIDENCE, SEQUENTIAL_LIMIT,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the aggregator resolves two candidates with the same id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// The candidate inserted last replaces earlier ones
    #[default]
    LastWriteWins,
    /// The candidate with the higher confidence is kept; ties keep the earlier one
    HighestConfidence,
}

impl FromStr for DedupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last_write_wins" | "last" => Ok(Self::LastWriteWins),
            "highest_confidence" | "max" => Ok(Self::HighestConfidence),
            other => Err(format!("unknown dedup policy '{other}'")),
        }
    }
}

/// Confidence priors for each strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyPriors {
    /// Next lessons in enrolled programs
    pub sequential: u8,
    /// Remedial lessons for weak topics
    pub knowledge_gap: u8,
    /// Popular programs at the learner's level
    pub content_based: u8,
    /// Lessons completed by similar learners
    pub collaborative: u8,
}

impl Default for StrategyPriors {
    fn default() -> Self {
        Self {
            sequential: SEQUENTIAL_CONFIDENCE,
            knowledge_gap: KNOWLEDGE_GAP_CONFIDENCE,
            content_based: CONTENT_BASED_CONFIDENCE,
            collaborative: COLLABORATIVE_CONFIDENCE,
        }
    }
}

/// Candidate limits for each strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyLimits {
    /// Next lessons per enrolled program
    pub sequential_per_program: usize,
    /// Remedial lessons
    pub knowledge_gap: usize,
    /// Similar programs
    pub content_based: usize,
    /// Neighbor lessons
    pub collaborative: usize,
}

impl Default for StrategyLimits {
    fn default() -> Self {
        Self {
            sequential_per_program: SEQUENTIAL_LIMIT,
            knowledge_gap: KNOWLEDGE_GAP_LIMIT,
            content_based: CONTENT_BASED_LIMIT,
            collaborative: COLLABORATIVE_LIMIT,
        }
    }
}

/// Neighbor discovery for collaborative filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborConfig {
    /// Shared completions required
    pub min_shared_completions: usize,
    /// Neighbors considered
    pub max_neighbors: usize,
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            min_shared_completions: MIN_SHARED_COMPLETIONS,
            max_neighbors: MAX_NEIGHBORS,
        }
    }
}

/// Recommendation Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Per-strategy confidence priors
    pub priors: StrategyPriors,
    /// Per-strategy candidate limits
    pub limits: StrategyLimits,
    /// Collaborative neighbor discovery
    pub neighbors: NeighborConfig,
    /// Estimate used when a lesson has no duration
    pub default_estimated_minutes: u32,
    /// Duplicate resolution in the aggregator
    pub dedup_policy: DedupPolicy,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            priors: StrategyPriors::default(),
            limits: StrategyLimits::default(),
            neighbors: NeighborConfig::default(),
            default_estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            dedup_policy: DedupPolicy::default(),
        }
    }
}
