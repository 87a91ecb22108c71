// ABOUTME: Recommendation aggregator fusing strategy outputs into one ranked list
// ABOUTME: Deduplicates by recommendation id, ranks by confidence, and truncates to the limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::DedupPolicy;
use learnpath_core::models::Recommendation;
use std::collections::HashMap;

/// Merges candidates from every strategy into a ranked, duplicate-free list
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationAggregator {
    policy: DedupPolicy,
}

impl RecommendationAggregator {
    /// Create an aggregator with the given duplicate resolution policy
    #[must_use]
    pub const fn new(policy: DedupPolicy) -> Self {
        Self { policy }
    }

    /// Duplicate resolution policy in use
    #[must_use]
    pub const fn policy(&self) -> DedupPolicy {
        self.policy
    }

    /// Deduplicate, rank, and truncate
    ///
    /// Candidates must arrive in strategy-emission order. Under
    /// `LastWriteWins` a later duplicate replaces the earlier entry in place;
    /// under `HighestConfidence` it replaces it only when strictly more
    /// confident. Ranking is a stable sort by confidence descending, so
    /// equal-confidence entries keep first-insertion order.
    #[must_use]
    pub fn aggregate(
        &self,
        candidates: Vec<Recommendation>,
        limit: usize,
    ) -> Vec<Recommendation> {
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(candidates.len());
        let mut unique: Vec<Recommendation> = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            match slots.get(&candidate.id) {
                Some(&slot) => {
                    let replace = match self.policy {
                        DedupPolicy::LastWriteWins => true,
                        DedupPolicy::HighestConfidence => {
                            candidate.confidence > unique[slot].confidence
                        }
                    };
                    if replace {
                        unique[slot] = candidate;
                    }
                }
                None => {
                    slots.insert(candidate.id.clone(), unique.len());
                    unique.push(candidate);
                }
            }
        }

        unique.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        unique.truncate(limit);
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_core::models::{RecommendationMetadata, RecommendationType};

    fn rec(id: &str, reason: &str, confidence: u8) -> Recommendation {
        Recommendation {
            id: id.to_owned(),
            kind: RecommendationType::Lesson,
            title: format!("Lesson {id}"),
            description: None,
            reason: reason.to_owned(),
            confidence,
            metadata: RecommendationMetadata::default(),
        }
    }

    #[test]
    fn later_duplicate_wins_by_default() {
        let aggregator = RecommendationAggregator::default();
        let ranked = aggregator.aggregate(
            vec![rec("lesson-7", "first", 95), rec("lesson-7", "second", 75)],
            10,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].reason, "second");
        assert_eq!(ranked[0].confidence, 75);
    }

    #[test]
    fn highest_confidence_policy_keeps_stronger_duplicate() {
        let aggregator = RecommendationAggregator::new(DedupPolicy::HighestConfidence);
        let ranked = aggregator.aggregate(
            vec![rec("lesson-7", "first", 95), rec("lesson-7", "second", 75)],
            10,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].reason, "first");
    }

    #[test]
    fn ranks_by_confidence_and_truncates() {
        let aggregator = RecommendationAggregator::default();
        let ranked = aggregator.aggregate(
            vec![
                rec("program-1", "p", 70),
                rec("lesson-1", "s", 95),
                rec("collab-2", "c", 75),
                rec("gap-3", "g", 80),
            ],
            3,
        );

        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["lesson-1", "gap-3", "collab-2"]);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let aggregator = RecommendationAggregator::default();
        assert!(aggregator.aggregate(vec![rec("lesson-1", "s", 95)], 0).is_empty());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let aggregator = RecommendationAggregator::default();
        let ranked = aggregator.aggregate(
            vec![rec("lesson-2", "a", 95), rec("lesson-1", "b", 95)],
            10,
        );
        assert_eq!(ranked[0].id, "lesson-2");
        assert_eq!(ranked[1].id, "lesson-1");
    }
}
