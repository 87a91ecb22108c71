// ABOUTME: Main library entry point for the LearnPath learning intelligence engine
// ABOUTME: Recommends lessons and forecasts progress from read-only learner activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # LearnPath Engine
//!
//! Recommends learning content and forecasts progress through a curriculum of
//! programs, modules and lessons, using only a learner's historical activity
//! and the catalog structure. Every heuristic is deterministic and rule-based.
//!
//! ## Features
//!
//! - **Four recommendation strategies**: sequential, knowledge gap, content based, collaborative
//! - **Ranking**: deduplication by id and ranking by per-strategy confidence priors
//! - **Pattern mining**: best time slot and weekday, session length, consistency, streaks
//! - **Forecasting**: completion dates, halfway and completion milestones
//! - **Advice**: weekly study schedules and rule-based tips
//!
//! ## Architecture
//!
//! - **Store**: `ActivityStore` and `ContentCatalog` traits plus the in-memory `SnapshotStore`
//! - **Profile**: `UserProfileBuilder` turning activity rows into a `UserProfile`
//! - **Strategies**: async candidate generators run concurrently
//! - **Engine**: `InsightsEngine`, the facade bounding every branch with a timeout
//! - **Config**: `EngineConfig` from environment variables plus `IntelligenceConfig`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use learnpath_engine::config::EngineConfig;
//! use learnpath_engine::engine::InsightsEngine;
//! use learnpath_engine::errors::AppResult;
//! use learnpath_engine::store::SnapshotStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = SnapshotStore::from_json_file("snapshot.json")?;
//!     let engine = InsightsEngine::from_snapshot(store, EngineConfig::from_env()?);
//!
//!     let recommendations = engine.recommend(42, Some(5)).await;
//!     println!("{} recommendations", recommendations.len());
//!     Ok(())
//! }
//! ```

/// Engine configuration from environment variables
pub mod config;

/// Concurrent recommendation and forecasting facade
pub mod engine;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Learner profile builder
pub mod profile;

/// Read-only store traits and the in-memory snapshot store
pub mod store;

/// Recommendation strategies
pub mod strategies;

/// Shared utilities
pub mod utils;

pub use learnpath_core::constants;
pub use learnpath_core::models;
pub use learnpath_intelligence as intelligence;
