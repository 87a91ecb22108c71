// ABOUTME: Configuration management module for engine runtime settings
// ABOUTME: Combines environment-driven engine settings with the intelligence thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the LearnPath engine
//!
//! - **Environment**: branch timeout, default limit, and weekly target from environment variables
//! - **Intelligence**: algorithm thresholds, re-exported from `learnpath-intelligence`

/// Environment-driven engine configuration
pub mod environment;

pub use environment::EngineConfig;
pub use learnpath_intelligence::config::intelligence::{ConfigError, DedupPolicy, IntelligenceConfig};
