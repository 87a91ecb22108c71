// ABOUTME: Environment configuration for engine runtime settings
// ABOUTME: Parses branch timeout, default recommendation limit, and weekly study target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based engine configuration

use learnpath_core::constants::engine::{
    DEFAULT_BRANCH_TIMEOUT_MS, ENV_BRANCH_TIMEOUT_MS, ENV_DEFAULT_LIMIT, ENV_TARGET_HOURS,
};
use learnpath_core::constants::recommendation::DEFAULT_LIMIT;
use learnpath_core::constants::schedule::DEFAULT_TARGET_HOURS_PER_WEEK;
use learnpath_intelligence::config::intelligence::{ConfigError, IntelligenceConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Runtime settings of the [`InsightsEngine`](crate::engine::InsightsEngine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Time budget for each concurrently executed branch
    pub branch_timeout_ms: u64,
    /// Recommendations returned when the caller passes no limit
    pub default_limit: usize,
    /// Weekly study target when the caller passes none
    pub default_target_hours: f64,
    /// Algorithm thresholds
    pub intelligence: IntelligenceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            branch_timeout_ms: DEFAULT_BRANCH_TIMEOUT_MS,
            default_limit: DEFAULT_LIMIT,
            default_target_hours: DEFAULT_TARGET_HOURS_PER_WEEK,
            intelligence: IntelligenceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults. The intelligence section is loaded
    /// with its own environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value or the
    /// resulting configuration is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            branch_timeout_ms: parse_env(ENV_BRANCH_TIMEOUT_MS, DEFAULT_BRANCH_TIMEOUT_MS)?,
            default_limit: parse_env(ENV_DEFAULT_LIMIT, DEFAULT_LIMIT)?,
            default_target_hours: parse_env(ENV_TARGET_HOURS, DEFAULT_TARGET_HOURS_PER_WEEK)?,
            intelligence: IntelligenceConfig::load()?,
        };
        config.validate()?;
        config.log_summary();
        Ok(config)
    }

    /// Same configuration with a different branch timeout
    #[must_use]
    pub fn with_branch_timeout(mut self, timeout: Duration) -> Self {
        self.branch_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Branch timeout as a [`Duration`]
    #[must_use]
    pub const fn branch_timeout(&self) -> Duration {
        Duration::from_millis(self.branch_timeout_ms)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.branch_timeout_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "branch timeout must be at least 1ms",
            ));
        }
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default recommendation limit must be at least 1",
            ));
        }
        if !self.default_target_hours.is_finite() || self.default_target_hours < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default target hours must be a non-negative number",
            ));
        }
        self.intelligence.validate()
    }

    fn log_summary(&self) {
        info!(
            branch_timeout_ms = self.branch_timeout_ms,
            default_limit = self.default_limit,
            default_target_hours = self.default_target_hours,
            dedup_policy = ?self.intelligence.recommendation.dedup_policy,
            "Engine configuration loaded"
        );
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {raw}"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
