// ABOUTME: Logging configuration and structured logging setup for the LearnPath engine
// ABOUTME: Configures log levels, formatters, and the subscriber used by the library and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs are written to stderr so JSON printed by the CLI on stdout stays clean.

use anyhow::{anyhow, Result};
use learnpath_core::constants::service_names;
use learnpath_core::models::UserId;
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events always follow the configured level
const ENGINE_TARGETS: [&str; 3] = [
    "learnpath_engine",
    "learnpath_intelligence",
    "learnpath_core",
];

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One `JSON` object per event, for log shippers
    Json,
    /// Multi-field human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events with their timings
    pub include_spans: bool,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::LEARNPATH_ENGINE.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_SPANS`, `SERVICE_NAME` and `ENVIRONMENT`. Production
    /// always includes source locations.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref()),
            include_location: environment == "production"
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Same configuration at a different level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Environment filter for this configuration
    ///
    /// `RUST_LOG` directives apply to dependencies; the engine crates always
    /// follow the configured level.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);

        ENGINE_TARGETS.into_iter().fold(base, |filter, target| {
            match format!("{target}={}", self.level).parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let span_events = if self.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let builder = fmt()
            .with_env_filter(self.env_filter())
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        let installed = match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Compact => builder.compact().with_target(false).try_init(),
            LogFormat::Pretty => builder.try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging configured"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Engine-specific structured events
pub struct AppLogger;

impl AppLogger {
    /// Log a completed engine request
    pub fn log_engine_request(
        user_id: UserId,
        operation: &str,
        duration_ms: u64,
        degraded_branches: usize,
    ) {
        info!(
            user.id = user_id,
            engine.operation = operation,
            engine.duration_ms = duration_ms,
            engine.degraded_branches = degraded_branches,
            "Engine request"
        );
    }

    /// Log a branch that contributed a degraded result
    pub fn log_branch_degraded(user_id: UserId, branch: &str, cause: &str) {
        warn!(
            user.id = user_id,
            engine.branch = branch,
            engine.cause = cause,
            "Branch degraded to default result"
        );
    }
}
