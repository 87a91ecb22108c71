// ABOUTME: Unified error types, error codes, and result alias for the LearnPath engine
// ABOUTME: Separates data-store failures from validation and configuration problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the LearnPath engine.
//! It defines standard error codes and a single `AppError` type so that store
//! implementations, configuration loading, and the CLI all report failures the same way.
//!
//! Most engine operations never surface these errors to a caller: a failing data
//! store degrades to an empty result. Errors reach callers only for invalid input
//! and configuration problems, tagged with the learner when there is one.

/// Configuration validation errors
pub mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

use crate::models::UserId;

/// Standard error codes used throughout the engine
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Numeric input outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Data stores (5000-5999)
    /// An activity store or catalog call failed
    #[serde(rename = "DATA_UNAVAILABLE")]
    DataUnavailable = 5000,
    /// A data store call exceeded its time budget
    #[serde(rename = "DATA_TIMEOUT")]
    DataTimeout = 5001,

    // Configuration (6000-6999)
    /// Generic configuration failure
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Snapshot or output (de)serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::DataUnavailable => "A data store is currently unavailable",
            Self::DataTimeout => "A data store did not respond in time",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// User the failing request was computed for
    pub user_id: Option<UserId>,
    /// Resource ID if applicable
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            user_id: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a user ID to the error context
    #[must_use]
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.context.user_id = Some(user_id);
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Numeric input outside its allowed range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// A store call failed
    #[must_use]
    pub fn data_unavailable(store: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DataUnavailable,
            format!("{}: {}", store.into(), message.into()),
        )
    }

    /// A store call or branch exceeded its time budget
    #[must_use]
    pub fn timeout(operation: impl Into<String>, budget_ms: u64) -> Self {
        let operation = operation.into();
        Self::new(
            ErrorCode::DataTimeout,
            format!("{operation} timed out after {budget_ms}ms"),
        )
        .with_details(serde_json::json!({
            "operation": operation,
            "budget_ms": budget_ms,
        }))
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::internal(format!("I/O failure: {error}")).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_context() {
        let error = AppError::data_unavailable("activity_store", "connection reset")
            .with_user_id(42)
            .with_resource_id("program-7");

        assert_eq!(error.code, ErrorCode::DataUnavailable);
        assert_eq!(error.context.user_id, Some(42));
        assert_eq!(error.context.resource_id.as_deref(), Some("program-7"));
        assert!(error.to_string().contains("connection reset"));
    }

    #[test]
    fn test_timeout_details() {
        let error = AppError::timeout("sequential", 250);
        assert_eq!(error.code, ErrorCode::DataTimeout);
        assert_eq!(error.context.details["budget_ms"], 250);
    }

    #[test]
    fn test_config_error_conversion() {
        let error: AppError = ConfigError::ValueOutOfRange("min_lessons_per_day").into();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DataTimeout).unwrap_or_default();
        assert_eq!(json, "\"DATA_TIMEOUT\"");
    }
}
