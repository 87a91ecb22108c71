// ABOUTME: Error handling surface of the engine facade crate
// ABOUTME: Re-exports the unified error types defined in learnpath-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error taxonomy lives in `learnpath-core` so that the intelligence crate,
//! store implementations, and this facade all share one `AppError`. This module
//! re-exports it under the facade's own path.

pub use learnpath_core::errors::{AppError, AppResult, ConfigError, ErrorCode, ErrorContext};
