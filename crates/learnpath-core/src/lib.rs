// ABOUTME: Core types and constants for the LearnPath learning intelligence engine
// ABOUTME: Foundation crate with error handling, threshold constants, and shared data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LearnPath Core
//!
//! Foundation crate providing shared types and constants for the LearnPath
//! recommendation and forecasting engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Rule thresholds and strategy priors, named by domain
//! - **models**: Catalog, activity, and result records exchanged between crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Rule thresholds and fixed values organized by domain
pub mod constants;

/// Core data models (profiles, recommendations, patterns, predictions)
pub mod models;
