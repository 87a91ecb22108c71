// ABOUTME: Shared utilities for the engine facade
// ABOUTME: Currently holds the per-branch timeout wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Time-bounded execution of independent engine branches
pub mod branch_timeout;
