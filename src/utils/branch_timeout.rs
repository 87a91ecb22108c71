// ABOUTME: Timeout wrapper bounding each concurrently executed engine branch
// ABOUTME: Maps elapsed budgets to DataTimeout errors so callers can degrade uniformly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_core::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Execute a branch with a time budget
///
/// # Errors
///
/// Returns a `DataTimeout` error if the budget elapses, or the branch's own
/// error if it fails first
pub async fn with_branch_timeout<F, T, E>(
    branch: &str,
    budget: Duration,
    operation: F,
) -> AppResult<T>
where
    F: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Into<AppError> + Send,
{
    (timeout(budget, operation).await).map_or_else(
        |_| {
            Err(AppError::timeout(
                branch,
                u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
            ))
        },
        |result| result.map_err(Into::into),
    )
}
