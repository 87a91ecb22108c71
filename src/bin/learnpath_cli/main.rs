// ABOUTME: LearnPath CLI - runs engine operations against a JSON learning snapshot
// ABOUTME: Prints recommendations, patterns, forecasts, schedules, and tips as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Top 5 recommendations for learner 42
//! learnpath-cli --snapshot snapshot.json recommend --user 42 --limit 5
//!
//! # Learning pattern over the last 30 days
//! learnpath-cli --snapshot snapshot.json patterns --user 42
//!
//! # Weekly schedule for a 4 hour budget
//! learnpath-cli --snapshot snapshot.json schedule --user 42 --hours 4
//!
//! # Everything at once
//! learnpath-cli --snapshot snapshot.json report --user 42
//! ```

mod commands;

use clap::{Parser, Subcommand};
use learnpath_engine::config::EngineConfig;
use learnpath_engine::engine::InsightsEngine;
use learnpath_engine::errors::{AppError, AppResult};
use learnpath_engine::logging::LoggingConfig;
use learnpath_engine::models::UserId;
use learnpath_engine::store::SnapshotStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "learnpath-cli",
    about = "LearnPath recommendation and forecasting CLI",
    long_about = "Runs LearnPath engine operations for one learner against a JSON learning snapshot and prints the result as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Learning snapshot (programs, enrollments, progress) as JSON
    #[arg(long, global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ranked recommendations
    Recommend {
        /// Learner id
        #[arg(long)]
        user: UserId,

        /// Maximum recommendations (defaults to LEARNPATH_DEFAULT_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Learning pattern over the recent activity window
    Patterns {
        /// Learner id
        #[arg(long)]
        user: UserId,
    },

    /// Completion forecasts per enrolled program
    Predict {
        /// Learner id
        #[arg(long)]
        user: UserId,
    },

    /// Weekly study schedule
    Schedule {
        /// Learner id
        #[arg(long)]
        user: UserId,

        /// Weekly study target in hours
        #[arg(long)]
        hours: Option<f64>,
    },

    /// Halfway and completion milestones
    Milestones {
        /// Learner id
        #[arg(long)]
        user: UserId,
    },

    /// Learning tips
    Tips {
        /// Learner id
        #[arg(long)]
        user: UserId,
    },

    /// Strengths, improvement areas, and next milestone
    Insights {
        /// Learner id
        #[arg(long)]
        user: UserId,
    },

    /// Every result set in one report
    Report {
        /// Learner id
        #[arg(long)]
        user: UserId,

        /// Maximum recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Weekly study target in hours
        #[arg(long)]
        hours: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only JSON
    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(log_level)
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let config = EngineConfig::from_env()?;
    info!("Loading snapshot from {}", cli.snapshot.display());
    let store = SnapshotStore::from_json_file(&cli.snapshot)
        .map_err(|e| e.with_resource_id(cli.snapshot.display().to_string()))?;
    let engine = InsightsEngine::from_snapshot(store, config);

    let output = commands::run(&engine, cli.command).await?;
    println!("{output}");
    Ok(())
}
