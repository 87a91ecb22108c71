// ABOUTME: Command execution for the LearnPath CLI
// ABOUTME: Dispatches subcommands to engine operations and renders pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use learnpath_engine::engine::InsightsEngine;
use learnpath_engine::errors::AppResult;
use serde::Serialize;

use crate::Command;

/// Run one subcommand and render its result
pub async fn run(engine: &InsightsEngine, command: Command) -> AppResult<String> {
    match command {
        Command::Recommend { user, limit } => render(&engine.recommend(user, limit).await),
        Command::Patterns { user } => render(&engine.analyze_learning_patterns(user).await),
        Command::Predict { user } => render(&engine.predict_program_completion(user).await),
        Command::Schedule { user, hours } => {
            render(&engine.generate_optimal_schedule(user, hours).await?)
        }
        Command::Milestones { user } => render(&engine.project_milestones(user).await),
        Command::Tips { user } => render(&engine.generate_learning_tips(user).await),
        Command::Insights { user } => render(&engine.learning_insights(user).await),
        Command::Report { user, limit, hours } => {
            render(&engine.insights_report(user, limit, hours).await?)
        }
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
