// ABOUTME: Nutrition CLI - analyze ingredient lists without running the HTTP server
// ABOUTME: Uses the same reference tables and aggregator as the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition CLI
//!
//! Runs the nutrient aggregator against local reference tables and prints the
//! result on stdout.
//!
//! Usage:
//! ```bash
//! # Analyze a meal
//! nutrition-cli analyze "1 cup rice" "2 eggs" --pretty
//!
//! # Analyze with a custom food table
//! nutrition-cli --nutrition-table ./foods.yaml analyze "200g lentils"
//!
//! # List known foods and units
//! nutrition-cli foods
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrition_service::{
    constants::service_names,
    intelligence::NutrientAggregator,
    logging::LoggingConfig,
    resources::{load_nutrition_table, load_unit_table},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition analysis from the command line",
    long_about = "Parses free-text ingredient lines and prints calorie, macronutrient and micronutrient totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Food table file (.json, .yaml or .yml) replacing the built-in one
    #[arg(long, global = true, env = "NUTRITION_TABLE_PATH")]
    nutrition_table: Option<PathBuf>,

    /// Unit table file (.json, .yaml or .yml) replacing the built-in one
    #[arg(long, global = true, env = "UNIT_TABLE_PATH")]
    unit_table: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Aggregate nutrition over ingredient lines
    Analyze {
        /// Ingredient lines, e.g. "1 cup rice"
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// List known foods and units
    Foods {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_owned(),
        service_name: service_names::NUTRITION_CLI.to_owned(),
        log_to_stderr: true,
        ..LoggingConfig::from_env()
    }
    .init()?;

    let foods = load_nutrition_table(cli.nutrition_table.as_deref())?;
    let units = load_unit_table(cli.unit_table.as_deref())?;
    debug!(foods = foods.len(), units = units.len(), "Reference tables loaded");

    let aggregator = NutrientAggregator::new(Arc::new(foods), Arc::new(units));

    match cli.command {
        Command::Analyze {
            ingredients,
            pretty,
        } => commands::analyze::run(&aggregator, &ingredients, pretty)?,
        Command::Foods { json } => commands::foods::run(&aggregator, json)?,
    }

    Ok(())
}
