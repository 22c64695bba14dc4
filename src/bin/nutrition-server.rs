// ABOUTME: Server binary for the nutrition analysis HTTP API
// ABOUTME: Loads configuration and reference tables from the environment, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Service Binary
//!
//! Starts the HTTP API answering `POST /analyze-nutrition`.

use anyhow::Result;
use clap::Parser;
use nutrition_service::{
    config::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrition-server")]
#[command(about = "Nutrition analysis API - ingredient lists in, nutrient totals out")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Nutrition Service");
    info!("{}", config.summary());

    let resources = match ServerResources::from_config(config) {
        Ok(resources) => Arc::new(resources),
        Err(e) => {
            error!(error = %e, "Failed to load reference tables");
            return Err(e.into());
        }
    };

    server::serve(resources).await?;
    Ok(())
}
