// ABOUTME: Shared server resources handed to every route through axum state
// ABOUTME: Loads the reference tables once at startup and builds the aggregator over them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server resources
//!
//! Built once before the listener starts, then shared read-only behind `Arc`.

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{NutrientAggregator, NutritionTable, UnitConversionTable};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Aggregator over the configured reference tables
    pub aggregator: NutrientAggregator,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an existing aggregator with configuration
    #[must_use]
    pub fn new(aggregator: NutrientAggregator, config: ServerConfig) -> Self {
        Self {
            aggregator,
            config: Arc::new(config),
        }
    }

    /// Load the reference tables named by `config` and build the aggregator
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a configured table file cannot be read,
    /// decoded or validated.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let foods = load_nutrition_table(config.nutrition_table_path.as_deref())?;
        let units = load_unit_table(config.unit_table_path.as_deref())?;

        info!(
            foods = foods.len(),
            units = units.len(),
            "Reference tables loaded"
        );

        Ok(Self::new(
            NutrientAggregator::new(Arc::new(foods), Arc::new(units)),
            config,
        ))
    }
}

/// Food table from `path`, or the built-in one
///
/// # Errors
///
/// Returns a `ConfigError` wrapping the table error.
pub fn load_nutrition_table(path: Option<&Path>) -> AppResult<NutritionTable> {
    path.map_or_else(
        || Ok(NutritionTable::builtin()),
        |path| {
            NutritionTable::from_path(path).map_err(|e| {
                AppError::config(format!(
                    "Failed to load nutrition table {}: {e}",
                    path.display()
                ))
                .with_source(e)
            })
        },
    )
}

/// Unit table from `path`, or the built-in one
///
/// # Errors
///
/// Returns a `ConfigError` wrapping the table error.
pub fn load_unit_table(path: Option<&Path>) -> AppResult<UnitConversionTable> {
    path.map_or_else(
        || Ok(UnitConversionTable::builtin()),
        |path| {
            UnitConversionTable::from_path(path).map_err(|e| {
                AppError::config(format!(
                    "Failed to load unit table {}: {e}",
                    path.display()
                ))
                .with_source(e)
            })
        },
    )
}
