// ABOUTME: Read-only reference tables used by the parser and the aggregator
// ABOUTME: Food nutrient profiles per 100 g and grams-per-unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference tables.
//!
//! Both tables are built once (from the built-in data or from a JSON/YAML
//! file) and then only read. Callers share them behind `Arc` and inject them
//! into [`crate::IngredientParser`] and [`crate::NutrientAggregator`].

mod error;
mod nutrition_table;
mod unit_conversion;

pub use error::ReferenceTableError;
pub use nutrition_table::NutritionTable;
pub use unit_conversion::{UnitConversionTable, REQUIRED_UNITS};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Decode a table document, choosing JSON or YAML from the file extension
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ReferenceTableError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let is_yaml = match extension.as_deref() {
        Some("json") => false,
        Some("yaml" | "yml") => true,
        _ => return Err(ReferenceTableError::UnsupportedFormat(path.to_path_buf())),
    };

    let contents = fs::read_to_string(path).map_err(|source| ReferenceTableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_yaml {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Lowercase and trim a table key, rejecting keys that end up empty
fn normalize_key(key: &str) -> Result<String, ReferenceTableError> {
    let normalized = key.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ReferenceTableError::EmptyKey);
    }
    Ok(normalized)
}
