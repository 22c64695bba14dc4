// ABOUTME: Error types for loading and validating nutrition reference tables
// ABOUTME: Covers unreadable files, undecodable documents, and table invariant violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reference table loading errors
#[derive(Debug, Error)]
pub enum ReferenceTableError {
    /// Table file could not be read
    #[error("Failed to read reference table {path}: {source}")]
    Io {
        /// File that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// JSON document could not be decoded
    #[error("Invalid JSON reference table: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be decoded
    #[error("Invalid YAML reference table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML
    #[error("Unsupported reference table format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// Food or unit key is empty after normalization
    #[error("Reference table contains an empty key")]
    EmptyKey,

    /// A macro value is negative or not a finite number
    #[error("Invalid {field} value {value} for food '{food}'")]
    InvalidMacro {
        /// Food the value belongs to
        food: String,
        /// Macro field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A micronutrient string has no leading magnitude
    #[error("Micronutrient '{nutrient}' of food '{food}' must be a magnitude followed by a unit, got '{value}'")]
    InvalidMicronutrient {
        /// Food the value belongs to
        food: String,
        /// Micronutrient name
        nutrient: String,
        /// Offending value
        value: String,
    },

    /// A unit conversion factor is not a positive finite number
    #[error("Invalid grams-per-unit factor {grams} for unit '{unit}'")]
    InvalidUnitFactor {
        /// Unit token
        unit: String,
        /// Offending factor
        grams: f64,
    },

    /// A unit the parser relies on is absent
    #[error("Unit conversion table is missing required unit '{0}'")]
    MissingUnit(&'static str),
}
