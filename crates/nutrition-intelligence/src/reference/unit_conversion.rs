// ABOUTME: Unit token to grams-per-unit conversion table
// ABOUTME: Built-in kitchen measures plus validated loading from JSON or YAML files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{load_document, normalize_key, ReferenceTableError};
use std::collections::HashMap;
use std::path::Path;

/// Units every conversion table must define
///
/// The ingredient parser's egg rule reads `egg` directly, and the other four
/// are the measures the parser's aliases resolve to.
pub const REQUIRED_UNITS: [&str; 5] = ["cup", "tbsp", "tsp", "piece", "egg"];

/// Volume and count conversion constants (to grams)
const GRAMS_PER_CUP: f64 = 240.0;
const GRAMS_PER_TBSP: f64 = 15.0;
const GRAMS_PER_TSP: f64 = 5.0;
const GRAMS_PER_PIECE: f64 = 50.0;
const GRAMS_PER_EGG: f64 = 50.0;

/// Grams per unit keyed by singular, lowercase unit token
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConversionTable {
    units: HashMap<String, f64>,
}

impl UnitConversionTable {
    /// Built-in kitchen measures
    #[must_use]
    pub fn builtin() -> Self {
        let units = [
            ("cup", GRAMS_PER_CUP),
            ("tbsp", GRAMS_PER_TBSP),
            ("tsp", GRAMS_PER_TSP),
            ("piece", GRAMS_PER_PIECE),
            ("egg", GRAMS_PER_EGG),
        ];

        Self {
            units: units
                .into_iter()
                .map(|(unit, grams)| (unit.to_owned(), grams))
                .collect(),
        }
    }

    /// Build a table from arbitrary entries, normalizing and validating them
    ///
    /// # Errors
    ///
    /// Returns an error if a unit token is empty, a factor is not a positive
    /// finite number, or one of [`REQUIRED_UNITS`] is missing.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ReferenceTableError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut units = HashMap::new();
        for (unit, grams) in entries {
            let unit = normalize_key(unit.as_ref())?;
            if !grams.is_finite() || grams <= 0.0 {
                return Err(ReferenceTableError::InvalidUnitFactor { unit, grams });
            }
            units.insert(unit, grams);
        }

        if let Some(missing) = REQUIRED_UNITS
            .into_iter()
            .find(|unit| !units.contains_key(*unit))
        {
            return Err(ReferenceTableError::MissingUnit(missing));
        }

        Ok(Self { units })
    }

    /// Load a table from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if the
    /// entries fail validation.
    pub fn from_path(path: &Path) -> Result<Self, ReferenceTableError> {
        let document: HashMap<String, f64> = load_document(path)?;
        Self::from_entries(document)
    }

    /// Grams represented by one `unit`, if the unit is known
    #[must_use]
    pub fn grams_per_unit(&self, unit: &str) -> Option<f64> {
        self.units.get(unit).copied()
    }

    /// Number of units
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table has no units
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit tokens in sorted order
    #[must_use]
    pub fn unit_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
