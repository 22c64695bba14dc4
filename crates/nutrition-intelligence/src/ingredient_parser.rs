// ABOUTME: Free-text ingredient line parser producing a food name and a mass in grams
// ABOUTME: Handles "2 cups rice", "100g chicken breast" and count-based egg lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient line parser.
//!
//! Rules are applied in order and the first that applies decides the result:
//!
//! 1. The line is lowercased and trimmed.
//! 2. Any line containing `egg` is counted in eggs: the first run of digits is
//!    the count and the name is always `egg`. A line without digits fails here
//!    and is not retried with the general rule, so `"2 cups egg whites"` is two
//!    eggs.
//! 3. Otherwise the line must read `<number>[ ]<unit> <name>`.
//! 4. One trailing `s` is dropped from the unit and from the name. This is a
//!    suffix rule, not a dictionary: `"molasses"` becomes `"molasse"`.
//! 5. `g`/`gram` keep the number as grams. `tablespoon` and `teaspoon` map to
//!    `tbsp` and `tsp`, other units are looked up in the conversion table, and
//!    unknown units count as 100 g each.

use crate::reference::UnitConversionTable;
use nutrition_core::models::ParsedIngredient;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Grams assumed for one unit missing from the conversion table
pub const DEFAULT_GRAMS_PER_UNIT: f64 = 100.0;

/// Name every egg line resolves to
const EGG: &str = "egg";

/// `<number><optional space><unit letters><space><name>` at the start of a line
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static QUANTITY_UNIT_NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([a-zA-Z]+)\s+(.+)").ok());

static EGG_COUNT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[0-9]+").ok());

/// Why a line could not be parsed
///
/// Every variant means the same thing to the aggregator (the line is
/// skipped); the distinction only feeds diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientParseError {
    /// Egg line without a count
    #[error("egg ingredient has no count")]
    MissingEggCount,

    /// Line does not have the quantity/unit/name shape
    #[error("expected '<quantity> <unit> <name>'")]
    UnrecognizedFormat,

    /// Quantity text could not be read as a number
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    /// The conversion table has no entry the rule depends on
    #[error("unit '{0}' is not configured")]
    UnitNotConfigured(&'static str),

    /// Pattern failed to compile
    #[error("ingredient pattern unavailable")]
    PatternUnavailable,
}

/// Turns raw ingredient lines into [`ParsedIngredient`] values
///
/// Parsing is a pure function of the input line and the injected conversion
/// table.
#[derive(Debug, Clone)]
pub struct IngredientParser {
    units: Arc<UnitConversionTable>,
}

impl IngredientParser {
    /// Create a parser over a shared conversion table
    #[must_use]
    pub const fn new(units: Arc<UnitConversionTable>) -> Self {
        Self { units }
    }

    /// Conversion table in use
    #[must_use]
    pub fn units(&self) -> &UnitConversionTable {
        &self.units
    }

    /// Parse one ingredient line
    ///
    /// # Errors
    ///
    /// Returns an [`IngredientParseError`] when the line cannot be turned into
    /// a name and a mass. The parser never panics on any input.
    pub fn parse(&self, raw: &str) -> Result<ParsedIngredient, IngredientParseError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.contains(EGG) {
            return self.parse_egg(&normalized);
        }

        self.parse_quantity_unit_name(&normalized)
    }

    fn parse_egg(&self, normalized: &str) -> Result<ParsedIngredient, IngredientParseError> {
        let pattern = EGG_COUNT_PATTERN
            .as_ref()
            .ok_or(IngredientParseError::PatternUnavailable)?;
        let count = pattern
            .find(normalized)
            .ok_or(IngredientParseError::MissingEggCount)?;
        let quantity_text = count.as_str();
        let count = parse_quantity(quantity_text)?;
        let grams_per_egg = self
            .units
            .grams_per_unit(EGG)
            .ok_or(IngredientParseError::UnitNotConfigured(EGG))?;

        Ok(ParsedIngredient {
            name: EGG.to_owned(),
            grams: finite_grams(count * grams_per_egg, quantity_text)?,
        })
    }

    fn parse_quantity_unit_name(
        &self,
        normalized: &str,
    ) -> Result<ParsedIngredient, IngredientParseError> {
        let pattern = QUANTITY_UNIT_NAME_PATTERN
            .as_ref()
            .ok_or(IngredientParseError::PatternUnavailable)?;
        let captures = pattern
            .captures(normalized)
            .ok_or(IngredientParseError::UnrecognizedFormat)?;

        let (Some(quantity), Some(unit), Some(name)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(IngredientParseError::UnrecognizedFormat);
        };

        let quantity_text = quantity.as_str();
        let quantity = parse_quantity(quantity_text)?;
        let unit = strip_plural(unit.as_str());
        let name = strip_plural(name.as_str()).trim();

        Ok(ParsedIngredient {
            name: name.to_owned(),
            grams: finite_grams(self.to_grams(quantity, unit), quantity_text)?,
        })
    }

    fn to_grams(&self, quantity: f64, unit: &str) -> f64 {
        if matches!(unit, "g" | "gram") {
            return quantity;
        }

        let unit = match unit {
            "tablespoon" => "tbsp",
            "teaspoon" => "tsp",
            other => other,
        };

        quantity
            * self
                .units
                .grams_per_unit(unit)
                .unwrap_or(DEFAULT_GRAMS_PER_UNIT)
    }
}

/// Quantities must be finite; digit runs past `f64::MAX` parse as infinity
fn parse_quantity(text: &str) -> Result<f64, IngredientParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|quantity| quantity.is_finite())
        .ok_or_else(|| IngredientParseError::InvalidQuantity(text.to_owned()))
}

/// Reject a mass that overflowed during unit conversion
fn finite_grams(grams: f64, quantity_text: &str) -> Result<f64, IngredientParseError> {
    if grams.is_finite() {
        Ok(grams)
    } else {
        Err(IngredientParseError::InvalidQuantity(quantity_text.to_owned()))
    }
}

/// Drop a single trailing `s`
fn strip_plural(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}
