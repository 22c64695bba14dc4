// ABOUTME: Nutrient aggregation engine folding parsed ingredient lines into meal totals
// ABOUTME: Scales per-100g profiles by mass and records unusable inputs as skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient aggregation.
//!
//! [`NutrientAggregator::analyze`] walks the submitted entries in order. Each
//! string is parsed, resolved against the food table and scaled by
//! `grams / 100`; everything else ends up in `skipped_ingredients`. The call
//! cannot fail.
//!
//! # Precision
//!
//! The running totals are lossy on purpose and must stay that way for
//! existing consumers:
//!
//! - calories and each macronutrient are rounded to 2 decimals after every
//!   ingredient, not once at the end;
//! - the first ingredient carrying a micronutrient stores its per-100g string
//!   as-is, without applying its own weight factor;
//! - every later ingredient carrying the same micronutrient replaces the total
//!   with `stored magnitude x its weight factor`, formatted to 1 decimal, keeping
//!   the stored unit.

use crate::ingredient_parser::{IngredientParseError, IngredientParser};
use crate::numeric::{round_to, split_magnitude};
use crate::reference::{NutritionTable, UnitConversionTable};
use nutrition_core::models::{
    AggregationResult, IngredientBreakdown, NutrientProfile, ParsedIngredient,
};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Decimal places kept on calorie and macronutrient totals
const TOTAL_DECIMALS: usize = 2;

/// Decimal places kept on merged micronutrient magnitudes
const MICRONUTRIENT_DECIMALS: usize = 1;

/// Reference basis of every nutrient profile, in grams
const PROFILE_BASIS_GRAMS: f64 = 100.0;

/// Why an entry ended up in `skipped_ingredients`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Entry is not a JSON string
    NotText,
    /// Text could not be parsed
    Unparseable(IngredientParseError),
    /// Parsed name is not in the food table
    UnknownFood(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "entry is not a string"),
            Self::Unparseable(error) => write!(f, "not parseable: {error}"),
            Self::UnknownFood(name) => write!(f, "unknown food '{name}'"),
        }
    }
}

/// Combines the ingredient parser with the food table
///
/// Holds only shared read-only tables, so one instance can serve any number
/// of concurrent callers.
#[derive(Debug, Clone)]
pub struct NutrientAggregator {
    parser: IngredientParser,
    foods: Arc<NutritionTable>,
}

impl NutrientAggregator {
    /// Create an aggregator over injected reference tables
    #[must_use]
    pub const fn new(foods: Arc<NutritionTable>, units: Arc<UnitConversionTable>) -> Self {
        Self {
            parser: IngredientParser::new(units),
            foods,
        }
    }

    /// Create an aggregator over the built-in reference tables
    #[must_use]
    pub fn with_builtin_tables() -> Self {
        Self::new(
            Arc::new(NutritionTable::builtin()),
            Arc::new(UnitConversionTable::builtin()),
        )
    }

    /// Parser used for each entry
    #[must_use]
    pub const fn parser(&self) -> &IngredientParser {
        &self.parser
    }

    /// Food table used for lookups
    #[must_use]
    pub fn foods(&self) -> &NutritionTable {
        &self.foods
    }

    /// Aggregate nutrition over decoded JSON entries
    ///
    /// Non-string entries, unparseable lines and unknown foods are echoed
    /// unchanged into `skipped_ingredients`, preserving input order.
    #[must_use]
    pub fn analyze(&self, items: &[Value]) -> AggregationResult {
        let mut state = AggregationState::default();

        for item in items {
            let Some(text) = item.as_str() else {
                state.skip(item.clone(), &SkipReason::NotText);
                continue;
            };

            match self.resolve(text) {
                Ok((parsed, profile)) => state.accumulate(text, parsed, profile),
                Err(reason) => state.skip(item.clone(), &reason),
            }
        }

        state.finish()
    }

    /// Aggregate nutrition over plain text lines
    #[must_use]
    pub fn analyze_lines<S: AsRef<str>>(&self, lines: &[S]) -> AggregationResult {
        let items: Vec<Value> = lines
            .iter()
            .map(|line| Value::String(line.as_ref().to_owned()))
            .collect();
        self.analyze(&items)
    }

    fn resolve(&self, text: &str) -> Result<(ParsedIngredient, &NutrientProfile), SkipReason> {
        let parsed = self.parser.parse(text).map_err(SkipReason::Unparseable)?;
        let profile = self
            .foods
            .get(&parsed.name)
            .ok_or_else(|| SkipReason::UnknownFood(parsed.name.clone()))?;
        Ok((parsed, profile))
    }
}

/// Per-call accumulator, owned by a single `analyze` invocation
#[derive(Debug, Default)]
struct AggregationState {
    result: AggregationResult,
}

impl AggregationState {
    fn skip(&mut self, item: Value, reason: &SkipReason) {
        debug!(input = %item, reason = %reason, "Skipping ingredient");
        self.result.skipped_ingredients.push(item);
    }

    // Multiply and add stay unfused: totals must match plain f64 arithmetic.
    #[allow(clippy::suboptimal_flops)]
    fn accumulate(&mut self, input: &str, parsed: ParsedIngredient, profile: &NutrientProfile) {
        let weight_factor = parsed.grams / PROFILE_BASIS_GRAMS;
        let totals = &mut self.result.macronutrients;

        totals.protein = round_to(
            totals.protein + profile.protein * weight_factor,
            TOTAL_DECIMALS,
        );
        totals.carbs = round_to(totals.carbs + profile.carbs * weight_factor, TOTAL_DECIMALS);
        totals.fat = round_to(totals.fat + profile.fat * weight_factor, TOTAL_DECIMALS);

        for (nutrient, value) in &profile.micronutrients {
            self.merge_micronutrient(nutrient, value, weight_factor);
        }

        let calories = profile.calories * weight_factor;
        self.result.calories = round_to(self.result.calories + calories, TOTAL_DECIMALS);

        debug!(
            input = %input,
            food = %parsed.name,
            grams = parsed.grams,
            calories,
            "Ingredient resolved"
        );

        self.result.ingredients_parsed.push(IngredientBreakdown {
            input: input.to_owned(),
            parsed,
            calories: round_to(calories, TOTAL_DECIMALS),
        });
    }

    fn merge_micronutrient(&mut self, nutrient: &str, value: &str, weight_factor: f64) {
        match self.result.micronutrients.entry(nutrient.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(value.to_owned());
            }
            Entry::Occupied(mut slot) => {
                if let Some(merged) = scale_micronutrient(slot.get(), weight_factor) {
                    slot.insert(merged);
                }
            }
        }
    }

    fn finish(self) -> AggregationResult {
        debug!(
            parsed = self.result.ingredients_parsed.len(),
            skipped = self.result.skipped_ingredients.len(),
            calories = self.result.calories,
            "Nutrient aggregation complete"
        );
        self.result
    }
}

/// Scale the magnitude of a stored `"<magnitude><unit>"` string
///
/// Returns `None` when the stored value has no leading magnitude, in which
/// case the caller keeps it untouched.
fn scale_micronutrient(stored: &str, weight_factor: f64) -> Option<String> {
    let (magnitude, unit) = split_magnitude(stored)?;
    let scaled = magnitude * weight_factor;
    Some(format!("{scaled:.MICRONUTRIENT_DECIMALS$}{unit}"))
}
