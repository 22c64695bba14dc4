// ABOUTME: Nutrition models for per-100g food profiles and aggregated meal totals
// ABOUTME: NutrientProfile, ParsedIngredient, IngredientBreakdown, and AggregationResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field names reserved for the four fixed per-100g values of a profile
pub const MACRO_FIELDS: [&str; 4] = ["calories", "protein", "carbs", "fat"];

/// Nutrient content of a food per 100 g
///
/// Serialized flat, the same way reference table files are written:
/// `{"calories": 130, "protein": 2.7, "carbs": 28, "fat": 0.3, "iron": "0.4mg"}`.
/// Every key other than the four macro fields is a micronutrient whose value is
/// a magnitude immediately followed by its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy in kcal per 100 g
    pub calories: f64,
    /// Protein in grams per 100 g
    pub protein: f64,
    /// Carbohydrates in grams per 100 g
    pub carbs: f64,
    /// Fat in grams per 100 g
    pub fat: f64,
    /// Micronutrients as magnitude+unit strings (e.g. `"0.4mg"`)
    #[serde(flatten)]
    pub micronutrients: BTreeMap<String, String>,
}

impl NutrientProfile {
    /// Create a profile without micronutrients
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            micronutrients: BTreeMap::new(),
        }
    }

    /// Add a micronutrient value such as `("iron", "0.4mg")`
    #[must_use]
    pub fn with_micronutrient(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.micronutrients.insert(name.into(), value.into());
        self
    }
}

/// Structured result of parsing one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Singularized, lowercase food name
    pub name: String,
    /// Resolved mass in grams
    pub grams: f64,
}

/// Contribution of one successfully resolved ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientBreakdown {
    /// Input text as submitted
    pub input: String,
    /// What the parser extracted from it
    pub parsed: ParsedIngredient,
    /// Calories contributed by this line, rounded to 2 decimals
    pub calories: f64,
}

/// Running macronutrient totals in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientTotals {
    /// Total protein (g)
    pub protein: f64,
    /// Total carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
}

/// Aggregated nutrition for a list of ingredient lines
///
/// Built fresh for every call and owned by that call. Totals are re-rounded to
/// two decimals after each ingredient and merged micronutrients are re-formatted
/// to one decimal on every update, so values drift slightly from exact
/// arithmetic over long lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Total energy (kcal)
    pub calories: f64,
    /// Protein, carbohydrate and fat totals
    pub macronutrients: MacronutrientTotals,
    /// Micronutrient totals as magnitude+unit strings
    pub micronutrients: BTreeMap<String, String>,
    /// Resolved lines in input order
    pub ingredients_parsed: Vec<IngredientBreakdown>,
    /// Inputs that could not be used, echoed unchanged in input order
    pub skipped_ingredients: Vec<serde_json::Value>,
}
