// ABOUTME: Ingredient parsing and nutrient aggregation engine
// ABOUTME: Extracted from the server crate so it can be used without the HTTP stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Turns free-text ingredient lines into nutrition totals:
//!
//! ```rust
//! use nutrition_intelligence::NutrientAggregator;
//! use serde_json::json;
//!
//! let aggregator = NutrientAggregator::with_builtin_tables();
//! let result = aggregator.analyze(&[json!("1 cup rice"), json!("2 eggs"), json!(42)]);
//!
//! assert_eq!(result.ingredients_parsed.len(), 2);
//! assert_eq!(result.skipped_ingredients, vec![json!(42)]);
//! assert!((result.calories - 455.0).abs() < 0.1);
//! ```
//!
//! Everything here is synchronous and allocation-bounded by the input; the
//! reference tables are read-only and shared behind `Arc`.

/// Free-text ingredient line parser
pub mod ingredient_parser;

/// Folding of parsed ingredients into calorie, macro and micronutrient totals
pub mod nutrient_aggregator;

/// Rounding and magnitude+unit helpers
pub mod numeric;

/// Food and unit reference tables
pub mod reference;

pub use ingredient_parser::{IngredientParseError, IngredientParser, DEFAULT_GRAMS_PER_UNIT};
pub use nutrient_aggregator::{NutrientAggregator, SkipReason};
pub use reference::{NutritionTable, ReferenceTableError, UnitConversionTable, REQUIRED_UNITS};
