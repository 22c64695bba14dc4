// ABOUTME: Data model module for nutrition analysis
// ABOUTME: Re-exports profile, parsed ingredient, and aggregation result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrient profiles and aggregation results
pub mod nutrition;

pub use nutrition::{
    AggregationResult, IngredientBreakdown, MacronutrientTotals, NutrientProfile,
    ParsedIngredient, MACRO_FIELDS,
};
