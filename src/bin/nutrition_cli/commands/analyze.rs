// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Analyze command for nutrition-cli
// ABOUTME: Aggregates nutrition over ingredient lines given on the command line

use crate::helpers::display::print_json;
use nutrition_service::errors::AppResult;
use nutrition_service::intelligence::NutrientAggregator;
use tracing::info;

/// Aggregate `ingredients` and print the result as JSON
pub fn run(aggregator: &NutrientAggregator, ingredients: &[String], pretty: bool) -> AppResult<()> {
    let result = aggregator.analyze_lines(ingredients);

    info!(
        parsed = result.ingredients_parsed.len(),
        skipped = result.skipped_ingredients.len(),
        "Analysis complete"
    );

    print_json(&result, pretty)
}
