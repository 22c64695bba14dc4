// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Foods command for nutrition-cli
// ABOUTME: Lists the food names and unit tokens the aggregator recognizes

use crate::helpers::display::{print_json, print_section};
use nutrition_service::errors::AppResult;
use nutrition_service::intelligence::NutrientAggregator;
use nutrition_service::routes::ReferenceListing;

/// Print known foods and units
pub fn run(aggregator: &NutrientAggregator, json: bool) -> AppResult<()> {
    let foods = aggregator.foods().food_names();
    let units = aggregator.parser().units().unit_names();

    if json {
        let listing = ReferenceListing {
            foods: foods.iter().map(|name| (*name).to_owned()).collect(),
            units: units.iter().map(|name| (*name).to_owned()).collect(),
        };
        return print_json(&listing, true);
    }

    print_section("Foods (per 100 g)", &foods);
    print_section("Units", &units);
    Ok(())
}
