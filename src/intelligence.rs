// ABOUTME: Intelligence module re-exports from nutrition-intelligence crate
// ABOUTME: Lets server code import the parser and aggregator through the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Ingredient parsing and nutrient aggregation, re-exported from the
//! `nutrition-intelligence` crate.

pub use nutrition_intelligence::*;

// Submodules for path-based access (e.g., crate::intelligence::reference::NutritionTable)
pub use nutrition_intelligence::{ingredient_parser, nutrient_aggregator, numeric, reference};
