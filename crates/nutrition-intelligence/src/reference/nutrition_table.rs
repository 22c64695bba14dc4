// ABOUTME: Food name to per-100g nutrient profile lookup table
// ABOUTME: Built-in food data plus validated loading from JSON or YAML files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{load_document, normalize_key, ReferenceTableError};
use crate::numeric::split_magnitude;
use nutrition_core::models::{NutrientProfile, MACRO_FIELDS};
use std::collections::HashMap;
use std::path::Path;

/// Nutrient profiles keyed by canonical singular, lowercase food name
///
/// Lookups are exact: no aliases, no fuzzy matching. "chicken" does not find
/// "chicken breast".
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionTable {
    foods: HashMap<String, NutrientProfile>,
}

impl NutritionTable {
    /// Built-in reference foods (values per 100 g)
    #[must_use]
    pub fn builtin() -> Self {
        let foods = [
            (
                "rice",
                NutrientProfile::new(130.0, 2.7, 28.0, 0.3).with_micronutrient("iron", "0.4mg"),
            ),
            (
                "brown rice",
                NutrientProfile::new(111.0, 2.6, 23.0, 0.9)
                    .with_micronutrient("magnesium", "43mg"),
            ),
            (
                "egg",
                NutrientProfile::new(143.0, 13.0, 0.7, 9.5)
                    .with_micronutrient("vitaminD", "1.1mcg"),
            ),
            (
                "chicken breast",
                NutrientProfile::new(165.0, 31.0, 0.0, 3.6)
                    .with_micronutrient("niacin", "14.8mg"),
            ),
            (
                "almond",
                NutrientProfile::new(579.0, 21.0, 22.0, 50.0)
                    .with_micronutrient("vitaminE", "25.6mg"),
            ),
            (
                "spinach",
                NutrientProfile::new(23.0, 2.9, 3.6, 0.4).with_micronutrient("vitaminK", "483mcg"),
            ),
            (
                "milk",
                NutrientProfile::new(42.0, 3.4, 4.8, 1.0).with_micronutrient("calcium", "125mg"),
            ),
        ];

        Self {
            foods: foods
                .into_iter()
                .map(|(name, profile)| (name.to_owned(), profile))
                .collect(),
        }
    }

    /// Build a table from arbitrary entries, normalizing and validating them
    ///
    /// # Errors
    ///
    /// Returns an error if a food name is empty, a macro value is negative or
    /// not finite, or a micronutrient value has no leading magnitude.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ReferenceTableError>
    where
        I: IntoIterator<Item = (K, NutrientProfile)>,
        K: AsRef<str>,
    {
        let mut foods = HashMap::new();
        for (name, profile) in entries {
            let name = normalize_key(name.as_ref())?;
            validate_profile(&name, &profile)?;
            foods.insert(name, profile);
        }
        Ok(Self { foods })
    }

    /// Load a table from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if any entry
    /// fails validation.
    pub fn from_path(path: &Path) -> Result<Self, ReferenceTableError> {
        let document: HashMap<String, NutrientProfile> = load_document(path)?;
        Self::from_entries(document)
    }

    /// Exact lookup of a food by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientProfile> {
        self.foods.get(name)
    }

    /// Whether the food is known
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.foods.contains_key(name)
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the table has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Food names in sorted order
    #[must_use]
    pub fn food_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.foods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn validate_profile(food: &str, profile: &NutrientProfile) -> Result<(), ReferenceTableError> {
    let values = [profile.calories, profile.protein, profile.carbs, profile.fat];
    for (field, value) in MACRO_FIELDS.into_iter().zip(values) {
        if !value.is_finite() || value < 0.0 {
            return Err(ReferenceTableError::InvalidMacro {
                food: food.to_owned(),
                field,
                value,
            });
        }
    }

    for (nutrient, value) in &profile.micronutrients {
        if split_magnitude(value).is_none() {
            return Err(ReferenceTableError::InvalidMicronutrient {
                food: food.to_owned(),
                nutrient: nutrient.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(())
}
