// ABOUTME: Integration tests for food and unit reference tables
// ABOUTME: Covers built-in data, JSON/YAML loading, key normalization and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{table_file, METRIC_UNITS_YAML, PANTRY_FOODS_JSON, PANTRY_FOODS_YAML};
use nutrition_core::models::NutrientProfile;
use nutrition_service::intelligence::{
    NutritionTable, ReferenceTableError, UnitConversionTable, REQUIRED_UNITS,
};
use std::path::Path;

// ============================================================================
// Built-in tables
// ============================================================================

#[test]
fn test_builtin_foods() {
    let table = NutritionTable::builtin();

    assert_eq!(
        table.food_names(),
        [
            "almond",
            "brown rice",
            "chicken breast",
            "egg",
            "milk",
            "rice",
            "spinach"
        ]
    );

    let rice = table.get("rice").unwrap();
    assert!((rice.calories - 130.0).abs() < f64::EPSILON);
    assert!((rice.protein - 2.7).abs() < f64::EPSILON);
    assert!((rice.carbs - 28.0).abs() < f64::EPSILON);
    assert!((rice.fat - 0.3).abs() < f64::EPSILON);
    assert_eq!(rice.micronutrients["iron"], "0.4mg");

    assert_eq!(
        table.get("brown rice").unwrap().micronutrients["magnesium"],
        "43mg"
    );
    assert_eq!(table.get("egg").unwrap().micronutrients["vitaminD"], "1.1mcg");
}

#[test]
fn test_builtin_lookup_is_exact() {
    let table = NutritionTable::builtin();
    assert!(table.contains("chicken breast"));
    assert!(!table.contains("chicken"));
    assert!(!table.contains("Rice"));
    assert!(!table.contains("rices"));
}

#[test]
fn test_builtin_units() {
    let units = UnitConversionTable::builtin();

    assert_eq!(units.unit_names(), ["cup", "egg", "piece", "tbsp", "tsp"]);
    assert_eq!(units.grams_per_unit("cup"), Some(240.0));
    assert_eq!(units.grams_per_unit("tbsp"), Some(15.0));
    assert_eq!(units.grams_per_unit("tsp"), Some(5.0));
    assert_eq!(units.grams_per_unit("piece"), Some(50.0));
    assert_eq!(units.grams_per_unit("egg"), Some(50.0));
    assert_eq!(units.grams_per_unit("handful"), None);
}

// ============================================================================
// Loading from files
// ============================================================================

#[test]
fn test_json_and_yaml_foods_load_identically() {
    let json_file = table_file(PANTRY_FOODS_JSON, ".json");
    let yaml_file = table_file(PANTRY_FOODS_YAML, ".yml");

    let from_json = NutritionTable::from_path(json_file.path()).unwrap();
    let from_yaml = NutritionTable::from_path(yaml_file.path()).unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json.len(), 2);
    assert_eq!(
        from_json.get("oat").unwrap().micronutrients["magnesium"],
        "177mg"
    );
}

#[test]
fn test_food_keys_are_normalized() {
    let file = table_file(PANTRY_FOODS_JSON, ".json");
    let table = NutritionTable::from_path(file.path()).unwrap();

    assert!(table.contains("lentil"));
    assert!(!table.contains("Lentil"));
}

#[test]
fn test_unit_table_from_yaml() {
    let file = table_file(METRIC_UNITS_YAML, ".yaml");
    let units = UnitConversionTable::from_path(file.path()).unwrap();

    assert_eq!(units.len(), 6);
    assert_eq!(units.grams_per_unit("cup"), Some(250.0));
    assert_eq!(units.grams_per_unit("bowl"), Some(300.0));
}

#[test]
fn test_missing_file_reports_path() {
    let error = NutritionTable::from_path(Path::new("/nonexistent/foods.json")).unwrap_err();

    assert!(matches!(error, ReferenceTableError::Io { .. }));
    assert!(error.to_string().contains("/nonexistent/foods.json"));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = table_file(PANTRY_FOODS_JSON, ".toml");
    let error = NutritionTable::from_path(file.path()).unwrap_err();

    assert!(matches!(error, ReferenceTableError::UnsupportedFormat(_)));
}

#[test]
fn test_malformed_documents_are_rejected() {
    let json_file = table_file("{\"rice\": ", ".json");
    assert!(matches!(
        NutritionTable::from_path(json_file.path()).unwrap_err(),
        ReferenceTableError::Json(_)
    ));

    let yaml_file = table_file("rice: [unclosed", ".yaml");
    assert!(matches!(
        NutritionTable::from_path(yaml_file.path()).unwrap_err(),
        ReferenceTableError::Yaml(_)
    ));
}

#[test]
fn test_food_missing_macro_field_is_rejected() {
    let file = table_file(r#"{"rice": {"calories": 130, "protein": 2.7, "carbs": 28}}"#, ".json");
    assert!(matches!(
        NutritionTable::from_path(file.path()).unwrap_err(),
        ReferenceTableError::Json(_)
    ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_negative_macro_is_rejected() {
    let error =
        NutritionTable::from_entries([("rice", NutrientProfile::new(130.0, -1.0, 28.0, 0.3))])
            .unwrap_err();

    match error {
        ReferenceTableError::InvalidMacro { food, field, .. } => {
            assert_eq!(food, "rice");
            assert_eq!(field, "protein");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_finite_macro_is_rejected() {
    let result =
        NutritionTable::from_entries([("rice", NutrientProfile::new(f64::NAN, 2.7, 28.0, 0.3))]);
    assert!(matches!(
        result,
        Err(ReferenceTableError::InvalidMacro {
            field: "calories",
            ..
        })
    ));
}

#[test]
fn test_micronutrient_without_magnitude_is_rejected() {
    let profile = NutrientProfile::new(130.0, 2.7, 28.0, 0.3).with_micronutrient("iron", "trace");
    let error = NutritionTable::from_entries([("rice", profile)]).unwrap_err();

    assert!(matches!(
        error,
        ReferenceTableError::InvalidMicronutrient { ref nutrient, .. } if nutrient == "iron"
    ));
}

#[test]
fn test_empty_food_key_is_rejected() {
    let result = NutritionTable::from_entries([("  ", NutrientProfile::new(1.0, 1.0, 1.0, 1.0))]);
    assert!(matches!(result, Err(ReferenceTableError::EmptyKey)));
}

#[test]
fn test_every_required_unit_must_be_present() {
    for missing in REQUIRED_UNITS {
        let entries: Vec<(&str, f64)> = REQUIRED_UNITS
            .iter()
            .filter(|unit| **unit != missing)
            .map(|unit| (*unit, 10.0))
            .collect();

        let error = UnitConversionTable::from_entries(entries).unwrap_err();
        assert!(
            matches!(error, ReferenceTableError::MissingUnit(unit) if unit == missing),
            "expected {missing} to be reported missing"
        );
    }
}

#[test]
fn test_non_positive_unit_factor_is_rejected() {
    for grams in [0.0, -5.0, f64::INFINITY] {
        let result = UnitConversionTable::from_entries([
            ("cup", grams),
            ("tbsp", 15.0),
            ("tsp", 5.0),
            ("piece", 50.0),
            ("egg", 50.0),
        ]);
        assert!(matches!(
            result,
            Err(ReferenceTableError::InvalidUnitFactor { ref unit, .. }) if unit == "cup"
        ));
    }
}

#[test]
fn test_unit_keys_are_normalized() {
    let units = UnitConversionTable::from_entries([
        (" CUP ", 240.0),
        ("Tbsp", 15.0),
        ("tsp", 5.0),
        ("piece", 50.0),
        ("EGG", 50.0),
    ])
    .unwrap();

    assert_eq!(units.grams_per_unit("cup"), Some(240.0));
    assert_eq!(units.grams_per_unit("egg"), Some(50.0));
}
