// ABOUTME: Reference table fixtures for integration tests
// ABOUTME: Writes food and unit tables to temporary JSON or YAML files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;
use tempfile::NamedTempFile;

/// Food table with two foods that are not built in
pub const PANTRY_FOODS_JSON: &str = r#"{
    "Lentil": {"calories": 116, "protein": 9, "carbs": 20, "fat": 0.4, "iron": "3.3mg"},
    "oat": {"calories": 389, "protein": 16.9, "carbs": 66, "fat": 6.9, "iron": "4.7mg", "magnesium": "177mg"}
}"#;

/// Same pantry as YAML
pub const PANTRY_FOODS_YAML: &str = "\
lentil:
  calories: 116
  protein: 9
  carbs: 20
  fat: 0.4
  iron: 3.3mg
oat:
  calories: 389
  protein: 16.9
  carbs: 66
  fat: 6.9
  iron: 4.7mg
  magnesium: 177mg
";

/// Unit table with a larger cup and an extra `bowl` unit
pub const METRIC_UNITS_YAML: &str = "\
cup: 250
tbsp: 15
tsp: 5
piece: 50
egg: 60
bowl: 300
";

/// Write `contents` to a temp file whose name ends in `suffix`
pub fn table_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp table file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp table file");
    file.flush().expect("Failed to flush temp table file");
    file
}
