// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrition-cli
// ABOUTME: Renders results as JSON and reference listings as plain columns

use nutrition_service::errors::AppResult;
use serde::Serialize;

/// Print any serializable value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print a titled list, one entry per line
pub fn print_section(title: &str, entries: &[&str]) {
    println!("{title} ({}):", entries.len());
    for entry in entries {
        println!("  {entry}");
    }
}
