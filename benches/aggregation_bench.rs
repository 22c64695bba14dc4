// ABOUTME: Criterion benchmarks for ingredient parsing and nutrient aggregation
// ABOUTME: Measures single-line parse latency and aggregation throughput over meal sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition engine.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrition_service::intelligence::{IngredientParser, NutrientAggregator, UnitConversionTable};
use serde_json::{json, Value};
use std::sync::Arc;

/// Lines cycled through to build meals, including ones that end up skipped
const SAMPLE_LINES: [&str; 10] = [
    "1 cup rice",
    "2 eggs",
    "100g chicken breast",
    "1 tbsp almonds",
    "2 cups spinach",
    "1.5 cups milk",
    "3 handfuls brown rice",
    "1 cup quinoa",
    "scrambled egg",
    "invalid",
];

fn generate_meal(count: usize) -> Vec<Value> {
    SAMPLE_LINES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(index, line)| {
            // Every seventh entry is not a string
            if index % 7 == 6 {
                json!(index)
            } else {
                json!(line)
            }
        })
        .collect()
}

/// Benchmark parsing of individual lines
fn bench_ingredient_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingredient_parser");
    let parser = IngredientParser::new(Arc::new(UnitConversionTable::builtin()));

    for line in ["1 cup rice", "100g chicken breast", "2 cups egg whites", "invalid"] {
        group.bench_with_input(BenchmarkId::new("parse", line), line, |b, line| {
            b.iter(|| parser.parse(black_box(line)));
        });
    }

    group.finish();
}

/// Benchmark aggregation with varying meal sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrient_aggregator");
    let aggregator = NutrientAggregator::with_builtin_tables();

    for count in [2_usize, 20, 200, 2_000] {
        let meal = generate_meal(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("analyze", count), &meal, |b, meal| {
            b.iter(|| aggregator.analyze(black_box(meal)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ingredient_parsing, bench_aggregation);
criterion_main!(benches);
