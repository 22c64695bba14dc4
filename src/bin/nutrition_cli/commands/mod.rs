// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrition-cli
// ABOUTME: Provides the analyze and foods commands

pub mod analyze;
pub mod foods;
