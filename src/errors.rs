// ABOUTME: Error module re-exports from nutrition-core crate
// ABOUTME: Unified AppError, ErrorCode and the JSON error body used by every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `nutrition-core` so the engine crates can share
//! them; the `http-response` feature turns [`AppError`] into an axum response.

pub use nutrition_core::errors::*;
