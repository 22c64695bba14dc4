// ABOUTME: Core types for the nutrition analysis service
// ABOUTME: Foundation crate with error handling and nutrition result models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types for the nutrition analysis service.
//! It changes rarely, so the engine and server crates can build on it without
//! pulling in each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Nutrient profiles and the aggregation result returned to callers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Nutrition data models (profiles, parsed ingredients, aggregation results)
pub mod models;
