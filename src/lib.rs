// ABOUTME: Main library entry point for the nutrition analysis service
// ABOUTME: Wires configuration, logging, routes and the aggregation engine into an HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Service
//!
//! Turns free-text ingredient lists such as `["1 cup rice", "2 eggs"]` into
//! total calories, macronutrients and micronutrients.
//!
//! ## Architecture
//!
//! - **`nutrition-core`**: error type and result models
//! - **`nutrition-intelligence`**: reference tables, ingredient parser, aggregator
//! - **this crate**: environment configuration, logging, axum routes, server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrition_service::config::ServerConfig;
//! use nutrition_service::errors::AppResult;
//! use nutrition_service::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config)?);
//!     nutrition_service::server::serve(resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Defaults, environment variable names and fixed messages
pub mod constants;

/// Unified error handling (re-exported from `nutrition-core`)
pub mod errors;

/// Ingredient parsing and aggregation (re-exported from `nutrition-intelligence`)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Server assembly and graceful shutdown
pub mod server;
