// ABOUTME: Route module organization for the nutrition service HTTP endpoints
// ABOUTME: Merges the health and nutrition route groups into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the nutrition service
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the aggregator in [`ServerResources`].

/// Health check and service banner routes
pub mod health;
/// Nutrition analysis routes
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::{NutritionRoutes, ReferenceListing};

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::http::Uri;
use axum::Router;
use std::sync::Arc;

/// All application routes, without middleware
///
/// Unknown paths answer with a JSON `RESOURCE_NOT_FOUND` error.
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(NutritionRoutes::routes(Arc::clone(resources)))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
