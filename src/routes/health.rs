// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness, readiness and the plain-text service banner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! This module provides health and readiness endpoints for load balancer
//! checks, plus the `GET /` banner older clients probe.

use crate::constants::messages;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_banner))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_banner() -> &'static str {
        messages::SERVICE_BANNER
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the reference tables are loaded, which `ServerResources` guarantees
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        let aggregator = &resources.aggregator;
        Json(serde_json::json!({
            "status": "ready",
            "foods": aggregator.foods().len(),
            "units": aggregator.parser().units().len(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
