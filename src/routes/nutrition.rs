// ABOUTME: Route handlers for the nutrition analysis REST API
// ABOUTME: Validates the ingredients payload and returns aggregated totals or a flat JSON error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition routes
//!
//! `POST /analyze-nutrition` accepts `{"ingredients": [...]}`. The array may
//! hold anything; entries that are not usable ingredient strings come back in
//! `skipped_ingredients` instead of failing the request.

use crate::constants::messages;
use crate::errors::{AppError, ErrorCode};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use nutrition_core::models::AggregationResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Response for `GET /foods`
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferenceListing {
    /// Known food names, sorted
    pub foods: Vec<String>,
    /// Known unit tokens, sorted
    pub units: Vec<String>,
}

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/analyze-nutrition", post(Self::handle_analyze))
            .route("/foods", get(Self::handle_list_foods))
            .with_state(resources)
    }

    /// Handle POST /analyze-nutrition
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<AggregationResult>, AppError> {
        let Json(body) = payload.map_err(Self::reject_body)?;

        let items = body
            .get("ingredients")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::missing_field(messages::INGREDIENTS_MUST_BE_ARRAY))?;

        let result = resources.aggregator.analyze(items);

        info!(
            submitted = items.len(),
            parsed = result.ingredients_parsed.len(),
            skipped = result.skipped_ingredients.len(),
            calories = result.calories,
            "Nutrition analysis complete"
        );

        Ok(Json(result))
    }

    /// Content-type problems are invalid input; bodies that claim to be JSON
    /// but do not decode are an invalid format. Both keep the same message.
    fn reject_body(rejection: JsonRejection) -> AppError {
        let reason = rejection.body_text();
        debug!(reason = %reason, "Analyze request body is not JSON");

        let error = match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                AppError::new(ErrorCode::InvalidFormat, messages::REQUEST_MUST_BE_JSON)
            }
            _ => AppError::invalid_input(messages::REQUEST_MUST_BE_JSON),
        };
        error.with_details(json!({ "reason": reason }))
    }

    /// Handle GET /foods
    async fn handle_list_foods(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<ReferenceListing> {
        let aggregator = &resources.aggregator;
        Json(ReferenceListing {
            foods: aggregator
                .foods()
                .food_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            units: aggregator
                .parser()
                .units()
                .unit_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }
}
