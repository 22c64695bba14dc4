// ABOUTME: Service-wide constants for the nutrition HTTP server and CLI
// ABOUTME: Default ports, environment variable names and fixed client-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them.

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP server
    pub const NUTRITION_SERVICE: &str = "nutrition-service";
    /// Command line tool
    pub const NUTRITION_CLI: &str = "nutrition-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Food table file replacing the built-in one
    pub const NUTRITION_TABLE_PATH: &str = "NUTRITION_TABLE_PATH";
    /// Unit table file replacing the built-in one
    pub const UNIT_TABLE_PATH: &str = "UNIT_TABLE_PATH";
    /// Request body limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Listen on every interface
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Port the service has always answered on
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// 1 MiB
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Header carrying the per-request identifier
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Client-facing messages
pub mod messages {
    /// Body of `GET /`
    pub const SERVICE_BANNER: &str =
        "Nutrition Microservice is running! Send POST requests to /analyze-nutrition";
    /// Analyze request body was not JSON
    pub const REQUEST_MUST_BE_JSON: &str = "Request must be JSON";
    /// Analyze request had no `ingredients` array
    pub const INGREDIENTS_MUST_BE_ARRAY: &str = "Ingredients must be an array";
}
