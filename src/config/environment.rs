// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, table paths and body limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Food table replacing the built-in one
    pub nutrition_table_path: Option<PathBuf>,
    /// Unit table replacing the built-in one
    pub unit_table_path: Option<PathBuf>,
    /// Largest accepted request body in bytes
    pub max_request_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_owned(),
            http_port: defaults::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            nutrition_table_path: None,
            unit_table_path: None,
            max_request_body_bytes: defaults::DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a numeric variable does not parse.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::DEFAULT_HOST),
            http_port: parse_env_or(env_vars::HTTP_PORT, defaults::DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            nutrition_table_path: env_path(env_vars::NUTRITION_TABLE_PATH),
            unit_table_path: env_path(env_vars::UNIT_TABLE_PATH),
            max_request_body_bytes: parse_env_or(
                env_vars::MAX_REQUEST_BODY_BYTES,
                defaults::DEFAULT_MAX_REQUEST_BODY_BYTES,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for an empty host or a zero body limit.
    pub fn validate(&self) -> AppResult<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::config_invalid(format!(
                "{} must not be empty",
                env_vars::HOST
            )));
        }
        if self.max_request_body_bytes == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_vars::MAX_REQUEST_BODY_BYTES
            )));
        }
        Ok(())
    }

    /// `host:port` string to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrition Service Configuration: address={}, environment={}, food table={}, unit table={}, max body={} bytes",
            self.bind_address(),
            self.environment,
            table_source(self.nutrition_table_path.as_deref()),
            table_source(self.unit_table_path.as_deref()),
            self.max_request_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Non-empty environment variable as a path
fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}'")).with_source(e)
        }),
        Err(_) => Ok(default),
    }
}

fn table_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in".to_owned(), |p| p.display().to_string())
}
