// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven listen address, reference table paths and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the nutrition service
//!
//! Everything is read from environment variables; there is no config file.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
