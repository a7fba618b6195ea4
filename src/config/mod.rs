// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven configuration with typed sub-configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Configuration module for the Chef MCP Server.
//!
//! All runtime configuration comes from environment variables with sensible
//! defaults; there is no config-file layer.

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseConfig, Environment, LogLevel, RateLimitConfig, ServerConfig};
