// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database and server resource creation helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Chef MCP Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `chef_mcp_server`

use anyhow::Result;
use std::sync::{Arc, Once};

use chef_mcp_server::{
    config::environment::{DatabaseConfig, Environment, LogLevel, RateLimitConfig, ServerConfig},
    database::Database,
    mcp::resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (fresh in-memory SQLite)
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(Arc::new(database))
}

/// Test server configuration with the given rate limit
pub fn create_test_config(max_requests: u32, window_secs: i64) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        rate_limit: RateLimitConfig {
            max_requests,
            window_secs,
        },
    }
}

/// Complete test environment with a fresh database and the given rate limit
pub async fn create_test_resources(
    max_requests: u32,
    window_secs: i64,
) -> Result<Arc<ServerResources>> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    let config = create_test_config(max_requests, window_secs);
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Default test environment (generous rate limit)
pub async fn setup_test_environment() -> Result<Arc<ServerResources>> {
    create_test_resources(1000, 60).await
}
