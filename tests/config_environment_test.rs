// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, and invalid-value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;

use chef_mcp_server::config::environment::ServerConfig;

fn clear_config_env() {
    for key in [
        "HTTP_PORT",
        "LOG_LEVEL",
        "ENVIRONMENT",
        "DATABASE_URL",
        "RATE_LIMIT_MAX_REQUESTS",
        "RATE_LIMIT_WINDOW_SECS",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_env_is_empty() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.database.url, "sqlite:./chef_agent.db");
    assert_eq!(config.rate_limit.max_requests, 100);
    assert_eq!(config.rate_limit.window_secs, 60);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_config_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("RATE_LIMIT_MAX_REQUESTS", "5");
    env::set_var("RATE_LIMIT_WINDOW_SECS", "10");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);
    assert!(config.database.is_memory());
    assert_eq!(config.rate_limit.max_requests, 5);
    assert_eq!(config.rate_limit.window_secs, 10);

    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_numeric_value_is_a_config_error() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(ServerConfig::from_env().is_err());

    clear_config_env();
}

#[test]
#[serial]
fn test_summary_mentions_the_rate_limit() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    assert!(summary.contains("100 requests / 60s"));
    assert!(summary.contains("HTTP Port: 8080"));
}
