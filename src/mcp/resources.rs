// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Holds the database, rate limiter, tool registry, and configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Chef MCP Contributors

//! # Server Resources Module
//!
//! Centralized resource container shared by every transport. Built once at
//! startup; handlers receive an `Arc<ServerResources>` instead of
//! re-creating expensive objects per request.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::rate_limiting::SlidingWindowLimiter;
use crate::tools::{ToolContext, ToolExecutor, ToolRegistry};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Recipe and shopping-list storage
    pub database: Arc<Database>,
    /// Tool invocation rate limiter
    pub limiter: Arc<SlidingWindowLimiter>,
    /// Rate-limited tool executor over the built-in registry
    pub executor: ToolExecutor,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let database = Arc::new(database);
        let limiter = Arc::new(SlidingWindowLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window_secs,
        ));
        let registry = Arc::new(ToolRegistry::with_builtin_tools());
        let executor = ToolExecutor::new(
            Arc::clone(&registry),
            Arc::clone(&limiter),
            ToolContext::new(Arc::clone(&database)),
        );

        Self {
            database,
            limiter,
            executor,
            config: Arc::new(config),
        }
    }
}
