// ABOUTME: Route module organization for Chef MCP Server HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Route module for the Chef MCP Server
//!
//! Routes are organized by domain; each module contains route definitions
//! and thin handler functions that delegate to the shared resources.

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::mcp::resources::ServerResources;

/// Health check and system status routes
pub mod health;
/// Model Context Protocol (MCP) JSON-RPC endpoint
pub mod mcp;
/// Recipe CRUD and search routes
pub mod recipes;
/// Shopping list routes
pub mod shopping;
/// Direct tool invocation routes
pub mod tools;

/// Request timeout applied to every route
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assemble the full application router over shared resources
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(tools::routes())
        .merge(mcp::routes())
        .nest("/api/recipes", recipes::routes())
        .nest("/api/shopping", shopping::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        .with_state(resources)
}
