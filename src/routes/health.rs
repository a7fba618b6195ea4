// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides health and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::constants::protocol::server_name;
use crate::mcp::resources::ServerResources;

/// Create all health check routes
pub fn routes() -> Router<Arc<ServerResources>> {
    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": server_name(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    async fn ready_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}
