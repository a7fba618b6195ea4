// ABOUTME: Direct HTTP bindings for the MCP tools under /tools/*
// ABOUTME: Same rate-limited executor and payload contracts as the MCP transports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Direct tool invocation routes
//!
//! `POST /tools/recipe_finder` and `POST /tools/shopping_list_manager`
//! accept the tool arguments as the request body and return the tool
//! payload verbatim. Because the payloads encode their own failure modes,
//! these endpoints always answer `200 OK` with a JSON body - including for
//! validation failures and rate-limit rejections.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use std::sync::Arc;

use crate::constants::tools::{RECIPE_FINDER, SHOPPING_LIST_MANAGER};
use crate::mcp::resources::ServerResources;

/// Create the direct tool invocation routes
pub fn routes() -> Router<Arc<ServerResources>> {
    Router::new()
        .route("/tools/recipe_finder", post(recipe_finder))
        .route("/tools/shopping_list_manager", post(shopping_list_manager))
}

async fn recipe_finder(
    State(resources): State<Arc<ServerResources>>,
    Json(args): Json<Value>,
) -> Json<Value> {
    Json(resources.executor.execute(RECIPE_FINDER, &args).await)
}

async fn shopping_list_manager(
    State(resources): State<Arc<ServerResources>>,
    Json(args): Json<Value>,
) -> Json<Value> {
    Json(resources.executor.execute(SHOPPING_LIST_MANAGER, &args).await)
}
