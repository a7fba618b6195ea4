// ABOUTME: MCP-over-HTTP route - the POST /mcp JSON-RPC endpoint
// ABOUTME: Accepts the same envelope as the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! MCP protocol route
//!
//! `POST /mcp` accepts a JSON-RPC 2.0 envelope and returns the matching
//! response. Notifications are acknowledged with `202 Accepted` and no body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::jsonrpc::JsonRpcRequest;
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::resources::ServerResources;

/// Create the MCP protocol route
pub fn routes() -> Router<Arc<ServerResources>> {
    Router::new().route("/mcp", post(handle_mcp))
}

async fn handle_mcp(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    match ProtocolHandler::handle_request(request, &resources).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
