// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Handles initialize, ping, tools/list, and tools/call dispatch
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # MCP Protocol Handlers
//!
//! Core MCP protocol message handling. `tools/call` responses embed tool
//! payloads (including structured failure payloads) as successful results;
//! only malformed protocol envelopes produce JSON-RPC errors.

use serde_json::json;
use std::sync::Arc;

use crate::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND,
};
use crate::constants::protocol::{mcp_protocol_version, server_name, SERVER_VERSION};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{InitializeResponse, ToolCall, ToolResponse};

/// MCP protocol handlers
pub struct ProtocolHandler;

impl ProtocolHandler {
    /// Route a parsed JSON-RPC request to its protocol handler.
    ///
    /// Returns `None` for notifications, which expect no response.
    pub async fn handle_request(
        request: JsonRpcRequest,
        resources: &Arc<ServerResources>,
    ) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            // notifications/initialized and friends need no reply
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => Self::handle_initialize(&request),
            "ping" => Self::handle_ping(&request),
            "tools/list" => Self::handle_tools_list(&request, resources),
            "tools/call" => Self::handle_tools_call(request, resources).await,
            _ => Self::handle_unknown_method(&request),
        };
        Some(response)
    }

    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        let init_response = InitializeResponse::new(
            mcp_protocol_version(),
            server_name(),
            SERVER_VERSION.to_owned(),
        );

        match serde_json::to_value(&init_response) {
            Ok(result) => JsonRpcResponse::success(request.id.clone(), result),
            Err(_) => JsonRpcResponse::error(
                request.id.clone(),
                ERROR_INTERNAL_ERROR,
                "Internal error",
            ),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(request.id.clone(), json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(
        request: &JsonRpcRequest,
        resources: &Arc<ServerResources>,
    ) -> JsonRpcResponse {
        let tools = resources.executor.registry().tool_schemas();
        JsonRpcResponse::success(request.id.clone(), json!({ "tools": tools }))
    }

    /// Handle tools call request
    pub async fn handle_tools_call(
        request: JsonRpcRequest,
        resources: &Arc<ServerResources>,
    ) -> JsonRpcResponse {
        let request_id = request.id.clone();

        let call: ToolCall = match request
            .params
            .and_then(|params| serde_json::from_value(params).ok())
        {
            Some(call) => call,
            None => {
                return JsonRpcResponse::error(
                    request_id,
                    ERROR_INVALID_PARAMS,
                    "Invalid tool call parameters",
                );
            }
        };

        let args = call.arguments.unwrap_or_else(|| json!({}));
        let payload = resources.executor.execute(&call.name, &args).await;
        let tool_response = ToolResponse::from_result(&payload);

        match serde_json::to_value(&tool_response) {
            Ok(result) => JsonRpcResponse::success(request_id, result),
            Err(_) => {
                JsonRpcResponse::error(request_id, ERROR_INTERNAL_ERROR, "Internal error")
            }
        }
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::error(
            request.id.clone(),
            ERROR_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
