// ABOUTME: Integration tests for the MCP protocol handlers
// ABOUTME: Validates initialize, ping, tools/list, tools/call, and unknown methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use serde_json::{json, Value};

use chef_mcp_server::jsonrpc::JsonRpcRequest;
use chef_mcp_server::mcp::protocol::ProtocolHandler;

#[tokio::test]
async fn test_initialize_advertises_tools_capability() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id("initialize", None, json!(1));

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    assert!(response.is_success());

    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "chef-mcp-server");
    assert!(result["protocolVersion"].is_string());
    assert!(result["capabilities"]["tools"].is_object());
    Ok(())
}

#[tokio::test]
async fn test_ping_returns_empty_object() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id("ping", None, json!(2));

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    assert!(response.is_success());
    assert_eq!(response.result.unwrap(), json!({}));
    Ok(())
}

#[tokio::test]
async fn test_tools_list_exposes_both_tools() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id("tools/list", None, json!(3));

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();

    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["recipe_finder", "shopping_list_manager"]);
    for tool in &tools {
        assert!(tool["description"].is_string());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
    // shopping_list_manager requires action and thread_id
    assert_eq!(
        tools[1]["inputSchema"]["required"],
        json!(["action", "thread_id"])
    );
    Ok(())
}

#[tokio::test]
async fn test_tools_call_wraps_payload_as_text_content() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id(
        "tools/call",
        Some(json!({
            "name": "shopping_list_manager",
            "arguments": {"action": "create", "thread_id": "t-mcp"},
        })),
        json!(4),
    );

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    assert!(response.is_success());

    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    assert_eq!(result["structuredContent"]["action"], "created");

    // Text content carries the same payload, serialized
    let text = result["content"][0]["text"].as_str().unwrap();
    let parsed: Value = serde_json::from_str(text)?;
    assert_eq!(parsed["action"], "created");
    Ok(())
}

#[tokio::test]
async fn test_tools_call_with_invalid_params_is_a_protocol_error() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id("tools/call", Some(json!("not-an-object")), json!(5));

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    assert!(response.is_error());
    assert_eq!(response.error.unwrap().code, -32602);
    Ok(())
}

#[tokio::test]
async fn test_rate_limited_tool_call_is_a_successful_response() -> Result<()> {
    let resources = common::create_test_resources(1, 60).await?;

    let call = |id: i64| {
        JsonRpcRequest::with_id(
            "tools/call",
            Some(json!({
                "name": "recipe_finder",
                "arguments": {"user_id": "alice"},
            })),
            json!(id),
        )
    };

    let _ = ProtocolHandler::handle_request(call(1), &resources).await;
    let response = ProtocolHandler::handle_request(call(2), &resources)
        .await
        .unwrap();

    // Rate limiting is a tool payload, not a JSON-RPC error.
    assert!(response.is_success());
    let result = response.result.unwrap();
    assert_eq!(
        result["structuredContent"]["error_code"],
        "RATE_LIMIT_EXCEEDED"
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_method_returns_method_not_found() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let request = JsonRpcRequest::with_id("resources/read", None, json!(6));

    let response = ProtocolHandler::handle_request(request, &resources)
        .await
        .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert_eq!(error.message, "Unknown method: resources/read");
    Ok(())
}

#[tokio::test]
async fn test_notifications_get_no_response() -> Result<()> {
    let resources = common::setup_test_environment().await?;
    let notification = JsonRpcRequest::notification("notifications/initialized", None);

    let response = ProtocolHandler::handle_request(notification, &resources).await;
    assert!(response.is_none());
    Ok(())
}
