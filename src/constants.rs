// ABOUTME: Application constants organized by domain
// ABOUTME: Protocol versions, tool names, JSON field names, and size limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Application constants grouped by domain.

/// Protocol constants for MCP and JSON-RPC
pub mod protocol {
    use std::env;

    /// Get MCP protocol version from environment or default
    #[must_use]
    pub fn mcp_protocol_version() -> String {
        env::var("MCP_PROTOCOL_VERSION").unwrap_or_else(|_| "2025-06-18".into())
    }

    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// Get server name from environment or default
    #[must_use]
    pub fn server_name() -> String {
        env::var("SERVER_NAME").unwrap_or_else(|_| "chef-mcp-server".into())
    }

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Error codes for JSON-RPC and MCP protocols
pub mod errors {
    /// Parse error - invalid JSON
    pub const ERROR_PARSE: i32 = -32700;

    /// Invalid request - not a valid JSON-RPC envelope
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Common error messages
    pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";
    pub const MSG_INVALID_PARAMS: &str = "Invalid parameters";
    pub const MSG_INTERNAL_ERROR: &str = "Internal error";
}

/// Tool name constants
pub mod tools {
    /// Recipe search tool
    pub const RECIPE_FINDER: &str = "recipe_finder";

    /// Shopping list management tool
    pub const SHOPPING_LIST_MANAGER: &str = "shopping_list_manager";
}

/// JSON field name constants used across tool payloads
pub mod json_fields {
    /// Shopping list action selector
    pub const ACTION: &str = "action";
    /// Conversation thread identifier
    pub const THREAD_ID: &str = "thread_id";
    /// User identifier
    pub const USER_ID: &str = "user_id";
    /// Shopping item array
    pub const ITEMS: &str = "items";
    /// Free-text search query
    pub const QUERY: &str = "query";
    /// Recipe tag filter
    pub const TAGS: &str = "tags";
    /// Diet type filter
    pub const DIET_TYPE: &str = "diet_type";
    /// Preparation time ceiling in minutes
    pub const MAX_PREP_TIME: &str = "max_prep_time";
    /// Cooking time ceiling in minutes
    pub const MAX_COOK_TIME: &str = "max_cook_time";
    /// Servings floor
    pub const SERVINGS: &str = "servings";
    /// Result count limit
    pub const LIMIT: &str = "limit";
}

/// Size and throttling limits
pub mod limits {
    /// Maximum number of items a shopping list may hold
    pub const MAX_LIST_ITEMS: usize = 100;

    /// Recipe result cap for tool calls
    pub const RECIPE_SEARCH_LIMIT: i64 = 50;

    /// Default REST search result limit
    pub const DEFAULT_RECIPE_LIMIT: i64 = 10;

    /// Default rate limit: requests per window
    pub const DEFAULT_MAX_REQUESTS: u32 = 100;

    /// Default rate limit window in seconds
    pub const DEFAULT_WINDOW_SECS: i64 = 60;
}
