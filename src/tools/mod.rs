// ABOUTME: Tool module organization - trait, registry, executor, and implementations
// ABOUTME: Exposes recipe_finder and shopping_list_manager behind a registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Tool dispatch layer: the `McpTool` trait, the registry, the rate-limited
//! executor, and the built-in tool implementations.

/// Tool execution engine with rate limiting
pub mod executor;
/// Recipe search tool
pub mod recipe_finder;
/// Central tool registry
pub mod registry;
/// Shopping list management tool
pub mod shopping_list;
/// The `McpTool` trait and execution context
pub mod traits;

pub use executor::ToolExecutor;
pub use registry::ToolRegistry;
pub use traits::{McpTool, ToolContext};
