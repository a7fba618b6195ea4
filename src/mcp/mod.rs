// ABOUTME: MCP module organization - schema, protocol handlers, resources, transports
// ABOUTME: Model Context Protocol surface for AI agent callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Model Context Protocol implementation.

/// Core protocol message handlers
pub mod protocol;
/// Shared server resource container
pub mod resources;
/// Protocol schema definitions
pub mod schema;
/// stdio and HTTP transports
pub mod server;

pub use resources::ServerResources;
pub use server::McpServer;
