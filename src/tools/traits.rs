// ABOUTME: Defines the McpTool trait implemented by every dispatchable tool
// ABOUTME: Tools expose metadata plus async execution against shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # MCP Tool Trait
//!
//! The core abstraction for dispatchable tools. A tool provides its metadata
//! (name, description, input schema) and an async `execute` over the shared
//! [`ToolContext`].
//!
//! Execution returns the tool's *payload*: expected failure modes (missing
//! fields, unknown enum values, not-found conditions) are encoded inside an
//! `Ok` payload per the tool's contract. An `Err` is reserved for unexpected
//! internal failures, which the executor renders as a structured error
//! payload rather than letting them cross the protocol boundary.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::database::Database;
use crate::errors::AppResult;

/// Shared resources available to executing tools
#[derive(Clone)]
pub struct ToolContext {
    /// Recipe and shopping-list storage
    pub database: Arc<Database>,
}

impl ToolContext {
    /// Create a new execution context
    #[must_use]
    pub const fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

/// A named, schema-validated operation exposed to agent callers
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as advertised in `tools/list`
    fn name(&self) -> &'static str;

    /// Human-readable tool description
    fn description(&self) -> &'static str;

    /// JSON Schema describing the tool's arguments
    fn input_schema(&self) -> Value;

    /// Execute the tool against the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error only for unexpected internal failures; contract-level
    /// failures are part of the returned payload.
    async fn execute(&self, ctx: &ToolContext, args: &Value) -> AppResult<Value>;
}
