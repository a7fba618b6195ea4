// ABOUTME: Tool execution engine - rate limiting, dispatch, and failure rendering
// ABOUTME: Every failure mode becomes a structured payload, never a protocol error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Tool Executor
//!
//! The single entry point for tool invocation, shared by the MCP transports
//! and the REST tool bindings. The execution pipeline is:
//!
//! 1. Derive the rate-limit client identity from the arguments
//! 2. Check and record against the sliding-window limiter
//! 3. Dispatch to the registered tool
//! 4. Render any internal failure as a structured `{error: ...}` payload
//!
//! A rate-limited call is a *successful* tool response carrying the
//! structured rejection payload, not a protocol-level error.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::rate_limiting::{client_id_from_args, SlidingWindowLimiter};

use super::registry::ToolRegistry;
use super::traits::ToolContext;

/// Executes named tools behind the rate limiter
#[derive(Clone)]
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
    limiter: Arc<SlidingWindowLimiter>,
    context: ToolContext,
}

impl ToolExecutor {
    /// Create an executor over a registry, limiter, and shared context
    #[must_use]
    pub const fn new(
        registry: Arc<ToolRegistry>,
        limiter: Arc<SlidingWindowLimiter>,
        context: ToolContext,
    ) -> Self {
        Self {
            registry,
            limiter,
            context,
        }
    }

    /// The registry backing this executor
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Execute a named tool with the current wall clock
    pub async fn execute(&self, name: &str, args: &Value) -> Value {
        self.execute_at(name, args, Utc::now()).await
    }

    /// Execute a named tool at an explicit timestamp.
    ///
    /// The timestamp feeds the rate limiter only; tests use it to drive the
    /// window deterministically.
    pub async fn execute_at(&self, name: &str, args: &Value, now: DateTime<Utc>) -> Value {
        let invocation_id = Uuid::new_v4();
        let client_id = client_id_from_args(args);

        let status = self.limiter.check_and_record(&client_id, now);
        if status.is_rate_limited {
            warn!(
                %invocation_id,
                tool = %name,
                client = %client_id,
                "Tool invocation rate limited"
            );
            return json!({
                "error": "Rate limit exceeded",
                "error_code": "RATE_LIMIT_EXCEEDED",
                "message": format!(
                    "Too many requests. Limit: {} per {}s",
                    status.limit,
                    self.limiter.window_secs(),
                ),
            });
        }

        let Some(tool) = self.registry.get(name) else {
            return json!({"error": format!("Unknown tool: {name}")});
        };

        debug!(%invocation_id, tool = %name, client = %client_id, "Executing tool");
        match tool.execute(&self.context, args).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%invocation_id, tool = %name, error = %err, "Tool execution failed");
                err.to_json()
            }
        }
    }
}
