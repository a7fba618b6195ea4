// ABOUTME: Central registry for MCP tools with lookup and schema listing
// ABOUTME: Built once at startup, then shared immutably across transports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Tool Registry
//!
//! Central registry for MCP tools, providing registration, lookup, and
//! schema generation for `tools/list` responses.
//!
//! The registry is built once at startup and then used immutably for tool
//! lookups. Registered tools are `Arc`-wrapped for sharing across async
//! tasks.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::mcp::schema::ToolSchema;

use super::recipe_finder::RecipeFinderTool;
use super::shopping_list::ShoppingListManagerTool;
use super::traits::McpTool;

/// Central registry for MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the built-in meal-planning tools registered
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register the built-in tools
    pub fn register_builtin_tools(&mut self) {
        self.register(Arc::new(RecipeFinderTool));
        self.register(Arc::new(ShoppingListManagerTool));
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same
    /// name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!("Registering tool '{}'", name);
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// List schemas for all registered tools (for `tools/list`)
    #[must_use]
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        // HashMap iteration order is arbitrary; clients expect a stable listing.
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tools_are_registered_once() {
        let registry = ToolRegistry::with_builtin_tools();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("recipe_finder"));
        assert!(registry.contains("shopping_list_manager"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::with_builtin_tools();
        assert!(!registry.register(Arc::new(RecipeFinderTool)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn schemas_are_listed_in_stable_order() {
        let registry = ToolRegistry::with_builtin_tools();
        let schemas = registry.tool_schemas();
        assert_eq!(schemas[0].name, "recipe_finder");
        assert_eq!(schemas[1].name, "shopping_list_manager");
    }
}
