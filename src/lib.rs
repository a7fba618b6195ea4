// ABOUTME: Main library entry point for the Chef MCP meal-planning server
// ABOUTME: Provides MCP and REST API protocols over a SQLite recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

#![deny(unsafe_code)]

//! # Chef MCP Server
//!
//! A Model Context Protocol (MCP) server for conversational meal planning.
//! The server exposes recipe search and shopping-list management tools to AI
//! agents over MCP (stdio and HTTP transports) and mirrors them as a REST
//! API, backed by a SQLite recipe and shopping-list store.
//!
//! ## Architecture
//!
//! - **Categorizer**: longest-keyword-match ingredient classification
//! - **Shopping**: shopping-list reconciliation (add/remove/clear/group)
//! - **Rate limiting**: per-client sliding-window throttling of tool calls
//! - **Tools**: `recipe_finder` and `shopping_list_manager` behind a registry
//! - **MCP**: JSON-RPC 2.0 protocol handlers and transports
//! - **Routes**: axum REST endpoints mirroring the tool surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chef_mcp_server::config::environment::ServerConfig;
//! use chef_mcp_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Chef MCP Server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Ingredient categorization via longest-keyword-match
pub mod categorizer;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// SQLite storage for recipes and shopping lists
pub mod database;

/// Unified error handling
pub mod errors;

/// JSON-RPC 2.0 foundation shared by MCP transports
pub mod jsonrpc;

/// Logging configuration and setup
pub mod logging;

/// MCP protocol implementation (schema, handlers, transports)
pub mod mcp;

/// Core domain models
pub mod models;

/// Sliding-window rate limiting for tool invocation
pub mod rate_limiting;

/// `HTTP` routes for the REST API surface
pub mod routes;

/// Shopping list reconciliation
pub mod shopping;

/// MCP tool implementations and dispatch
pub mod tools;
