// ABOUTME: The shopping_list_manager tool - per-thread shopping list actions
// ABOUTME: Dispatches create/get/add_items/remove_items/clear/delete to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Shopping List Manager Tool
//!
//! Manages the shopping list owned by a conversation thread. Every action
//! result is a structured payload; a missing list on `get`, `remove_items`,
//! `clear`, or `delete` surfaces an `"action": "not_found"` payload, which
//! is distinct from an empty list. A missing list on `add_items` triggers
//! implicit creation instead.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::{json_fields, tools::SHOPPING_LIST_MANAGER};
use crate::errors::AppResult;
use crate::models::ShoppingList;
use crate::shopping::{self, ItemSpec};

use super::traits::{McpTool, ToolContext};

/// Shopping list management tool
pub struct ShoppingListManagerTool;

#[async_trait]
impl McpTool for ShoppingListManagerTool {
    fn name(&self) -> &'static str {
        SHOPPING_LIST_MANAGER
    }

    fn description(&self) -> &'static str {
        "Manage shopping lists for meal planning"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": ["create", "get", "add_items", "remove_items", "clear", "delete"],
                    "description": "Action to perform on the shopping list"
                },
                "thread_id": {
                    "type": "string",
                    "description": "Thread ID for conversation context"
                },
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "quantity": {"type": "string"},
                            "unit": {"type": "string"},
                            "category": {"type": "string"}
                        }
                    },
                    "description": "Items to add or remove"
                },
                "user_id": {
                    "type": "string",
                    "description": "User owning the shopping list"
                }
            },
            "required": ["action", "thread_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, args: &Value) -> AppResult<Value> {
        let Some(action) = args.get(json_fields::ACTION).and_then(Value::as_str) else {
            return Ok(json!({"error": "Missing required field: action"}));
        };
        let Some(thread_id) = args
            .get(json_fields::THREAD_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        else {
            return Ok(json!({"error": "Missing required field: thread_id"}));
        };
        let user_id = args
            .get(json_fields::USER_ID)
            .and_then(Value::as_str)
            .map(str::to_owned);

        match action {
            "create" => handle_create(ctx, thread_id, user_id).await,
            "get" => handle_get(ctx, thread_id).await,
            "add_items" => handle_add_items(ctx, thread_id, user_id, args).await,
            "remove_items" => handle_remove_items(ctx, thread_id, args).await,
            "clear" => handle_clear(ctx, thread_id).await,
            "delete" => handle_delete(ctx, thread_id).await,
            other => Ok(json!({"error": format!("Unknown action: {other}")})),
        }
    }
}

fn parse_items(args: &Value) -> AppResult<Vec<ItemSpec>> {
    match args.get(json_fields::ITEMS) {
        Some(raw) => Ok(serde_json::from_value(raw.clone())?),
        None => Ok(Vec::new()),
    }
}

async fn handle_create(
    ctx: &ToolContext,
    thread_id: &str,
    user_id: Option<String>,
) -> AppResult<Value> {
    // A second create for the same thread hands back the existing list
    // rather than erroring; lists are created at most once per thread.
    if let Some(existing) = ctx.database.get_shopping_list_by_thread(thread_id).await? {
        return Ok(json!({
            "action": "created",
            "list_id": existing.id,
            "thread_id": thread_id,
            "items": existing.items,
        }));
    }

    let created = ctx
        .database
        .create_shopping_list(&ShoppingList::new(thread_id, user_id))
        .await?;
    Ok(json!({
        "action": "created",
        "list_id": created.id,
        "thread_id": thread_id,
        "items": [],
    }))
}

async fn handle_get(ctx: &ToolContext, thread_id: &str) -> AppResult<Value> {
    match ctx.database.get_shopping_list_by_thread(thread_id).await? {
        Some(list) => {
            let grouped = shopping::grouped(&list);
            Ok(json!({
                "action": "retrieved",
                "list_id": list.id,
                "thread_id": thread_id,
                "items": list.items,
                "total_items": list.len(),
                "grouped": grouped,
            }))
        }
        None => Ok(not_found(thread_id, "No shopping list found for this thread")),
    }
}

async fn handle_add_items(
    ctx: &ToolContext,
    thread_id: &str,
    user_id: Option<String>,
    args: &Value,
) -> AppResult<Value> {
    let specs = parse_items(args)?;

    let mut list = match ctx.database.get_shopping_list_by_thread(thread_id).await? {
        Some(list) => list,
        None => {
            ctx.database
                .create_shopping_list(&ShoppingList::new(thread_id, user_id))
                .await?
        }
    };

    let added = match shopping::add_items(&mut list, specs) {
        Ok(added) => added,
        Err(err) => return Ok(err.to_json()),
    };
    ctx.database.update_shopping_list(&list).await?;

    Ok(json!({
        "action": "items_added",
        "list_id": list.id,
        "thread_id": thread_id,
        "added_items": added,
        "total_items": list.len(),
    }))
}

async fn handle_remove_items(ctx: &ToolContext, thread_id: &str, args: &Value) -> AppResult<Value> {
    let specs = parse_items(args)?;

    let Some(mut list) = ctx.database.get_shopping_list_by_thread(thread_id).await? else {
        return Ok(not_found(thread_id, "No shopping list found for this thread"));
    };

    let removed = shopping::remove_items(&mut list, &specs);
    if removed > 0 {
        ctx.database.update_shopping_list(&list).await?;
    }

    Ok(json!({
        "action": "items_removed",
        "list_id": list.id,
        "thread_id": thread_id,
        "removed_items": removed,
        "total_items": list.len(),
    }))
}

async fn handle_clear(ctx: &ToolContext, thread_id: &str) -> AppResult<Value> {
    if ctx.database.clear_shopping_list(thread_id).await? {
        Ok(json!({
            "action": "cleared",
            "thread_id": thread_id,
            "message": "Shopping list cleared",
        }))
    } else {
        Ok(not_found(thread_id, "No shopping list found for this thread"))
    }
}

async fn handle_delete(ctx: &ToolContext, thread_id: &str) -> AppResult<Value> {
    let Some(list) = ctx.database.get_shopping_list_by_thread(thread_id).await? else {
        return Ok(not_found(thread_id, "No shopping list found to delete"));
    };

    if let Some(list_id) = list.id {
        ctx.database.delete_shopping_list(list_id).await?;
    }
    Ok(json!({
        "action": "deleted",
        "list_id": list.id,
        "thread_id": thread_id,
    }))
}

fn not_found(thread_id: &str, message: &str) -> Value {
    json!({
        "action": "not_found",
        "thread_id": thread_id,
        "message": message,
    })
}
