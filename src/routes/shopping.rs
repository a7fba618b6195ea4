// ABOUTME: Shopping list route handlers - per-thread list access and mutation
// ABOUTME: REST mirror of the shopping_list_manager tool actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Shopping list routes
//!
//! Per-thread shopping list access. Mutating endpoints share the
//! reconciliation rules with the `shopping_list_manager` tool: additions
//! auto-categorize and never merge, removals match the (name, quantity,
//! unit) triple and delete every match.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::mcp::resources::ServerResources;
use crate::models::ShoppingList;
use crate::shopping::{self, ItemSpec};

/// Request body carrying shopping item specs
#[derive(Debug, Deserialize)]
pub struct ItemsRequest {
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Create all shopping list routes
pub fn routes() -> Router<Arc<ServerResources>> {
    Router::new()
        .route("/:thread_id", get(get_list).delete(delete_list))
        .route("/:thread_id/items", post(add_items).delete(remove_items))
        .route("/:thread_id/clear", post(clear_list))
}

async fn get_list(
    State(resources): State<Arc<ServerResources>>,
    Path(thread_id): Path<String>,
) -> AppResult<Json<Value>> {
    let list = require_list(&resources, &thread_id).await?;
    let grouped = shopping::grouped(&list);
    Ok(Json(json!({
        "thread_id": thread_id,
        "list_id": list.id,
        "items": list.items,
        "total_items": list.len(),
        "grouped": grouped,
    })))
}

async fn add_items(
    State(resources): State<Arc<ServerResources>>,
    Path(thread_id): Path<String>,
    Json(request): Json<ItemsRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let mut list = match resources.database.get_shopping_list_by_thread(&thread_id).await? {
        Some(list) => list,
        None => {
            resources
                .database
                .create_shopping_list(&ShoppingList::new(thread_id.clone(), request.user_id))
                .await?
        }
    };

    let added = shopping::add_items(&mut list, request.items)?;
    resources.database.update_shopping_list(&list).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "thread_id": thread_id,
            "added_items": added,
            "total_items": list.len(),
        })),
    ))
}

async fn remove_items(
    State(resources): State<Arc<ServerResources>>,
    Path(thread_id): Path<String>,
    Json(request): Json<ItemsRequest>,
) -> AppResult<Json<Value>> {
    let mut list = require_list(&resources, &thread_id).await?;
    let removed = shopping::remove_items(&mut list, &request.items);
    if removed > 0 {
        resources.database.update_shopping_list(&list).await?;
    }

    Ok(Json(json!({
        "thread_id": thread_id,
        "removed_items": removed,
        "total_items": list.len(),
    })))
}

async fn clear_list(
    State(resources): State<Arc<ServerResources>>,
    Path(thread_id): Path<String>,
) -> AppResult<Json<Value>> {
    if resources.database.clear_shopping_list(&thread_id).await? {
        Ok(Json(json!({"thread_id": thread_id, "cleared": true})))
    } else {
        Err(AppError::not_found(format!(
            "No shopping list found for thread {thread_id}"
        )))
    }
}

async fn delete_list(
    State(resources): State<Arc<ServerResources>>,
    Path(thread_id): Path<String>,
) -> AppResult<Json<Value>> {
    let list = require_list(&resources, &thread_id).await?;
    if let Some(list_id) = list.id {
        resources.database.delete_shopping_list(list_id).await?;
    }
    Ok(Json(json!({"thread_id": thread_id, "deleted": true})))
}

async fn require_list(
    resources: &Arc<ServerResources>,
    thread_id: &str,
) -> AppResult<ShoppingList> {
    resources
        .database
        .get_shopping_list_by_thread(thread_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("No shopping list found for thread {thread_id}"))
        })
}
