// ABOUTME: Recipe route handlers - CRUD and search over the recipe store
// ABOUTME: REST endpoints scoped by user_id with structured error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! Recipe routes
//!
//! CRUD and search endpoints over the recipe store. Every operation is
//! scoped to a `user_id`; recipe titles are unique within that scope and a
//! duplicate create returns `409 Conflict`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::constants::limits::DEFAULT_RECIPE_LIMIT;
use crate::database::RecipeFilter;
use crate::errors::{AppError, AppResult};
use crate::mcp::resources::ServerResources;
use crate::models::{DietType, Difficulty, Ingredient, Recipe};

/// Request to create a recipe
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time_minutes: Option<i64>,
    #[serde(default)]
    pub cook_time_minutes: Option<i64>,
    #[serde(default)]
    pub servings: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub diet_type: Option<String>,
}

/// Query parameters for listing recipes
#[derive(Debug, Deserialize)]
pub struct ListRecipesQuery {
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Query parameters for recipe search
#[derive(Debug, Deserialize)]
pub struct SearchRecipesQuery {
    pub user_id: String,
    #[serde(default)]
    pub query: Option<String>,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub max_prep_time: Option<i64>,
    #[serde(default)]
    pub max_cook_time: Option<i64>,
    #[serde(default)]
    pub servings: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Query parameters carrying only a user scope
#[derive(Debug, Deserialize)]
pub struct UserScopeQuery {
    pub user_id: String,
}

const fn default_limit() -> i64 {
    DEFAULT_RECIPE_LIMIT
}

/// Create all recipe routes
pub fn routes() -> Router<Arc<ServerResources>> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/search", get(search_recipes))
        .route("/:id", get(get_recipe).delete(delete_recipe))
}

async fn create_recipe(
    State(resources): State<Arc<ServerResources>>,
    Json(request): Json<CreateRecipeRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let diet_type = parse_enum(request.diet_type.as_deref(), DietType::parse, "diet type")?;
    let difficulty = parse_enum(
        request.difficulty.as_deref(),
        Difficulty::parse,
        "difficulty",
    )?;

    let now = Utc::now();
    let recipe = Recipe {
        id: None,
        title: request.title,
        description: request.description,
        ingredients: request.ingredients,
        instructions: request.instructions,
        prep_time_minutes: request.prep_time_minutes,
        cook_time_minutes: request.cook_time_minutes,
        servings: request.servings,
        tags: request.tags,
        difficulty,
        diet_type,
        user_id: Some(request.user_id),
        created_at: now,
        updated_at: now,
    };

    let id = resources.database.create_recipe(&recipe).await?;
    info!(recipe_id = id, "Recipe created");
    Ok((StatusCode::CREATED, Json(json!({"id": id}))))
}

async fn list_recipes(
    State(resources): State<Arc<ServerResources>>,
    Query(params): Query<ListRecipesQuery>,
) -> AppResult<Json<Value>> {
    let recipes = resources
        .database
        .list_recipes(&params.user_id, params.limit, params.offset)
        .await?;
    let total = recipes.len();
    Ok(Json(json!({"recipes": recipes, "total": total})))
}

async fn search_recipes(
    State(resources): State<Arc<ServerResources>>,
    Query(params): Query<SearchRecipesQuery>,
) -> AppResult<Json<Value>> {
    let diet_type = parse_enum(params.diet_type.as_deref(), DietType::parse, "diet type")?;
    let tags = params
        .tags
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let filter = RecipeFilter {
        user_id: params.user_id,
        query: params.query,
        tags,
        diet_type,
        max_prep_time: params.max_prep_time,
        max_cook_time: params.max_cook_time,
        servings: params.servings,
        limit: params.limit,
    };

    let recipes = resources.database.search_recipes(&filter).await?;
    let total_found = recipes.len();
    Ok(Json(json!({"recipes": recipes, "total_found": total_found})))
}

async fn get_recipe(
    State(resources): State<Arc<ServerResources>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Recipe>> {
    resources
        .database
        .get_recipe(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Recipe {id} not found")))
}

async fn delete_recipe(
    State(resources): State<Arc<ServerResources>>,
    Path(id): Path<i64>,
    Query(params): Query<UserScopeQuery>,
) -> AppResult<Json<Value>> {
    let deleted = resources.database.delete_recipe(id, &params.user_id).await?;
    if deleted {
        info!(recipe_id = id, "Recipe deleted");
        Ok(Json(json!({"deleted": true, "id": id})))
    } else {
        Err(AppError::not_found(format!("Recipe {id} not found")))
    }
}

fn parse_enum<T>(
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    label: &str,
) -> AppResult<Option<T>> {
    match raw {
        None => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown {label}: {value}"))),
    }
}
