// ABOUTME: The recipe_finder tool - recipe search by keywords, tags, diet, and timing
// ABOUTME: Validates arguments and delegates to the recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Recipe Finder Tool
//!
//! Searches a user's recipes by free-text query, tags, diet type, prep/cook
//! time ceilings, and servings. Validation failures are part of the payload
//! contract: a missing `user_id` or unknown `diet_type` yields an `error`
//! field alongside an empty result set rather than a protocol failure.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::{json_fields, limits::RECIPE_SEARCH_LIMIT, tools::RECIPE_FINDER};
use crate::database::RecipeFilter;
use crate::errors::AppResult;
use crate::models::DietType;

use super::traits::{McpTool, ToolContext};

/// Recipe search tool
pub struct RecipeFinderTool;

#[async_trait]
impl McpTool for RecipeFinderTool {
    fn name(&self) -> &'static str {
        RECIPE_FINDER
    }

    fn description(&self) -> &'static str {
        "Find recipes by keywords, tags, diet type, or ingredients"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (keywords, ingredients, etc.)"
                },
                "tags": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Filter by recipe tags"
                },
                "diet_type": {
                    "type": "string",
                    "enum": DietType::ALL.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    "description": "Filter by diet type"
                },
                "max_prep_time": {
                    "type": "integer",
                    "description": "Maximum preparation time in minutes"
                },
                "max_cook_time": {
                    "type": "integer",
                    "description": "Maximum cooking time in minutes"
                },
                "servings": {
                    "type": "integer",
                    "description": "Minimum number of servings"
                },
                "user_id": {
                    "type": "string",
                    "description": "User whose recipes to search"
                }
            },
            "required": ["user_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, args: &Value) -> AppResult<Value> {
        let Some(user_id) = args
            .get(json_fields::USER_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        else {
            return Ok(json!({
                "error": "Missing required field: user_id",
                "recipes": [],
                "total_found": 0,
            }));
        };

        let diet_type = match args.get(json_fields::DIET_TYPE).and_then(Value::as_str) {
            Some(raw) => match DietType::parse(raw) {
                Some(diet) => Some(diet),
                None => {
                    return Ok(json!({
                        "error": format!("Unknown diet type: {raw}"),
                        "recipes": [],
                        "total_found": 0,
                    }));
                }
            },
            None => None,
        };

        let tags = args
            .get(json_fields::TAGS)
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let filter = RecipeFilter {
            user_id: user_id.to_owned(),
            query: args
                .get(json_fields::QUERY)
                .and_then(Value::as_str)
                .map(str::to_owned),
            tags,
            diet_type,
            max_prep_time: args.get(json_fields::MAX_PREP_TIME).and_then(Value::as_i64),
            max_cook_time: args.get(json_fields::MAX_COOK_TIME).and_then(Value::as_i64),
            servings: args.get(json_fields::SERVINGS).and_then(Value::as_i64),
            limit: RECIPE_SEARCH_LIMIT,
        };

        let recipes = ctx.database.search_recipes(&filter).await?;
        let total_found = recipes.len();

        Ok(json!({
            "recipes": recipes,
            "total_found": total_found,
        }))
    }
}
