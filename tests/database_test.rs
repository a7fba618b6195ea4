// ABOUTME: Integration tests for the SQLite storage layer
// ABOUTME: Covers recipe CRUD/search constraints and shopping list persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Utc;

use chef_mcp_server::database::RecipeFilter;
use chef_mcp_server::errors::ErrorCode;
use chef_mcp_server::models::{DietType, Difficulty, Ingredient, Recipe, ShoppingList};

fn recipe(user_id: &str, title: &str) -> Recipe {
    let now = Utc::now();
    Recipe {
        id: None,
        title: title.to_owned(),
        description: Some(format!("{title} description")),
        ingredients: vec![
            Ingredient {
                name: "onion".into(),
                quantity: "1".into(),
                unit: "pcs".into(),
            },
            Ingredient {
                name: "olive oil".into(),
                quantity: "2".into(),
                unit: "tbsp".into(),
            },
        ],
        instructions: "Chop, fry, serve.".to_owned(),
        prep_time_minutes: Some(15),
        cook_time_minutes: Some(30),
        servings: Some(4),
        tags: vec!["dinner".to_owned(), "quick".to_owned()],
        difficulty: Some(Difficulty::Easy),
        diet_type: Some(DietType::Vegetarian),
        user_id: Some(user_id.to_owned()),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_recipe_round_trip() -> Result<()> {
    let db = common::create_test_database().await?;

    let id = db.create_recipe(&recipe("alice", "Onion Soup")).await?;
    let fetched = db.get_recipe(id).await?.unwrap();

    assert_eq!(fetched.title, "Onion Soup");
    assert_eq!(fetched.ingredients.len(), 2);
    assert_eq!(fetched.ingredients[0].name, "onion");
    assert_eq!(fetched.tags, vec!["dinner", "quick"]);
    assert_eq!(fetched.difficulty, Some(Difficulty::Easy));
    assert_eq!(fetched.diet_type, Some(DietType::Vegetarian));
    assert_eq!(fetched.total_time_minutes(), Some(45));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_title_per_user_conflicts() -> Result<()> {
    let db = common::create_test_database().await?;

    db.create_recipe(&recipe("alice", "Onion Soup")).await?;
    let err = db
        .create_recipe(&recipe("alice", "Onion Soup"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // Same title for another user is fine
    assert!(db.create_recipe(&recipe("bob", "Onion Soup")).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn test_recipe_validation_enforced_on_create() -> Result<()> {
    let db = common::create_test_database().await?;

    let mut invalid = recipe("alice", "Bad");
    invalid.servings = Some(0);
    let err = db.create_recipe(&invalid).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[tokio::test]
async fn test_search_applies_all_filters() -> Result<()> {
    let db = common::create_test_database().await?;

    db.create_recipe(&recipe("alice", "Onion Soup")).await?;
    let mut slow = recipe("alice", "Slow Roast");
    slow.prep_time_minutes = Some(60);
    slow.cook_time_minutes = Some(240);
    slow.tags = vec!["weekend".to_owned()];
    db.create_recipe(&slow).await?;

    // Query text
    let found = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            query: Some("onion".into()),
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Onion Soup");

    // Prep-time ceiling excludes the slow recipe
    let quick = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            max_prep_time: Some(20),
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(quick.len(), 1);

    // Tag filter
    let weekend = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            tags: vec!["weekend".into()],
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(weekend.len(), 1);
    assert_eq!(weekend[0].title, "Slow Roast");

    // Cook-time ceiling
    let fast_cook = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            max_cook_time: Some(60),
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(fast_cook.len(), 1);
    assert_eq!(fast_cook[0].title, "Onion Soup");

    // Servings floor
    let feeds_four = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            servings: Some(4),
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(feeds_four.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_search_escapes_like_wildcards() -> Result<()> {
    let db = common::create_test_database().await?;

    db.create_recipe(&recipe("alice", "100% Rye Bread")).await?;
    db.create_recipe(&recipe("alice", "Plain Bread")).await?;

    let found = db
        .search_recipes(&RecipeFilter {
            user_id: "alice".into(),
            query: Some("100%".into()),
            limit: 10,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "100% Rye Bread");
    Ok(())
}

#[tokio::test]
async fn test_delete_recipe_is_user_scoped() -> Result<()> {
    let db = common::create_test_database().await?;

    let id = db.create_recipe(&recipe("alice", "Onion Soup")).await?;
    assert!(!db.delete_recipe(id, "bob").await?);
    assert!(db.delete_recipe(id, "alice").await?);
    assert!(db.get_recipe(id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_shopping_list_persistence_round_trip() -> Result<()> {
    let db = common::create_test_database().await?;

    let created = db
        .create_shopping_list(&ShoppingList::new("t-1", Some("alice".into())))
        .await?;
    assert!(created.id.is_some());

    let mut list = db.get_shopping_list_by_thread("t-1").await?.unwrap();
    assert!(list.is_empty());
    assert_eq!(list.user_id.as_deref(), Some("alice"));

    list.items.push(chef_mcp_server::models::ShoppingItem {
        name: "milk".into(),
        quantity: "1".into(),
        unit: "l".into(),
        category: Some(chef_mcp_server::categorizer::CategoryTag::Dairy),
        purchased: false,
    });
    db.update_shopping_list(&list).await?;

    let reloaded = db.get_shopping_list_by_thread("t-1").await?.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.items[0].name, "milk");

    // Clear keeps the row, delete removes it
    assert!(db.clear_shopping_list("t-1").await?);
    let cleared = db.get_shopping_list_by_thread("t-1").await?.unwrap();
    assert!(cleared.is_empty());
    assert_eq!(cleared.id, created.id);

    assert!(db.delete_shopping_list(created.id.unwrap()).await?);
    assert!(db.get_shopping_list_by_thread("t-1").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_one_list_per_thread() -> Result<()> {
    let db = common::create_test_database().await?;

    db.create_shopping_list(&ShoppingList::new("t-1", None)).await?;
    let err = db
        .create_shopping_list(&ShoppingList::new("t-1", None))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    Ok(())
}

#[tokio::test]
async fn test_file_backed_database_is_created_on_demand() -> Result<()> {
    common::init_test_logging();
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("chef_test.db");
    let url = format!("sqlite:{}", db_path.display());

    let db = chef_mcp_server::database::Database::new(&url).await?;
    let id = db.create_recipe(&recipe("alice", "Persisted Soup")).await?;
    drop(db);
    assert!(db_path.exists());

    // Reopening sees the persisted row
    let reopened = chef_mcp_server::database::Database::new(&url).await?;
    let fetched = reopened.get_recipe(id).await?.unwrap();
    assert_eq!(fetched.title, "Persisted Soup");
    Ok(())
}

#[tokio::test]
async fn test_update_missing_list_is_not_found() -> Result<()> {
    let db = common::create_test_database().await?;

    let ghost = ShoppingList::new("ghost", None);
    let err = db.update_shopping_list(&ghost).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(!db.clear_shopping_list("ghost").await?);
    Ok(())
}
