// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! SQLite storage for recipes and shopping lists. Recipes carry their
//! ingredients and tags as JSON columns; shopping lists persist their item
//! sequence the same way, keyed by conversation thread.
//!
//! Migrations are `CREATE TABLE IF NOT EXISTS` statements run at startup.

use crate::errors::{AppError, AppResult};
use crate::models::{DietType, Difficulty, Recipe, ShoppingItem, ShoppingList};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Filters for recipe search.
///
/// `query`, `diet_type`, and `max_prep_time` are applied in SQL; `tags`,
/// `max_cook_time`, and `servings` are applied to the fetched rows.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub user_id: String,
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub diet_type: Option<DietType>,
    pub max_prep_time: Option<i64>,
    pub max_cook_time: Option<i64>,
    pub servings: Option<i64>,
    pub limit: i64,
}

/// Database manager for recipe and shopping list storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the connection or migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory SQLite database exists per connection; pin the pool
        // to a single never-recycled connection so every query sees the
        // same schema.
        let pool = if connection_options.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when a DDL statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                instructions TEXT NOT NULL DEFAULT '',
                prep_time_minutes INTEGER,
                cook_time_minutes INTEGER,
                servings INTEGER,
                difficulty TEXT,
                diet_type TEXT,
                tags TEXT NOT NULL DEFAULT '[]', -- JSON array
                ingredients TEXT NOT NULL DEFAULT '[]', -- JSON array
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, title)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_user ON recipes(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shopping_lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                thread_id TEXT UNIQUE NOT NULL,
                user_id TEXT,
                items TEXT NOT NULL DEFAULT '[]', -- JSON array
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_shopping_lists_thread ON shopping_lists(thread_id)",
        )
        .execute(&self.pool)
        .await?;

        debug!("Database migrations complete");
        Ok(())
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Create a recipe, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the (user, title) pair is taken,
    /// `InvalidInput` when validation fails, or `DatabaseError` otherwise.
    pub async fn create_recipe(&self, recipe: &Recipe) -> AppResult<i64> {
        recipe.validate()?;
        let user_id = recipe
            .user_id
            .as_deref()
            .ok_or_else(|| AppError::missing_field("user_id"))?;

        let tags = serde_json::to_string(&recipe.tags)?;
        let ingredients = serde_json::to_string(&recipe.ingredients)?;

        let result = sqlx::query(
            r"
            INSERT INTO recipes
                (user_id, title, description, instructions, prep_time_minutes,
                 cook_time_minutes, servings, difficulty, diet_type, tags,
                 ingredients, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(user_id)
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.instructions)
        .bind(recipe.prep_time_minutes)
        .bind(recipe.cook_time_minutes)
        .bind(recipe.servings)
        .bind(recipe.difficulty.map(Difficulty::as_str))
        .bind(recipe.diet_type.map(DietType::as_str))
        .bind(tags)
        .bind(ingredients)
        .bind(recipe.created_at.to_rfc3339())
        .bind(recipe.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::already_exists(format!(
                    "Recipe with title '{}' already exists for this user",
                    recipe.title
                ))
            }
            _ => AppError::from(e),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Get a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn get_recipe(&self, recipe_id: i64) -> AppResult<Option<Recipe>> {
        let row = sqlx::query("SELECT * FROM recipes WHERE id = ?")
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_recipe(&r)).transpose()
    }

    /// List a user's recipes, newest first.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn list_recipes(
        &self,
        user_id: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            "SELECT * FROM recipes WHERE user_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    /// Search a user's recipes with the given filters.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn search_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let mut sql = String::from("SELECT * FROM recipes WHERE user_id = ?");
        if filter.query.as_deref().is_some_and(|q| !q.is_empty()) {
            sql.push_str(r" AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')");
        }
        if filter.diet_type.is_some() {
            sql.push_str(" AND diet_type = ?");
        }
        if filter.max_prep_time.is_some() {
            sql.push_str(" AND prep_time_minutes IS NOT NULL AND prep_time_minutes <= ?");
        }
        sql.push_str(" ORDER BY created_at DESC LIMIT ?");

        let mut query = sqlx::query(&sql).bind(&filter.user_id);
        if let Some(q) = filter.query.as_deref().filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", escape_like(q));
            query = query.bind(pattern.clone()).bind(pattern);
        }
        if let Some(diet) = filter.diet_type {
            query = query.bind(diet.as_str());
        }
        if let Some(max_prep) = filter.max_prep_time {
            query = query.bind(max_prep);
        }
        query = query.bind(filter.limit);

        let rows = query.fetch_all(&self.pool).await?;
        let recipes: Vec<Recipe> = rows
            .iter()
            .map(Self::row_to_recipe)
            .collect::<AppResult<_>>()?;

        // Tag, cook-time, and servings filters are applied post-query.
        Ok(recipes
            .into_iter()
            .filter(|r| {
                filter.tags.is_empty() || filter.tags.iter().any(|tag| r.has_tag(tag))
            })
            .filter(|r| {
                filter.max_cook_time.is_none_or(|max| {
                    r.cook_time_minutes.is_some_and(|cook| cook <= max)
                })
            })
            .filter(|r| {
                filter.servings.is_none_or(|wanted| {
                    r.servings.is_some_and(|have| have >= wanted)
                })
            })
            .collect())
    }

    /// Delete a user's recipe by id. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn delete_recipe(&self, recipe_id: i64, user_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ? AND user_id = ?")
            .bind(recipe_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ========================================================================
    // Shopping lists
    // ========================================================================

    /// Create a shopping list for a thread, returning it with its id set.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the thread already owns a list.
    pub async fn create_shopping_list(&self, list: &ShoppingList) -> AppResult<ShoppingList> {
        let items = serde_json::to_string(&list.items)?;
        let result = sqlx::query(
            r"
            INSERT INTO shopping_lists (thread_id, user_id, items, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&list.thread_id)
        .bind(&list.user_id)
        .bind(items)
        .bind(list.created_at.to_rfc3339())
        .bind(list.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::already_exists(format!(
                    "Shopping list already exists for thread {}",
                    list.thread_id
                ))
            }
            _ => AppError::from(e),
        })?;

        let mut created = list.clone();
        created.id = Some(result.last_insert_rowid());
        Ok(created)
    }

    /// Get a shopping list by conversation thread id.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn get_shopping_list_by_thread(
        &self,
        thread_id: &str,
    ) -> AppResult<Option<ShoppingList>> {
        let row = sqlx::query("SELECT * FROM shopping_lists WHERE thread_id = ?")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_shopping_list(&r)).transpose()
    }

    /// Persist a list's current item sequence for its thread.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the thread has no list.
    pub async fn update_shopping_list(&self, list: &ShoppingList) -> AppResult<()> {
        let items = serde_json::to_string(&list.items)?;
        let result = sqlx::query(
            "UPDATE shopping_lists SET items = ?, updated_at = ? WHERE thread_id = ?",
        )
        .bind(items)
        .bind(Utc::now().to_rfc3339())
        .bind(&list.thread_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "No shopping list found for thread {}",
                list.thread_id
            )));
        }
        Ok(())
    }

    /// Empty a thread's list, keeping the row. Returns whether a list existed.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn clear_shopping_list(&self, thread_id: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE shopping_lists SET items = '[]', updated_at = ? WHERE thread_id = ?",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(thread_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a shopping list by id. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the query fails.
    pub async fn delete_shopping_list(&self, list_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = ?")
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ========================================================================
    // Row mapping
    // ========================================================================

    fn row_to_recipe(row: &sqlx::sqlite::SqliteRow) -> AppResult<Recipe> {
        let tags_json: String = row.try_get("tags")?;
        let ingredients_json: String = row.try_get("ingredients")?;
        let difficulty: Option<String> = row.try_get("difficulty")?;
        let diet_type: Option<String> = row.try_get("diet_type")?;

        Ok(Recipe {
            id: Some(row.try_get("id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            // Rows written by older schema revisions may carry malformed JSON;
            // treat that as an empty collection rather than failing the read.
            ingredients: serde_json::from_str(&ingredients_json).unwrap_or_default(),
            instructions: row.try_get("instructions")?,
            prep_time_minutes: row.try_get("prep_time_minutes")?,
            cook_time_minutes: row.try_get("cook_time_minutes")?,
            servings: row.try_get("servings")?,
            tags: serde_json::from_str(&tags_json).unwrap_or_default(),
            difficulty: difficulty.as_deref().and_then(Difficulty::parse),
            diet_type: diet_type.as_deref().and_then(DietType::parse),
            user_id: row.try_get("user_id")?,
            created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?),
            updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?),
        })
    }

    fn row_to_shopping_list(row: &sqlx::sqlite::SqliteRow) -> AppResult<ShoppingList> {
        let items_json: String = row.try_get("items")?;
        let items: Vec<ShoppingItem> = serde_json::from_str(&items_json).unwrap_or_default();

        Ok(ShoppingList {
            id: Some(row.try_get("id")?),
            thread_id: row.try_get("thread_id")?,
            user_id: row.try_get("user_id")?,
            items,
            created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?),
            updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?),
        })
    }
}

/// Escape SQL LIKE wildcards in user-supplied search text
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_else(|_| Utc::now())
}
