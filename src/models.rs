// ABOUTME: Core domain models for recipes, ingredients, and shopping lists
// ABOUTME: Defines value types shared by the MCP tools, REST routes, and database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Domain Models
//!
//! Value types for the meal-planning domain. These structures are shared by
//! the tool dispatch layer, the REST routes, and the SQLite repositories, so
//! they carry `serde` derives matching the wire format used by all three.

use crate::categorizer::CategoryTag;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diet types supported by the recipe catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "low-carb")]
    LowCarb,
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "high-protein")]
    HighProtein,
    #[serde(rename = "keto")]
    Keto,
    #[serde(rename = "mediterranean")]
    Mediterranean,
    #[serde(rename = "gluten-free")]
    GlutenFree,
    #[serde(rename = "paleo")]
    Paleo,
}

impl DietType {
    /// All supported diet type identifiers, in declaration order
    pub const ALL: [Self; 8] = [
        Self::LowCarb,
        Self::Vegetarian,
        Self::Vegan,
        Self::HighProtein,
        Self::Keto,
        Self::Mediterranean,
        Self::GlutenFree,
        Self::Paleo,
    ];

    /// Wire identifier for this diet type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowCarb => "low-carb",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::HighProtein => "high-protein",
            Self::Keto => "keto",
            Self::Mediterranean => "mediterranean",
            Self::GlutenFree => "gluten-free",
            Self::Paleo => "paleo",
        }
    }

    /// Parse a wire identifier, returning `None` for unknown values.
    ///
    /// Unknown diet types are a validation error at the tool boundary, so
    /// this deliberately does not fall back to a default.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == value)
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipe difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire identifier for this difficulty
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse a wire identifier, returning `None` for unknown values
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// An ingredient with quantity and unit. Value type, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// A single entry on a shopping list.
///
/// Equality for removal purposes is the (name lowercased, quantity, unit)
/// triple; `category` and `purchased` do not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryTag>,
    #[serde(default)]
    pub purchased: bool,
}

impl ShoppingItem {
    /// Whether this item matches a removal request for (name, quantity, unit)
    #[must_use]
    pub fn matches(&self, name: &str, quantity: &str, unit: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.quantity == quantity
            && self.unit == unit
    }
}

/// A shopping list owned by a conversation thread.
///
/// The integer id is assigned by the database at creation; in-memory lists
/// that have not been persisted yet carry `id: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Option<i64>,
    pub thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    /// Create an empty, unpersisted list for a thread
    #[must_use]
    pub fn new(thread_id: impl Into<String>, user_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            thread_id: thread_id.into(),
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Items that have not been marked purchased
    #[must_use]
    pub fn unpurchased_items(&self) -> Vec<&ShoppingItem> {
        self.items.iter().filter(|i| !i.purchased).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A recipe with ingredients, instructions, and metadata. Owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
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
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub diet_type: Option<DietType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Validate field constraints before persisting.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for an empty title, negative prep or
    /// cook time, or non-positive servings.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::invalid_input("title cannot be empty"));
        }
        if self.prep_time_minutes.is_some_and(|m| m < 0) {
            return Err(AppError::invalid_input("prep_time_minutes cannot be negative"));
        }
        if self.cook_time_minutes.is_some_and(|m| m < 0) {
            return Err(AppError::invalid_input("cook_time_minutes cannot be negative"));
        }
        if self.servings.is_some_and(|s| s <= 0) {
            return Err(AppError::invalid_input("servings must be positive"));
        }
        Ok(())
    }

    /// Total prep + cook time, or `None` when both are unset
    #[must_use]
    pub fn total_time_minutes(&self) -> Option<i64> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0) + cook.unwrap_or(0)),
        }
    }

    /// Case-insensitive tag membership check
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipe: {}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_type_parse_round_trip() {
        for diet in DietType::ALL {
            assert_eq!(DietType::parse(diet.as_str()), Some(diet));
        }
        assert_eq!(DietType::parse("carnivore"), None);
    }

    #[test]
    fn shopping_item_match_is_case_insensitive_on_name_only() {
        let item = ShoppingItem {
            name: "Tomato".into(),
            quantity: "2".into(),
            unit: "pcs".into(),
            category: None,
            purchased: false,
        };
        assert!(item.matches("tomato", "2", "pcs"));
        assert!(!item.matches("tomato", "3", "pcs"));
        assert!(!item.matches("tomato", "2", "kg"));
    }

    #[test]
    fn recipe_validation_rejects_bad_fields() {
        let mut recipe = Recipe {
            id: None,
            title: "Soup".into(),
            description: None,
            ingredients: vec![],
            instructions: String::new(),
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(20),
            servings: Some(4),
            tags: vec![],
            difficulty: None,
            diet_type: None,
            user_id: Some("alice".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(recipe.validate().is_ok());
        assert_eq!(recipe.total_time_minutes(), Some(30));

        recipe.title = "   ".into();
        assert!(recipe.validate().is_err());
        recipe.title = "Soup".into();
        recipe.servings = Some(0);
        assert!(recipe.validate().is_err());
    }
}
