// ABOUTME: Shopping list reconciliation - add, remove, clear, and grouped display
// ABOUTME: Pure in-memory list maintenance; persistence belongs to the database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Shopping List Reconciliation
//!
//! Maintains the item sequence of a shopping list under add/remove requests
//! from the tool dispatch layer and the REST routes. The rules:
//!
//! - Adding never merges: duplicate (name, quantity, unit) triples coexist.
//! - Removing deletes *every* item matching the request's triple (name
//!   case-insensitively, quantity and unit exactly) and reports the count.
//! - Items arriving without a category are classified by the categorizer.
//!
//! Lists are capped at [`MAX_LIST_ITEMS`] entries; the cap is checked here
//! rather than in storage so both surfaces share it.

use crate::categorizer::{self, CategoryTag};
use crate::constants::limits::MAX_LIST_ITEMS;
use crate::errors::{AppError, AppResult};
use crate::models::{ShoppingItem, ShoppingList};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// An item as it arrives from a tool call or REST request.
///
/// Only `name` is required; quantity defaults to `"1"`, unit to `""`, and
/// category to whatever the categorizer decides.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub purchased: Option<bool>,
}

impl ItemSpec {
    /// Resolve defaults and auto-categorize into a concrete list item
    #[must_use]
    pub fn into_item(self) -> ShoppingItem {
        let category = self.category.map_or_else(
            || categorizer::categorize(&self.name),
            |tag| CategoryTag::from_tag(&tag),
        );
        ShoppingItem {
            name: self.name,
            quantity: self.quantity.unwrap_or_else(|| "1".to_owned()),
            unit: self.unit.unwrap_or_default(),
            category: Some(category),
            purchased: self.purchased.unwrap_or(false),
        }
    }

    /// The (name, quantity, unit) triple a removal request matches against.
    ///
    /// Defaults mirror [`Self::into_item`] so an add followed by a removal
    /// of the same spec always reconciles to the empty list.
    #[must_use]
    pub fn removal_key(&self) -> (String, String, String) {
        (
            self.name.clone(),
            self.quantity.clone().unwrap_or_else(|| "1".to_owned()),
            self.unit.clone().unwrap_or_default(),
        )
    }
}

/// A display group of items sharing a category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: CategoryTag,
    pub display_name: String,
    pub items: Vec<ShoppingItem>,
}

/// Append items to the list, auto-categorizing where needed.
///
/// Duplicates are allowed to accumulate; this mirrors the observed product
/// behavior and only `remove_items` reasons about the identity triple.
///
/// # Errors
///
/// Returns `InvalidInput` when the additions would push the list past
/// [`MAX_LIST_ITEMS`]; the list is left unmodified in that case.
pub fn add_items(list: &mut ShoppingList, specs: Vec<ItemSpec>) -> AppResult<usize> {
    if list.items.len() + specs.len() > MAX_LIST_ITEMS {
        return Err(AppError::invalid_input(format!(
            "Shopping list cannot exceed {MAX_LIST_ITEMS} items"
        )));
    }

    let added = specs.len();
    list.items.extend(specs.into_iter().map(ItemSpec::into_item));
    list.updated_at = Utc::now();
    Ok(added)
}

/// Remove every item matching each removal spec's (name, quantity, unit)
/// triple. Returns the total number of items removed across all specs.
///
/// A spec matching nothing is a no-op, not an error.
pub fn remove_items(list: &mut ShoppingList, specs: &[ItemSpec]) -> usize {
    let before = list.items.len();
    for spec in specs {
        let (name, quantity, unit) = spec.removal_key();
        list.items.retain(|item| !item.matches(&name, &quantity, &unit));
    }
    let removed = before - list.items.len();
    if removed > 0 {
        list.updated_at = Utc::now();
    }
    removed
}

/// Empty the item sequence; the list's identity persists.
pub fn clear(list: &mut ShoppingList) {
    list.items.clear();
    list.updated_at = Utc::now();
}

/// Group the list's items by category for display, in first-seen order.
#[must_use]
pub fn grouped(list: &ShoppingList) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in &list.items {
        let category = item
            .category
            .unwrap_or_else(|| categorizer::categorize(&item.name));
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            group.items.push(item.clone());
        } else {
            groups.push(CategoryGroup {
                category,
                display_name: category.display_name().to_owned(),
                items: vec![item.clone()],
            });
        }
    }
    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn spec(name: &str, quantity: Option<&str>, unit: Option<&str>) -> ItemSpec {
        ItemSpec {
            name: name.to_owned(),
            quantity: quantity.map(str::to_owned),
            unit: unit.map(str::to_owned),
            category: None,
            purchased: None,
        }
    }

    #[test]
    fn add_then_remove_same_specs_leaves_empty_list() {
        let mut list = ShoppingList::new("thread-1", None);
        let specs = vec![
            spec("tomato", Some("2"), Some("pcs")),
            spec("milk", Some("1"), Some("l")),
            spec("flour", None, None),
        ];
        let added = add_items(&mut list, specs.clone()).unwrap();
        assert_eq!(added, 3);

        let removed = remove_items(&mut list, &specs);
        assert_eq!(removed, 3);
        assert!(list.is_empty());
    }

    #[test]
    fn add_auto_categorizes_missing_categories() {
        let mut list = ShoppingList::new("thread-1", None);
        add_items(&mut list, vec![spec("chicken", None, None)]).unwrap();
        assert_eq!(list.items[0].category, Some(CategoryTag::Meat));
        assert_eq!(list.items[0].quantity, "1");
        assert_eq!(list.items[0].unit, "");
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut list = ShoppingList::new("thread-1", None);
        add_items(
            &mut list,
            vec![spec("milk", Some("1"), Some("l")), spec("milk", Some("1"), Some("l"))],
        )
        .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_deletes_all_matching_duplicates() {
        let mut list = ShoppingList::new("thread-1", None);
        add_items(
            &mut list,
            vec![
                spec("Milk", Some("1"), Some("l")),
                spec("milk", Some("1"), Some("l")),
                spec("milk", Some("2"), Some("l")),
            ],
        )
        .unwrap();

        let removed = remove_items(&mut list, &[spec("MILK", Some("1"), Some("l"))]);
        assert_eq!(removed, 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].quantity, "2");
    }

    #[test]
    fn remove_missing_item_is_a_counted_noop() {
        let mut list = ShoppingList::new("thread-1", None);
        add_items(&mut list, vec![spec("bread", None, None)]).unwrap();

        let removed = remove_items(&mut list, &[spec("caviar", None, None)]);
        assert_eq!(removed, 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn cap_rejects_oversized_additions_without_mutating() {
        let mut list = ShoppingList::new("thread-1", None);
        let many: Vec<ItemSpec> = (0..=MAX_LIST_ITEMS).map(|i| spec(&format!("item {i}"), None, None)).collect();
        assert!(add_items(&mut list, many).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_but_preserves_identity() {
        let mut list = ShoppingList::new("thread-1", None);
        list.id = Some(42);
        add_items(&mut list, vec![spec("rice", None, None)]).unwrap();
        clear(&mut list);
        assert!(list.is_empty());
        assert_eq!(list.id, Some(42));
    }

    #[test]
    fn grouped_display_uses_first_seen_order_and_labels() {
        let mut list = ShoppingList::new("thread-1", None);
        add_items(
            &mut list,
            vec![
                spec("tomato", None, None),
                spec("milk", None, None),
                spec("cherry tomato", None, None),
            ],
        )
        .unwrap();

        let groups = grouped(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, CategoryTag::Produce);
        assert_eq!(groups[0].display_name, "Fresh Produce");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].category, CategoryTag::Dairy);
    }
}
