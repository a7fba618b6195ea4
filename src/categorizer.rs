// ABOUTME: Ingredient categorization via longest-keyword-match over multilingual tables
// ABOUTME: Maps ingredient names to fixed shopping-list categories for grouped display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chef MCP Contributors

//! # Ingredient Categorizer
//!
//! Pure classification of ingredient names into the ten fixed shopping-list
//! categories. Matching is substring-based over per-category keyword tables
//! carrying English, German, and French synonyms.
//!
//! Category keyword tables overlap ("coconut milk" vs "coconut", "schwein"
//! vs "wein", "champignon" vs "ham"), so among all matching keywords the
//! longest one wins. Ties resolve to the earlier category in the fixed
//! priority order of [`CATEGORY_KEYWORDS`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One of the ten fixed shopping-list grouping labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Produce,
    Dairy,
    Meat,
    Seafood,
    Pantry,
    Spices,
    Baking,
    Frozen,
    Beverages,
    Other,
}

impl CategoryTag {
    /// Wire identifier for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Seafood => "seafood",
            Self::Pantry => "pantry",
            Self::Spices => "spices",
            Self::Baking => "baking",
            Self::Frozen => "frozen",
            Self::Beverages => "beverages",
            Self::Other => "other",
        }
    }

    /// Parse a wire identifier; unknown tags fall back to `Other`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "produce" => Self::Produce,
            "dairy" => Self::Dairy,
            "meat" => Self::Meat,
            "seafood" => Self::Seafood,
            "pantry" => Self::Pantry,
            "spices" => Self::Spices,
            "baking" => Self::Baking,
            "frozen" => Self::Frozen,
            "beverages" => Self::Beverages,
            _ => Self::Other,
        }
    }

    /// Human-readable label for grouped shopping-list display
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Produce => "Fresh Produce",
            Self::Dairy => "Dairy & Eggs",
            Self::Meat => "Meat & Poultry",
            Self::Seafood => "Seafood",
            Self::Pantry => "Pantry Staples",
            Self::Spices => "Spices & Herbs",
            Self::Baking => "Baking Supplies",
            Self::Frozen => "Frozen Foods",
            Self::Beverages => "Beverages",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label for an arbitrary tag string.
///
/// Tags outside the fixed set render title-cased rather than failing.
#[must_use]
pub fn display_name_for(tag: &str) -> String {
    let known = CategoryTag::from_tag(tag);
    if known == CategoryTag::Other && tag != "other" {
        let mut chars = tag.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    } else {
        known.display_name().to_owned()
    }
}

/// Per-category keyword tables, in tie-break priority order.
///
/// Each table mixes English, German, and French synonyms. Keywords are
/// lowercase; matching is substring containment against the lowercased,
/// trimmed ingredient name.
pub const CATEGORY_KEYWORDS: &[(CategoryTag, &[&str])] = &[
    (
        CategoryTag::Produce,
        &[
            "tomato", "tomate", "onion", "zwiebel", "oignon", "garlic", "knoblauch", "ail",
            "carrot", "karotte", "carotte", "potato", "kartoffel", "pomme de terre", "lettuce",
            "laitue", "spinach", "spinat", "epinard", "\u{e9}pinard", "cucumber", "gurke",
            "concombre", "mushroom", "pilz", "champignon", "broccoli", "brokkoli", "brocoli",
            "cauliflower", "blumenkohl", "chou-fleur", "cabbage", "kohl", "chou", "celery",
            "sellerie", "celeri", "c\u{e9}leri", "lemon", "zitrone", "citron", "lime", "limette",
            "orange", "apple", "apfel", "pomme", "banana", "banane", "strawberry", "erdbeere",
            "fraise", "blueberry", "heidelbeere", "myrtille", "avocado", "avocat", "ginger",
            "ingwer", "gingembre", "chili", "jalapeno", "bell pepper", "zucchini", "courgette",
            "eggplant", "aubergine", "squash", "pumpkin", "k\u{fc}rbis", "citrouille", "corn",
            "mais", "ma\u{ef}s", "peas", "erbsen", "petits pois", "beans", "bohnen", "haricots",
            "lentils", "linsen", "lentilles",
        ],
    ),
    (
        CategoryTag::Dairy,
        &[
            "cheese", "k\u{e4}se", "fromage", "butter", "beurre", "cream", "sahne", "creme",
            "cr\u{e8}me", "yogurt", "joghurt", "yaourt", "sour cream", "cottage cheese",
            "mozzarella", "cheddar", "parmesan", "feta", "ricotta", "mascarpone", "heavy cream",
            "half and half", "buttermilk", "greek yogurt", "quark", "milk", "milch", "lait",
        ],
    ),
    (
        CategoryTag::Meat,
        &[
            "chicken", "h\u{e4}hnchen", "huhn", "poulet", "beef", "rind", "boeuf", "b\u{153}uf",
            "pork", "schwein", "porc", "lamb", "lamm", "agneau", "turkey", "pute", "dinde",
            "bacon", "speck", "ham", "schinken", "jambon", "sausage", "wurst", "saucisse",
            "ground beef", "hackfleisch", "ground turkey", "ground pork", "steak", "chops",
            "roast", "breast", "thigh", "drumstick", "wing", "ribs", "tenderloin",
        ],
    ),
    (
        CategoryTag::Seafood,
        &[
            "salmon", "lachs", "saumon", "tuna", "thunfisch", "thon", "shrimp", "garnele",
            "crevette", "crab", "krabbe", "crabe", "lobster", "hummer", "homard", "cod",
            "kabeljau", "cabillaud", "halibut", "tilapia", "mahi mahi", "scallops",
            "jakobsmuschel", "mussels", "muschel", "moule", "clams", "oysters", "auster",
            "huitre", "hu\u{ee}tre", "fish", "fisch", "poisson", "seafood",
        ],
    ),
    (
        CategoryTag::Pantry,
        &[
            "salt", "salz", "sel", "pepper", "pfeffer", "poivre", "oil", "huile", "vinegar",
            "essig", "vinaigre", "rice", "reis", "riz", "pasta", "bread", "brot", "pain",
            "crackers", "cereal", "oats", "hafer", "avoine", "quinoa", "barley", "gerste",
            "orge", "bulgur", "couscous", "noodles", "nudeln", "nouilles", "spaghetti",
            "macaroni", "penne", "fettuccine",
        ],
    ),
    (
        CategoryTag::Spices,
        &[
            "paprika", "cumin", "kreuzk\u{fc}mmel", "coriander", "koriander", "coriandre",
            "turmeric", "kurkuma", "curcuma", "cinnamon", "zimt", "cannelle", "nutmeg", "muskat",
            "muscade", "cloves", "nelken", "girofle", "cardamom", "kardamom", "cardamome",
            "bay leaves", "lorbeer", "laurier", "sage", "salbei", "sauge", "marjoram", "majoran",
            "marjolaine", "tarragon", "estragon", "dill", "chives", "schnittlauch", "ciboulette",
            "parsley", "petersilie", "persil", "cilantro", "basil", "basilikum", "basilic",
            "oregano", "thyme", "thymian", "thym", "rosemary", "rosmarin", "romarin",
        ],
    ),
    (
        CategoryTag::Baking,
        &[
            "baking powder", "backpulver", "levure chimique", "baking soda", "natron", "yeast",
            "hefe", "levure", "vanilla", "vanille", "cocoa", "kakao", "cacao", "chocolate",
            "schokolade", "chocolat", "nuts", "n\u{fc}sse", "noix", "almonds", "mandeln",
            "amandes", "walnuts", "waln\u{fc}sse", "pecans", "hazelnuts", "haseln\u{fc}sse",
            "noisettes", "pistachios", "pistazien", "pistaches", "raisins", "rosinen", "dates",
            "datteln", "dattes", "coconut", "kokos", "flour", "mehl", "farine", "sugar",
            "zucker", "sucre", "brown sugar",
        ],
    ),
    (
        CategoryTag::Frozen,
        &[
            "frozen", "tiefk\u{fc}hl", "gefroren", "surgel\u{e9}", "surgele", "ice cream",
            "eiscreme", "glace", "frozen vegetables", "frozen fruit", "frozen berries",
        ],
    ),
    (
        CategoryTag::Beverages,
        &[
            "juice", "saft", "jus", "wine", "wein", "vin", "beer", "bier", "biere",
            "bi\u{e8}re", "soda", "water", "wasser", "eau", "tea", "tee", "th\u{e9}", "coffee",
            "kaffee", "cafe", "caf\u{e9}", "coconut milk", "kokosmilch", "lait de coco",
            "almond milk", "mandelmilch", "lait d'amande", "soy milk", "sojamilch",
            "lait de soja", "broth", "br\u{fc}he", "bouillon", "stock",
        ],
    ),
];

/// Categorize an ingredient name.
///
/// The input is lowercased and trimmed, then every category table is scanned
/// for keywords contained in the name. The category owning the longest
/// matching keyword wins; equal-length matches resolve to the earlier
/// category in [`CATEGORY_KEYWORDS`] order. Callers must not rely on the
/// tie-break for semantics, only on its stability.
///
/// Never fails: unmatched or empty names return [`CategoryTag::Other`].
#[must_use]
pub fn categorize(name: &str) -> CategoryTag {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return CategoryTag::Other;
    }

    let mut best: Option<(CategoryTag, usize)> = None;
    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in *keywords {
            if needle.contains(keyword) {
                let len = keyword.chars().count();
                // Strictly-greater keeps the first category on ties.
                if best.is_none_or(|(_, best_len)| len > best_len) {
                    best = Some((*category, len));
                }
            }
        }
    }

    best.map_or(CategoryTag::Other, |(category, _)| category)
}

/// Categorize a batch of items, grouping them by category.
///
/// Items may be JSON objects carrying a `name` field or bare strings; each
/// item's original representation is preserved in the output. Groups appear
/// in first-seen order, and items keep their input order within a group.
#[must_use]
pub fn categorize_batch(items: &[Value]) -> Vec<(CategoryTag, Vec<Value>)> {
    let mut groups: Vec<(CategoryTag, Vec<Value>)> = Vec::new();

    for item in items {
        let name = match item {
            Value::Object(map) => map.get("name").and_then(Value::as_str).unwrap_or_default(),
            Value::String(s) => s.as_str(),
            _ => "",
        };
        let category = categorize(name);

        if let Some((_, members)) = groups.iter_mut().find(|(tag, _)| *tag == category) {
            members.push(item.clone());
        } else {
            groups.push((category, vec![item.clone()]));
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_english_keywords() {
        assert_eq!(categorize("tomato"), CategoryTag::Produce);
        assert_eq!(categorize("bell pepper"), CategoryTag::Produce);
        assert_eq!(categorize("ground beef"), CategoryTag::Meat);
        assert_eq!(categorize("bay leaves"), CategoryTag::Spices);
        assert_eq!(categorize("milk"), CategoryTag::Dairy);
        assert_eq!(categorize("flour"), CategoryTag::Baking);
    }

    #[test]
    fn unmatched_and_empty_names_fall_back_to_other() {
        assert_eq!(categorize(""), CategoryTag::Other);
        assert_eq!(categorize("   "), CategoryTag::Other);
        assert_eq!(categorize("xyzzy"), CategoryTag::Other);
    }

    #[test]
    fn longest_match_beats_shorter_overlapping_keywords() {
        // "coconut milk" (beverages) over "coconut" (baking) and "milk" (dairy)
        assert_eq!(categorize("coconut milk"), CategoryTag::Beverages);
        // "sour cream" over "cream"
        assert_eq!(categorize("sour cream"), CategoryTag::Dairy);
        // "champignon" (produce) over the embedded "ham" (meat)
        assert_eq!(categorize("champignon"), CategoryTag::Produce);
        // "schwein" (meat) over the embedded "wein" (beverages)
        assert_eq!(categorize("schweinebraten"), CategoryTag::Meat);
        // "vinaigre" (pantry) over the embedded "vin" (beverages)
        assert_eq!(categorize("vinaigre"), CategoryTag::Pantry);
    }

    #[test]
    fn multilingual_synonyms() {
        assert_eq!(categorize("zwiebel"), CategoryTag::Produce);
        assert_eq!(categorize("ail"), CategoryTag::Produce);
        assert_eq!(categorize("lait"), CategoryTag::Dairy);
        assert_eq!(categorize("hackfleisch"), CategoryTag::Meat);
        assert_eq!(categorize("saumon"), CategoryTag::Seafood);
        assert_eq!(categorize("farine"), CategoryTag::Baking);
    }

    #[test]
    fn categorize_is_pure() {
        assert_eq!(categorize("Tomato "), categorize("Tomato "));
    }

    #[test]
    fn batch_groups_in_first_seen_order() {
        let items = vec![
            json!({"name": "tomato"}),
            json!({"name": "milk"}),
            json!({"name": "chicken"}),
            json!({"name": "flour"}),
        ];
        let groups = categorize_batch(&items);
        let tags: Vec<CategoryTag> = groups.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            tags,
            vec![
                CategoryTag::Produce,
                CategoryTag::Dairy,
                CategoryTag::Meat,
                CategoryTag::Baking,
            ]
        );
        assert_eq!(groups[0].1, vec![json!({"name": "tomato"})]);
    }

    #[test]
    fn batch_preserves_bare_string_representation() {
        let items = vec![json!("tomato"), json!("cherry tomato")];
        let groups = categorize_batch(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, CategoryTag::Produce);
        assert_eq!(groups[0].1, vec![json!("tomato"), json!("cherry tomato")]);
    }

    #[test]
    fn display_names() {
        assert_eq!(CategoryTag::Produce.display_name(), "Fresh Produce");
        assert_eq!(display_name_for("produce"), "Fresh Produce");
        assert_eq!(display_name_for("charcuterie"), "Charcuterie");
    }
}
