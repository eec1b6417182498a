//! Spirit variant to category table, built once and exposed as two pure
//! lookups. Names outside the table are their own category.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Spirit families: canonical category first, then every variant folded
/// into it when filtering.
const SPIRIT_FAMILIES: &[(&str, &[&str])] = &[
    ("Whiskey", &["Whiskey", "Bourbon", "Rye", "Scotch", "Rye Whiskey"]),
    ("Tequila", &["Tequila", "Mezcal"]),
];

fn variant_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for (category, variants) in SPIRIT_FAMILIES {
            for variant in *variants {
                table.insert(*variant, *category);
            }
        }
        table
    })
}

/// Canonical category for a spirit variant ("Bourbon" -> "Whiskey").
pub fn category_for(variant: &str) -> &str {
    variant_table().get(variant).copied().unwrap_or(variant)
}

/// Every variant reachable from a selected category; a category without a
/// table entry expands to just itself.
pub fn expand_category(category: &str) -> Vec<&str> {
    SPIRIT_FAMILIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, variants)| variants.to_vec())
        .unwrap_or_else(|| vec![category])
}
