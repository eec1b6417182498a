use serde::{Deserialize, Serialize};

use crate::catalog::models::Recipe;
use crate::catalog::spirits;

/// Sort key interactive surfaces fall back to when clearing filters. An
/// empty key leaves order untouched.
pub const DEFAULT_SORT: &str = "name-asc";

/// Facet selections plus the sort key. Replaced wholesale on every change,
/// never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Selected spirit categories, OR semantics within the list.
    pub spirits: Vec<String>,
    pub strength: Option<String>,
    pub difficulty: Option<String>,
    pub sort_by: String,
}

impl SearchFilters {
    /// No facets selected, no sort preference.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spirits.is_empty() && self.strength.is_none() && self.difficulty.is_none()
    }
}

/// Facets combine with AND; the spirit list ORs internally, with each
/// selected category expanded through the spirit table. No facets selected
/// passes every recipe.
pub fn filter_recipes(recipes: &[Recipe], filters: &SearchFilters) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches_filters(recipe, filters))
        .cloned()
        .collect()
}

fn matches_filters(recipe: &Recipe, filters: &SearchFilters) -> bool {
    if !filters.spirits.is_empty() {
        let selected: Vec<&str> = filters
            .spirits
            .iter()
            .flat_map(|category| spirits::expand_category(category))
            .collect();
        let matched = recipe.spirit_tokens().iter().any(|token| {
            selected
                .iter()
                .any(|variant| token.eq_ignore_ascii_case(variant))
        });
        if !matched {
            return false;
        }
    }

    // Strength and difficulty are exact, case-sensitive matches.
    if let Some(strength) = &filters.strength {
        if recipe.strength() != Some(strength.as_str()) {
            return false;
        }
    }
    if let Some(difficulty) = &filters.difficulty {
        if recipe.difficulty() != Some(difficulty.as_str()) {
            return false;
        }
    }

    true
}
