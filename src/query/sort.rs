use std::cmp::Ordering;

use crate::catalog::models::{Recipe, DIFFICULTY_SCALE, STRENGTH_SCALE};

/// Recognized sort keys. Anything else leaves the input order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    DifficultyAsc,
    DifficultyDesc,
    StrengthAsc,
    StrengthDesc,
}

impl SortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "difficulty-asc" => Some(Self::DifficultyAsc),
            "difficulty-desc" => Some(Self::DifficultyDesc),
            "strength-asc" => Some(Self::StrengthAsc),
            "strength-desc" => Some(Self::StrengthDesc),
            _ => None,
        }
    }
}

/// Stable sort into a new vector; the input is never mutated. Recipes
/// missing the sorted-on field rank last in either direction. An
/// unrecognized key preserves the input order with no error.
pub fn sort_recipes(recipes: &[Recipe], key: &str) -> Vec<Recipe> {
    let mut sorted = recipes.to_vec();
    let Some(key) = SortKey::parse(key) else {
        return sorted;
    };
    match key {
        SortKey::NameAsc => sorted.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => sorted.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::DifficultyAsc => {
            sorted.sort_by(|a, b| rank_order(difficulty_rank(a), difficulty_rank(b), false));
        }
        SortKey::DifficultyDesc => {
            sorted.sort_by(|a, b| rank_order(difficulty_rank(a), difficulty_rank(b), true));
        }
        SortKey::StrengthAsc => {
            sorted.sort_by(|a, b| rank_order(strength_rank(a), strength_rank(b), false));
        }
        SortKey::StrengthDesc => {
            sorted.sort_by(|a, b| rank_order(strength_rank(a), strength_rank(b), true));
        }
    }
    sorted
}

fn name_key(recipe: &Recipe) -> String {
    recipe.name.to_lowercase()
}

fn difficulty_rank(recipe: &Recipe) -> Option<usize> {
    recipe
        .difficulty()
        .and_then(|level| DIFFICULTY_SCALE.iter().position(|known| *known == level))
}

fn strength_rank(recipe: &Recipe) -> Option<usize> {
    recipe
        .strength()
        .and_then(|level| STRENGTH_SCALE.iter().position(|known| *known == level))
}

/// Known ranks compare by scale position; unknown or absent values rank
/// last regardless of direction.
fn rank_order(a: Option<usize>, b: Option<usize>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
