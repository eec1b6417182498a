use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::models::{Recipe, DIFFICULTY_SCALE, STRENGTH_SCALE};
use crate::catalog::spirits;

/// Facet values actually present in a recipe set, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub spirits: Vec<String>,
    pub strengths: Vec<String>,
    pub difficulties: Vec<String>,
    pub flavors: Vec<String>,
}

/// One scan over the combined recipe set. Spirit variants fold into their
/// category; strength and difficulty keep their fixed scale order; spirits
/// and flavors sort lexically.
pub fn derive_filter_options(recipes: &[Recipe]) -> FilterOptions {
    let mut spirits = BTreeSet::new();
    let mut strengths = HashSet::new();
    let mut difficulties = HashSet::new();
    let mut flavors = BTreeSet::new();

    for recipe in recipes {
        for token in recipe.spirit_tokens() {
            spirits.insert(spirits::category_for(token).to_string());
        }
        if let Some(strength) = recipe.strength() {
            strengths.insert(strength.to_string());
        }
        if let Some(difficulty) = recipe.difficulty() {
            difficulties.insert(difficulty.to_string());
        }
        for flavor in recipe.flavors() {
            flavors.insert(flavor.clone());
        }
    }

    FilterOptions {
        spirits: spirits.into_iter().collect(),
        strengths: STRENGTH_SCALE
            .iter()
            .filter(|level| strengths.contains(**level))
            .map(|level| level.to_string())
            .collect(),
        difficulties: DIFFICULTY_SCALE
            .iter()
            .filter(|level| difficulties.contains(**level))
            .map(|level| level.to_string())
            .collect(),
        flavors: flavors.into_iter().collect(),
    }
}
