use crate::catalog::models::Recipe;
use crate::error::Result;
use crate::indexer::RecipeIndex;
use crate::query::filters::{filter_recipes, SearchFilters};
use crate::query::sort::sort_recipes;

/// Fixed stage order: search narrows the candidate set, facets narrow the
/// matches, and sort is the final deterministic pass regardless of what
/// order the upstream stages produced.
pub fn search_and_filter(
    index: &RecipeIndex,
    query: &str,
    filters: &SearchFilters,
) -> Result<Vec<Recipe>> {
    let searched = index.search(query)?;
    let filtered = filter_recipes(&searched, filters);
    Ok(sort_recipes(&filtered, &filters.sort_by))
}
