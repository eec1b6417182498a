// Recipe catalog: bundled base data plus the user's custom collection.

pub mod models;
pub mod options;
pub mod repository;
pub mod spirits;
pub mod validate;

// Re-exports
pub use models::{Ingredient, Recipe};
pub use options::{derive_filter_options, FilterOptions};
pub use repository::{generate_recipe_id, RecipeRepository};
pub use validate::{parse_submission, validate_recipe, RecipeValidation};
