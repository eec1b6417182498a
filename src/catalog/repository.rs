use std::sync::OnceLock;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::catalog::models::Recipe;
use crate::error::Result;
use crate::store::{KeyValueStore, CUSTOM_RECIPES_KEY};

const BUNDLED_CATALOG: &str = include_str!("../../data/recipes.json");

/// The bundled base catalog, parsed once per process and read-only after.
fn base_catalog() -> &'static [Recipe] {
    static CATALOG: OnceLock<Vec<Recipe>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(BUNDLED_CATALOG).expect("bundled recipe catalog is valid JSON")
    })
}

/// Recipe access over the bundled catalog plus the user's custom
/// collection behind the key-value store. The repository owns its store;
/// nothing here reads ambient process state.
pub struct RecipeRepository<S> {
    store: S,
    base: Vec<Recipe>,
}

impl<S: KeyValueStore> RecipeRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            base: base_catalog().to_vec(),
        }
    }

    /// Swap the bundled catalog for an explicit one. Tests and embedders.
    pub fn with_base(store: S, base: Vec<Recipe>) -> Self {
        Self { store, base }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The static base catalog, constant for the process lifetime.
    pub fn base_recipes(&self) -> &[Recipe] {
        &self.base
    }

    /// Custom recipes from the store. A missing key, an unavailable store,
    /// or a malformed payload all degrade to an empty collection; read
    /// failures never propagate past this boundary.
    pub fn custom_recipes(&self) -> Vec<Recipe> {
        let payload = match self.store.get(CUSTOM_RECIPES_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("custom recipe read failed, treating as empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("custom recipe payload is malformed, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Base then custom, base-first order preserved.
    pub fn all_recipes(&self) -> Vec<Recipe> {
        let mut recipes = self.base.clone();
        recipes.extend(self.custom_recipes());
        recipes
    }

    /// Linear scan over the combined set; first match wins.
    pub fn find_by_id(&self, id: &str) -> Option<Recipe> {
        self.all_recipes().into_iter().find(|recipe| recipe.id == id)
    }

    pub fn is_custom(&self, id: &str) -> bool {
        self.custom_recipes().iter().any(|recipe| recipe.id == id)
    }

    /// Append a recipe to the custom collection, assigning an identifier
    /// when the submission carries none. The persisted collection is
    /// rewritten wholesale, not appended at the storage layer.
    pub fn add_recipe(&self, mut recipe: Recipe) -> Result<Recipe> {
        if recipe.id.is_empty() {
            recipe.id = generate_recipe_id();
        }
        let mut custom = self.custom_recipes();
        custom.push(recipe.clone());
        self.write_custom(&custom)?;
        Ok(recipe)
    }

    /// Remove a custom recipe by id, reporting whether a removal occurred.
    /// Base-catalog recipes are immutable; deleting one reports `false`.
    pub fn delete_recipe(&self, id: &str) -> Result<bool> {
        let custom = self.custom_recipes();
        let remaining: Vec<Recipe> = custom
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();
        if remaining.len() == custom.len() {
            return Ok(false);
        }
        self.write_custom(&remaining)?;
        Ok(true)
    }

    fn write_custom(&self, recipes: &[Recipe]) -> Result<()> {
        let payload = serde_json::to_string(recipes)?;
        self.store.set(CUSTOM_RECIPES_KEY, &payload)?;
        Ok(())
    }
}

/// Identifier for a user-submitted recipe: a timestamp component plus a
/// random component. Collisions are treated as improbable and are not
/// detected or retried.
pub fn generate_recipe_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("custom-{}-{}", Utc::now().timestamp_millis(), &random[..8])
}
