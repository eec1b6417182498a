use std::collections::HashMap;

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, BoostQuery, FuzzyTermQuery, Occur, Query};
use tantivy::schema::{Field, Value};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument, Term};
use tracing::debug;

use crate::catalog::models::Recipe;
use crate::error::Result;
use crate::indexer::schema::RecipeSchema;

/// Per-field match weights. Name and spirit must dominate ingredient and
/// tag matches.
const NAME_WEIGHT: f32 = 2.0;
const SPIRIT_WEIGHT: f32 = 1.5;
const INGREDIENT_WEIGHT: f32 = 1.0;
const TAG_WEIGHT: f32 = 0.8;
const FLAVOR_WEIGHT: f32 = 0.7;
const STYLE_WEIGHT: f32 = 0.5;

/// Query tokens shorter than this are ignored.
const MIN_TOKEN_LEN: usize = 2;

const WRITER_BUFFER_BYTES: usize = 15_000_000;

/// In-memory fuzzy index over a recipe candidate set.
///
/// Rebuilding from scratch is the only update path; when the candidate set
/// changes, callers build a fresh index.
pub struct RecipeIndex {
    reader: IndexReader,
    schema: RecipeSchema,
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
}

impl RecipeIndex {
    /// Index the candidate set, keeping the recipes alongside in stored
    /// order for id resolution and empty-query listing.
    pub fn build(recipes: Vec<Recipe>) -> Result<Self> {
        let schema = RecipeSchema::new();
        let index = Index::create_in_ram(schema.schema.clone());
        let mut writer: IndexWriter = index.writer(WRITER_BUFFER_BYTES)?;

        for recipe in &recipes {
            let mut document = doc!(
                schema.id => recipe.id.clone(),
                schema.name => recipe.name.clone(),
                schema.spirit => recipe.base_spirit.clone(),
            );
            for ingredient in &recipe.ingredients {
                document.add_text(schema.ingredient, &ingredient.name);
            }
            for tag in &recipe.tags {
                document.add_text(schema.tag, tag);
            }
            for flavor in recipe.flavors() {
                document.add_text(schema.flavor, flavor);
            }
            for style in recipe.styles() {
                document.add_text(schema.style, style);
            }
            writer.add_document(document)?;
        }
        writer.commit()?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        let by_id = recipes
            .iter()
            .enumerate()
            .map(|(slot, recipe)| (recipe.id.clone(), slot))
            .collect();

        debug!("indexed {} recipes", recipes.len());

        Ok(Self {
            reader,
            schema,
            recipes,
            by_id,
        })
    }

    /// The candidate set in stored (base-first) order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Fuzzy search. An empty or whitespace-only query returns the whole
    /// candidate set in stored order; sorting is a separate downstream
    /// stage. A non-empty query returns matches in relevance order.
    pub fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        if query.trim().is_empty() {
            return Ok(self.recipes.clone());
        }

        let Some(fuzzy) = self.build_query(query) else {
            // Nothing usable in the query (tokens below the minimum length)
            return Ok(Vec::new());
        };

        let searcher = self.reader.searcher();
        let limit = self.recipes.len().max(1);
        let top_docs = searcher.search(&fuzzy, &TopDocs::with_limit(limit))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let document: TantivyDocument = searcher.doc(address)?;
            let Some(id) = document.get_first(self.schema.id).and_then(|v| v.as_str()) else {
                continue;
            };
            if let Some(&slot) = self.by_id.get(id) {
                hits.push(self.recipes[slot].clone());
            }
        }
        Ok(hits)
    }

    /// One fuzzy clause per (token, field) pair, boosted by field weight
    /// and ORed together. Edit distance scales with token length so short
    /// tokens stay exact.
    fn build_query(&self, query: &str) -> Option<BooleanQuery> {
        let weighted_fields: [(Field, f32); 6] = [
            (self.schema.name, NAME_WEIGHT),
            (self.schema.spirit, SPIRIT_WEIGHT),
            (self.schema.ingredient, INGREDIENT_WEIGHT),
            (self.schema.tag, TAG_WEIGHT),
            (self.schema.flavor, FLAVOR_WEIGHT),
            (self.schema.style, STYLE_WEIGHT),
        ];

        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        for token in query.split(|c: char| !c.is_alphanumeric()) {
            let token = token.to_lowercase();
            let len = token.chars().count();
            if len < MIN_TOKEN_LEN {
                continue;
            }
            let distance = max_edit_distance(len);
            for (field, weight) in weighted_fields {
                let term = Term::from_field_text(field, &token);
                let fuzzy = FuzzyTermQuery::new(term, distance, true);
                let boosted = BoostQuery::new(Box::new(fuzzy), weight);
                clauses.push((Occur::Should, Box::new(boosted)));
            }
        }

        if clauses.is_empty() {
            None
        } else {
            Some(BooleanQuery::new(clauses))
        }
    }
}

/// Levenshtein budget by token length: exact under four characters, one
/// edit for short words, two for longer ones. Transpositions count as a
/// single edit.
fn max_edit_distance(len: usize) -> u8 {
    match len {
        0..=3 => 0,
        4..=6 => 1,
        _ => 2,
    }
}
