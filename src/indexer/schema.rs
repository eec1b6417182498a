use tantivy::schema::{Field, Schema, STORED, STRING, TEXT};

/// Schema for the recipe search index. Only the id is stored; hits resolve
/// back to full recipes through the index's stored-order table.
#[derive(Clone)]
pub struct RecipeSchema {
    pub schema: Schema,
    pub id: Field,
    pub name: Field,
    pub spirit: Field,
    pub ingredient: Field,
    pub tag: Field,
    pub flavor: Field,
    pub style: Field,
}

impl RecipeSchema {
    pub fn new() -> Self {
        let mut schema_builder = Schema::builder();

        // Recipe ID (stored, matched whole, not tokenized)
        let id = schema_builder.add_text_field("id", STRING | STORED);

        // Display name (searchable, dominant weight at query time)
        let name = schema_builder.add_text_field("name", TEXT);

        // Base spirit; comma-separated values tokenize into variants
        let spirit = schema_builder.add_text_field("spirit", TEXT);

        // One value per ingredient name
        let ingredient = schema_builder.add_text_field("ingredient", TEXT);

        // Free-form tags
        let tag = schema_builder.add_text_field("tag", TEXT);

        // Flavor descriptors
        let flavor = schema_builder.add_text_field("flavor", TEXT);

        // Style descriptors
        let style = schema_builder.add_text_field("style", TEXT);

        let schema = schema_builder.build();

        Self {
            schema,
            id,
            name,
            spirit,
            ingredient,
            tag,
            flavor,
            style,
        }
    }
}

impl Default for RecipeSchema {
    fn default() -> Self {
        Self::new()
    }
}
