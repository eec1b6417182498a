// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barback")]
#[command(about = "Barback - cocktail recipe catalog with fuzzy search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every recipe in the catalog (base plus custom)
    List,

    /// Search and filter the catalog
    Search {
        /// Free-text query (fuzzy; omit to list everything)
        query: Option<String>,

        /// Spirit category to include (repeatable, OR semantics)
        #[arg(long = "spirit")]
        spirits: Vec<String>,

        /// Exact strength level (e.g. "Medium-Strong")
        #[arg(long)]
        strength: Option<String>,

        /// Exact difficulty level (e.g. "Beginner")
        #[arg(long)]
        difficulty: Option<String>,

        /// Sort key: name-asc, name-desc, difficulty-asc/-desc, strength-asc/-desc
        #[arg(long, default_value = "name-asc")]
        sort: String,
    },

    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
    },

    /// Validate and add a recipe from a JSON file (stdin when omitted)
    Add {
        /// Path to the recipe JSON
        file: Option<String>,
    },

    /// Delete a custom recipe by id
    Delete {
        /// Recipe id
        id: String,
    },

    /// Show the facet values present in the catalog
    Facets,

    /// Interactive search session with debounced input
    Browse,
}
