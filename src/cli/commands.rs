use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::catalog::models::Recipe;
use crate::catalog::options::derive_filter_options;
use crate::catalog::repository::RecipeRepository;
use crate::catalog::validate::parse_submission;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::explorer::{BrowseState, Explorer};
use crate::indexer::RecipeIndex;
use crate::query::filters::{SearchFilters, DEFAULT_SORT};
use crate::query::pipeline::search_and_filter;
use crate::store::FileStore;

fn open_repository(settings: &Settings) -> RecipeRepository<FileStore> {
    RecipeRepository::new(FileStore::new(settings.storage.data_dir.clone()))
}

/// List the whole catalog, base first.
pub fn list(settings: &Settings) -> Result<()> {
    let repository = open_repository(settings);
    let recipes = repository.all_recipes();

    for recipe in &recipes {
        print_recipe_line(recipe);
    }
    println!(
        "\n{} recipes ({} custom)",
        recipes.len(),
        repository.custom_recipes().len()
    );
    Ok(())
}

/// Run the search → filter → sort pipeline once and remember the position
/// for the next session.
pub fn search(
    settings: &Settings,
    query: Option<String>,
    spirits: Vec<String>,
    strength: Option<String>,
    difficulty: Option<String>,
    sort: String,
) -> Result<()> {
    let repository = open_repository(settings);
    let index = RecipeIndex::build(repository.all_recipes())?;

    let filters = SearchFilters {
        spirits,
        strength,
        difficulty,
        sort_by: sort,
    };
    let query = query.unwrap_or_default();
    let results = search_and_filter(&index, &query, &filters)?;

    for recipe in &results {
        print_recipe_line(recipe);
    }
    println!("\n{} of {} recipes match", results.len(), index.len());

    BrowseState {
        query,
        filters,
        scroll_offset: 0,
    }
    .persist(repository.store());

    Ok(())
}

/// Show one recipe in full.
pub fn show(settings: &Settings, id: &str) -> Result<()> {
    let repository = open_repository(settings);
    let recipe = repository
        .find_by_id(id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))?;

    println!("{} ({})", recipe.name, recipe.id);
    println!("  Spirit: {}", recipe.base_spirit);
    if !recipe.glass.is_empty() {
        println!("  Glass:  {}", recipe.glass);
    }
    if let Some(characteristics) = &recipe.characteristics {
        if let Some(strength) = &characteristics.strength {
            println!("  Strength: {strength}");
        }
        if let Some(difficulty) = &characteristics.difficulty {
            println!("  Difficulty: {difficulty}");
        }
        if !characteristics.flavor.is_empty() {
            println!("  Flavors: {}", characteristics.flavor.join(", "));
        }
    }

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        let mut line = format!(
            "  {} {} {}",
            ingredient.amount, ingredient.unit, ingredient.name
        );
        if ingredient.garnish {
            line.push_str(" (garnish)");
        } else if ingredient.optional {
            line.push_str(" (optional)");
        }
        if let Some(preparation) = &ingredient.preparation {
            line.push_str(&format!(", {preparation}"));
        }
        println!("{line}");
    }

    if !recipe.preparation.steps.is_empty() {
        println!(
            "\nPreparation ({}, {} min):",
            recipe.preparation.method, recipe.preparation.prep_time_minutes
        );
        for step in &recipe.preparation.steps {
            println!("  {}. {}", step.step, step.description);
        }
    }

    if let Some(notes) = &recipe.notes {
        if let Some(history) = &notes.history {
            println!("\nHistory: {history}");
        }
        if let Some(tips) = &notes.tips {
            println!("Tip: {tips}");
        }
    }

    if !recipe.tags.is_empty() {
        println!("\nTags: {}", recipe.tags.join(", "));
    }

    Ok(())
}

/// Validate a submission and persist it to the custom collection.
pub fn add(settings: &Settings, file: Option<&str>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let recipe = match parse_submission(&input) {
        Ok(recipe) => recipe,
        Err(Error::Validation(errors)) => {
            eprintln!("Recipe rejected:");
            for error in &errors {
                eprintln!("  - {error}");
            }
            return Err(Error::Validation(errors));
        }
        Err(e) => return Err(e),
    };

    let repository = open_repository(settings);
    let saved = repository.add_recipe(recipe)?;
    println!("✓ Added: {} ({})", saved.name, saved.id);
    Ok(())
}

/// Delete a custom recipe. Base recipes are immutable and report no
/// removal.
pub fn delete(settings: &Settings, id: &str) -> Result<()> {
    let repository = open_repository(settings);

    if repository.delete_recipe(id)? {
        println!("✓ Deleted: {id}");
    } else if repository.find_by_id(id).is_some() {
        println!("Recipe {id} is part of the base catalog and cannot be deleted");
    } else {
        println!("No custom recipe with id {id}");
    }
    Ok(())
}

/// Show the facet values present across the combined catalog.
pub fn facets(settings: &Settings) -> Result<()> {
    let repository = open_repository(settings);
    let options = derive_filter_options(&repository.all_recipes());

    println!("Spirits:      {}", options.spirits.join(", "));
    println!("Strengths:    {}", options.strengths.join(", "));
    println!("Difficulties: {}", options.difficulties.join(", "));
    println!("Flavors:      {}", options.flavors.join(", "));
    Ok(())
}

/// Interactive loop: plain lines are debounced free-text queries, `:`
/// commands adjust facets immediately. The session restores the previous
/// browsing position on entry and saves it on exit.
pub async fn browse(settings: &Settings) -> Result<()> {
    let repository = open_repository(settings);
    let index = Arc::new(RecipeIndex::build(repository.all_recipes())?);
    let explorer = Explorer::new(index, Duration::from_millis(settings.browse.debounce_ms))?;

    if let Some(state) = BrowseState::load(repository.store()) {
        info!("restoring previous browse session");
        explorer.restore(state);
    }

    println!("barback browse: type to search");
    println!("commands: :spirit <name>  :strength <level>  :difficulty <level>  :sort <key>  :clear  :quit");
    print_results(&explorer.results());

    let mut changes = explorer.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line == ":quit" || line == ":q" {
                    break;
                }
                if let Some(command) = line.strip_prefix(':') {
                    apply_command(&explorer, command);
                } else {
                    explorer.set_query(line);
                }
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                print_results(&explorer.results());
            }
        }
    }

    explorer.snapshot().persist(repository.store());
    println!("✓ Session saved");
    Ok(())
}

/// Facet commands toggle their value: naming the active one clears it.
fn apply_command(explorer: &Explorer, command: &str) {
    let (verb, argument) = command.split_once(' ').unwrap_or((command, ""));
    let argument = argument.trim();
    let mut filters = explorer.filters();

    match verb {
        "spirit" if !argument.is_empty() => {
            if let Some(slot) = filters.spirits.iter().position(|s| s == argument) {
                filters.spirits.remove(slot);
            } else {
                filters.spirits.push(argument.to_string());
            }
        }
        "strength" => filters.strength = toggle(filters.strength, argument),
        "difficulty" => filters.difficulty = toggle(filters.difficulty, argument),
        "sort" if !argument.is_empty() => filters.sort_by = argument.to_string(),
        "clear" => {
            filters = SearchFilters {
                sort_by: DEFAULT_SORT.to_string(),
                ..SearchFilters::empty()
            };
        }
        _ => {
            println!("unknown command: :{command}");
            return;
        }
    }

    explorer.set_filters(filters);
}

fn toggle(current: Option<String>, argument: &str) -> Option<String> {
    if argument.is_empty() || current.as_deref() == Some(argument) {
        None
    } else {
        Some(argument.to_string())
    }
}

fn print_results(results: &[Recipe]) {
    for recipe in results {
        print_recipe_line(recipe);
    }
    println!("{} match(es)", results.len());
}

fn print_recipe_line(recipe: &Recipe) {
    println!(
        "  {:<24} {:<22} {:<14} {:<14} {}",
        recipe.id,
        recipe.name,
        recipe.base_spirit,
        recipe.strength().unwrap_or("-"),
        recipe.difficulty().unwrap_or("-"),
    );
}
