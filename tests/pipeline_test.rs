use barback::catalog::models::Recipe;
use barback::catalog::repository::RecipeRepository;
use barback::catalog::validate::parse_submission;
use barback::indexer::RecipeIndex;
use barback::query::filters::SearchFilters;
use barback::query::pipeline::search_and_filter;
use barback::store::MemoryStore;
use barback::Error;

fn repository() -> RecipeRepository<MemoryStore> {
    RecipeRepository::new(MemoryStore::new())
}

fn whiskey_filter(sort: &str) -> SearchFilters {
    SearchFilters {
        spirits: vec!["Whiskey".to_string()],
        sort_by: sort.to_string(),
        ..Default::default()
    }
}

#[test]
fn empty_query_and_filters_return_stored_order() {
    let repository = repository();
    let all: Vec<String> = repository.all_recipes().iter().map(|r| r.id.clone()).collect();

    let index = RecipeIndex::build(repository.all_recipes()).unwrap();
    let results = search_and_filter(&index, "", &SearchFilters::empty()).unwrap();
    let ids: Vec<String> = results.iter().map(|r| r.id.clone()).collect();

    assert_eq!(ids, all);
}

#[test]
fn name_asc_returns_lexical_order() {
    let repository = repository();
    let index = RecipeIndex::build(repository.all_recipes()).unwrap();

    let filters = SearchFilters {
        sort_by: "name-asc".to_string(),
        ..Default::default()
    };
    let results = search_and_filter(&index, "", &filters).unwrap();
    let names: Vec<String> = results.iter().map(|r| r.name.to_lowercase()).collect();

    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn whiskey_category_selects_all_variants_and_nothing_else() {
    let repository = repository();
    let index = RecipeIndex::build(repository.all_recipes()).unwrap();

    let results = search_and_filter(&index, "", &whiskey_filter("name-asc")).unwrap();
    assert!(!results.is_empty());

    let variants = ["whiskey", "bourbon", "rye", "scotch", "rye whiskey"];
    for recipe in &results {
        let tokens: Vec<String> = recipe
            .spirit_tokens()
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        assert!(
            tokens.iter().any(|t| variants.contains(&t.as_str())),
            "{} should not pass the Whiskey facet",
            recipe.id
        );
    }
    assert!(results.iter().all(|r| r.id != "margarita"));
    assert!(results.iter().any(|r| r.id == "old-fashioned"));
    assert!(results.iter().any(|r| r.id == "manhattan"));
    assert!(results.iter().any(|r| r.id == "penicillin"));
}

#[test]
fn comma_separated_spirits_match_through_the_category_table() {
    let repository = repository();
    let boulevardier = Recipe {
        id: "boulevardier".to_string(),
        name: "Boulevardier".to_string(),
        base_spirit: "Bourbon, Angostura Bitters".to_string(),
        ..Default::default()
    };
    repository.add_recipe(boulevardier).unwrap();

    let index = RecipeIndex::build(repository.all_recipes()).unwrap();
    let results = search_and_filter(&index, "", &whiskey_filter("")).unwrap();
    assert!(results.iter().any(|r| r.id == "boulevardier"));
}

#[test]
fn fuzzy_query_survives_a_typo() {
    let repository = repository();
    let index = RecipeIndex::build(repository.all_recipes()).unwrap();

    let results = search_and_filter(&index, "whisky sour", &SearchFilters::empty()).unwrap();
    assert!(results.iter().any(|r| r.id == "whiskey-sour"));
}

#[test]
fn added_recipe_becomes_searchable_after_rebuild() {
    let repository = repository();
    let submission = r#"{
        "name": "Jungle Bird",
        "baseSpirit": "Dark Rum",
        "ingredients": [
            {"amount": 1.5, "unit": "oz", "name": "Dark Rum"},
            {"amount": 0.75, "unit": "oz", "name": "Campari"}
        ],
        "preparation": {"method": "Shaken"}
    }"#;

    let recipe = parse_submission(submission).unwrap();
    let saved = repository.add_recipe(recipe).unwrap();
    assert!(saved.id.starts_with("custom-"));

    let index = RecipeIndex::build(repository.all_recipes()).unwrap();
    let results = search_and_filter(&index, "jungle", &SearchFilters::empty()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, saved.id);

    // Delete, rebuild, gone.
    assert!(repository.delete_recipe(&saved.id).unwrap());
    assert!(!repository.delete_recipe(&saved.id).unwrap());

    let index = RecipeIndex::build(repository.all_recipes()).unwrap();
    let results = search_and_filter(&index, "jungle", &SearchFilters::empty()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn base_catalog_cannot_be_deleted() {
    let repository = repository();
    let before = repository.all_recipes().len();

    assert!(!repository.delete_recipe("old-fashioned").unwrap());
    assert_eq!(repository.all_recipes().len(), before);
    assert!(repository.find_by_id("old-fashioned").is_some());
}

#[test]
fn name_only_submission_is_rejected_with_three_errors() {
    match parse_submission(r#"{"name": "X"}"#) {
        Err(Error::Validation(errors)) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.iter().any(|e| e.contains("baseSpirit")));
            assert!(errors.iter().any(|e| e.contains("ingredients")));
            assert!(errors.iter().any(|e| e.contains("preparation")));
        }
        other => panic!("expected three validation errors, got {other:?}"),
    }
}

#[test]
fn filter_then_sort_composes_over_a_narrowed_search() {
    let repository = repository();
    let index = RecipeIndex::build(repository.all_recipes()).unwrap();

    // "lime" recalls recipes by ingredient; the facet keeps only tequila
    // drinks and sorting settles the final order.
    let filters = SearchFilters {
        spirits: vec!["Tequila".to_string()],
        sort_by: "name-asc".to_string(),
        ..Default::default()
    };
    let results = search_and_filter(&index, "lime", &filters).unwrap();
    assert!(results.iter().any(|r| r.id == "margarita"));
    assert!(results.iter().all(|r| {
        r.spirit_tokens()
            .iter()
            .any(|t| t.eq_ignore_ascii_case("tequila") || t.eq_ignore_ascii_case("mezcal"))
    }));
}
