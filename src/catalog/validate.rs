use serde_json::Value;

use crate::catalog::models::Recipe;
use crate::error::{Error, Result};

/// Outcome of the structural gate over a submitted recipe document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Shallow structural validation: presence and basic type of the four
/// required top-level fields. Nested shapes, step numbering, and enum
/// membership are not checked; this is a gate, not a schema.
pub fn validate_recipe(value: &Value) -> RecipeValidation {
    let Some(object) = value.as_object() else {
        return RecipeValidation {
            valid: false,
            errors: vec!["Invalid JSON structure".to_string()],
        };
    };

    let mut errors = Vec::new();

    match object.get("name") {
        Some(Value::String(s)) if !s.is_empty() => {}
        _ => errors.push("Missing or invalid 'name' field".to_string()),
    }
    match object.get("baseSpirit") {
        Some(Value::String(s)) if !s.is_empty() => {}
        _ => errors.push("Missing or invalid 'baseSpirit' field".to_string()),
    }
    match object.get("ingredients") {
        Some(Value::Array(_)) => {}
        _ => errors.push("Missing or invalid 'ingredients' array".to_string()),
    }
    match object.get("preparation") {
        Some(Value::Object(_)) => {}
        _ => errors.push("Missing or invalid 'preparation' object".to_string()),
    }

    RecipeValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Parse a raw submission. JSON syntax errors are reported as one generic
/// syntax error, distinct from the field-level list; field errors block
/// the save and carry the full list.
pub fn parse_submission(input: &str) -> Result<Recipe> {
    let value: Value = serde_json::from_str(input).map_err(|_| Error::InvalidJson)?;

    let validation = validate_recipe(&value);
    if !validation.valid {
        return Err(Error::Validation(validation.errors));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::Validation(vec![format!("Malformed recipe document: {e}")]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_only_submission_yields_three_field_errors() {
        let validation = validate_recipe(&json!({"name": "X"}));
        assert!(!validation.valid);
        assert_eq!(validation.errors.len(), 3);
        assert!(validation.errors.iter().all(|e| !e.contains("'name'")));
    }

    #[test]
    fn test_minimal_valid_submission_passes() {
        let validation = validate_recipe(&json!({
            "name": "Gimlet",
            "baseSpirit": "Gin",
            "ingredients": [],
            "preparation": {}
        }));
        assert!(validation.valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_non_object_payload_is_one_structure_error() {
        let validation = validate_recipe(&json!([1, 2, 3]));
        assert!(!validation.valid);
        assert_eq!(validation.errors, vec!["Invalid JSON structure"]);
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let validation = validate_recipe(&json!({
            "name": 42,
            "baseSpirit": "",
            "ingredients": {},
            "preparation": []
        }));
        assert!(!validation.valid);
        assert_eq!(validation.errors.len(), 4);
    }

    #[test]
    fn test_syntax_error_is_generic_and_blocking() {
        let result = parse_submission("{\"name\": ");
        assert!(matches!(result, Err(Error::InvalidJson)));
    }

    #[test]
    fn test_field_errors_surface_as_a_list() {
        let result = parse_submission(r#"{"name": "X"}"#);
        match result {
            Err(Error::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_submission_parses_into_recipe() {
        let recipe = parse_submission(
            r#"{
                "name": "Gimlet",
                "baseSpirit": "Gin",
                "ingredients": [{"amount": 2, "unit": "oz", "name": "Gin"}],
                "preparation": {"method": "Shaken"}
            }"#,
        )
        .unwrap();
        assert_eq!(recipe.name, "Gimlet");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.preparation.method, "Shaken");
    }
}
