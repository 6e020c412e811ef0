//! Field-level checks for pet payloads.
//!
//! Validation runs on the raw JSON object so that every problem in a request
//! is reported together, in a fixed order:
//!
//! 1. unexpected keys, joined into one message
//! 2. `name`, 3. `species`, 4. `breed`, 5. `age`, 6. `owner`

use serde_json::{Map, Value};

use crate::models::ALLOWED_FIELDS;

pub const NAME_INVALID: &str = r#"Field "name" must be a non-empty string."#;
pub const SPECIES_INVALID: &str = r#"Field "species" must be a non-empty string."#;
pub const BREED_INVALID: &str = r#"Field "breed" must be a non-empty string when provided."#;
pub const AGE_INVALID: &str =
    r#"Field "age" must be a number greater than or equal to 0 when provided."#;
pub const OWNER_INVALID: &str =
    r#"Field "owner" must be an object with optional "name" and "contact" strings."#;

const OWNER_FIELDS: [&str; 2] = ["name", "contact"];

/// Checks a pet payload and returns every violation found.
///
/// With `partial` set, `name` and `species` are only checked when present.
/// A key that is present with a `null` value counts as present, except for
/// `owner` (and the owner's own fields) where `null` means "no value".
///
/// An empty vector means the payload is valid.
pub fn validate_pet_payload(payload: &Map<String, Value>, partial: bool) -> Vec<String> {
    let mut errors = Vec::new();

    let unexpected: Vec<&str> = payload
        .keys()
        .map(String::as_str)
        .filter(|key| !ALLOWED_FIELDS.contains(key))
        .collect();
    if !unexpected.is_empty() {
        errors.push(format!("Unexpected fields: {}", unexpected.join(", ")));
    }

    for (field, message) in [("name", NAME_INVALID), ("species", SPECIES_INVALID)] {
        let value = payload.get(field);
        if (!partial || value.is_some()) && !value.is_some_and(is_non_empty_string) {
            errors.push(message.to_string());
        }
    }

    if payload.get("breed").is_some_and(|v| !is_non_empty_string(v)) {
        errors.push(BREED_INVALID.to_string());
    }

    if payload.get("age").is_some_and(|v| !is_valid_age(v)) {
        errors.push(AGE_INVALID.to_string());
    }

    if payload.get("owner").is_some_and(|v| !is_valid_owner(v)) {
        errors.push(OWNER_INVALID.to_string());
    }

    errors
}

pub(crate) fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

fn is_valid_age(value: &Value) -> bool {
    value
        .as_f64()
        .is_some_and(|age| age.is_finite() && age >= 0.0)
}

fn is_valid_owner(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(owner) => owner.iter().all(|(key, field)| {
            OWNER_FIELDS.contains(&key.as_str()) && (field.is_null() || is_non_empty_string(field))
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn validate(value: Value, partial: bool) -> Vec<String> {
        validate_pet_payload(&object(value), partial)
    }

    #[test]
    fn test_valid_full_payload() {
        let errors = validate(
            json!({
                "name": "Rex",
                "species": "dog",
                "breed": "Labrador",
                "age": 3,
                "owner": { "name": "Ana", "contact": "ana@example.com" }
            }),
            false,
        );
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = validate(json!({}), false);
        assert_eq!(errors, vec![NAME_INVALID, SPECIES_INVALID]);
    }

    #[test]
    fn test_blank_strings_are_rejected() {
        let errors = validate(json!({ "name": "   ", "species": "", "breed": " " }), false);
        assert_eq!(errors, vec![NAME_INVALID, SPECIES_INVALID, BREED_INVALID]);
    }

    #[test]
    fn test_unexpected_fields_joined_in_payload_order() {
        let errors = validate(
            json!({ "name": "Rex", "weight": 10, "species": "dog", "color": "brown" }),
            false,
        );
        assert_eq!(errors, vec!["Unexpected fields: weight, color".to_string()]);
    }

    #[test]
    fn test_unexpected_fields_reported_with_other_errors() {
        let errors = validate(json!({ "id": "abc", "age": -1 }), false);
        assert_eq!(
            errors,
            vec![
                "Unexpected fields: id".to_string(),
                NAME_INVALID.to_string(),
                SPECIES_INVALID.to_string(),
                AGE_INVALID.to_string(),
            ]
        );
    }

    #[test]
    fn test_partial_mode_skips_absent_required_fields() {
        assert!(validate(json!({ "age": 4 }), true).is_empty());
        assert_eq!(validate(json!({ "name": "" }), true), vec![NAME_INVALID]);
    }

    #[test]
    fn test_null_counts_as_present() {
        let errors = validate(
            json!({ "name": null, "species": null, "breed": null, "age": null }),
            true,
        );
        assert_eq!(
            errors,
            vec![NAME_INVALID, SPECIES_INVALID, BREED_INVALID, AGE_INVALID]
        );
    }

    #[test]
    fn test_age_rules() {
        let base = |age: Value| validate(json!({ "name": "Rex", "species": "dog", "age": age }), false);

        assert!(base(json!(0)).is_empty());
        assert!(base(json!(2.5)).is_empty());
        assert_eq!(base(json!(-0.5)), vec![AGE_INVALID]);
        assert_eq!(base(json!("3")), vec![AGE_INVALID]);
        assert_eq!(base(json!(true)), vec![AGE_INVALID]);
    }

    #[test]
    fn test_owner_rules() {
        let base = |owner: Value| {
            validate(json!({ "name": "Rex", "species": "dog", "owner": owner }), false)
        };

        assert!(base(json!(null)).is_empty());
        assert!(base(json!({})).is_empty());
        assert!(base(json!({ "name": "Ana" })).is_empty());
        assert!(base(json!({ "name": null, "contact": "555-0100" })).is_empty());

        assert_eq!(base(json!({ "name": "" })), vec![OWNER_INVALID]);
        assert_eq!(base(json!({ "phone": "555" })), vec![OWNER_INVALID]);
        assert_eq!(base(json!({ "contact": 5 })), vec![OWNER_INVALID]);
        assert_eq!(base(json!(["Ana"])), vec![OWNER_INVALID]);
        assert_eq!(base(json!("Ana")), vec![OWNER_INVALID]);
    }

    #[test]
    fn test_error_naming_each_required_field() {
        for (payload, field) in [
            (json!({ "species": "cat" }), "\"name\""),
            (json!({ "name": "Tom" }), "\"species\""),
        ] {
            let errors = validate(payload, false);
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains(field));
        }
    }
}
