//! Cross-cutting validator behavior: null policy, reason-code overrides,
//! exhaustive (non-short-circuiting) aggregation, and error wire shapes.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use shapecheck::prelude::*;

fn invalid(error: SchemaError) -> ValidationError {
    error.into_validation().expect("a validation error")
}

// ============================================================================
// NULL POLICY
// ============================================================================

#[rstest]
#[case::string(&string())]
#[case::integer(&integer())]
#[case::number(&number())]
#[case::boolean(&boolean())]
#[case::datetime(&datetime())]
#[case::list(&list(string()))]
#[case::dict(&dict(string()))]
fn null_is_rejected_by_default(#[case] validator: &dyn Validate) {
    let error = invalid(validator.validate(&Value::Null).unwrap_err());
    assert_eq!(error.message, "Cannot be null.");
}

#[test]
fn nullable_validators_pass_null_through() {
    assert_eq!(string().nullable().validate(&Value::Null).unwrap(), Value::Null);
    assert_eq!(
        list(string()).nullable().validate(&Value::Null).unwrap(),
        Value::Null
    );
}

#[test]
fn null_error_carries_the_validator_reason_code() {
    let error = invalid(string().validate(&Value::Null).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some("invalid_str"));
}

// ============================================================================
// REASON CODES
// ============================================================================

#[rstest]
#[case::string(&string(), json!(42), "invalid_str")]
#[case::integer(&integer(), json!("x"), "invalid_type")]
#[case::number(&number(), json!("x"), "invalid_number")]
#[case::datetime(&datetime(), json!("nope"), "invalid_datetime")]
#[case::one_of(&one_of([json!(1)]), json!(2), "not_one_of")]
#[case::subset(&subset_of([json!(1)]), json!([2]), "not_a_sub_set_of")]
fn default_reason_codes(
    #[case] validator: &dyn Validate,
    #[case] input: Value,
    #[case] expected: &str,
) {
    let error = invalid(validator.validate(&input).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some(expected));
}

#[test]
fn reason_code_override_applies_to_every_error_path() {
    let validator = string().with_reason_code("bad_name");

    let error = invalid(validator.validate(&json!(42)).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some("bad_name"));

    let error = invalid(validator.validate(&Value::Null).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some("bad_name"));
}

#[test]
fn container_type_mismatch_is_always_invalid_type() {
    // The container's own reason code names its compound error, not the
    // "not even a container" case.
    let error = invalid(list(string()).validate(&json!(1)).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some("invalid_type"));

    let error = invalid(dict(string()).validate(&json!(1)).unwrap_err());
    assert_eq!(error.reason_code.as_deref(), Some("invalid_type"));
}

// ============================================================================
// EXHAUSTIVE AGGREGATION
// ============================================================================

#[test]
fn list_reports_one_error_per_invalid_element() {
    let validator = list(integer());
    let input = json!(["a", 1, "b", 2, "c", 3.5]);

    let error = invalid(validator.validate(&input).unwrap_err());
    let children = error.errors.as_ref().unwrap();
    assert_eq!(children.len(), 4);
    for (position, index) in [0usize, 2, 4, 5].iter().enumerate() {
        assert_eq!(
            children.item(position).unwrap().extras.get("index"),
            Some(&json!(index))
        );
    }
}

#[test]
fn dict_reports_one_error_per_invalid_entry() {
    let validator = dict(integer());
    let error = invalid(
        validator
            .validate(&json!({"a": "x", "b": 1, "c": "y"}))
            .unwrap_err(),
    );
    let children = error.errors.as_ref().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(
        children.field("a").unwrap().reason_code.as_deref(),
        Some("invalid_dict_value")
    );
}

#[test]
fn total_error_count_walks_the_whole_tree() {
    let schema = ObjectSchema::builder("Person")
        .field("name", string())
        .field("scores", list(integer()))
        .build();

    let error = invalid(
        schema
            .validate(&json!({"name": 1, "scores": ["a", "b"]}))
            .unwrap_err(),
    );
    // Root + name + scores compound + two list items.
    assert_eq!(error.total_error_count(), 5);
    assert!(error.is_compound());
}

// ============================================================================
// STRING AND DATETIME DETAIL
// ============================================================================

#[test]
fn string_length_bounds() {
    let validator = string().min_len(2).max_len(4);
    assert_eq!(validator.validate(&json!("abc")).unwrap(), json!("abc"));

    let error = invalid(validator.validate(&json!("a")).unwrap_err());
    assert_eq!(error.message, "String must be at least length 2.");

    let error = invalid(validator.validate(&json!("abcde")).unwrap_err());
    assert_eq!(error.message, "String exceeds max length of 4.");
}

#[test]
fn regex_must_match_from_the_start() {
    let validator = regex("ba+r").unwrap();
    assert_eq!(validator.validate(&json!("baar")).unwrap(), json!("baar"));

    let error = invalid(validator.validate(&json!("foo baar")).unwrap_err());
    assert_eq!(error.message, "String does not match pattern 'ba+r'.");
}

#[test]
fn invalid_pattern_is_a_configuration_error() {
    assert!(matches!(regex("(unclosed"), Err(SchemaError::InvalidPattern(_))));
}

#[test]
fn datetime_normalizes_to_the_canonical_rendering() {
    let validator = datetime_with_format("%Y-%m-%d");
    assert_eq!(
        validator.validate(&json!("2010-01-02")).unwrap(),
        json!("2010-01-02 00:00:00")
    );
}

// ============================================================================
// TYPE CHECKS
// ============================================================================

#[rstest]
#[case::int_not_float(&integer(), json!(42.0), "Expected int got float instead.")]
#[case::float_not_int(&float(), json!(42), "Expected float got int instead.")]
#[case::bool_not_int(&boolean(), json!(1), "Expected bool got int instead.")]
#[case::number_not_str(&number(), json!("1"), "Expected number got str instead.")]
fn kind_mismatch_messages(
    #[case] validator: &dyn Validate,
    #[case] input: Value,
    #[case] expected: &str,
) {
    let error = invalid(validator.validate(&input).unwrap_err());
    assert_eq!(error.message, expected);
}

#[test]
fn unknown_type_is_distinct_from_validation_failure() {
    let registry = std::sync::Arc::new(TypeRegistry::new());
    let reference = ensure_type("Ghost", registry);

    let error = reference.validate(&json!({})).unwrap_err();
    assert!(error.as_validation().is_none());
    assert!(matches!(error, SchemaError::UnknownType { .. }));
}

// ============================================================================
// VALUE RENDERING IN MESSAGES
// ============================================================================

#[test]
fn one_of_renders_strings_quoted_and_numbers_bare() {
    let validator = one_of([json!(1), json!("2"), json!(3)]);
    let error = invalid(validator.validate(&json!("1")).unwrap_err());
    assert_eq!(
        error.message,
        "Expected one of (1, '2', 3) but got '1' instead."
    );
}

#[test]
fn subset_message_has_no_trailing_period() {
    let validator = subset_of([json!(1), json!(2), json!(3)]);
    let error = invalid(validator.validate(&json!([2, 5])).unwrap_err());
    assert_eq!(error.message, "[2, 5] is not a subset of [1, 2, 3]");
}

// ============================================================================
// LEAF ERROR WIRE SHAPE
// ============================================================================

#[test]
fn leaf_error_serializes_reason_and_code() {
    let error = invalid(string().validate(&json!(5)).unwrap_err());
    assert_eq!(
        error.to_json(),
        json!({
            "reason": "Expected str got int instead.",
            "reason_code": "invalid_str",
        })
    );
}

#[test]
fn list_item_extras_appear_beside_the_reason() {
    let error = invalid(list(integer()).validate(&json!(["x"])).unwrap_err());
    let child = error.errors.as_ref().unwrap().item(0).unwrap();
    assert_eq!(
        child.to_json(),
        json!({
            "reason": "Expected int got str instead.",
            "index": 0,
            "reason_code": "invalid_list_item",
        })
    );
}
