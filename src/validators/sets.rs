//! Membership validators
//!
//! [`OneOf`] checks a value against a fixed set of allowed values and
//! [`SubSetOf`] checks that every element of a list is drawn from a
//! superset. Both compare by structural equality, so `1` and `1.0` are
//! distinct values.

use serde_json::{json, Value};

use crate::foundation::{
    display_allowed, display_list, display_value, expect_array, SchemaError, Validate,
    ValidatorConfig,
};

// ============================================================================
// OneOf
// ============================================================================

/// Validates that an item is one of a fixed set of allowed values.
///
/// ```rust,ignore
/// let color = one_of([json!("red"), json!("green"), json!("blue")]);
/// assert!(color.validate(&json!("red")).is_ok());
/// // "Expected one of ('red', 'green', 'blue') but got 'pink' instead."
/// assert!(color.validate(&json!("pink")).is_err());
/// ```
#[derive(Debug)]
pub struct OneOf {
    config: ValidatorConfig,
    allowed: Vec<Value>,
}

impl OneOf {
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = Value>) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("not_one_of"),
            allowed: allowed.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validate for OneOf {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        if self.allowed.contains(item) {
            return Ok(item.clone());
        }
        Err(self
            .config
            .error(format!(
                "Expected one of {} but got {} instead.",
                display_allowed(&self.allowed),
                display_value(item)
            ))
            .into())
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!("one_of"));
            map.insert("allowed".into(), Value::Array(self.allowed.clone()));
        }
        description
    }
}

// ============================================================================
// SubSetOf
// ============================================================================

/// Validates that an item is a list whose elements are all members of a
/// configured superset.
///
/// ```rust,ignore
/// let tags = subset_of([json!(1), json!(2), json!(3)]);
/// assert!(tags.validate(&json!([1, 3])).is_ok());
/// // "[2, 5] is not a subset of [1, 2, 3]"
/// assert!(tags.validate(&json!([2, 5])).is_err());
/// ```
#[derive(Debug)]
pub struct SubSetOf {
    config: ValidatorConfig,
    superset: Vec<Value>,
}

impl SubSetOf {
    #[must_use]
    pub fn new(superset: impl IntoIterator<Item = Value>) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("not_a_sub_set_of"),
            superset: superset.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn superset(&self) -> &[Value] {
        &self.superset
    }
}

impl Validate for SubSetOf {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let elements = expect_array(item)?;
        if elements
            .iter()
            .all(|element| self.superset.contains(element))
        {
            return Ok(Value::Array(elements.to_vec()));
        }
        Err(self
            .config
            .error(format!(
                "{} is not a subset of {}",
                display_list(elements),
                display_list(&self.superset)
            ))
            .into())
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!("sub_set_of"));
            map.insert("superset".into(), Value::Array(self.superset.clone()));
        }
        description
    }
}

/// Creates a [`OneOf`] validator over the given allowed values.
#[must_use]
pub fn one_of(allowed: impl IntoIterator<Item = Value>) -> OneOf {
    OneOf::new(allowed)
}

/// Creates a [`SubSetOf`] validator over the given superset.
#[must_use]
pub fn subset_of(superset: impl IntoIterator<Item = Value>) -> SubSetOf {
    SubSetOf::new(superset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_accepts_members() {
        let validator = one_of([json!(1), json!("2"), json!(3)]);
        assert_eq!(validator.validate(&json!(1)).unwrap(), json!(1));
        assert_eq!(validator.validate(&json!("2")).unwrap(), json!("2"));
    }

    #[test]
    fn one_of_rejects_non_members_with_rendered_set() {
        let validator = one_of([json!(1), json!("2"), json!(3)]);
        let error = validator
            .validate(&json!("1"))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(
            error.message,
            "Expected one of (1, '2', 3) but got '1' instead."
        );
        assert_eq!(error.reason_code.as_deref(), Some("not_one_of"));
    }

    #[test]
    fn one_of_compares_structurally() {
        // 1 and 1.0 are different JSON values.
        let validator = one_of([json!(1)]);
        assert!(validator.validate(&json!(1.0)).is_err());
    }

    #[test]
    fn subset_accepts_contained_lists() {
        let validator = subset_of([json!(1), json!(2), json!(3)]);
        assert_eq!(validator.validate(&json!([1, 3])).unwrap(), json!([1, 3]));
        assert_eq!(validator.validate(&json!([])).unwrap(), json!([]));
    }

    #[test]
    fn subset_rejects_stray_elements() {
        let validator = subset_of([json!(1), json!(2), json!(3)]);
        let error = validator
            .validate(&json!([2, 5]))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "[2, 5] is not a subset of [1, 2, 3]");
        assert_eq!(error.reason_code.as_deref(), Some("not_a_sub_set_of"));
    }

    #[test]
    fn subset_rejects_non_lists_as_type_errors() {
        let validator = subset_of([json!(1)]);
        let error = validator
            .validate(&json!(1))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "Expected list got int instead.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_type"));
    }
}
