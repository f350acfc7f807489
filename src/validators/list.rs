//! Homogeneous list validation
//!
//! [`List`] runs one element validator against every element and collects
//! every failure into a single compound error, each child tagged with its
//! 0-based `index`.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::foundation::{expect_array, IndexedErrors, SchemaError, Validate, ValidatorConfig};

// ============================================================================
// List
// ============================================================================

/// Validates that an item is a list whose elements all satisfy one validator.
///
/// Every element is validated even after the first failure, so the compound
/// error reports all invalid elements at once.
///
/// ```rust,ignore
/// let numbers = list(number());
/// assert!(numbers.validate(&json!([1, 2.5, 3])).is_ok());
/// // Compound "Error validating list." with children at indices 0 and 2.
/// assert!(numbers.validate(&json!(["a", 2, "c"])).is_err());
/// ```
#[derive(Debug)]
pub struct List {
    config: ValidatorConfig,
    validator: Arc<dyn Validate>,
}

impl List {
    #[must_use]
    pub fn new(validator: impl Validate + 'static) -> Self {
        Self::from_shared(Arc::new(validator))
    }

    #[must_use]
    pub fn from_shared(validator: Arc<dyn Validate>) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_list"),
            validator,
        }
    }

    /// The element validator.
    #[must_use]
    pub fn element_validator(&self) -> &Arc<dyn Validate> {
        &self.validator
    }
}

impl Validate for List {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let elements = expect_array(item)?;

        let mut validated = Vec::with_capacity(elements.len());
        let mut errors = IndexedErrors::new();
        for (index, element) in elements.iter().enumerate() {
            match self.validator.validate(element) {
                Ok(value) => validated.push(value),
                Err(SchemaError::Invalid(error)) => errors.push(
                    error
                        .with_reason_code("invalid_list_item")
                        .with_extra("index", index),
                ),
                Err(other) => return Err(other),
            }
        }

        errors
            .finish(
                Value::Array(validated),
                "Error validating list.",
                self.config.reason_code.clone(),
            )
            .map_err(SchemaError::from)
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!("list"));
            map.insert("item".into(), self.validator.to_json());
        }
        description
    }
}

/// Creates a [`List`] validator over the given element validator.
#[must_use]
pub fn list(validator: impl Validate + 'static) -> List {
    List::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::numeric::number;
    use crate::validators::string::string;

    #[test]
    fn accepts_lists_of_valid_elements() {
        let validator = list(number());
        assert_eq!(
            validator.validate(&json!([1, 2.5, 3])).unwrap(),
            json!([1, 2.5, 3])
        );
        assert_eq!(validator.validate(&json!([])).unwrap(), json!([]));
    }

    #[test]
    fn rejects_non_lists_as_type_errors() {
        let validator = list(number());
        let error = validator
            .validate(&json!("foo"))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "Expected list got str instead.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_type"));
    }

    #[test]
    fn collects_every_invalid_element() {
        let validator = list(number());
        let error = validator
            .validate(&json!(["a", 2, "c"]))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "Error validating list.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_list"));

        let children = error.errors.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        let first = children.item(0).unwrap();
        assert_eq!(first.message, "Expected number got str instead.");
        assert_eq!(first.reason_code.as_deref(), Some("invalid_list_item"));
        assert_eq!(first.extras.get("index"), Some(&json!(0)));
        assert_eq!(children.item(1).unwrap().extras.get("index"), Some(&json!(2)));
    }

    #[test]
    fn null_elements_honor_element_nullability() {
        let validator = list(string().nullable());
        assert_eq!(
            validator.validate(&json!(["a", null])).unwrap(),
            json!(["a", null])
        );

        let validator = list(string());
        let error = validator
            .validate(&json!([null]))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(
            error.errors.as_ref().unwrap().item(0).unwrap().message,
            "Cannot be null."
        );
    }
}
