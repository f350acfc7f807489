//! Open dict validation
//!
//! [`Dict`] validates mappings with arbitrary keys: every key runs through a
//! key validator (plain string check unless overridden) and every value
//! through one value validator. Compare with `ObjectSchema`, which validates
//! a closed set of named fields.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::foundation::{expect_object, KeyedErrors, SchemaError, Validate, ValidatorConfig};

use super::string::Str;

// ============================================================================
// Dict
// ============================================================================

/// Validates that an item is a dict whose keys and values each satisfy a
/// validator.
///
/// Every entry is validated even after the first failure; key failures are
/// tagged `invalid_dict_key` and value failures `invalid_dict_value`, keyed
/// by the offending key in the compound error.
///
/// ```rust,ignore
/// let scores = dict(integer());
/// assert!(scores.validate(&json!({"alice": 3, "bob": 5})).is_ok());
/// // Compound "Error validating dict." with a child under "bob".
/// assert!(scores.validate(&json!({"alice": 3, "bob": "x"})).is_err());
/// ```
///
/// The key validator always receives keys as strings (JSON object keys are
/// strings); a custom key validator constrains their shape, e.g.
/// `regex("[a-z]+")?`.
#[derive(Debug)]
pub struct Dict {
    config: ValidatorConfig,
    validator: Arc<dyn Validate>,
    key_validator: Arc<dyn Validate>,
}

impl Dict {
    #[must_use]
    pub fn new(validator: impl Validate + 'static) -> Self {
        Self::from_shared(Arc::new(validator))
    }

    #[must_use]
    pub fn from_shared(validator: Arc<dyn Validate>) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_dict"),
            validator,
            key_validator: Arc::new(Str::new()),
        }
    }

    /// Replaces the key validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key_validator(mut self, key_validator: impl Validate + 'static) -> Self {
        self.key_validator = Arc::new(key_validator);
        self
    }

    /// The value validator.
    #[must_use]
    pub fn value_validator(&self) -> &Arc<dyn Validate> {
        &self.validator
    }
}

impl Validate for Dict {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let entries = expect_object(item)?;

        let mut validated = serde_json::Map::with_capacity(entries.len());
        let mut errors = KeyedErrors::new();
        for (key, value) in entries {
            match self.key_validator.validate(&Value::String(key.clone())) {
                Ok(_) => {}
                Err(SchemaError::Invalid(error)) => {
                    errors.insert(key.clone(), error.with_reason_code("invalid_dict_key"));
                    continue;
                }
                Err(other) => return Err(other),
            }
            match self.validator.validate(value) {
                Ok(value) => {
                    validated.insert(key.clone(), value);
                }
                Err(SchemaError::Invalid(error)) => {
                    errors.insert(key.clone(), error.with_reason_code("invalid_dict_value"));
                }
                Err(other) => return Err(other),
            }
        }

        errors
            .finish(
                Value::Object(validated),
                "Error validating dict.",
                self.config.reason_code.clone(),
            )
            .map_err(SchemaError::from)
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!("dict"));
            map.insert("key".into(), self.key_validator.to_json());
            map.insert("value".into(), self.validator.to_json());
        }
        description
    }
}

/// Creates a [`Dict`] validator over the given value validator.
#[must_use]
pub fn dict(validator: impl Validate + 'static) -> Dict {
    Dict::new(validator)
}

/// Creates a [`Dict`] validator with both a key and a value validator.
#[must_use]
pub fn dict_with_keys(
    key_validator: impl Validate + 'static,
    validator: impl Validate + 'static,
) -> Dict {
    Dict::new(validator).with_key_validator(key_validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::numeric::integer;
    use crate::validators::string::regex;

    #[test]
    fn accepts_valid_entries() {
        let validator = dict(integer());
        assert_eq!(
            validator.validate(&json!({"alice": 3, "bob": 5})).unwrap(),
            json!({"alice": 3, "bob": 5})
        );
        assert_eq!(validator.validate(&json!({})).unwrap(), json!({}));
    }

    #[test]
    fn rejects_non_dicts_as_type_errors() {
        let validator = dict(integer());
        let error = validator
            .validate(&json!([1, 2]))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "Expected dict got list instead.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_type"));
    }

    #[test]
    fn collects_value_failures_per_key() {
        let validator = dict(integer());
        let error = validator
            .validate(&json!({"alice": "x", "bob": 5, "carol": 1.5}))
            .unwrap_err()
            .into_validation()
            .unwrap();
        assert_eq!(error.message, "Error validating dict.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_dict"));

        let children = error.errors.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        let alice = children.field("alice").unwrap();
        assert_eq!(alice.message, "Expected int got str instead.");
        assert_eq!(alice.reason_code.as_deref(), Some("invalid_dict_value"));
        assert!(children.field("bob").is_none());
        assert!(children.field("carol").is_some());
    }

    #[test]
    fn key_validator_constrains_key_shape() {
        let validator = dict(integer()).with_key_validator(regex("[a-z]+$").unwrap());
        let error = validator
            .validate(&json!({"ok": 1, "NOT OK": 2}))
            .unwrap_err()
            .into_validation()
            .unwrap();
        let child = error.errors.as_ref().unwrap().field("NOT OK").unwrap();
        assert_eq!(child.reason_code.as_deref(), Some("invalid_dict_key"));
    }
}
