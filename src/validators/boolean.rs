//! Boolean validator

use serde_json::Value;

use crate::foundation::{JsonKind, SchemaError, Validate, ValidatorConfig};

use super::ensure_type::EnsureType;

/// Validates that an item is a boolean.
///
/// ```rust,ignore
/// assert!(boolean().validate(&json!(true)).is_ok());
/// // "Expected bool got str instead."
/// assert!(boolean().validate(&json!("5")).is_err());
/// ```
#[derive(Debug)]
pub struct Boolean {
    inner: EnsureType,
}

impl Boolean {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EnsureType::kind(JsonKind::Boolean),
        }
    }
}

impl Default for Boolean {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Boolean {
    fn config(&self) -> &ValidatorConfig {
        self.inner.config()
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        self.inner.config_mut()
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        self.inner.check(item)
    }

    fn to_json(&self) -> Value {
        self.inner.to_json()
    }
}

/// Creates a [`Boolean`] validator.
#[must_use]
pub fn boolean() -> Boolean {
    Boolean::new()
}
