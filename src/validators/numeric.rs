//! Numeric validators
//!
//! [`Integer`], [`Float`] and [`Number`] are thin specializations of
//! [`EnsureType`]: integral numbers, fractional numbers, and either.

use serde_json::Value;

use crate::foundation::{JsonKind, SchemaError, Validate, ValidateExt, ValidatorConfig};

use super::ensure_type::EnsureType;

// ============================================================================
// INTEGER
// ============================================================================

/// Validates that an item is an integer.
#[derive(Debug)]
pub struct Integer {
    inner: EnsureType,
}

impl Integer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EnsureType::kind(JsonKind::Integer),
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Integer {
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

// ============================================================================
// FLOAT
// ============================================================================

/// Validates that an item is a float. `42` is an int, not a float.
#[derive(Debug)]
pub struct Float {
    inner: EnsureType,
}

impl Float {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EnsureType::kind(JsonKind::Float),
        }
    }
}

impl Default for Float {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Float {
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

// ============================================================================
// NUMBER
// ============================================================================

/// Validates that an item is a number — integer or float.
///
/// ```rust,ignore
/// assert!(number().validate(&json!(1)).is_ok());
/// assert!(number().validate(&json!(1.1)).is_ok());
/// // "Expected number got str instead."
/// assert!(number().validate(&json!("foo")).is_err());
/// ```
#[derive(Debug)]
pub struct Number {
    inner: EnsureType,
}

impl Number {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EnsureType::any_of(vec![JsonKind::Integer, JsonKind::Float])
                .named("number")
                .with_reason_code("invalid_number"),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Number {
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

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates an [`Integer`] validator.
#[must_use]
pub fn integer() -> Integer {
    Integer::new()
}

/// Creates a [`Float`] validator.
#[must_use]
pub fn float() -> Float {
    Float::new()
}

/// Creates a [`Number`] validator.
#[must_use]
pub fn number() -> Number {
    Number::new()
}

// ============================================================================
// TESTS
// ============================================================================
