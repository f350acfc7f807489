//! Error types for validation failures
//!
//! This module provides a structured error type that supports nested errors
//! (keyed by field name or list index), machine-readable reason codes, and
//! free-form extra metadata, plus the transient collectors composite
//! validators use to aggregate child failures.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages and reason codes.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Leaf errors carry only a message (and usually a reason code). Compound
/// errors additionally wrap the child errors produced by a composite
/// validator, keyed by field name (objects, dicts) or held in sequence
/// (lists).
///
/// # Examples
///
/// ## Simple error
///
/// ```rust,ignore
/// let error = ValidationError::new("Cannot be null.");
/// ```
///
/// ## Error with a reason code and extras
///
/// ```rust,ignore
/// let error = ValidationError::new("Expected number got str instead.")
///     .with_reason_code("invalid_list_item")
///     .with_extra("index", 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Human-readable description of what was not valid.
    #[serde(rename = "reason")]
    pub message: Cow<'static, str>,

    /// Machine-readable failure classification, e.g. `"invalid_str"`,
    /// `"required_but_missing"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<Cow<'static, str>>,

    /// Child errors for compound failures. `None` for leaf errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<NestedErrors>,

    /// Free-form metadata, e.g. `{"index": 1}` on list-item errors.
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

/// Child errors of a compound [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedErrors {
    /// Errors keyed by field name or dict key.
    Fields(BTreeMap<String, ValidationError>),
    /// Errors in list order; each carries its 0-based `index` extra.
    Items(Vec<ValidationError>),
}

impl NestedErrors {
    /// Number of direct child errors.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            NestedErrors::Fields(map) => map.len(),
            NestedErrors::Items(items) => items.len(),
        }
    }

    /// Returns true if there are no child errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child error for a field name, if this is a keyed compound.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ValidationError> {
        match self {
            NestedErrors::Fields(map) => map.get(name),
            NestedErrors::Items(_) => None,
        }
    }

    /// Child error at a sequence position, if this is an indexed compound.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ValidationError> {
        match self {
            NestedErrors::Items(items) => items.get(index),
            NestedErrors::Fields(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            NestedErrors::Fields(map) => Value::Object(
                map.iter()
                    .map(|(k, e)| (k.clone(), e.to_json()))
                    .collect(),
            ),
            NestedErrors::Items(items) => {
                Value::Array(items.iter().map(ValidationError::to_json).collect())
            }
        }
    }
}

impl ValidationError {
    /// Creates a new leaf error.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            reason_code: None,
            errors: None,
            extras: BTreeMap::new(),
        }
    }

    /// Sets (or replaces) the reason code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reason_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.reason_code = Some(code.into());
        self
    }

    /// Adds one extra metadata entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Attaches field-keyed child errors, making this a compound error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_errors(mut self, errors: BTreeMap<String, ValidationError>) -> Self {
        self.errors = Some(NestedErrors::Fields(errors));
        self
    }

    /// Attaches index-ordered child errors, making this a compound error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_item_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = Some(NestedErrors::Items(errors));
        self
    }

    /// Returns true if this error wraps child errors.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Total error count, this error included, walked recursively.
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        let children = match &self.errors {
            Some(NestedErrors::Fields(map)) => {
                map.values().map(ValidationError::total_error_count).sum()
            }
            Some(NestedErrors::Items(items)) => {
                items.iter().map(ValidationError::total_error_count).sum()
            }
            None => 0,
        };
        1 + children
    }

    /// Converts the error into its wire shape:
    /// `{"reason": ..., "reason_code": ..?, "errors": ..?, ..extras}`.
    ///
    /// The `Serialize` impl produces the same shape; this is the infallible
    /// in-process form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("reason".into(), Value::String(self.message.to_string()));
        for (key, value) in &self.extras {
            obj.insert(key.clone(), value.clone());
        }
        if let Some(code) = &self.reason_code {
            obj.insert("reason_code".into(), Value::String(code.to_string()));
        }
        if let Some(errors) = &self.errors {
            obj.insert("errors".into(), errors.to_json());
        }
        Value::Object(obj)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        match &self.errors {
            Some(NestedErrors::Fields(map)) => {
                for (key, error) in map {
                    write!(f, "\n  {key}: {error}")?;
                }
            }
            Some(NestedErrors::Items(items)) => {
                for (i, error) in items.iter().enumerate() {
                    write!(f, "\n  {i}: {error}")?;
                }
            }
            None => {}
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// SCHEMA ERROR
// ============================================================================

/// Top-level error returned from [`validate`](crate::foundation::Validate::validate).
///
/// Separates "this input is invalid" ([`SchemaError::Invalid`]) from "your
/// schema is broken" — the configuration errors are never collected into
/// compound validation errors and always propagate immediately.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A forward-referenced type name was never registered.
    #[error("Cannot find type {name}.")]
    UnknownType {
        /// The name that failed to resolve.
        name: String,
    },

    /// A `Regex` validator was built from an invalid pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl SchemaError {
    /// Unwraps the validation error, if this is a data failure.
    #[must_use]
    pub fn into_validation(self) -> Option<ValidationError> {
        match self {
            SchemaError::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the validation error, if this is a data failure.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            SchemaError::Invalid(error) => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// ERROR COLLECTORS
// ============================================================================

/// Accumulates field-keyed child errors during one composite validation call.
///
/// Used by `Dict` and `ObjectSchema`. If any error was collected,
/// [`finish`](KeyedErrors::finish) raises a single compound error wrapping
/// all of them; otherwise it returns the validated value. Never retained
/// across calls.
#[derive(Debug, Default)]
pub struct KeyedErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl KeyedErrors {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a child error under a field name or dict key.
    pub fn insert(&mut self, key: impl Into<String>, error: ValidationError) {
        self.errors.insert(key.into(), error);
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `ok` when empty, otherwise one compound error wrapping every
    /// collected child.
    pub fn finish(
        self,
        ok: Value,
        message: impl Into<Cow<'static, str>>,
        reason_code: Option<Cow<'static, str>>,
    ) -> Result<Value, ValidationError> {
        if self.errors.is_empty() {
            return Ok(ok);
        }
        let mut error = ValidationError::new(message).with_field_errors(self.errors);
        error.reason_code = reason_code;
        Err(error)
    }
}

/// Accumulates index-ordered child errors during one `List` validation call.
///
/// The indexed counterpart of [`KeyedErrors`].
#[derive(Debug, Default)]
pub struct IndexedErrors {
    errors: Vec<ValidationError>,
}

impl IndexedErrors {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a child error in sequence.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `ok` when empty, otherwise one compound error wrapping every
    /// collected child in order.
    pub fn finish(
        self,
        ok: Value,
        message: impl Into<Cow<'static, str>>,
        reason_code: Option<Cow<'static, str>>,
    ) -> Result<Value, ValidationError> {
        if self.errors.is_empty() {
            return Ok(ok);
        }
        let mut error = ValidationError::new(message).with_item_errors(self.errors);
        error.reason_code = reason_code;
        Err(error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
