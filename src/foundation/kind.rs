//! JSON runtime-kind classification and message rendering
//!
//! Validation errors render runtime types with the short names decoded data
//! is usually discussed in: `str`, `int`, `float`, `bool`, `list`, `dict`,
//! `null`. Integral and fractional numbers are distinct kinds so `Integer`
//! and `Float` can disagree about `1.0`.

use std::fmt;

use serde_json::{Map, Value};

use super::error::ValidationError;

// ============================================================================
// JSON KIND
// ============================================================================

/// The runtime kind of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classifies a value. Numbers without a fractional representation are
    /// [`JsonKind::Integer`].
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) => {
                if n.is_f64() {
                    JsonKind::Float
                } else {
                    JsonKind::Integer
                }
            }
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The short name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "bool",
            JsonKind::Integer => "int",
            JsonKind::Float => "float",
            JsonKind::String => "str",
            JsonKind::Array => "list",
            JsonKind::Object => "dict",
        }
    }

    /// Returns true if `value` is of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        JsonKind::of(value) == self
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short name of a value's runtime kind.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    JsonKind::of(value).name()
}

// ============================================================================
// CONTAINER TYPE CHECKS
// ============================================================================

fn kind_mismatch(expected: JsonKind, value: &Value) -> ValidationError {
    ValidationError::new(format!(
        "Expected {expected} got {} instead.",
        type_name(value)
    ))
    .with_reason_code("invalid_type")
}

/// Borrows a value's elements, or fails with
/// `"Expected list got {actual} instead."` under the `invalid_type` reason
/// code.
///
/// Container validators (`List`, `SubSetOf`) use this for the container
/// itself; their configured reason code applies only to the compound error.
pub fn expect_array(value: &Value) -> Result<&[Value], ValidationError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(kind_mismatch(JsonKind::Array, other)),
    }
}

/// Borrows a value's entries, or fails with
/// `"Expected dict got {actual} instead."` under the `invalid_type` reason
/// code. The object counterpart of [`expect_array`], used by `Dict` and
/// `ObjectSchema`.
pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match value {
        Value::Object(entries) => Ok(entries),
        other => Err(kind_mismatch(JsonKind::Object, other)),
    }
}

// ============================================================================
// VALUE RENDERING
// ============================================================================

/// Renders a value for an error message: strings single-quoted, arrays as
/// `[a, b, c]`, everything else in its natural JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Array(items) => display_list(items),
        other => other.to_string(),
    }
}

/// Renders a slice of values as `[a, b, c]`.
#[must_use]
pub fn display_list(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(display_value).collect();
    format!("[{}]", rendered.join(", "))
}

/// Renders a set of allowed values as `(a, b, c)`.
#[must_use]
pub fn display_allowed(values: &[Value]) -> String {
    let rendered: Vec<String> = values.iter().map(display_value).collect();
    format!("({})", rendered.join(", "))
}

// ============================================================================
// TESTS
// ============================================================================
