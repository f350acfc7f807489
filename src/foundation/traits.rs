//! Core traits for the validation system
//!
//! This module defines the contract every validator implements and the
//! configuration shared by all of them (required/optional, nullable,
//! default value, reason code).

use std::borrow::Cow;
use std::fmt::Debug;

use serde_json::{json, Value};

use super::error::{SchemaError, ValidationError};

/// What validating an item yields: the validated value, or the crate error.
pub type ValidationResult = Result<Value, SchemaError>;

// ============================================================================
// VALIDATOR CONFIGURATION
// ============================================================================

/// Configuration recognized by every validator.
///
/// These are the only knobs the base contract defines; concrete validators
/// add their own on top while still honoring these.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// A missing field is an error when true. Derived from `optional`:
    /// validators are required unless made optional.
    pub required: bool,

    /// `null` input validates to `null` when true.
    pub nullable: bool,

    /// Substituted by `ObjectSchema` when the field is absent. Any `Some`
    /// counts as a configured default — `false`, `0` and `""` included.
    pub default: Option<Value>,

    /// Reason code attached to every error this validator raises.
    pub reason_code: Option<Cow<'static, str>>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            required: true,
            nullable: false,
            default: None,
            reason_code: None,
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration: required, not nullable, no
    /// default, no reason code.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration seeded with a validator's default reason code.
    #[must_use]
    pub fn with_reason_code(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Builds a [`ValidationError`] carrying this configuration's reason
    /// code, if any.
    #[must_use]
    pub fn error(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        let mut error = ValidationError::new(message);
        error.reason_code.clone_from(&self.reason_code);
        error
    }

    /// The base introspection shape shared by all validators.
    #[must_use]
    pub fn describe(&self) -> Value {
        json!({
            "required": self.required,
            "nullable": self.nullable,
        })
    }
}

// ============================================================================
// CORE VALIDATE TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// [`validate`](Validate::validate) is the sole entry point: it applies the
/// null policy and then delegates to the type-specific
/// [`check`](Validate::check) hook. Validators are stateless across calls
/// and safe to share once constructed (the lazily-resolved forward-reference
/// validator caches its resolution idempotently).
///
/// Validators return a *new* validated value rather than mutating the input;
/// most return the input unchanged, while transforming validators (such as
/// `DateTime`) return the parsed equivalent.
///
/// # Examples
///
/// ```rust,ignore
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = string().min_len(3).nullable();
/// assert_eq!(v.validate(&json!("foo")).unwrap(), json!("foo"));
/// assert_eq!(v.validate(&json!(null)).unwrap(), json!(null));
/// assert!(v.validate(&json!("fo")).is_err());
/// ```
pub trait Validate: Debug + Send + Sync {
    /// Shared configuration for this validator.
    fn config(&self) -> &ValidatorConfig;

    /// Mutable access for the [`ValidateExt`] builder methods.
    fn config_mut(&mut self) -> &mut ValidatorConfig;

    /// Type-specific validation, called only with non-null input.
    fn check(&self, item: &Value) -> ValidationResult;

    /// Validates an item: applies the null policy, then [`check`](Validate::check).
    fn validate(&self, item: &Value) -> ValidationResult {
        if item.is_null() {
            if self.config().nullable {
                return Ok(Value::Null);
            }
            return Err(self.config().error("Cannot be null.").into());
        }
        self.check(item)
    }

    /// Describes this validator as a plain structure (configuration flags
    /// plus any type-specific detail). Documentation/introspection only —
    /// never data validation.
    fn to_json(&self) -> Value {
        self.config().describe()
    }
}

// ============================================================================
// CONFIGURATION BUILDER EXTENSION
// ============================================================================

/// Builder-style configuration, available on every validator.
///
/// # Examples
///
/// ```rust,ignore
/// let species = string().optional().with_default("Human");
/// let id = integer().nullable();
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Makes the field optional (a missing field is not an error).
    #[must_use]
    fn optional(mut self) -> Self {
        self.config_mut().required = false;
        self
    }

    /// Allows `null` to validate to `null`.
    #[must_use]
    fn nullable(mut self) -> Self {
        self.config_mut().nullable = true;
        self
    }

    /// Sets the default substituted when the field is absent from an object.
    #[must_use]
    fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.config_mut().default = Some(default.into());
        self
    }

    /// Overrides the reason code attached to errors from this validator.
    #[must_use]
    fn with_reason_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.config_mut().reason_code = Some(code.into());
        self
    }
}

impl<V: Validate> ValidateExt for V {}

// ============================================================================
// TESTS
// ============================================================================
