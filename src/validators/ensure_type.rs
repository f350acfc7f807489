//! Runtime type validation, including forward references
//!
//! [`EnsureType`] validates that an item is of an expected runtime kind (or
//! one of several), or conforms to a *named* type resolved against a
//! [`TypeRegistry`]. Named references resolve lazily on first use — the
//! referenced type may be registered after the schema holding the reference
//! was declared, which is what makes mutually-referencing schemas possible.

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::foundation::{
    type_name, JsonKind, SchemaError, Validate, ValidatorConfig,
};
use crate::registry::{TypeDescriptor, TypeRegistry};

// ============================================================================
// EXPECTED TYPE
// ============================================================================

/// What an [`EnsureType`] expects of its input.
#[derive(Debug, Clone)]
pub enum Expected {
    /// A single runtime kind.
    Kind(JsonKind),
    /// Any of several runtime kinds.
    AnyOf(Vec<JsonKind>),
    /// A named type, resolved against the registry on first use.
    Named(String),
}

// ============================================================================
// ENSURE TYPE
// ============================================================================

/// Validates that an item is of a certain type.
///
/// # Examples
///
/// ```rust,ignore
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// let v = EnsureType::kind(JsonKind::Integer);
/// assert_eq!(v.validate(&json!(10)).unwrap(), json!(10));
///
/// let err = v.validate(&json!("foo")).unwrap_err();
/// assert_eq!(
///     err.as_validation().unwrap().message,
///     "Expected int got str instead."
/// );
/// ```
///
/// A named reference resolves against the registry the first time it
/// validates something; an unregistered name is a configuration error
/// ([`SchemaError::UnknownType`]), not a validation error.
#[derive(Debug)]
pub struct EnsureType {
    config: ValidatorConfig,
    expected: Expected,
    type_name: Cow<'static, str>,
    registry: Option<Arc<TypeRegistry>>,
    resolved: OnceLock<Arc<TypeDescriptor>>,
}

impl EnsureType {
    /// Expects a single runtime kind.
    #[must_use]
    pub fn kind(kind: JsonKind) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_type"),
            expected: Expected::Kind(kind),
            type_name: Cow::Borrowed(kind.name()),
            registry: None,
            resolved: OnceLock::new(),
        }
    }

    /// Expects any of several runtime kinds, rendered in errors as
    /// `one of (a, b)`.
    #[must_use]
    pub fn any_of(kinds: Vec<JsonKind>) -> Self {
        let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
        let type_name = Cow::Owned(format!("one of ({})", names.join(", ")));
        Self {
            config: ValidatorConfig::with_reason_code("invalid_type"),
            expected: Expected::AnyOf(kinds),
            type_name,
            registry: None,
            resolved: OnceLock::new(),
        }
    }

    /// Expects a named type, looked up in `registry` on first use.
    ///
    /// The name does not have to be registered yet — only by the time this
    /// validator first validates something.
    #[must_use]
    pub fn by_name(name: impl Into<String>, registry: Arc<TypeRegistry>) -> Self {
        let name = name.into();
        Self {
            config: ValidatorConfig::with_reason_code("invalid_type"),
            expected: Expected::Named(name.clone()),
            type_name: Cow::Owned(name),
            registry: Some(registry),
            resolved: OnceLock::new(),
        }
    }

    /// Overrides the type name rendered in error messages.
    #[must_use]
    pub fn named(mut self, type_name: impl Into<Cow<'static, str>>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// The type name rendered in error messages.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns true if a named reference has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Resolves a named reference, caching the descriptor on success.
    ///
    /// Concurrent resolution is idempotent: two threads resolving at once
    /// land on the same registered descriptor.
    fn resolve(&self, name: &str) -> Result<Arc<TypeDescriptor>, SchemaError> {
        if let Some(descriptor) = self.resolved.get() {
            return Ok(Arc::clone(descriptor));
        }
        let descriptor = self
            .registry
            .as_ref()
            .and_then(|registry| registry.lookup(name))
            .ok_or_else(|| SchemaError::UnknownType {
                name: name.to_string(),
            })?;
        Ok(Arc::clone(
            self.resolved.get_or_init(|| descriptor),
        ))
    }
}

impl Validate for EnsureType {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let matched = match &self.expected {
            Expected::Kind(kind) => kind.matches(item),
            Expected::AnyOf(kinds) => kinds.iter().any(|kind| kind.matches(item)),
            Expected::Named(name) => {
                // Conformance to the registered shape is the instance-of
                // check for decoded values.
                let descriptor = self.resolve(name)?;
                return descriptor.schema().validate(item);
            }
        };
        if matched {
            Ok(item.clone())
        } else {
            Err(self
                .config
                .error(format!(
                    "Expected {} got {} instead.",
                    self.type_name,
                    type_name(item)
                ))
                .into())
        }
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(obj) = &mut description {
            obj.insert("type".into(), Value::String(self.type_name.to_string()));
        }
        description
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates an [`EnsureType`] expecting a single runtime kind.
#[must_use]
pub fn ensure_kind(kind: JsonKind) -> EnsureType {
    EnsureType::kind(kind)
}

/// Creates an [`EnsureType`] forward reference to a named type.
#[must_use]
pub fn ensure_type(name: impl Into<String>, registry: Arc<TypeRegistry>) -> EnsureType {
    EnsureType::by_name(name, registry)
}

// ============================================================================
// TESTS
// ============================================================================
