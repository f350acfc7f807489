//! Type registry for forward-reference resolution
//!
//! Schemas may name a field's expected type before that type's schema
//! exists. The registry is the lookup service those named references are
//! resolved against: register a schema under a name at any point, and every
//! `EnsureType::by_name` holding that name resolves on its next use.
//!
//! The registry is an explicit dependency injected into validators, not a
//! process-wide global — tests get isolated registries for free. It is
//! read-mostly with insertion-only mutation: concurrent lookups are safe
//! against concurrent registration.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::foundation::Validate;

// ============================================================================
// TYPE DESCRIPTOR
// ============================================================================

/// A registered named type: its name and the validator describing its shape.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    schema: Arc<dyn Validate>,
}

impl TypeDescriptor {
    /// Creates a descriptor from a name and a schema.
    pub fn new(name: impl Into<String>, schema: impl Validate + 'static) -> Self {
        Self {
            name: name.into(),
            schema: Arc::new(schema),
        }
    }

    /// Creates a descriptor from an already-shared schema.
    pub fn from_shared(name: impl Into<String>, schema: Arc<dyn Validate>) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// The registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validator describing the registered type's shape.
    #[must_use]
    pub fn schema(&self) -> &Arc<dyn Validate> {
        &self.schema
    }
}

// ============================================================================
// TYPE REGISTRY
// ============================================================================

/// Name → [`TypeDescriptor`] lookup service.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use shapecheck::prelude::*;
///
/// let registry = Arc::new(TypeRegistry::new());
/// let person = ObjectSchema::builder("Person")
///     .field("job", EnsureType::by_name("Job", registry.clone()))
///     .build();
///
/// // "Job" may be registered after the schema was declared:
/// registry.register("Job", ObjectSchema::builder("Job")
///     .field("title", string())
///     .build());
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: RwLock<HashMap<String, Arc<TypeDescriptor>>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under a type name. Re-registering a name replaces
    /// the previous descriptor.
    pub fn register(&self, name: impl Into<String>, schema: impl Validate + 'static) {
        let name = name.into();
        let descriptor = Arc::new(TypeDescriptor {
            name: name.clone(),
            schema: Arc::new(schema),
        });
        self.entries.write().insert(name, descriptor);
    }

    /// Registers a pre-built descriptor.
    pub fn register_descriptor(&self, descriptor: TypeDescriptor) {
        self.entries
            .write()
            .insert(descriptor.name.clone(), Arc::new(descriptor));
    }

    /// Looks a type name up, returning its descriptor if registered.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.entries.read().get(name).cloned()
    }

    /// Returns true if the name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
