//! Prelude module for convenient imports.
//!
//! Provides a single `use shapecheck::prelude::*;` import that brings in
//! the core traits, error types, every built-in validator with its factory
//! function, object schemas, and the type registry.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let person = ObjectSchema::builder("Person")
//!     .field("first_name", string())
//!     .field("age", integer().optional())
//!     .field("tags", list(string()))
//!     .build();
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, kinds
// ============================================================================

pub use crate::foundation::{
    IndexedErrors, JsonKind, KeyedErrors, NestedErrors, SchemaError, Validate, ValidateExt,
    ValidationError, ValidationResult, ValidatorConfig,
};

// ============================================================================
// VALIDATORS: All built-in validators and factories
// ============================================================================

pub use crate::validators::{
    boolean, datetime, datetime_with_format, dict, dict_with_keys, ensure_kind, ensure_type,
    float, integer, list, number, one_of, regex, string, subset_of, Boolean, DateTime, Dict,
    EnsureType, Expected, Float, Integer, List, Number, OneOf, Regex, Str, SubSetOf,
};

// ============================================================================
// SCHEMAS AND REGISTRY
// ============================================================================

pub use crate::registry::{TypeDescriptor, TypeRegistry};
pub use crate::schema::{ObjectSchema, SchemaBuilder};
