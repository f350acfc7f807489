//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`ValidatorConfig`]
//! - **Errors**: [`ValidationError`], [`NestedErrors`], [`SchemaError`]
//! - **Collectors**: [`KeyedErrors`], [`IndexedErrors`]
//! - **Kinds**: [`JsonKind`] and message-rendering helpers
//!
//! # Architecture
//!
//! Every validator implements [`Validate`] over `serde_json::Value`. The
//! trait's provided `validate` applies the shared null policy and then calls
//! the type-specific `check` hook — the same split the concrete validators
//! in [`crate::validators`] all build on.
//!
//! Composite validators never fail fast: they collect one child error per
//! failing element into a [`KeyedErrors`] or [`IndexedErrors`] and raise a
//! single compound [`ValidationError`] at the end, or succeed.

pub mod error;
pub mod kind;
pub mod traits;

pub use error::{IndexedErrors, KeyedErrors, NestedErrors, SchemaError, ValidationError};
pub use kind::{
    display_allowed, display_list, display_value, expect_array, expect_object, type_name,
    JsonKind,
};
pub use traits::{Validate, ValidateExt, ValidationResult, ValidatorConfig};
