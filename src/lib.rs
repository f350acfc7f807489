//! # shapecheck
//!
//! A declarative validation layer for decoded JSON values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let person = ObjectSchema::builder("Person")
//!     .field("first_name", string())
//!     .field("last_name", string())
//!     .field("id", integer().optional())
//!     .build();
//!
//! let validated = person.validate(&json!({
//!     "first_name": "Shawn",
//!     "last_name": "Adams",
//! }))?;
//! ```
//!
//! ## Design
//!
//! Every validator implements [`Validate`](foundation::Validate) over
//! `serde_json::Value` and returns a new validated value. Composite
//! validators ([`List`](validators::List), [`Dict`](validators::Dict),
//! [`ObjectSchema`](schema::ObjectSchema)) validate every child even after
//! the first failure and report all child errors in one compound
//! [`ValidationError`](foundation::ValidationError), so a caller sees every
//! problem with a payload at once.
//!
//! ## Built-in Validators
//!
//! - **Strings**: [`Str`](validators::Str), [`Regex`](validators::Regex),
//!   [`DateTime`](validators::DateTime)
//! - **Numbers**: [`Integer`](validators::Integer),
//!   [`Float`](validators::Float), [`Number`](validators::Number)
//! - **Membership**: [`OneOf`](validators::OneOf),
//!   [`SubSetOf`](validators::SubSetOf)
//! - **Containers**: [`List`](validators::List), [`Dict`](validators::Dict)
//! - **Types and forward references**:
//!   [`EnsureType`](validators::EnsureType) with a
//!   [`TypeRegistry`](registry::TypeRegistry)
//!
//! ## Forward References
//!
//! A field may name a type that is registered later; the reference resolves
//! lazily on first use, which is what makes mutually-referencing schemas
//! possible. See [`registry`].

// ValidationError is the fundamental error type for every validator — boxing
// it would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod validators;
