//! Built-in validators
//!
//! Leaf validators check a single value ([`Str`], [`Integer`], [`Float`],
//! [`Number`], [`Boolean`], [`Regex`], [`DateTime`], [`OneOf`],
//! [`EnsureType`]); composite validators run child validators and aggregate
//! their failures ([`List`], [`Dict`], [`SubSetOf`]).
//!
//! Each comes with a lowercase factory function, so validator expressions
//! read declaratively:
//!
//! ```rust,ignore
//! use shapecheck::prelude::*;
//!
//! let tags = list(string().min_len(1));
//! let scores = dict(number().nullable());
//! ```

pub mod boolean;
pub mod datetime;
pub mod dict;
pub mod ensure_type;
pub mod list;
pub mod numeric;
pub mod sets;
pub mod string;

pub use boolean::{boolean, Boolean};
pub use datetime::{datetime, datetime_with_format, DateTime};
pub use dict::{dict, dict_with_keys, Dict};
pub use ensure_type::{ensure_kind, ensure_type, EnsureType, Expected};
pub use list::{list, List};
pub use numeric::{float, integer, number, Float, Integer, Number};
pub use sets::{one_of, subset_of, OneOf, SubSetOf};
pub use string::{regex, string, Regex, Str};
