//! Date/time string validation
//!
//! [`DateTime`] validates strings against a strftime-style format and
//! normalizes them to a canonical rendering. Date-only formats parse with
//! the time components zero-filled.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{json, Value};

use crate::foundation::{type_name, SchemaError, Validate, ValidatorConfig};

const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// DateTime
// ============================================================================

/// Validates that an item is a string parseable with the configured format.
///
/// On success the canonical `NaiveDateTime` rendering is returned, not the
/// input string.
///
/// ```rust,ignore
/// let value = datetime().validate(&json!("2010-01-02 12:30:00")).unwrap();
/// assert_eq!(value, json!("2010-01-02 12:30:00"));
///
/// let value = datetime_with_format("%m/%d/%Y").validate(&json!("01/02/2010")).unwrap();
/// assert_eq!(value, json!("2010-01-02 00:00:00"));
/// ```
#[derive(Debug)]
pub struct DateTime {
    config: ValidatorConfig,
    format: Cow<'static, str>,
}

impl DateTime {
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(DEFAULT_FORMAT)
    }

    #[must_use]
    pub fn with_format(format: impl Into<Cow<'static, str>>) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_datetime"),
            format: format.into(),
        }
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    fn parse(&self, text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, &self.format).or_else(|datetime_error| {
            // Date-only formats carry no time fields; fall back and zero-fill.
            NaiveDate::parse_from_str(text, &self.format)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| datetime_error)
        })
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for DateTime {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let Value::String(text) = item else {
            return Err(self
                .config
                .error(format!("Expected str got {} instead.", type_name(item)))
                .into());
        };
        match self.parse(text) {
            Ok(parsed) => Ok(Value::String(parsed.to_string())),
            Err(parse_error) => Err(self.config.error(parse_error.to_string()).into()),
        }
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!("DateTime"));
            map.insert("format".into(), json!(self.format));
        }
        description
    }
}

/// Creates a [`DateTime`] validator with the default `%Y-%m-%d %H:%M:%S` format.
#[must_use]
pub fn datetime() -> DateTime {
    DateTime::new()
}

/// Creates a [`DateTime`] validator with a custom format.
#[must_use]
pub fn datetime_with_format(format: impl Into<Cow<'static, str>>) -> DateTime {
    DateTime::with_format(format)
}
