//! String validators
//!
//! [`Str`] validates that an item is a string, with optional length bounds.
//! [`Regex`] additionally requires the string to match a pattern from its
//! start.

use serde_json::Value;

use crate::foundation::{type_name, SchemaError, Validate, ValidatorConfig};

// ============================================================================
// STR
// ============================================================================

/// Validates that an item is a string.
///
/// # Examples
///
/// ```rust,ignore
/// use shapecheck::prelude::*;
/// use serde_json::json;
///
/// assert_eq!(string().validate(&json!("foo")).unwrap(), json!("foo"));
/// // "Expected str got int instead."
/// assert!(string().validate(&json!(1)).is_err());
/// // "String exceeds max length of 3."
/// assert!(string().max_len(3).validate(&json!("foobar")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Str {
    config: ValidatorConfig,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl Str {
    /// Creates a string validator with no length bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_str"),
            min_len: None,
            max_len: None,
        }
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// The type + bounds checks shared with [`Regex`]. Lengths are counted
    /// in characters, not bytes.
    fn check_string<'a>(&self, item: &'a Value) -> Result<&'a str, SchemaError> {
        let Value::String(s) = item else {
            return Err(self
                .config
                .error(format!("Expected str got {} instead.", type_name(item)))
                .into());
        };
        if let Some(min) = self.min_len {
            if s.chars().count() < min {
                return Err(self
                    .config
                    .error(format!("String must be at least length {min}."))
                    .into());
            }
        }
        if let Some(max) = self.max_len {
            if s.chars().count() > max {
                return Err(self
                    .config
                    .error(format!("String exceeds max length of {max}."))
                    .into());
            }
        }
        Ok(s)
    }
}

impl Default for Str {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Str {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        self.check_string(item)?;
        Ok(item.clone())
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(obj) = &mut description {
            obj.insert("type".into(), Value::String("str".into()));
        }
        description
    }
}

// ============================================================================
// REGEX
// ============================================================================

/// Validates a string against a regular expression, anchored at the start.
///
/// Carries all of [`Str`]'s checks, so length bounds combine with the
/// pattern:
///
/// ```rust,ignore
/// let v = regex(r"^foo[0-9]")?.max_len(10);
/// assert!(v.validate(&json!("foo12")).is_ok());
/// // "String does not match pattern '^foo[0-9]'."
/// assert!(v.validate(&json!("foo")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Regex {
    inner: Str,
    pattern: regex::Regex,
}

impl Regex {
    /// Compiles `pattern`; an invalid pattern is a configuration error.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        Ok(Self {
            inner: Str::new(),
            pattern: regex::Regex::new(pattern)?,
        })
    }

    /// Requires at least `min` characters.
    #[must_use]
    pub fn min_len(mut self, min: usize) -> Self {
        self.inner = self.inner.min_len(min);
        self
    }

    /// Allows at most `max` characters.
    #[must_use]
    pub fn max_len(mut self, max: usize) -> Self {
        self.inner = self.inner.max_len(max);
        self
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for Regex {
    fn config(&self) -> &ValidatorConfig {
        &self.inner.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.inner.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let s = self.inner.check_string(item)?;
        // Match-from-start semantics: a hit anywhere later does not count.
        let matched = self.pattern.find(s).is_some_and(|m| m.start() == 0);
        if !matched {
            return Err(self
                .inner
                .config
                .error(format!(
                    "String does not match pattern '{}'.",
                    self.pattern.as_str()
                ))
                .into());
        }
        Ok(item.clone())
    }

    fn to_json(&self) -> Value {
        let mut description = self.inner.to_json();
        if let Value::Object(obj) = &mut description {
            obj.insert(
                "pattern".into(),
                Value::String(self.pattern.as_str().to_string()),
            );
        }
        description
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates a [`Str`] validator.
#[must_use]
pub fn string() -> Str {
    Str::new()
}

/// Creates a [`Regex`] validator from a pattern.
pub fn regex(pattern: &str) -> Result<Regex, SchemaError> {
    Regex::new(pattern)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(error: SchemaError) -> String {
        error.into_validation().expect("validation error").message.into_owned()
    }

    #[test]
    fn accepts_strings() {
        assert_eq!(string().validate(&json!("foo")).unwrap(), json!("foo"));
    }

    #[test]
    fn rejects_non_strings() {
        let error = string().validate(&json!(1)).unwrap_err().into_validation().unwrap();
        assert_eq!(error.message, "Expected str got int instead.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_str"));
    }

    #[test]
    fn max_len_bound() {
        let v = string().max_len(3);
        assert_eq!(v.validate(&json!("foo")).unwrap(), json!("foo"));
        assert_eq!(
            message(v.validate(&json!("foobar")).unwrap_err()),
            "String exceeds max length of 3."
        );
    }

    #[test]
    fn min_len_bound() {
        let v = string().min_len(3);
        assert_eq!(
            message(v.validate(&json!("fo")).unwrap_err()),
            "String must be at least length 3."
        );
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 3 characters, 9 bytes.
        let v = string().max_len(3);
        assert!(v.validate(&json!("äöü")).is_ok());
    }

    #[test]
    fn regex_matches_from_start() {
        let v = Regex::new(r"^foo[0-9]").unwrap().max_len(10);
        assert_eq!(v.validate(&json!("foo12")).unwrap(), json!("foo12"));

        let error = v.validate(&json!("foo")).unwrap_err().into_validation().unwrap();
        assert_eq!(error.message, "String does not match pattern '^foo[0-9]'.");
        assert_eq!(error.reason_code.as_deref(), Some("invalid_str"));

        assert_eq!(
            message(v.validate(&json!("a".repeat(11))).unwrap_err()),
            "String exceeds max length of 10."
        );
    }

    #[test]
    fn unanchored_pattern_still_requires_start_match() {
        let v = Regex::new("foo").unwrap();
        assert!(v.validate(&json!("foobar")).is_ok());
        assert!(v.validate(&json!("barfoo")).is_err());
    }

    #[test]
    fn invalid_pattern_is_a_configuration_error() {
        let error = Regex::new("(unclosed").unwrap_err();
        assert!(matches!(error, SchemaError::InvalidPattern(_)));
    }
}
