//! Object schemas
//!
//! An [`ObjectSchema`] validates a dict against a closed set of named
//! fields, each with its own validator. Schemas are validators themselves,
//! so they nest, go inside [`List`](crate::validators::List) validators, and
//! register under a name for forward references.
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
//! let value = person.validate(&json!({
//!     "first_name": "Shawn",
//!     "last_name": "Adams",
//! }))?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::foundation::{expect_object, KeyedErrors, SchemaError, Validate, ValidatorConfig};

// ============================================================================
// SCHEMA BUILDER
// ============================================================================

/// Builder for [`ObjectSchema`].
///
/// Fields are declared one at a time; [`extends`](SchemaBuilder::extends)
/// copies every field from a parent schema, with fields declared on this
/// builder taking precedence over inherited ones regardless of declaration
/// order.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    own_fields: BTreeMap<String, Arc<dyn Validate>>,
    inherited_fields: BTreeMap<String, Arc<dyn Validate>>,
}

impl SchemaBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            own_fields: BTreeMap::new(),
            inherited_fields: BTreeMap::new(),
        }
    }

    /// Declares a field with its validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, validator: impl Validate + 'static) -> Self {
        self.own_fields.insert(name.into(), Arc::new(validator));
        self
    }

    /// Declares a field with an already-shared validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_shared(
        mut self,
        name: impl Into<String>,
        validator: Arc<dyn Validate>,
    ) -> Self {
        self.own_fields.insert(name.into(), validator);
        self
    }

    /// Inherits every field of a parent schema. May be called more than
    /// once; later parents override earlier ones for colliding names, and
    /// fields declared directly on this builder override them all.
    #[must_use = "builder methods must be chained or built"]
    pub fn extends(mut self, parent: &ObjectSchema) -> Self {
        for (name, validator) in &parent.fields {
            self.inherited_fields
                .insert(name.clone(), Arc::clone(validator));
        }
        self
    }

    /// Builds the schema.
    #[must_use]
    pub fn build(self) -> ObjectSchema {
        ObjectSchema {
            config: ValidatorConfig::with_reason_code("invalid_object"),
            name: self.name,
            fields: merge_fields(self.inherited_fields, self.own_fields),
        }
    }
}

/// Merges inherited and own fields; own fields win on collision.
fn merge_fields(
    inherited: BTreeMap<String, Arc<dyn Validate>>,
    own: BTreeMap<String, Arc<dyn Validate>>,
) -> BTreeMap<String, Arc<dyn Validate>> {
    let mut merged = inherited;
    merged.extend(own);
    merged
}

// ============================================================================
// OBJECT SCHEMA
// ============================================================================

/// Validates a dict against a closed set of named fields.
///
/// Validation walks every declared field:
///
/// - a present field runs its validator, and the result lands in the output
///   under the same name;
/// - an absent field with a configured default gets the default substituted
///   verbatim (`false`, `0` and `""` included);
/// - an absent required field records `"Missing required parameter."`;
/// - an absent optional field is simply omitted from the output.
///
/// Keys in the input with no declared field are ignored. All field failures
/// are reported together in one compound `"Error validating object."` error.
#[derive(Debug)]
pub struct ObjectSchema {
    config: ValidatorConfig,
    name: String,
    fields: BTreeMap<String, Arc<dyn Validate>>,
}

impl ObjectSchema {
    /// Starts a builder for a schema with the given type name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    /// Builds a schema directly from pre-shared field validators.
    #[must_use]
    pub fn from_fields(
        name: impl Into<String>,
        fields: BTreeMap<String, Arc<dyn Validate>>,
    ) -> Self {
        Self {
            config: ValidatorConfig::with_reason_code("invalid_object"),
            name: name.into(),
            fields,
        }
    }

    /// The schema's type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared fields.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, Arc<dyn Validate>> {
        &self.fields
    }

    /// Declared field names, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The validator for one declared field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Arc<dyn Validate>> {
        self.fields.get(name)
    }
}

impl Validate for ObjectSchema {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut ValidatorConfig {
        &mut self.config
    }

    fn check(&self, item: &Value) -> Result<Value, SchemaError> {
        let entries = expect_object(item)?;

        let mut validated = serde_json::Map::with_capacity(self.fields.len());
        let mut errors = KeyedErrors::new();
        for (name, validator) in &self.fields {
            match entries.get(name) {
                Some(value) => match validator.validate(value) {
                    Ok(value) => {
                        validated.insert(name.clone(), value);
                    }
                    // Child errors keep their own reason codes.
                    Err(SchemaError::Invalid(error)) => errors.insert(name.clone(), error),
                    Err(other) => return Err(other),
                },
                None => {
                    if let Some(default) = &validator.config().default {
                        validated.insert(name.clone(), default.clone());
                    } else if validator.config().required {
                        errors.insert(
                            name.clone(),
                            validator.config().error("Missing required parameter.")
                                .with_reason_code("required_but_missing"),
                        );
                    }
                }
            }
        }

        errors
            .finish(
                Value::Object(validated),
                "Error validating object.",
                self.config.reason_code.clone(),
            )
            .map_err(SchemaError::from)
    }

    fn to_json(&self) -> Value {
        let mut description = self.config.describe();
        if let Value::Object(map) = &mut description {
            map.insert("type".into(), json!(self.name));
            let fields: serde_json::Map<String, Value> = self
                .fields
                .iter()
                .map(|(name, validator)| (name.clone(), validator.to_json()))
                .collect();
            map.insert("fields".into(), Value::Object(fields));
        }
        description
    }
}

// ============================================================================
// TESTS
// ============================================================================
