//! Object validators: fixed-shape structs and homogeneous records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::{
    BoxValidator, CommonOptions, Rule, Validate, ValidationError, Validator, key_path,
};

/// Bare struct check: a plain object validated field by field.
pub struct StructRule {
    fields: Vec<(String, BoxValidator)>,
}

impl Rule for StructRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let Value::Object(entries) = value else {
            return Err(ValidationError::new(
                "object",
                format!("{field} should be a plain object"),
            ));
        };

        let mut formatted = Map::new();
        for (name, field_validator) in &self.fields {
            let coerced = field_validator.validate_field(&key_path(field, name), entries.get(name))?;
            // Optional fields without a value stay off the output entirely.
            if let Some(coerced) = coerced {
                formatted.insert(name.clone(), coerced);
            }
        }
        Ok(Value::Object(formatted))
    }
}

/// Creates a struct validator over a fixed set of named fields.
///
/// Fields are validated in declaration order with paths
/// `field["name"]`; the first failure short-circuits the rest. Keys
/// not declared are dropped from the output, and declared fields that
/// validate to absent are omitted rather than set to null.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = structure(
///     vec![
///         ("name".into(), string(StringOptions::new()).boxed()),
///         ("age".into(), number(NumberOptions::new().min(0.0)).boxed()),
///     ],
///     CommonOptions::new(),
/// );
/// assert_eq!(
///     v.validate(Some(&json!({"name": "Ann", "age": "30", "extra": 1}))).unwrap(),
///     Some(json!({"name": "Ann", "age": 30}))
/// );
/// ```
#[must_use]
pub fn structure(fields: Vec<(String, BoxValidator)>, options: CommonOptions) -> Validator<StructRule> {
    Validator::new(options, StructRule { fields })
}

/// Options for [`record`], on top of the common envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordOptions {
    #[serde(flatten)]
    pub common: CommonOptions,

    /// Minimum number of entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,

    /// Maximum number of entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
}

impl RecordOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// Bare record check: arbitrary keys, one validator for every value.
pub struct RecordRule {
    values: BoxValidator,
    min: Option<usize>,
    max: Option<usize>,
}

impl Rule for RecordRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let Value::Object(entries) = value else {
            return Err(ValidationError::new(
                "object",
                format!("{field} should be a plain object"),
            ));
        };

        let mut formatted = Map::new();
        for (key, entry) in entries {
            let coerced = self
                .values
                .validate_field(&key_path(field, key), Some(entry))?;
            if let Some(coerced) = coerced {
                formatted.insert(key.clone(), coerced);
            }
        }

        // Size bounds apply to the coerced output, after absent entries
        // have been dropped.
        if let Some(min) = self.min {
            if formatted.len() < min {
                return Err(ValidationError::new(
                    "min_entries",
                    format!("size of {field} should >= {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if formatted.len() > max {
                return Err(ValidationError::new(
                    "max_entries",
                    format!("size of {field} should <= {max}"),
                ));
            }
        }

        Ok(Value::Object(formatted))
    }
}

/// Creates a record validator: every value must pass `values`, keys are
/// free-form.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = record(number(NumberOptions::new()).boxed(), RecordOptions::new().min(1));
/// assert_eq!(
///     v.validate(Some(&json!({"a": "1", "b": 2}))).unwrap(),
///     Some(json!({"a": 1, "b": 2}))
/// );
/// assert!(v.validate(Some(&json!({}))).is_err());
/// ```
#[must_use]
pub fn record(values: BoxValidator, options: RecordOptions) -> Validator<RecordRule> {
    let RecordOptions { common, min, max } = options;
    Validator::new(common, RecordRule { values, min, max })
}
