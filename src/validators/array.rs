//! Collection validators over a child validator: arrays and tuples.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{
    BoxValidator, CommonOptions, Rule, Validate, ValidationError, Validator, index_path,
};

/// Options for [`array`], on top of the common envelope.
///
/// The element validator is passed to [`array`] separately, so the options
/// stay plain data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrayOptions {
    #[serde(flatten)]
    pub common: CommonOptions,

    /// Minimum number of elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,

    /// Maximum number of elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,

    /// Deduplicate the coerced output, keeping first occurrences.
    #[serde(default)]
    pub unique: bool,

    /// Wrap a non-array input as a one-element array instead of failing.
    #[serde(default, rename = "toArray")]
    pub to_array: bool,
}

impl ArrayOptions {
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

    #[must_use = "builder methods must be chained or built"]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn to_array(mut self) -> Self {
        self.to_array = true;
        self
    }
}

/// Bare array check: shape, length bounds, then per-element validation.
pub struct ArrayRule {
    item: BoxValidator,
    min: Option<usize>,
    max: Option<usize>,
    unique: bool,
    to_array: bool,
}

impl Rule for ArrayRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let items: &[Value] = match value {
            Value::Array(items) => items,
            scalar if self.to_array => std::slice::from_ref(scalar),
            _ => {
                return Err(ValidationError::new(
                    "array",
                    format!("{field} should be an array"),
                ));
            }
        };

        if let Some(min) = self.min {
            if items.len() < min {
                return Err(ValidationError::new(
                    "min_items",
                    format!("array {field}'s length should >= {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if items.len() > max {
                return Err(ValidationError::new(
                    "max_items",
                    format!("array {field}'s length should <= {max}"),
                ));
            }
        }

        let mut formatted = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let coerced = self
                .item
                .validate_field(&index_path(field, i), Some(item))?;
            // Element validators always see a present value, so absence can
            // only come out of a defaults-less optional child; keep the slot
            // as null rather than shifting later indices.
            formatted.push(coerced.unwrap_or(Value::Null));
        }

        if self.unique {
            let mut deduped: Vec<Value> = Vec::with_capacity(formatted.len());
            for item in formatted {
                if !deduped.contains(&item) {
                    deduped.push(item);
                }
            }
            formatted = deduped;
        }

        Ok(Value::Array(formatted))
    }
}

/// Creates an array validator: every element must pass `item`.
///
/// Elements are validated in index order with paths `field[0]`,
/// `field[1]`, …; the first failing element short-circuits the rest.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = array(number(NumberOptions::new()).boxed(), ArrayOptions::new().min(1));
/// assert_eq!(
///     v.validate(Some(&json!(["1", 2]))).unwrap(),
///     Some(json!([1, 2]))
/// );
/// let err = v.validate(Some(&json!([1, "x"]))).unwrap_err();
/// assert_eq!(err.message, "value[1] must be a valid number");
/// ```
#[must_use]
pub fn array(item: BoxValidator, options: ArrayOptions) -> Validator<ArrayRule> {
    let ArrayOptions {
        common,
        min,
        max,
        unique,
        to_array,
    } = options;
    Validator::new(
        common,
        ArrayRule {
            item,
            min,
            max,
            unique,
            to_array,
        },
    )
}

/// Bare tuple check: fixed positions, each with its own validator.
pub struct TupleRule {
    items: Vec<BoxValidator>,
}

impl Rule for TupleRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let Value::Array(items) = value else {
            return Err(ValidationError::new(
                "array",
                format!("{field} should be an array"),
            ));
        };
        if items.len() > self.items.len() {
            return Err(ValidationError::new(
                "tuple",
                format!("{field} should be a tuple with {} items", self.items.len()),
            ));
        }

        // Iterate the validators, not the input: the input may be shorter,
        // and trailing positions then flow through each child's own
        // required/defaults handling.
        let mut formatted = Vec::with_capacity(self.items.len());
        for (i, item_validator) in self.items.iter().enumerate() {
            let coerced = item_validator.validate_field(&index_path(field, i), items.get(i))?;
            formatted.push(coerced.unwrap_or(Value::Null));
        }
        Ok(Value::Array(formatted))
    }
}

/// Creates a tuple validator: position `i` must pass `items[i]`.
///
/// The input may be shorter than the validator list when the trailing
/// validators accept absence; it may never be longer.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = tuple(
///     vec![
///         string(StringOptions::new()).boxed(),
///         number(NumberOptions::new()).boxed(),
///     ],
///     CommonOptions::new(),
/// );
/// assert_eq!(
///     v.validate(Some(&json!(["a", "2"]))).unwrap(),
///     Some(json!(["a", 2]))
/// );
/// assert!(v.validate(Some(&json!(["a", 2, 3]))).is_err());
/// ```
#[must_use]
pub fn tuple(items: Vec<BoxValidator>, options: CommonOptions) -> Validator<TupleRule> {
    Validator::new(options, TupleRule { items })
}
