//! Boolean validator with lenient coercion.

use serde_json::Value;

use crate::foundation::{CommonOptions, Rule, ValidationError, Validator};

/// Coerces booleans, truthy/falsy strings, and 0/1 numbers to `bool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRule;

impl Rule for BooleanRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let coerced = match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => Some(true),
                "0" | "false" | "off" | "no" => Some(false),
                _ => None,
            },
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == 1.0 => Some(true),
                Some(f) if f == 0.0 => Some(false),
                _ => None,
            },
            _ => None,
        };

        match coerced {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(ValidationError::new(
                "boolean",
                format!("{field} must be true or false"),
            )),
        }
    }
}

/// Creates a boolean validator.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = boolean(CommonOptions::new());
/// assert_eq!(v.validate(Some(&json!("On"))).unwrap(), Some(json!(true)));
/// assert_eq!(v.validate(Some(&json!(0))).unwrap(), Some(json!(false)));
/// assert!(v.validate(Some(&json!("maybe"))).is_err());
/// ```
#[must_use]
pub fn boolean(options: CommonOptions) -> Validator<BooleanRule> {
    Validator::new(options, BooleanRule)
}
