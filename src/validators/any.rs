//! Pass-through validator.

use serde_json::Value;

use crate::foundation::{CommonOptions, Rule, ValidationError, Validator};

/// Accepts any present, non-null value unchanged.
///
/// Also the minimal example of a rule: all behavior comes from the
/// envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRule;

impl Rule for AnyRule {
    fn check(&self, _field: &str, value: &Value) -> Result<Value, ValidationError> {
        Ok(value.clone())
    }
}

/// Creates a validator that only applies the common options envelope.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = any(CommonOptions::new());
/// assert_eq!(v.validate(Some(&json!([1, "two"]))).unwrap(), Some(json!([1, "two"])));
/// assert!(v.validate(None).is_err());
/// ```
#[must_use]
pub fn any(options: CommonOptions) -> Validator<AnyRule> {
    Validator::new(options, AnyRule)
}
