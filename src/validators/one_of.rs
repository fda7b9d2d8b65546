//! Union validator: accept the first alternative that matches.

use serde_json::Value;

use crate::foundation::{BoxValidator, CommonOptions, Rule, Validate, ValidationError, Validator};

/// Bare union check: tries each alternative in order.
pub struct OneOfRule {
    alternatives: Vec<BoxValidator>,
}

impl Rule for OneOfRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let mut failures = Vec::with_capacity(self.alternatives.len());
        for alternative in &self.alternatives {
            match alternative.validate_field(field, Some(value)) {
                Ok(coerced) => return Ok(coerced.unwrap_or(Value::Null)),
                Err(err) => failures.push(err.message),
            }
        }

        let listed = failures.join("\n- ");
        Err(ValidationError::new(
            "one_of",
            format!("{field} do not match any valid format:\n- {listed}"),
        ))
    }
}

/// Creates a union validator: the value must pass at least one of the
/// alternatives, tried in order.
///
/// The first success wins and its coerced output is returned, so put
/// the preferred coercion first. On total failure, every alternative's
/// message is collected into one error.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = one_of(
///     vec![
///         number(NumberOptions::new()).boxed(),
///         boolean(CommonOptions::new()).boxed(),
///     ],
///     CommonOptions::new(),
/// );
/// assert_eq!(v.validate(Some(&json!("5"))).unwrap(), Some(json!(5)));
/// assert_eq!(v.validate(Some(&json!("yes"))).unwrap(), Some(json!(true)));
/// assert!(v.validate(Some(&json!("neither"))).is_err());
/// ```
#[must_use]
pub fn one_of(alternatives: Vec<BoxValidator>, options: CommonOptions) -> Validator<OneOfRule> {
    Validator::new(options, OneOfRule { alternatives })
}
