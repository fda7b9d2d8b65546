//! Core traits of the validation system.
//!
//! Two traits split the work:
//!
//! - [`Rule`] is the *bare* type-specific check. It only ever sees a
//!   present, non-null value, and never deals with absence, nulls,
//!   defaults, or custom hooks.
//! - [`Validate`] is the full calling contract: field name plus
//!   possibly-absent input, returning the coerced value (or absence) on
//!   success.
//!
//! [`Validator`] connects the two: it wraps any `Rule` in the common
//! options envelope, which is the single place the `null` / `required` /
//! `defaults` / `custom` semantics live.

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::error::ValidationError;
use crate::foundation::options::CommonOptions;

/// Field name used when the caller does not supply one.
pub const DEFAULT_FIELD: &str = "value";

/// Outcome of a validation call.
///
/// `Ok(Some(value))` is the coerced value; `Ok(None)` means the input was
/// absent and allowed to stay absent (optional field, no default). Struct
/// validators omit keys that validate to `None`.
pub type ValidationResult = Result<Option<Value>, ValidationError>;

/// The calling contract every validator satisfies.
///
/// `input` is `None` for an absent value and `Some(&Value::Null)` for an
/// explicit null — the two are distinct and handled differently by the
/// envelope.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = boolean(CommonOptions::new());
/// assert_eq!(v.validate(Some(&json!("yes"))).unwrap(), Some(json!(true)));
/// assert!(v.validate(None).is_err()); // required by default
/// ```
pub trait Validate: Send + Sync {
    /// Validates `input`, qualifying any error message with `field`.
    fn validate_field(&self, field: &str, input: Option<&Value>) -> ValidationResult;

    /// Validates `input` under the default field name `"value"`.
    fn validate(&self, input: Option<&Value>) -> ValidationResult {
        self.validate_field(DEFAULT_FIELD, input)
    }
}

/// A heap-allocated validator, the common currency of composition.
pub type BoxValidator = Box<dyn Validate>;

/// A reference-counted validator, for reusing one child across parents.
pub type SharedValidator = Arc<dyn Validate>;

impl<V: Validate + ?Sized> Validate for &V {
    fn validate_field(&self, field: &str, input: Option<&Value>) -> ValidationResult {
        (**self).validate_field(field, input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate_field(&self, field: &str, input: Option<&Value>) -> ValidationResult {
        (**self).validate_field(field, input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate_field(&self, field: &str, input: Option<&Value>) -> ValidationResult {
        (**self).validate_field(field, input)
    }
}

/// The type-specific validation logic, minus the envelope.
///
/// A rule receives a value that is guaranteed present and non-null, and
/// returns the coerced value on success. Implemented for closures, so a
/// one-off validator is a single expression:
///
/// ```
/// use validata::prelude::*;
/// use serde_json::{Value, json};
///
/// let even = Validator::new(CommonOptions::new(), |field: &str, value: &Value| {
///     match value.as_i64() {
///         Some(n) if n % 2 == 0 => Ok(value.clone()),
///         _ => Err(ValidationError::new("even", format!("{field} must be even"))),
///     }
/// });
/// assert!(even.validate(Some(&json!(4))).is_ok());
/// assert!(even.validate(Some(&json!(3))).is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Checks a present, non-null value and returns its coerced form.
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError>;
}

impl<F> Rule for F
where
    F: Fn(&str, &Value) -> Result<Value, ValidationError> + Send + Sync,
{
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        self(field, value)
    }
}

/// Lifts a bare [`Rule`] into a full validator by wrapping it in the
/// common options envelope.
///
/// The envelope's evaluation order is fixed:
///
/// 1. absent input — substitute `defaults` (returned as already validated,
///    bypassing the rule and the hook), or fail if `required`, or validate
///    to absent;
/// 2. explicit null — accepted only when `nullable`;
/// 3. the rule itself;
/// 4. the `custom` hook, whose result replaces the rule's.
#[derive(Debug, Clone)]
pub struct Validator<R> {
    options: CommonOptions,
    rule: R,
}

impl<R: Rule> Validator<R> {
    /// Wraps `rule` in the envelope configured by `options`.
    pub fn new(options: CommonOptions, rule: R) -> Self {
        Self { options, rule }
    }

    /// The envelope configuration of this validator.
    pub fn options(&self) -> &CommonOptions {
        &self.options
    }

    /// Boxes this validator for composition.
    pub fn boxed(self) -> BoxValidator
    where
        R: 'static,
    {
        Box::new(self)
    }

    /// Wraps this validator in an `Arc` so it can feed several parents.
    pub fn shared(self) -> SharedValidator
    where
        R: 'static,
    {
        Arc::new(self)
    }
}

impl<R: Rule> Validate for Validator<R> {
    fn validate_field(&self, field: &str, input: Option<&Value>) -> ValidationResult {
        let value = match input {
            None => {
                if let Some(defaults) = &self.options.defaults {
                    // A configured default counts as already validated.
                    return Ok(Some(defaults.clone()));
                }
                if self.options.required {
                    return Err(ValidationError::required(field));
                }
                return Ok(None);
            }
            Some(value) => value,
        };

        if value.is_null() {
            if !self.options.nullable {
                return Err(ValidationError::not_null(field));
            }
            return Ok(Some(Value::Null));
        }

        let checked = self.rule.check(field, value)?;
        match &self.options.custom {
            Some(hook) => hook.apply(checked).map(Some),
            None => Ok(Some(checked)),
        }
    }
}
