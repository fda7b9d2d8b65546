//! The common options envelope shared by every validator.
//!
//! Every validator, primitive or composite, is wrapped in the same
//! configuration surface: whether `null` is acceptable, whether the field
//! may be absent, a default substituted for absent values, and an optional
//! post-validation hook. `null` and `required`/`defaults` are independent
//! axes — a field may be nullable-but-required, optional-but-non-nullable,
//! and so on.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::error::ValidationError;

/// Post-validation hook: receives the coerced value, may replace or
/// reject it.
///
/// Hooks run last, only after the type-specific rule has succeeded. They
/// are plain code, so schema serialization skips them.
#[derive(Clone)]
pub struct CustomHook(Arc<dyn Fn(Value) -> Result<Value, ValidationError> + Send + Sync>);

impl CustomHook {
    /// Wraps a closure as a custom hook.
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ValidationError> + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    /// Runs the hook on an already-validated value.
    pub fn apply(&self, value: Value) -> Result<Value, ValidationError> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomHook(..)")
    }
}

/// Configuration applied uniformly by the
/// [`Validator`](crate::foundation::Validator) envelope before and after
/// the type-specific rule runs.
///
/// # Examples
///
/// ```
/// use validata::foundation::CommonOptions;
///
/// let options = CommonOptions::new().optional().nullable();
/// assert!(!options.required);
/// assert!(options.nullable);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonOptions {
    /// Whether an explicit null is acceptable. Default `false`.
    #[serde(rename = "null", default)]
    pub nullable: bool,

    /// Whether the field must have a value (may not be absent) when no
    /// default exists. Default `true`.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Value substituted when the input is absent. When set, `required`
    /// has no effect. The default is returned as already validated — it
    /// bypasses the type rule and the custom hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Value>,

    /// Optional post-validation hook. Code, not data: skipped by serde.
    #[serde(skip)]
    pub custom: Option<CustomHook>,
}

fn default_required() -> bool {
    true
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            nullable: false,
            required: true,
            defaults: None,
            custom: None,
        }
    }
}

impl CommonOptions {
    /// Creates the default envelope: required, non-nullable, no default,
    /// no hook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows explicit null input.
    #[must_use = "builder methods must be chained or built"]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Allows the field to be absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Substitutes `defaults` for absent input.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_defaults(mut self, defaults: impl Into<Value>) -> Self {
        self.defaults = Some(defaults.into());
        self
    }

    /// Attaches a post-validation hook.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_custom<F>(mut self, hook: F) -> Self
    where
        F: Fn(Value) -> Result<Value, ValidationError> + Send + Sync + 'static,
    {
        self.custom = Some(CustomHook::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_required_non_nullable() {
        let options = CommonOptions::default();
        assert!(options.required);
        assert!(!options.nullable);
        assert!(options.defaults.is_none());
        assert!(options.custom.is_none());
    }

    #[test]
    fn builder_chain() {
        let options = CommonOptions::new().optional().with_defaults("x");
        assert!(!options.required);
        assert_eq!(options.defaults, Some(Value::String("x".into())));
    }

    #[test]
    fn hook_applies() {
        let hook = CustomHook::new(Ok);
        assert_eq!(hook.apply(Value::Bool(true)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn deserializes_from_schema_keys() {
        let options: CommonOptions =
            serde_json::from_str(r#"{"null": true, "required": false}"#).unwrap();
        assert!(options.nullable);
        assert!(!options.required);
    }

    #[test]
    fn deserializes_empty_object_to_defaults() {
        let options: CommonOptions = serde_json::from_str("{}").unwrap();
        assert!(options.required);
        assert!(!options.nullable);
    }
}
