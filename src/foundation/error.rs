//! Error type for validation failures.
//!
//! `ValidationError` is the failure half of every validator's result. The
//! `message` already carries the bracket-qualified field path (for example
//! `value["items"][2] must be a valid number`), so `Display` is just the
//! message. `code` identifies the failure class for programmatic handling;
//! `data` is an optional structured payload for callers that want more than
//! a string.

use std::borrow::Cow;

use serde_json::Value;

/// A validation failure.
///
/// Uses `Cow<'static, str>` for the code so the common case of a static
/// code string allocates nothing.
///
/// # Examples
///
/// ```
/// use validata::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "name's length must >= 1");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.to_string(), "name's length must >= 1");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Failure class, e.g. `"required"`, `"pattern"`, `"one_of"`.
    pub code: Cow<'static, str>,

    /// Human-readable message, path-qualified relative to the root field.
    pub message: String,

    /// Optional structured payload attached to the failure.
    pub data: Option<Value>,
}

impl ValidationError {
    /// Creates a new validation error from a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Attaches a structured payload to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Presence error: the field had no value and no default.
    pub fn required(field: &str) -> Self {
        Self::new("required", format!("{field} is required"))
    }

    /// Presence error: the field was null but nulls are disallowed.
    pub fn not_null(field: &str) -> Self {
        Self::new("not_null", format!("{field} cannot be null"))
    }

    /// Failure produced by a caller-supplied custom hook.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new("custom", message)
    }
}
