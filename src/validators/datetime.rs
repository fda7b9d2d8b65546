//! Datetime validator built on chrono.
//!
//! Accepts unix timestamps (seconds, fractional allowed) and ISO-ish date
//! strings. The coerced output is an RFC 3339 UTC string by default, or
//! the unix timestamp in seconds with `raw: true`. Naive inputs (no
//! offset) are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{CommonOptions, Rule, ValidationError, Validator};

/// Options for [`datetime`], on top of the common envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatetimeOptions {
    #[serde(flatten)]
    pub common: CommonOptions,

    /// Emit the unix timestamp (seconds) instead of an RFC 3339 string.
    #[serde(default)]
    pub raw: bool,
}

impl DatetimeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits unix-timestamp output.
    #[must_use = "builder methods must be chained or built"]
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
}

/// Bare datetime check. Built from [`DatetimeOptions`] by [`datetime`].
#[derive(Debug, Clone, Copy)]
pub struct DatetimeRule {
    raw: bool,
}

impl Rule for DatetimeRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let parsed = match value {
            Value::Number(n) => {
                let Some(instant) = n.as_f64().and_then(from_unix_seconds) else {
                    return Err(ValidationError::new(
                        "datetime",
                        format!("{field} must be a valid unix timestamp"),
                    ));
                };
                instant
            }
            Value::String(s) => {
                let Some(instant) = parse_datetime(s.trim()) else {
                    return Err(ValidationError::new(
                        "datetime",
                        format!("{field} must be a valid datetime string"),
                    ));
                };
                instant
            }
            _ => {
                return Err(ValidationError::new(
                    "datetime",
                    format!("{field} must be a datetime string or unix timestamp"),
                ));
            }
        };

        Ok(if self.raw {
            Value::from(parsed.timestamp())
        } else {
            Value::String(parsed.to_rfc3339())
        })
    }
}

fn from_unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// Tries RFC 3339 first, then the common naive forms (read as UTC).
fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
}

/// Creates a datetime validator.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = datetime(DatetimeOptions::new().raw());
/// assert_eq!(
///     v.validate(Some(&json!("1970-01-01T00:02:00Z"))).unwrap(),
///     Some(json!(120))
/// );
/// assert!(v.validate(Some(&json!("not a date"))).is_err());
/// ```
#[must_use]
pub fn datetime(options: DatetimeOptions) -> Validator<DatetimeRule> {
    let DatetimeOptions { common, raw } = options;
    Validator::new(common, DatetimeRule { raw })
}
