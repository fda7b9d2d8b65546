//! Numeric validator: finite numbers, integer-by-default, bounds, choices.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::foundation::{CommonOptions, Rule, ValidationError, Validator};

/// Admissible values for a number field.
///
/// Either a plain list, or a labeled map whose *values* are the admitted
/// numbers (the map form lets a schema carry display names alongside the
/// values).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberChoices {
    /// Admitted numbers, listed directly.
    List(Vec<f64>),
    /// Label → admitted number.
    Labeled(IndexMap<String, f64>),
}

impl NumberChoices {
    fn admitted(&self) -> Vec<f64> {
        match self {
            Self::List(values) => values.clone(),
            Self::Labeled(map) => map.values().copied().collect(),
        }
    }
}

/// Options for [`number`], on top of the common envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberOptions {
    #[serde(flatten)]
    pub common: CommonOptions,

    /// Minimum admitted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum admitted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Whether fractional values are admitted. Default `false`.
    #[serde(default)]
    pub float: bool,

    /// Admissible values; when set, `float`/`min`/`max` do not apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<NumberChoices>,
}

impl NumberOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Admits fractional values.
    #[must_use = "builder methods must be chained or built"]
    pub fn float(mut self) -> Self {
        self.float = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn choices(mut self, choices: impl Into<Vec<f64>>) -> Self {
        self.choices = Some(NumberChoices::List(choices.into()));
        self
    }
}

/// Bare number check. Built from [`NumberOptions`] by [`number`].
#[derive(Debug, Clone)]
pub struct NumberRule {
    min: Option<f64>,
    max: Option<f64>,
    float: bool,
    choices: Option<NumberChoices>,
}

impl Rule for NumberRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        let Some(number) = parsed.filter(|n| n.is_finite()) else {
            return Err(ValidationError::new(
                "number",
                format!("{field} must be a valid number"),
            ));
        };

        if let Some(choices) = &self.choices {
            let admitted = choices.admitted();
            if !admitted.contains(&number) {
                let listed = admitted
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ValidationError::new(
                    "choices",
                    format!("{field} can only be one of {listed}.",),
                ));
            }
        } else {
            if !self.float && number.fract() != 0.0 {
                return Err(ValidationError::new(
                    "integer",
                    format!("{field} must be a integer"),
                ));
            }
            if let Some(min) = self.min {
                if number < min {
                    return Err(ValidationError::new("min", format!("{field} must >= {min}")));
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    return Err(ValidationError::new("max", format!("{field} must <= {max}")));
                }
            }
        }

        Ok(to_number_value(number))
    }
}

/// Builds a `Value` from a finite f64, preserving integer representation
/// for whole numbers.
fn to_number_value(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        Value::Number(Number::from(number as i64))
    } else {
        // Finite by construction, so from_f64 cannot fail.
        Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}

/// Creates a number validator.
///
/// Strings are parsed as numbers; the result must be finite. Without
/// `float`, fractional values are rejected.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = number(NumberOptions::new().min(0.0));
/// assert_eq!(v.validate(Some(&json!("42"))).unwrap(), Some(json!(42)));
/// assert!(v.validate(Some(&json!(1.5))).is_err()); // integers by default
/// assert!(v.validate(Some(&json!(-1))).is_err());
/// ```
#[must_use]
pub fn number(options: NumberOptions) -> Validator<NumberRule> {
    let NumberOptions {
        common,
        min,
        max,
        float,
        choices,
    } = options;
    Validator::new(
        common,
        NumberRule {
            min,
            max,
            float,
            choices,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(3), json!(3))]
    #[case(json!(-7), json!(-7))]
    #[case(json!("42"), json!(42))]
    #[case(json!(" 8 "), json!(8))]
    fn accepts_integers(#[case] input: Value, #[case] expected: Value) {
        let v = number(NumberOptions::new());
        assert_eq!(v.validate(Some(&input)).unwrap(), Some(expected));
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!(true))]
    #[case(json!([1]))]
    fn rejects_non_numbers(#[case] input: Value) {
        let v = number(NumberOptions::new());
        let err = v.validate(Some(&input)).unwrap_err();
        assert_eq!(err.message, "value must be a valid number");
    }

    #[test]
    fn rejects_fraction_by_default() {
        let v = number(NumberOptions::new());
        let err = v.validate(Some(&json!(1.5))).unwrap_err();
        assert_eq!(err.message, "value must be a integer");
    }

    #[test]
    fn float_admits_fraction() {
        let v = number(NumberOptions::new().float());
        assert_eq!(v.validate(Some(&json!(1.5))).unwrap(), Some(json!(1.5)));
    }

    #[test]
    fn string_parse_is_strict() {
        let v = number(NumberOptions::new());
        assert!(v.validate(Some(&json!("1.5abc"))).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let v = number(NumberOptions::new().min(1.0).max(10.0));
        assert!(v.validate(Some(&json!(1))).is_ok());
        assert!(v.validate(Some(&json!(10))).is_ok());
        assert_eq!(
            v.validate(Some(&json!(0))).unwrap_err().message,
            "value must >= 1"
        );
        assert_eq!(
            v.validate(Some(&json!(11))).unwrap_err().message,
            "value must <= 10"
        );
    }

    #[test]
    fn choices_bypass_other_constraints() {
        // min/max/float do not apply once choices are given.
        let v = number(NumberOptions::new().min(100.0).choices([1.5, 2.0]));
        assert_eq!(v.validate(Some(&json!(1.5))).unwrap(), Some(json!(1.5)));
        let err = v.validate(Some(&json!(3))).unwrap_err();
        assert_eq!(err.code, "choices");
        assert_eq!(err.message, "value can only be one of 1.5, 2.");
    }

    #[test]
    fn labeled_choices_admit_values() {
        let choices: NumberChoices = serde_json::from_str(r#"{"low": 1, "high": 9}"#).unwrap();
        let v = number(NumberOptions {
            choices: Some(choices),
            ..NumberOptions::new()
        });
        assert!(v.validate(Some(&json!(9))).is_ok());
        assert!(v.validate(Some(&json!(5))).is_err());
    }

    #[test]
    fn options_deserialize_from_schema_keys() {
        let options: NumberOptions =
            serde_json::from_str(r#"{"min": 0, "max": 10, "float": true, "required": false}"#)
                .unwrap();
        assert_eq!(options.min, Some(0.0));
        assert_eq!(options.max, Some(10.0));
        assert!(options.float);
        assert!(!options.common.required);
    }
}
