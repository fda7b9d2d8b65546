//! String validator: trimming, length bounds, patterns, choices.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{CommonOptions, Rule, ValidationError, Validator};

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1\d{10}$").expect("mobile pattern is valid"));

/// Pattern constraint: a compiled regex, or one of the built-in tags.
///
/// Serializes as a plain string (`"uuid"`, `"mobile"`, or the regex
/// source), so patterns can live inside data schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pattern {
    /// Built-in UUID pattern (8-4-4-4-12 hex groups, case-insensitive).
    Uuid,
    /// Built-in mainland mobile number pattern (`^1\d{10}$`).
    Mobile,
    /// A caller-supplied regex; should usually be anchored with `^`/`$`.
    Regex(Regex),
}

impl Pattern {
    /// Compiles a pattern from its regex source.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Regex)
    }

    fn matches(&self, input: &str) -> bool {
        match self {
            Self::Uuid => UUID_PATTERN.is_match(input),
            Self::Mobile => MOBILE_PATTERN.is_match(input),
            Self::Regex(re) => re.is_match(input),
        }
    }
}

impl TryFrom<String> for Pattern {
    type Error = regex::Error;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        match source.as_str() {
            "uuid" => Ok(Self::Uuid),
            "mobile" => Ok(Self::Mobile),
            _ => Self::regex(&source),
        }
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::Uuid => "uuid".to_owned(),
            Pattern::Mobile => "mobile".to_owned(),
            Pattern::Regex(re) => re.as_str().to_owned(),
        }
    }
}

/// Admissible values for a string field: a list, or a labeled map whose
/// values are the admitted strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringChoices {
    /// Admitted strings, listed directly.
    List(Vec<String>),
    /// Label → admitted string (an enum expressed as data).
    Labeled(IndexMap<String, String>),
}

impl StringChoices {
    fn admitted(&self) -> Vec<&str> {
        match self {
            Self::List(values) => values.iter().map(String::as_str).collect(),
            Self::Labeled(map) => map.values().map(String::as_str).collect(),
        }
    }
}

/// Options for [`string`], on top of the common envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringOptions {
    #[serde(flatten)]
    pub common: CommonOptions,

    /// Minimum length. Defaults to 0 when `defaults` is the empty string,
    /// else 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,

    /// Maximum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,

    /// Pattern the (trimmed) value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    /// Admissible values; when set, length and pattern checks do not apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<StringChoices>,

    /// Whether surrounding whitespace is stripped before validation.
    /// Default `true`.
    #[serde(default = "default_trim")]
    pub trim: bool,
}

fn default_trim() -> bool {
    true
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            common: CommonOptions::default(),
            min: None,
            max: None,
            pattern: None,
            choices: None,
            trim: true,
        }
    }
}

impl StringOptions {
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
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(StringChoices::List(
            choices.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Keeps surrounding whitespace.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_trim(mut self) -> Self {
        self.trim = false;
        self
    }
}

/// Bare string check. Built from [`StringOptions`] by [`string`].
#[derive(Debug, Clone)]
pub struct StringRule {
    min: usize,
    max: Option<usize>,
    pattern: Option<Pattern>,
    choices: Option<StringChoices>,
    trim: bool,
}

impl Rule for StringRule {
    fn check(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        let Value::String(raw) = value else {
            return Err(ValidationError::new(
                "string",
                format!("{field} must be a string"),
            ));
        };
        let formatted = if self.trim { raw.trim() } else { raw.as_str() };

        if let Some(choices) = &self.choices {
            let admitted = choices.admitted();
            if !admitted.contains(&formatted) {
                return Err(ValidationError::new(
                    "choices",
                    format!("{field} can only be one of {}.", admitted.join(", ")),
                ));
            }
        } else {
            // Lengths count characters, not bytes.
            let length = formatted.chars().count();
            if length < self.min {
                return Err(ValidationError::new(
                    "min_length",
                    format!("{field}'s length must >= {}", self.min),
                ));
            }
            if let Some(max) = self.max {
                if length > max {
                    return Err(ValidationError::new(
                        "max_length",
                        format!("{field}'s length must <= {max}"),
                    ));
                }
            }
            if let Some(pattern) = &self.pattern {
                if !pattern.matches(formatted) {
                    let message = match pattern {
                        Pattern::Uuid => format!("{field} is not a valid uuid"),
                        Pattern::Mobile => format!("{field} is not a valid mobile number"),
                        Pattern::Regex(_) => format!("{field} does not match the pattern"),
                    };
                    return Err(ValidationError::new("pattern", message));
                }
            }
        }

        Ok(Value::String(formatted.to_owned()))
    }
}

/// Creates a string validator.
///
/// Input must already be a string — no cross-type coercion. The value is
/// trimmed by default, and the trimmed form is what constraints see and
/// what the validator returns.
///
/// # Examples
///
/// ```
/// use validata::prelude::*;
/// use serde_json::json;
///
/// let v = string(StringOptions::new().max(8));
/// assert_eq!(v.validate(Some(&json!("  hi  "))).unwrap(), Some(json!("hi")));
/// assert!(v.validate(Some(&json!(""))).is_err()); // min defaults to 1
/// assert!(v.validate(Some(&json!(42))).is_err());
/// ```
#[must_use]
pub fn string(options: StringOptions) -> Validator<StringRule> {
    let StringOptions {
        common,
        min,
        max,
        pattern,
        choices,
        trim,
    } = options;
    let empty_default = matches!(&common.defaults, Some(Value::String(s)) if s.is_empty());
    let min = min.unwrap_or(usize::from(!empty_default));
    Validator::new(
        common,
        StringRule {
            min,
            max,
            pattern,
            choices,
            trim,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn trims_by_default() {
        let v = string(StringOptions::new());
        assert_eq!(
            v.validate(Some(&json!("  abc "))).unwrap(),
            Some(json!("abc"))
        );
    }

    #[test]
    fn no_trim_keeps_whitespace() {
        let v = string(StringOptions::new().no_trim());
        assert_eq!(
            v.validate(Some(&json!(" abc "))).unwrap(),
            Some(json!(" abc "))
        );
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!(true))]
    #[case(json!(["a"]))]
    fn rejects_non_strings(#[case] input: Value) {
        let v = string(StringOptions::new());
        let err = v.validate(Some(&input)).unwrap_err();
        assert_eq!(err.message, "value must be a string");
    }

    #[test]
    fn min_defaults_to_one() {
        let v = string(StringOptions::new());
        let err = v.validate(Some(&json!(""))).unwrap_err();
        assert_eq!(err.message, "value's length must >= 1");
    }

    #[test]
    fn empty_string_default_relaxes_min() {
        let options = StringOptions {
            common: CommonOptions::new().with_defaults(""),
            ..StringOptions::new()
        };
        let v = string(options);
        assert_eq!(v.validate(Some(&json!(""))).unwrap(), Some(json!("")));
    }

    #[test]
    fn max_length_applies_to_trimmed_value() {
        let v = string(StringOptions::new().max(3));
        assert!(v.validate(Some(&json!("  abc  "))).is_ok());
        let err = v.validate(Some(&json!("abcd"))).unwrap_err();
        assert_eq!(err.message, "value's length must <= 3");
    }

    #[test]
    fn lengths_count_characters() {
        let v = string(StringOptions::new().max(2));
        assert!(v.validate(Some(&json!("héé"))).is_err());
        assert!(v.validate(Some(&json!("hé"))).is_ok());
    }

    #[test]
    fn choices_bypass_length_and_pattern() {
        let v = string(
            StringOptions::new()
                .min(10)
                .pattern(Pattern::Uuid)
                .choices(["a", "b"]),
        );
        assert_eq!(v.validate(Some(&json!("a"))).unwrap(), Some(json!("a")));
        let err = v.validate(Some(&json!("c"))).unwrap_err();
        assert_eq!(err.message, "value can only be one of a, b.");
    }

    #[test]
    fn labeled_choices_admit_values() {
        let choices: StringChoices =
            serde_json::from_str(r#"{"Admin": "admin", "User": "user"}"#).unwrap();
        let v = string(StringOptions {
            choices: Some(choices),
            ..StringOptions::new()
        });
        assert!(v.validate(Some(&json!("admin"))).is_ok());
        assert!(v.validate(Some(&json!("Admin"))).is_err());
    }

    #[rstest]
    #[case("c74a8f64-5a1e-4f0a-bb4d-02f6f04ca74b", true)]
    #[case("C74A8F64-5A1E-4F0A-BB4D-02F6F04CA74B", true)]
    #[case("c74a8f645a1e4f0abb4d02f6f04ca74b", false)]
    #[case("not-a-uuid", false)]
    fn uuid_pattern(#[case] input: &str, #[case] ok: bool) {
        let v = string(StringOptions::new().pattern(Pattern::Uuid));
        let result = v.validate(Some(&json!(input)));
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert_eq!(
                result.unwrap_err().message,
                "value is not a valid uuid"
            );
        }
    }

    #[rstest]
    #[case("13812345678", true)]
    #[case("23812345678", false)]
    #[case("1381234567", false)]
    fn mobile_pattern(#[case] input: &str, #[case] ok: bool) {
        let v = string(StringOptions::new().pattern(Pattern::Mobile));
        assert_eq!(v.validate(Some(&json!(input))).is_ok(), ok);
    }

    #[test]
    fn custom_regex_pattern() {
        let pattern = Pattern::regex(r"^\d{4}$").unwrap();
        let v = string(StringOptions::new().pattern(pattern));
        assert!(v.validate(Some(&json!("1234"))).is_ok());
        let err = v.validate(Some(&json!("12a4"))).unwrap_err();
        assert_eq!(err.message, "value does not match the pattern");
    }

    #[test]
    fn pattern_deserializes_from_tags_and_sources() {
        let uuid: Pattern = serde_json::from_str(r#""uuid""#).unwrap();
        assert!(matches!(uuid, Pattern::Uuid));
        let custom: Pattern = serde_json::from_str(r#""^\\d+$""#).unwrap();
        assert!(matches!(custom, Pattern::Regex(_)));
        assert!(serde_json::from_str::<Pattern>(r#""[""#).is_err());
    }
}
