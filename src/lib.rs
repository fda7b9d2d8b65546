//! # validata
//!
//! Composable validation and coercion for dynamic values.
//!
//! Every validator wraps a type-specific rule in a shared envelope that
//! handles presence, null, defaults, and a custom post-hook, so the same
//! semantics apply uniformly across the whole tree:
//!
//! - **absent** input (`None`) is resolved by `defaults` or `required`
//! - **null** input is admitted only when `null: true`
//! - otherwise the rule checks and **coerces** the value (`"42"` → `42`)
//! - an optional custom hook gets the last word on the coerced value
//!
//! Composite validators (arrays, tuples, structs, records, unions) run
//! child validators and report failures with a path into the value, like
//! `user["tags"][2]`.
//!
//! ## Quick start
//!
//! ```
//! use validata::prelude::*;
//! use serde_json::json;
//!
//! let validator = structure(
//!     vec![
//!         ("name".into(), string(StringOptions::new().min(1)).boxed()),
//!         (
//!             "age".into(),
//!             number(NumberOptions {
//!                 common: CommonOptions::new().optional(),
//!                 ..NumberOptions::new().min(0.0)
//!             })
//!             .boxed(),
//!         ),
//!     ],
//!     CommonOptions::new(),
//! );
//!
//! let validated = validator
//!     .validate(Some(&json!({"name": "Alice", "age": "30"})))
//!     .unwrap();
//! assert_eq!(validated, Some(json!({"name": "Alice", "age": 30})));
//! ```
//!
//! ## Declarative schemas
//!
//! The same trees can be described as data and compiled, which keeps
//! validation rules in config files instead of code:
//!
//! ```
//! use validata::prelude::*;
//! use serde_json::json;
//!
//! let definition: Definition = serde_json::from_str(
//!     r#"{"type": "array", "min": 1, "item": {"type": "boolean"}}"#,
//! )
//! .unwrap();
//! let validator = compile(definition);
//! assert_eq!(
//!     validator.validate(Some(&json!(["yes", 0]))).unwrap(),
//!     Some(json!([true, false]))
//! );
//! ```

pub mod foundation;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use foundation::{
    BoxValidator, CommonOptions, CustomHook, Rule, SharedValidator, Validate, ValidationError,
    ValidationResult, Validator,
};
pub use schema::{Definition, compile};
