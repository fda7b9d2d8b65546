//! Convenience re-exports for the common case.
//!
//! ```
//! use validata::prelude::*;
//! ```

pub use crate::foundation::{
    BoxValidator, CommonOptions, CustomHook, Rule, SharedValidator, Validate, ValidationError,
    ValidationResult, Validator,
};
pub use crate::schema::{Definition, compile};
pub use crate::validators::{
    ArrayOptions, DatetimeOptions, NumberChoices, NumberOptions, Pattern, RecordOptions,
    StringChoices, StringOptions, any, array, boolean, datetime, number, one_of, record, string,
    structure, tuple,
};
