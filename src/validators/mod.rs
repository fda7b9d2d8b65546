//! Built-in validators.
//!
//! Each validator is a factory function taking its options struct (or
//! plain [`CommonOptions`](crate::foundation::CommonOptions) when it has
//! none of its own) and returning a ready
//! [`Validator`](crate::foundation::Validator). Composite validators
//! additionally take their child validators as boxed trait objects.

mod any;
mod array;
mod boolean;
mod datetime;
mod number;
mod object;
mod one_of;
mod string;

pub use any::{AnyRule, any};
pub use array::{ArrayOptions, ArrayRule, TupleRule, array, tuple};
pub use boolean::{BooleanRule, boolean};
pub use datetime::{DatetimeOptions, DatetimeRule, datetime};
pub use number::{NumberChoices, NumberOptions, NumberRule, number};
pub use object::{RecordOptions, RecordRule, StructRule, record, structure};
pub use one_of::{OneOfRule, one_of};
pub use string::{Pattern, StringChoices, StringOptions, StringRule, string};
