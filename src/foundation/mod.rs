//! Core validation types and traits.
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Traits**: [`Validate`] (the calling contract), [`Rule`] (the bare
//!   type-specific check)
//! - **Envelope**: [`Validator`], which lifts a `Rule` into the common
//!   `null` / `required` / `defaults` / `custom` handling
//! - **Errors**: [`ValidationError`]
//! - **Paths**: helpers producing the bracket-qualified field paths used
//!   in error messages (`field[3]`, `field["key"]`)
//!
//! The whole subsystem is synchronous and pure: validators never block,
//! never perform I/O, and hold no shared mutable state, so a built
//! validator tree can be used concurrently from any number of threads.

pub mod error;
pub mod options;
pub mod traits;

pub use error::ValidationError;
pub use options::{CommonOptions, CustomHook};
pub use traits::{
    BoxValidator, DEFAULT_FIELD, Rule, SharedValidator, Validate, ValidationResult, Validator,
};

/// Qualifies `field` with an array index: `items` → `items[3]`.
#[must_use]
pub fn index_path(field: &str, index: usize) -> String {
    format!("{field}[{index}]")
}

/// Qualifies `field` with an object key: `user` → `user["name"]`.
#[must_use]
pub fn key_path(field: &str, key: &str) -> String {
    format!("{field}[\"{key}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_path_format() {
        assert_eq!(index_path("items", 3), "items[3]");
    }

    #[test]
    fn key_path_format() {
        assert_eq!(key_path("user", "name"), "user[\"name\"]");
    }

    #[test]
    fn paths_nest() {
        let path = key_path(&index_path("rows", 0), "id");
        assert_eq!(path, "rows[0][\"id\"]");
    }
}
