//! Declarative schemas: a serializable [`Definition`] tree compiled into
//! a validator tree.
//!
//! Definitions are plain data, so a schema can live in a JSON config
//! file and be compiled at load time:
//!
//! ```
//! use validata::prelude::*;
//! use serde_json::json;
//!
//! let definition: Definition = serde_json::from_str(
//!     r#"{
//!         "type": "struct",
//!         "struct": {
//!             "name": { "type": "string", "min": 1 },
//!             "age": { "type": "number", "min": 0, "required": false }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let validator = compile(definition);
//! assert_eq!(
//!     validator.validate(Some(&json!({"name": "Alice"}))).unwrap(),
//!     Some(json!({"name": "Alice"}))
//! );
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{BoxValidator, CommonOptions};
use crate::validators::{
    ArrayOptions, NumberOptions, RecordOptions, StringOptions, any, array, boolean, number,
    record, string, structure, tuple,
};

/// An array definition: element schema plus array options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayDefinition {
    #[serde(flatten)]
    pub options: ArrayOptions,
    /// Schema every element must satisfy.
    pub item: Box<Definition>,
}

/// A tuple definition: one schema per position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TupleDefinition {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Positional schemas.
    pub tuple: Vec<Definition>,
}

/// A struct definition: a fixed set of named field schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDefinition {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Field schemas, validated in declaration order.
    #[serde(rename = "struct")]
    pub fields: IndexMap<String, Definition>,
}

/// A record definition: free-form keys, one schema for all values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDefinition {
    #[serde(flatten)]
    pub options: RecordOptions,
    /// Schema every value must satisfy.
    pub record: Box<Definition>,
}

/// A declarative validator description, tagged by `"type"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Definition {
    /// Accept anything present; only the common envelope applies.
    Any(CommonOptions),
    Boolean(CommonOptions),
    Number(NumberOptions),
    String(StringOptions),
    Array(ArrayDefinition),
    Tuple(TupleDefinition),
    Struct(StructDefinition),
    Record(RecordDefinition),
}

/// Compiles a [`Definition`] tree into a validator tree, bottom-up.
#[must_use]
pub fn compile(definition: Definition) -> BoxValidator {
    match definition {
        Definition::Any(options) => any(options).boxed(),
        Definition::Boolean(options) => boolean(options).boxed(),
        Definition::Number(options) => number(options).boxed(),
        Definition::String(options) => string(options).boxed(),
        Definition::Array(def) => array(compile(*def.item), def.options).boxed(),
        Definition::Tuple(def) => {
            tuple(def.tuple.into_iter().map(compile).collect(), def.common).boxed()
        }
        Definition::Struct(def) => structure(
            def.fields
                .into_iter()
                .map(|(name, field)| (name, compile(field)))
                .collect(),
            def.common,
        )
        .boxed(),
        Definition::Record(def) => record(compile(*def.record), def.options).boxed(),
    }
}
