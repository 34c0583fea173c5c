//! Transformers from field configurations to JSON Schema fragments.
//!
//! Each field type has a [`Transformer`]; a [`ResolveTransformer`] (usually a
//! [`Resolver`](crate::Resolver)) picks the transformer of a field. Transformers
//! for fields that contain other fields ([`ArrayTransformer`],
//! [`CompoundTransformer`]) resolve their children recursively.
//!
//! # Example
//!
//! ```rust
//! use liform::{FieldConfig, IntegerTransformer, Transformer};
//!
//! let field = FieldConfig::new("age", "integer").label("Age");
//! let schema = IntegerTransformer.transform(&field, &[], None).unwrap();
//!
//! assert_eq!(schema["type"], "integer");
//! assert_eq!(schema["title"], "Age");
//! ```

mod array;
mod choice;
mod common;
mod compound;
mod scalar;
mod traits;

pub use array::{ArrayTransformer, PROTOTYPE_TITLE};
pub use choice::ChoiceTransformer;
pub use common::add_common_specs;
pub use compound::CompoundTransformer;
pub use scalar::{BooleanTransformer, IntegerTransformer, NumberTransformer, StringTransformer};
pub use traits::{ResolveTransformer, Resolved, Transformer};
