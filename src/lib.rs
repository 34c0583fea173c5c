//! # Liform
//!
//! Generates JSON Schema from form configuration trees, and initial values
//! from rendered form views, so a client can render, validate and hydrate a
//! server-defined form.
//!
//! ## Overview
//!
//! A form framework describes a form twice: once as configuration (field
//! types, labels, required flags, child fields) and once as a rendered view
//! carrying the current values. This crate bridges both to plain JSON:
//!
//! - **Transformers** walk a [`FieldConfig`] tree and build a JSON Schema
//!   fragment per field. A [`Resolver`] picks each field's [`Transformer`]
//!   from its type ancestry; [`Extension`]s decorate every fragment.
//! - The [`FormViewNormalizer`] walks a [`FormView`] tree and builds the
//!   form's values, honoring per-node [`NormalizationStrategy`] hints.
//!
//! ## Core Types
//!
//! - [`Liform`]: Entry point combining a resolver, extensions and the normalizer
//! - [`FieldConfig`] / [`FormView`]: The configuration and view trees
//! - [`Transformer`]: Builds the schema fragment of one kind of field
//! - [`TransformerError`]: Why a schema could not be generated
//!
//! ## Example
//!
//! ```rust
//! use liform::{FieldConfig, Liform};
//! use serde_json::json;
//!
//! let liform = Liform::with_defaults();
//!
//! let form = FieldConfig::new("task", "form")
//!     .child(FieldConfig::new("title", "text").label("Title"))
//!     .child(
//!         FieldConfig::new("tags", "collection")
//!             .label("Tags")
//!             .optional()
//!             .prototype(FieldConfig::new("__name__", "text")),
//!     );
//!
//! let schema = liform.transform(&form).unwrap();
//! assert_eq!(schema["properties"]["title"]["type"], "string");
//! assert_eq!(schema["properties"]["tags"]["items"]["title"], "prototype");
//! assert_eq!(schema["required"], json!(["title"]));
//!
//! // Collections without entries or prototype cannot be described
//! let bare = FieldConfig::new("tags", "collection");
//! assert!(liform.transform(&bare).is_err());
//! ```

pub mod error;
pub mod extension;
pub mod form;
pub mod liform;
pub mod normalizer;
pub mod resolver;
pub mod transformer;

pub use error::TransformerError;
pub use extension::{Extension, FormDataExtension};
pub use form::{
    FieldAttributes, FieldConfig, FieldOptions, FormView, NormalizationStrategy, ViewValue,
    ViewVars, NORMALIZATION_STRATEGY,
};
pub use liform::Liform;
pub use normalizer::{normalize_view, FormViewNormalizer};
pub use resolver::{Resolver, ResolverHandle, COMPOUND_TYPE, FORM_TYPE};
pub use transformer::{
    add_common_specs, ArrayTransformer, BooleanTransformer, ChoiceTransformer,
    CompoundTransformer, IntegerTransformer, NumberTransformer, ResolveTransformer, Resolved,
    StringTransformer, Transformer, PROTOTYPE_TITLE,
};

/// Type alias for the result of transforming a field into a schema fragment.
pub type TransformResult = Result<serde_json::Value, TransformerError>;
