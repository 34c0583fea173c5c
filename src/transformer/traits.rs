//! Traits for transformer polymorphism.
//!
//! This module provides the [`Transformer`] trait implemented by every field
//! type's schema builder, and [`ResolveTransformer`], which picks the
//! transformer for a field.

use std::fmt;
use std::sync::Arc;

use crate::error::TransformerError;
use crate::extension::Extension;
use crate::form::FieldConfig;
use crate::TransformResult;

/// Builds the JSON Schema fragment of one kind of field.
///
/// The `Send + Sync` bounds allow transformers to be shared through a
/// [`Resolver`](crate::Resolver) across threads.
///
/// # Example
///
/// ```rust
/// use liform::{Extension, FieldConfig, TransformResult, Transformer};
/// use serde_json::json;
///
/// struct ColorTransformer;
///
/// impl Transformer for ColorTransformer {
///     fn transform(
///         &self,
///         form: &FieldConfig,
///         extensions: &[Box<dyn Extension>],
///         widget: Option<&str>,
///     ) -> TransformResult {
///         let schema = json!({"type": "string", "format": "color"});
///         Ok(liform::add_common_specs(form, schema, extensions, widget))
///     }
/// }
///
/// let schema = ColorTransformer
///     .transform(&FieldConfig::new("color", "color").label("Color"), &[], None)
///     .unwrap();
/// assert_eq!(schema["title"], "Color");
/// ```
pub trait Transformer: Send + Sync {
    /// Builds the schema fragment of `form`.
    ///
    /// `extensions` are applied to the fragment after the common specs;
    /// `widget` is the widget the resolver associated with this transformer.
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult;

    /// Returns true if `form` must be filled in.
    fn is_required(&self, form: &FieldConfig) -> bool {
        form.options().required
    }
}

/// A transformer paired with the widget it renders with.
#[derive(Clone)]
pub struct Resolved {
    /// The transformer for the field's type.
    pub transformer: Arc<dyn Transformer>,
    /// Widget registered alongside the transformer.
    pub widget: Option<String>,
}

impl Resolved {
    /// Transforms `form` with the resolved transformer and widget.
    pub fn transform(&self, form: &FieldConfig, extensions: &[Box<dyn Extension>]) -> TransformResult {
        self.transformer
            .transform(form, extensions, self.widget.as_deref())
    }
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("widget", &self.widget)
            .finish_non_exhaustive()
    }
}

/// Picks the transformer of a field.
///
/// Resolution must be deterministic: the same field always resolves to the
/// same transformer, or always fails.
pub trait ResolveTransformer: Send + Sync {
    /// Returns the transformer and widget for `form`.
    fn resolve(&self, form: &FieldConfig) -> Result<Resolved, TransformerError>;
}
