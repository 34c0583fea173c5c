//! Array schema generation.
//!
//! This module provides [`ArrayTransformer`] for collection-like fields whose
//! entries are described by their first child or by their prototype.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::TransformerError;
use crate::extension::Extension;
use crate::form::FieldConfig;
use crate::TransformResult;

use super::common::{add_common_specs, label_title};
use super::traits::{ResolveTransformer, Transformer};

/// Title given to the entry schema of a collection described by its prototype.
pub const PROTOTYPE_TITLE: &str = "prototype";

/// Builds `{"type": "array", "title": ..., "items": ...}` for collections.
///
/// Each child is transformed with the transformer its type resolves to, and
/// the first child's fragment becomes `items`. A collection with no entries
/// falls back to its prototype, whose fragment is titled `"prototype"`; with
/// no prototype either, the schema cannot be inferred and
/// [`TransformerError::MissingPrototype`] is returned.
///
/// # Example
///
/// ```rust
/// use liform::{ArrayTransformer, FieldConfig, Resolver, StringTransformer, Transformer};
///
/// let resolver = Resolver::new();
/// resolver.set_transformer("text", StringTransformer, None);
///
/// let tags = FieldConfig::new("tags", "collection")
///     .label("Tags")
///     .prototype(FieldConfig::new("__name__", "text"));
///
/// let schema = ArrayTransformer::new(resolver.handle())
///     .transform(&tags, &[], None)
///     .unwrap();
///
/// assert_eq!(schema["type"], "array");
/// assert_eq!(schema["items"]["title"], "prototype");
/// ```
pub struct ArrayTransformer {
    resolver: Box<dyn ResolveTransformer>,
}

impl ArrayTransformer {
    /// Creates an array transformer resolving entries through `resolver`.
    pub fn new<R>(resolver: R) -> Self
    where
        R: ResolveTransformer + 'static,
    {
        Self {
            resolver: Box::new(resolver),
        }
    }
}

impl Transformer for ArrayTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        let mut children = Vec::new();
        let mut required = Vec::new();

        for (name, field) in form.children() {
            let resolved = self.resolver.resolve(field)?;
            children.push(resolved.transform(field, extensions)?);

            if resolved.transformer.is_required(field) {
                required.push(name.to_string());
            }
        }

        // Entries' required flags are not part of the array schema.
        if !required.is_empty() {
            debug!(field = form.name(), ?required, "ignoring required entries of array");
        }

        let missing_prototype = || TransformerError::MissingPrototype {
            field: form.name().to_string(),
        };

        if children.is_empty() {
            let prototype = form.prototype_attribute().ok_or_else(missing_prototype)?;

            debug!(field = form.name(), "describing empty collection from its prototype");
            let mut entry = self.resolver.resolve(prototype)?.transform(prototype, extensions)?;
            if let Some(map) = entry.as_object_mut() {
                map.insert("title".to_string(), Value::String(PROTOTYPE_TITLE.to_string()));
            }
            children.push(entry);
        }

        // Only the first entry describes the items.
        let items = children.into_iter().next().ok_or_else(missing_prototype)?;

        let schema = json!({
            "type": "array",
            "title": label_title(form),
            "items": items,
        });

        Ok(add_common_specs(form, schema, extensions, widget))
    }
}
