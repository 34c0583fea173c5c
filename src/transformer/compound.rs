//! Object schema generation.
//!
//! This module provides [`CompoundTransformer`] for fields that group other
//! fields, such as a whole form or an embedded address.

use serde_json::{json, Map, Value};

use crate::extension::Extension;
use crate::form::FieldConfig;
use crate::TransformResult;

use super::common::{add_common_specs, label_title};
use super::traits::{ResolveTransformer, Transformer};

/// Builds `{"title": ..., "type": "object", "properties": {...}}` fragments.
///
/// Children are transformed in declaration order and numbered with a
/// `propertyOrder` starting at 1. The names of required children are listed
/// under `required` when there is at least one.
///
/// # Example
///
/// ```rust
/// use liform::{CompoundTransformer, FieldConfig, Resolver, StringTransformer, Transformer};
/// use serde_json::json;
///
/// let resolver = Resolver::new();
/// resolver.set_transformer("text", StringTransformer, None);
///
/// let form = FieldConfig::new("user", "form")
///     .child(FieldConfig::new("name", "text"))
///     .child(FieldConfig::new("nickname", "text").optional());
///
/// let schema = CompoundTransformer::new(resolver.handle())
///     .transform(&form, &[], None)
///     .unwrap();
///
/// assert_eq!(schema["type"], "object");
/// assert_eq!(schema["properties"]["nickname"]["propertyOrder"], 2);
/// assert_eq!(schema["required"], json!(["name"]));
/// ```
pub struct CompoundTransformer {
    resolver: Box<dyn ResolveTransformer>,
}

impl CompoundTransformer {
    /// Creates a compound transformer resolving children through `resolver`.
    pub fn new<R>(resolver: R) -> Self
    where
        R: ResolveTransformer + 'static,
    {
        Self {
            resolver: Box::new(resolver),
        }
    }
}

impl Transformer for CompoundTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (order, (name, field)) in form.children().enumerate() {
            let resolved = self.resolver.resolve(field)?;
            let mut child = resolved.transform(field, extensions)?;
            if let Some(map) = child.as_object_mut() {
                map.insert("propertyOrder".to_string(), json!(order + 1));
            }
            properties.insert(name.to_string(), child);

            if resolved.transformer.is_required(field) {
                required.push(Value::String(name.to_string()));
            }
        }

        let mut schema = json!({
            "title": label_title(form),
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            if let Some(map) = schema.as_object_mut() {
                map.insert("required".to_string(), Value::Array(required));
            }
        }

        Ok(add_common_specs(form, schema, extensions, widget))
    }
}
