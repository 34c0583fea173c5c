//! Decoration shared by every transformer.

use serde_json::Value;

use crate::extension::Extension;
use crate::form::FieldConfig;

/// Applies the specs every schema fragment gets, then the extensions.
///
/// In order: `title` from the label, `attr`, `pattern` from `attr.pattern`,
/// `description`, `widget` (the field's own widget option wins over the
/// resolver's), and finally each extension in turn. Options that are unset
/// leave the fragment untouched.
///
/// # Example
///
/// ```rust
/// use liform::{add_common_specs, FieldConfig};
/// use serde_json::json;
///
/// let field = FieldConfig::new("code", "text")
///     .label("Code")
///     .attr("pattern", "^[A-Z]+$");
///
/// let schema = add_common_specs(&field, json!({"type": "string"}), &[], Some("code"));
/// assert_eq!(schema["title"], "Code");
/// assert_eq!(schema["pattern"], "^[A-Z]+$");
/// assert_eq!(schema["widget"], "code");
/// ```
pub fn add_common_specs(
    form: &FieldConfig,
    schema: Value,
    extensions: &[Box<dyn Extension>],
    widget: Option<&str>,
) -> Value {
    let mut schema = schema;

    if let Some(map) = schema.as_object_mut() {
        let options = form.options();

        if let Some(label) = options.label.as_deref().filter(|l| !l.is_empty()) {
            map.insert("title".to_string(), Value::String(label.to_string()));
        }

        if !options.attr.is_empty() {
            map.insert("attr".to_string(), Value::Object(options.attr.clone()));

            if let Some(pattern) = options.attr.get("pattern") {
                map.insert("pattern".to_string(), pattern.clone());
            }
        }

        if let Some(description) = options.description.as_deref().filter(|d| !d.is_empty()) {
            map.insert("description".to_string(), Value::String(description.to_string()));
        }

        let widget = options.widget.as_deref().or(widget);
        if let Some(widget) = widget {
            map.insert("widget".to_string(), Value::String(widget.to_string()));
        }
    }

    extensions
        .iter()
        .fold(schema, |schema, extension| extension.apply(form, schema))
}

/// The configured label as a schema `title`, null when unset.
pub(crate) fn label_title(form: &FieldConfig) -> Value {
    form.options()
        .label
        .clone()
        .map(Value::String)
        .unwrap_or(Value::Null)
}
