//! Add-on behaviors applied to every schema fragment.

use serde_json::Value;

use crate::form::FieldConfig;

/// Decorates the schema fragment of a field.
///
/// Extensions run after the common specs, in registration order, on every
/// fragment produced during a transformation (children included).
pub trait Extension: Send + Sync {
    /// Returns the decorated fragment.
    fn apply(&self, form: &FieldConfig, schema: Value) -> Value;
}

/// Sets `default` to the field's current data.
///
/// Fields without data, or with null data, are left alone.
///
/// # Example
///
/// ```rust
/// use liform::{Extension, FieldConfig, FormDataExtension};
/// use serde_json::json;
///
/// let field = FieldConfig::new("country", "text").data("SE");
/// let schema = FormDataExtension.apply(&field, json!({"type": "string"}));
///
/// assert_eq!(schema["default"], "SE");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormDataExtension;

impl Extension for FormDataExtension {
    fn apply(&self, form: &FieldConfig, mut schema: Value) -> Value {
        let data = form.data_value().filter(|data| !data.is_null());

        if let (Some(data), Some(map)) = (data, schema.as_object_mut()) {
            map.insert("default".to_string(), data.clone());
        }

        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_data_no_default() {
        let field = FieldConfig::new("country", "text");
        let schema = FormDataExtension.apply(&field, json!({"type": "string"}));

        assert_eq!(schema, json!({"type": "string"}));
    }

    #[test]
    fn test_null_data_no_default() {
        let field = FieldConfig::new("country", "text").data(Value::Null);
        let schema = FormDataExtension.apply(&field, json!({}));

        assert!(schema.get("default").is_none());
    }

    #[test]
    fn test_structured_data_is_copied() {
        let field = FieldConfig::new("tags", "collection").data(json!(["a", "b"]));
        let schema = FormDataExtension.apply(&field, json!({"type": "array"}));

        assert_eq!(schema["default"], json!(["a", "b"]));
    }
}
