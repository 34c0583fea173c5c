//! Schema generation for scalar fields.

use serde_json::{json, Value};

use crate::extension::Extension;
use crate::form::FieldConfig;
use crate::TransformResult;

use super::common::add_common_specs;
use super::traits::Transformer;

/// Builds `{"type": "string"}` fragments.
///
/// The `maxlength` and `minlength` attributes become `maxLength` and
/// `minLength` when they hold an integer (or an integer string).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTransformer;

impl Transformer for StringTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        let mut schema = json!({"type": "string"});

        if let Some(map) = schema.as_object_mut() {
            let attr = &form.options().attr;
            if let Some(max) = attr.get("maxlength").and_then(length_attr) {
                map.insert("maxLength".to_string(), json!(max));
            }
            if let Some(min) = attr.get("minlength").and_then(length_attr) {
                map.insert("minLength".to_string(), json!(min));
            }
        }

        Ok(add_common_specs(form, schema, extensions, widget))
    }
}

fn length_attr(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Builds `{"type": "integer"}` fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerTransformer;

impl Transformer for IntegerTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        Ok(add_common_specs(form, json!({"type": "integer"}), extensions, widget))
    }
}

/// Builds `{"type": "number"}` fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberTransformer;

impl Transformer for NumberTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        Ok(add_common_specs(form, json!({"type": "number"}), extensions, widget))
    }
}

/// Builds `{"type": "boolean"}` fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanTransformer;

impl Transformer for BooleanTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        Ok(add_common_specs(form, json!({"type": "boolean"}), extensions, widget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_lengths_from_attr() {
        let field = FieldConfig::new("name", "text")
            .attr("maxlength", 20)
            .attr("minlength", "2");
        let schema = StringTransformer.transform(&field, &[], None).unwrap();

        assert_eq!(schema["maxLength"], 20);
        assert_eq!(schema["minLength"], 2);
    }

    #[test]
    fn test_string_ignores_non_numeric_lengths() {
        let field = FieldConfig::new("name", "text").attr("maxlength", "lots");
        let schema = StringTransformer.transform(&field, &[], None).unwrap();

        assert!(schema.get("maxLength").is_none());
    }

    #[test]
    fn test_scalar_types() {
        let field = FieldConfig::new("x", "x");

        assert_eq!(IntegerTransformer.transform(&field, &[], None).unwrap(), json!({"type": "integer"}));
        assert_eq!(NumberTransformer.transform(&field, &[], None).unwrap(), json!({"type": "number"}));
        assert_eq!(BooleanTransformer.transform(&field, &[], None).unwrap(), json!({"type": "boolean"}));
    }

    #[test]
    fn test_is_required_follows_option() {
        assert!(StringTransformer.is_required(&FieldConfig::new("a", "text")));
        assert!(!StringTransformer.is_required(&FieldConfig::new("a", "text").optional()));
    }
}
