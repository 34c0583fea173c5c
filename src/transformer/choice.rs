//! Schema generation for choice fields.

use serde_json::{json, Value};

use crate::extension::Extension;
use crate::form::FieldConfig;
use crate::TransformResult;

use super::common::add_common_specs;
use super::traits::Transformer;

/// Builds enum fragments for fields with a fixed set of choices.
///
/// A single choice becomes `{"type": "string", "enum": [...], "enum_titles": [...]}`.
/// A multiple choice becomes an array of such strings with unique items and
/// `minItems` of 1 when the field is required.
///
/// # Example
///
/// ```rust
/// use liform::{ChoiceTransformer, FieldConfig, Transformer};
/// use serde_json::json;
///
/// let field = FieldConfig::new("size", "choice")
///     .choice("Small", "s")
///     .choice("Large", "l");
///
/// let schema = ChoiceTransformer.transform(&field, &[], None).unwrap();
/// assert_eq!(schema["enum"], json!(["s", "l"]));
/// assert_eq!(schema["enum_titles"], json!(["Small", "Large"]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceTransformer;

impl Transformer for ChoiceTransformer {
    fn transform(
        &self,
        form: &FieldConfig,
        extensions: &[Box<dyn Extension>],
        widget: Option<&str>,
    ) -> TransformResult {
        let options = form.options();
        let choices: Vec<Value> = options.choices.values().map(choice_value).collect();
        let titles: Vec<Value> = options
            .choices
            .keys()
            .map(|label| Value::String(label.clone()))
            .collect();

        let schema = if options.multiple {
            let min_items = if self.is_required(form) { 1 } else { 0 };
            json!({
                "items": {
                    "type": "string",
                    "enum": choices,
                    "enum_titles": titles,
                },
                "minItems": min_items,
                "uniqueItems": true,
                "type": "array",
            })
        } else {
            json!({
                "enum": choices,
                "enum_titles": titles,
                "type": "string",
            })
        };

        Ok(add_common_specs(form, schema, extensions, widget))
    }
}

/// Choice values are submitted as strings.
fn choice_value(value: &Value) -> Value {
    match value {
        Value::String(_) => value.clone(),
        Value::Null => Value::String(String::new()),
        Value::Bool(b) => Value::String(if *b { "1" } else { "0" }.to_string()),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_choice_is_array() {
        let field = FieldConfig::new("colors", "choice")
            .choice("Red", "r")
            .choice("Blue", "b")
            .multiple();

        let schema = ChoiceTransformer.transform(&field, &[], None).unwrap();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["enum"], json!(["r", "b"]));
        assert_eq!(schema["minItems"], 1);
        assert_eq!(schema["uniqueItems"], true);
    }

    #[test]
    fn test_optional_multiple_choice_allows_none() {
        let field = FieldConfig::new("colors", "choice")
            .choice("Red", "r")
            .multiple()
            .optional();

        let schema = ChoiceTransformer.transform(&field, &[], None).unwrap();
        assert_eq!(schema["minItems"], 0);
    }

    #[test]
    fn test_non_string_values_are_stringified() {
        let field = FieldConfig::new("rating", "choice")
            .choice("One", 1)
            .choice("Yes", true);

        let schema = ChoiceTransformer.transform(&field, &[], None).unwrap();
        assert_eq!(schema["enum"], json!(["1", "1"]));
    }
}
