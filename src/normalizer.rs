//! Normalization of rendered form views into plain data.
//!
//! This module provides [`FormViewNormalizer`], which turns a [`FormView`]
//! tree into a `serde_json::Value` holding the form's current values. The
//! output is meant to hydrate client-side form state.

use serde_json::{Map, Value};
use tracing::trace;

use crate::form::{FormView, NormalizationStrategy, ViewValue};

/// Converts a rendered form view into its initial values.
///
/// Children become an object by default. A node's
/// [`NormalizationStrategy`] switches its children to an array of values
/// ([`ChildrenAsArray`](NormalizationStrategy::ChildrenAsArray)) or to an
/// array of the names of the children whose value is `true`
/// ([`ChildrenAsTrueNames`](NormalizationStrategy::ChildrenAsTrueNames)).
///
/// Leaf children whose value is null or the empty string are left out
/// entirely; client form libraries treat a missing key and an empty value
/// alike, and serialized empty strings at array positions break some of them.
///
/// # Example
///
/// ```rust
/// use liform::{FormView, FormViewNormalizer, NormalizationStrategy};
/// use serde_json::json;
///
/// let view = FormView::new()
///     .child("name", FormView::leaf(json!("Alice")))
///     .child("nickname", FormView::leaf(json!("")))
///     .child(
///         "roles",
///         FormView::new()
///             .strategy(NormalizationStrategy::ChildrenAsTrueNames)
///             .child("admin", FormView::checkbox(true))
///             .child("editor", FormView::checkbox(false)),
///     );
///
/// let values = FormViewNormalizer::new().normalize(&view);
/// assert_eq!(values, json!({"name": "Alice", "roles": ["admin"]}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormViewNormalizer;

impl FormViewNormalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a view node and its descendants.
    ///
    /// Never fails: nodes with an unexpected shape pass their raw value through.
    pub fn normalize(&self, form: &FormView) -> Value {
        let use_array = self.use_array_for_children(form);

        if form.has_children() {
            let use_names = self.use_name_as_child(form);
            let mut items = Vec::new();
            let mut fields = Map::new();

            for (name, child) in form.children() {
                if !child.has_children() && child.vars().value.is_blank() {
                    trace!(child = name, "skipping empty form value");
                    continue;
                }

                let normalized = self.normalize(child);

                if !use_array {
                    fields.insert(name.to_string(), normalized);
                } else if !use_names {
                    items.push(normalized);
                } else if normalized == Value::Bool(true) {
                    items.push(Value::String(name.to_string()));
                }
            }

            return if use_array {
                Value::Array(items)
            } else {
                Value::Object(fields)
            };
        }

        // Checkboxes yield true/false rather than the framework's 1/0.
        if let Some(checked) = form.vars().checked {
            return Value::Bool(checked);
        }

        match &form.vars().value {
            ViewValue::Data(value) => value.clone(),
            // An empty collection is still an array when the widget expects one.
            ViewValue::Collection(items) if items.is_empty() && use_array => Value::Array(Vec::new()),
            ViewValue::Collection(items) if items.is_empty() => Value::Object(Map::new()),
            ViewValue::Collection(items) => Value::Array(items.clone()),
        }
    }

    /// Returns true if the node's children are normalized as an array.
    ///
    /// This holds for both array strategies; see [`use_name_as_child`](Self::use_name_as_child)
    /// for how the elements are built.
    pub fn use_array_for_children(&self, form: &FormView) -> bool {
        form.vars().normalization_strategy == Some(NormalizationStrategy::ChildrenAsArray)
            || self.use_name_as_child(form)
    }

    /// Returns true if the node's children are normalized as the names of the
    /// children whose value is `true`.
    pub fn use_name_as_child(&self, form: &FormView) -> bool {
        form.vars().normalization_strategy == Some(NormalizationStrategy::ChildrenAsTrueNames)
    }
}

/// Normalizes a view with a default [`FormViewNormalizer`].
pub fn normalize_view(form: &FormView) -> Value {
    FormViewNormalizer::new().normalize(form)
}
