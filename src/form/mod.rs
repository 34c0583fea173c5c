//! In-memory models of a form framework's trees.
//!
//! Two trees are modelled here:
//! - [`FieldConfig`]: the configuration-time tree (types, options, children),
//!   consumed by the transformers to build JSON Schema.
//! - [`FormView`]: the rendered view tree carrying current values, consumed by
//!   the value normalizer.
//!
//! Both are plain owned data built by the caller with chained builder methods.
//!
//! # Example
//!
//! ```rust
//! use liform::FieldConfig;
//!
//! let form = FieldConfig::new("user", "form")
//!     .child(FieldConfig::new("name", "text").label("Name"))
//!     .child(FieldConfig::new("age", "integer").optional());
//!
//! assert_eq!(form.children().count(), 2);
//! assert!(form.is_compound());
//! ```

mod view;

pub use view::{FormView, NormalizationStrategy, ViewValue, ViewVars, NORMALIZATION_STRATEGY};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::resolver::{COMPOUND_TYPE, FORM_TYPE};

/// Options recognised on a field configuration.
///
/// `required` defaults to `true`, matching how form frameworks treat fields
/// unless told otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    /// Human-readable label, rendered as the schema `title`.
    pub label: Option<String>,
    /// Whether the field must be filled in.
    pub required: bool,
    /// HTML attributes (`pattern`, `maxlength`, `placeholder`, ...).
    pub attr: Map<String, Value>,
    /// Description rendered as the schema `description`.
    pub description: Option<String>,
    /// Explicit widget name; takes precedence over the resolver's widget.
    pub widget: Option<String>,
    /// Choices of a choice field, label to value, in display order.
    pub choices: IndexMap<String, Value>,
    /// Whether a choice field accepts several values.
    pub multiple: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            label: None,
            required: true,
            attr: Map::new(),
            description: None,
            widget: None,
            choices: IndexMap::new(),
            multiple: false,
        }
    }
}

/// Attributes attached to a field's configuration by its type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldAttributes {
    /// Template field used to add new entries to a collection.
    pub prototype: Option<Box<FieldConfig>>,
}

/// A node of the form configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    name: String,
    types: Vec<String>,
    options: FieldOptions,
    children: IndexMap<String, FieldConfig>,
    attributes: FieldAttributes,
    data: Option<Value>,
}

impl FieldConfig {
    /// Creates a field with the given name and most specific type.
    pub fn new(name: impl Into<String>, form_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: vec![form_type.into()],
            options: FieldOptions::default(),
            children: IndexMap::new(),
            attributes: FieldAttributes::default(),
            data: None,
        }
    }

    /// Appends a parent type to the type ancestry.
    ///
    /// Types are searched most specific first, so call this from the child
    /// type outwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use liform::FieldConfig;
    ///
    /// let field = FieldConfig::new("email", "email").parent("text").parent("form");
    /// assert_eq!(field.types(), ["email", "text", "form"]);
    /// ```
    pub fn parent(mut self, form_type: impl Into<String>) -> Self {
        self.types.push(form_type.into());
        self
    }

    /// Adds a child field, replacing any child with the same name.
    pub fn child(mut self, child: FieldConfig) -> Self {
        self.children.insert(child.name.clone(), child);
        self
    }

    /// Sets the `label` option.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    /// Marks the field as not required.
    pub fn optional(mut self) -> Self {
        self.options.required = false;
        self
    }

    /// Sets the `required` option.
    pub fn required(mut self, required: bool) -> Self {
        self.options.required = required;
        self
    }

    /// Sets a single HTML attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.attr.insert(key.into(), value.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.options.description = Some(description.into());
        self
    }

    /// Sets an explicit widget.
    pub fn widget(mut self, widget: impl Into<String>) -> Self {
        self.options.widget = Some(widget.into());
        self
    }

    /// Adds a choice with its display label.
    pub fn choice(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.choices.insert(label.into(), value.into());
        self
    }

    /// Allows several choices to be selected.
    pub fn multiple(mut self) -> Self {
        self.options.multiple = true;
        self
    }

    /// Declares the prototype used to describe entries of a collection.
    pub fn prototype(mut self, prototype: FieldConfig) -> Self {
        self.attributes.prototype = Some(Box::new(prototype));
        self
    }

    /// Sets the field's current data.
    pub fn data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type ancestry, most specific first.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns the field options.
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Returns the type attributes.
    pub fn attributes(&self) -> &FieldAttributes {
        &self.attributes
    }

    /// Returns the prototype attribute, if any.
    pub fn prototype_attribute(&self) -> Option<&FieldConfig> {
        self.attributes.prototype.as_deref()
    }

    /// Returns the field's current data.
    pub fn data_value(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Returns the child fields in declaration order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &FieldConfig)> {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Returns a child by name.
    pub fn get(&self, name: &str) -> Option<&FieldConfig> {
        self.children.get(name)
    }

    /// Returns true if the field has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if the field groups other fields.
    ///
    /// That is a field with children, a field whose own type is `form` (a
    /// form with no fields yet), or one with `compound` in its ancestry.
    pub fn is_compound(&self) -> bool {
        self.has_children()
            || self.types.first().is_some_and(|t| t == FORM_TYPE)
            || self.types.iter().any(|t| t == COMPOUND_TYPE)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldConfig>();
    assert_sync::<FieldConfig>();
};
