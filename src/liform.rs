//! Entry point tying the resolver, extensions and normalizer together.

use std::fmt;

use serde_json::Value;

use crate::extension::Extension;
use crate::form::{FieldConfig, FormView};
use crate::normalizer::FormViewNormalizer;
use crate::resolver::Resolver;
use crate::TransformResult;

/// Generates the JSON Schema and initial values of forms.
///
/// # Example
///
/// ```rust
/// use liform::{FieldConfig, FormDataExtension, FormView, Liform};
/// use serde_json::json;
///
/// let liform = Liform::with_defaults().add_extension(FormDataExtension);
///
/// let form = FieldConfig::new("profile", "form")
///     .child(FieldConfig::new("name", "text").label("Name").data("Alice"))
///     .child(FieldConfig::new("newsletter", "checkbox").optional());
///
/// let schema = liform.transform(&form).unwrap();
/// assert_eq!(schema["properties"]["name"]["default"], "Alice");
/// assert_eq!(schema["properties"]["newsletter"]["widget"], "checkbox");
///
/// let view = FormView::new()
///     .child("name", FormView::leaf(json!("Alice")))
///     .child("newsletter", FormView::checkbox(false));
/// assert_eq!(liform.normalize(&view), json!({"name": "Alice", "newsletter": false}));
/// ```
pub struct Liform {
    resolver: Resolver,
    extensions: Vec<Box<dyn Extension>>,
    normalizer: FormViewNormalizer,
}

impl Liform {
    /// Creates a generator resolving transformers through `resolver`.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            extensions: Vec::new(),
            normalizer: FormViewNormalizer::new(),
        }
    }

    /// Creates a generator with the [standard](Resolver::standard) transformers.
    pub fn with_defaults() -> Self {
        Self::new(Resolver::standard())
    }

    /// Adds an extension applied to every generated fragment.
    pub fn add_extension<E>(mut self, extension: E) -> Self
    where
        E: Extension + 'static,
    {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Returns the resolver, e.g. to register more transformers.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Generates the JSON Schema of a form.
    ///
    /// # Errors
    ///
    /// Fails when a field has no transformer, or when a collection has neither
    /// entries nor a prototype.
    pub fn transform(&self, form: &FieldConfig) -> TransformResult {
        self.resolver.resolve(form)?.transform(form, &self.extensions)
    }

    /// Normalizes a rendered form into its initial values.
    pub fn normalize(&self, view: &FormView) -> Value {
        self.normalizer.normalize(view)
    }
}

impl fmt::Debug for Liform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Liform")
            .field("resolver", &self.resolver)
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}

impl Default for Liform {
    fn default() -> Self {
        Self::with_defaults()
    }
}
