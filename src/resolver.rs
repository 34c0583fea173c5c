//! Transformer resolution by form type.
//!
//! This module provides the [`Resolver`] type that maps form type names to
//! transformers and picks the transformer of a field from its type ancestry.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::error::TransformerError;
use crate::form::FieldConfig;
use crate::transformer::{
    ArrayTransformer, BooleanTransformer, ChoiceTransformer, CompoundTransformer,
    IntegerTransformer, NumberTransformer, ResolveTransformer, Resolved, StringTransformer,
    Transformer,
};

/// Form type used when nothing in a grouping field's ancestry matches.
pub const COMPOUND_TYPE: &str = "compound";

/// Base type of every form type; a field whose own type is this groups other fields.
pub const FORM_TYPE: &str = "form";

/// Type alias for the transformer storage map.
type TransformerMap = RwLock<HashMap<String, Resolved>>;

/// A thread-safe table of transformers keyed by form type.
///
/// Cloning a resolver shares its table. Transformers that recurse into child
/// fields hold a [`ResolverHandle`] rather than a clone, so the table does not
/// keep itself alive.
///
/// # Example
///
/// ```rust
/// use liform::{FieldConfig, Resolver, StringTransformer};
///
/// let resolver = Resolver::new();
/// resolver.set_transformer("text", StringTransformer, None);
/// resolver.set_transformer("textarea", StringTransformer, Some("textarea"));
///
/// let field = FieldConfig::new("bio", "textarea").parent("text");
/// let resolved = resolver.resolve(&field).unwrap();
/// assert_eq!(resolved.widget.as_deref(), Some("textarea"));
/// ```
pub struct Resolver {
    transformers: Arc<TransformerMap>,
}

impl Resolver {
    /// Creates a resolver with no transformers.
    pub fn new() -> Self {
        Self {
            transformers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a resolver with the transformers of the common form types.
    ///
    /// | form type | transformer | widget |
    /// |---|---|---|
    /// | `text` | string | |
    /// | `textarea`, `email`, `url`, `search`, `password`, `time` | string | same as type |
    /// | `integer` | integer | |
    /// | `number` | number | |
    /// | `money`, `percent` | number | same as type |
    /// | `checkbox` | boolean | `checkbox` |
    /// | `choice` | choice | |
    /// | `collection` | array | |
    /// | `compound` | compound | |
    ///
    /// Fields whose own type is `form` resolve to the compound transformer too.
    pub fn standard() -> Self {
        let resolver = Self::new();

        resolver.set_transformer("text", StringTransformer, None);
        for widget in ["textarea", "email", "url", "search", "password", "time"] {
            resolver.set_transformer(widget, StringTransformer, Some(widget));
        }
        resolver.set_transformer("integer", IntegerTransformer, None);
        resolver.set_transformer("number", NumberTransformer, None);
        for widget in ["money", "percent"] {
            resolver.set_transformer(widget, NumberTransformer, Some(widget));
        }
        resolver.set_transformer("checkbox", BooleanTransformer, Some("checkbox"));
        resolver.set_transformer("choice", ChoiceTransformer, None);
        resolver.set_transformer("collection", ArrayTransformer::new(resolver.handle()), None);
        resolver.set_transformer(COMPOUND_TYPE, CompoundTransformer::new(resolver.handle()), None);

        resolver
    }

    /// Registers the transformer and widget of a form type.
    ///
    /// A transformer already registered for the type is replaced.
    pub fn set_transformer<T>(&self, form_type: impl Into<String>, transformer: T, widget: Option<&str>)
    where
        T: Transformer + 'static,
    {
        self.set_shared_transformer(form_type, Arc::new(transformer), widget);
    }

    /// Registers a transformer shared with other form types or resolvers.
    pub fn set_shared_transformer(
        &self,
        form_type: impl Into<String>,
        transformer: Arc<dyn Transformer>,
        widget: Option<&str>,
    ) {
        self.transformers.write().insert(
            form_type.into(),
            Resolved {
                transformer,
                widget: widget.map(str::to_string),
            },
        );
    }

    /// Returns the entry registered for exactly `form_type`.
    pub fn get(&self, form_type: &str) -> Option<Resolved> {
        self.transformers.read().get(form_type).cloned()
    }

    /// Returns true if a transformer is registered for `form_type`.
    pub fn contains(&self, form_type: &str) -> bool {
        self.transformers.read().contains_key(form_type)
    }

    /// Returns the transformer for a field.
    ///
    /// The field's types are tried most specific first. A grouping field
    /// with no matching type falls back to the `compound` transformer.
    ///
    /// # Errors
    ///
    /// Returns `TransformerError::NoTransformer` listing the searched types
    /// when nothing matches.
    pub fn resolve(&self, form: &FieldConfig) -> Result<Resolved, TransformerError> {
        resolve_in(&self.transformers, form)
    }

    /// Returns a weak handle resolving through this resolver's table.
    pub fn handle(&self) -> ResolverHandle {
        ResolverHandle {
            transformers: Arc::downgrade(&self.transformers),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut form_types: Vec<_> = self.transformers.read().keys().cloned().collect();
        form_types.sort();

        f.debug_struct("Resolver")
            .field("form_types", &form_types)
            .finish()
    }
}

impl Clone for Resolver {
    fn clone(&self) -> Self {
        Self {
            transformers: Arc::clone(&self.transformers),
        }
    }
}

impl ResolveTransformer for Resolver {
    fn resolve(&self, form: &FieldConfig) -> Result<Resolved, TransformerError> {
        Resolver::resolve(self, form)
    }
}

/// A weak reference to a [`Resolver`]'s table.
///
/// Resolution fails with `TransformerError::ResolverDropped` once every
/// resolver sharing the table is gone.
#[derive(Debug, Clone)]
pub struct ResolverHandle {
    transformers: Weak<TransformerMap>,
}

impl ResolveTransformer for ResolverHandle {
    fn resolve(&self, form: &FieldConfig) -> Result<Resolved, TransformerError> {
        let transformers = self
            .transformers
            .upgrade()
            .ok_or(TransformerError::ResolverDropped)?;
        resolve_in(&transformers, form)
    }
}

fn resolve_in(transformers: &TransformerMap, form: &FieldConfig) -> Result<Resolved, TransformerError> {
    let transformers = transformers.read();

    if let Some(resolved) = form.types().iter().find_map(|t| transformers.get(t)) {
        return Ok(resolved.clone());
    }

    if form.is_compound() {
        if let Some(resolved) = transformers.get(COMPOUND_TYPE) {
            return Ok(resolved.clone());
        }
    }

    debug!(field = form.name(), types = ?form.types(), "no transformer registered");
    Err(TransformerError::NoTransformer {
        types: form.types().to_vec(),
    })
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Resolver>();
    assert_sync::<Resolver>();
    assert_send::<ResolverHandle>();
    assert_sync::<ResolverHandle>();
};
