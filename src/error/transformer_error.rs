//! Transformer error types.

/// Errors that can occur while transforming a field configuration.
///
/// None of these are retryable: transformation is a pure function of the
/// field tree and the resolver table, so the same input fails the same way.
///
/// # Example
///
/// ```rust
/// use liform::TransformerError;
///
/// let error = TransformerError::MissingPrototype {
///     field: "tags".to_string(),
/// };
/// assert!(error.to_string().contains("\"tags\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformerError {
    /// An empty collection field has no prototype to describe its entries.
    ///
    /// The field needs either concrete entries or a declared prototype
    /// (collections only carry one when adding entries is allowed).
    #[error(
        "cannot infer the json-schema representation of an empty collection or \
         array-like type without a prototype (enable adding entries to declare one); \
         evaluating \"{field}\""
    )]
    MissingPrototype {
        /// Name of the field being transformed.
        field: String,
    },

    /// No transformer is registered for the field or any of its parent types.
    #[error("could not find a transformer for any of these types ({})", .types.join(", "))]
    NoTransformer {
        /// The type ancestry that was searched, most specific first.
        types: Vec<String>,
    },

    /// A transformer outlived the resolver it delegates to.
    #[error("transformer resolver was dropped")]
    ResolverDropped,
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TransformerError>();
    assert_sync::<TransformerError>();
};
