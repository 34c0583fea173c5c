//! Error types for schema generation failures.
//!
//! This module provides the [`TransformerError`] raised while turning a field
//! configuration tree into a JSON Schema fragment.

mod transformer_error;

pub use transformer_error::TransformerError;
