//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// Only direct id lookups fail; search, filter, and listing operations are
/// total and return empty collections on no-match.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record exists under the requested id.
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),
}

impl CatalogError {
    /// Create a new "prompt not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::PromptNotFound(id.into())
    }
}
