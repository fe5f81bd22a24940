//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - The catalog view its content is computed from
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod category_index;
mod prompt_index;

pub use category_index::CategoryIndexResource;
pub use prompt_index::PromptIndexResource;

use super::service::CatalogView;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and the
/// catalog view its content is rendered from.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// The catalog view this resource renders.
    fn view() -> CatalogView;
}
