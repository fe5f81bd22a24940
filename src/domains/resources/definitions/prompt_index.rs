//! Prompt index resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::CatalogView;

/// Index of every prompt in the catalog.
pub struct PromptIndexResource;

impl ResourceDefinition for PromptIndexResource {
    const URI: &'static str = "copilot-prompts://list";
    const NAME: &'static str = "All Prompts";
    const DESCRIPTION: &'static str = "List of all available GitHub Copilot prompts";
    const MIME_TYPE: &'static str = "application/json";

    fn view() -> CatalogView {
        CatalogView::PromptIndex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_index_metadata() {
        assert_eq!(PromptIndexResource::URI, "copilot-prompts://list");
        assert_eq!(PromptIndexResource::MIME_TYPE, "application/json");
        assert!(matches!(PromptIndexResource::view(), CatalogView::PromptIndex));
    }
}
