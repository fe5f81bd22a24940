//! Category index resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::CatalogView;

/// Category labels and the number of prompts in each.
pub struct CategoryIndexResource;

impl ResourceDefinition for CategoryIndexResource {
    const URI: &'static str = "copilot-prompts://categories";
    const NAME: &'static str = "Prompt Categories";
    const DESCRIPTION: &'static str = "All prompt categories and their counts";
    const MIME_TYPE: &'static str = "application/json";

    fn view() -> CatalogView {
        CatalogView::CategoryCounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_index_metadata() {
        assert_eq!(CategoryIndexResource::URI, "copilot-prompts://categories");
        assert_eq!(CategoryIndexResource::MIME_TYPE, "application/json");
        assert!(matches!(
            CategoryIndexResource::view(),
            CatalogView::CategoryCounts
        ));
    }
}
