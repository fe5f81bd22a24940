//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Static URIs
//! come from the registry; the two parameterized forms
//! (`copilot-prompts://{category}` and `copilot-prompts://prompt/{id}`)
//! are resolved against the catalog on read.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::catalog::CatalogStore;

/// URI scheme shared by every catalog resource.
const SCHEME_PREFIX: &str = "copilot-prompts://";

/// Prefix of the single-prompt details template.
const PROMPT_PREFIX: &str = "copilot-prompts://prompt/";

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// The catalog every resource is computed from.
    catalog: Arc<CatalogStore>,

    /// Registry of static resources.
    /// Key: resource URI, Value: resource metadata + catalog view
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The catalog view this resource renders.
    pub view: CatalogView,
}

/// The catalog projections exposed as static resources.
#[derive(Debug, Clone, Copy)]
pub enum CatalogView {
    /// Every prompt with its category and source URL.
    PromptIndex,

    /// Category labels with per-category record counts.
    CategoryCounts,
}

impl ResourceService {
    /// Create a new ResourceService over the given catalog.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            catalog,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Static URIs resolve through the registry; anything else under the
    /// `copilot-prompts://` scheme is treated as a template instantiation.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let text = if let Some(entry) = self.resources.get(uri) {
            self.render_view(entry.view)?
        } else {
            self.resolve_template(uri)?
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Render one of the static catalog views.
    fn render_view(&self, view: CatalogView) -> Result<String, ResourceError> {
        let value = match view {
            CatalogView::PromptIndex => {
                let prompts: Vec<_> = self
                    .catalog
                    .records()
                    .iter()
                    .map(|record| {
                        serde_json::json!({
                            "id": record.id,
                            "title": record.title,
                            "description": record.description,
                            "category": record.category,
                            "url": record.source_url(),
                        })
                    })
                    .collect();
                serde_json::Value::Array(prompts)
            }
            CatalogView::CategoryCounts => serde_json::to_value(self.catalog.categories())?,
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Resolve a templated URI against the catalog.
    fn resolve_template(&self, uri: &str) -> Result<String, ResourceError> {
        if let Some(id) = uri.strip_prefix(PROMPT_PREFIX) {
            let details = self
                .catalog
                .prompt_details(id)
                .map_err(|_| ResourceError::not_found(uri))?;
            return Ok(serde_json::to_string_pretty(&details)?);
        }

        if let Some(category) = uri.strip_prefix(SCHEME_PREFIX) {
            if category.is_empty() || category.contains('/') {
                return Err(ResourceError::invalid_uri(uri));
            }
            // Unknown categories yield an empty listing, not an error.
            let prompts: Vec<_> = self
                .catalog
                .records()
                .iter()
                .filter(|record| record.category == category)
                .map(|record| {
                    serde_json::json!({
                        "id": record.id,
                        "title": record.title,
                        "description": record.description,
                        "tools": record.tools,
                        "url": record.source_url(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&serde_json::Value::Array(
                prompts,
            ))?);
        }

        Err(ResourceError::not_found(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(CatalogStore::new()))
    }

    fn content_text(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);

        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 2);
    }

    #[tokio::test]
    async fn test_read_prompt_index() {
        let service = service();
        let result = service.read_resource("copilot-prompts://list").await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 35);
        assert_eq!(entries[0]["id"], "aspnet-minimal-api-openapi");
        assert!(entries[0].get("tools").is_none());
        assert!(
            entries[0]["url"]
                .as_str()
                .unwrap()
                .ends_with("aspnet-minimal-api-openapi.prompt.md")
        );
    }

    #[tokio::test]
    async fn test_read_category_counts() {
        let service = service();
        let result = service
            .read_resource("copilot-prompts://categories")
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
        assert_eq!(parsed["testing"], 4);
        assert_eq!(parsed["documentation"], 9);

        let total: u64 = parsed
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum();
        assert_eq!(total, 35);
    }

    #[tokio::test]
    async fn test_read_category_template() {
        let service = service();
        let result = service
            .read_resource("copilot-prompts://github")
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "my-issues");
        assert!(entries[0]["tools"].is_array());
        assert!(entries[0].get("category").is_none());
    }

    #[tokio::test]
    async fn test_read_unknown_category_is_empty_listing() {
        let service = service();
        let result = service
            .read_resource("copilot-prompts://no-such-category")
            .await
            .unwrap();
        assert_eq!(content_text(&result), "[]");
    }

    #[tokio::test]
    async fn test_read_prompt_details_template() {
        let service = service();
        let result = service
            .read_resource("copilot-prompts://prompt/csharp-nunit")
            .await
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(content_text(&result)).unwrap();
        assert_eq!(parsed["id"], "csharp-nunit");
        assert_eq!(parsed["category"], "testing");
        assert!(parsed["install_url"].as_str().unwrap().contains("vscode.dev"));
    }

    #[tokio::test]
    async fn test_read_unknown_prompt_is_not_found() {
        let service = service();
        let result = service
            .read_resource("copilot-prompts://prompt/nonexistent-id")
            .await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_foreign_scheme_is_not_found() {
        let service = service();
        let result = service.read_resource("file:///etc/passwd").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
