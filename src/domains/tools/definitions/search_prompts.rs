//! Prompt search tool definition.
//!
//! Free-text search over prompt titles, descriptions, and categories, with
//! an optional exact category filter.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::catalog::CatalogStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the prompt search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPromptsParams {
    /// Search query matched against title, description, and category.
    /// An empty query matches every prompt.
    pub query: String,

    /// Optional category filter (exact match, e.g. "testing").
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Prompt search tool - finds prompts by title, description, or category.
pub struct SearchPromptsTool;

impl SearchPromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for GitHub Copilot prompts by title, description, or category. Supports an optional category filter.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(query = %params.query))]
    pub fn execute(params: &SearchPromptsParams, catalog: &CatalogStore) -> CallToolResult {
        let results = catalog.search_prompts(&params.query, params.category.as_deref());
        info!(
            "Search for '{}' matched {} prompts",
            params.query,
            results.len()
        );

        match serde_json::to_string_pretty(&results) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize search results: {}",
                e
            ))]),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, String> {
        let query = arguments
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'query' parameter".to_string())?
            .to_string();

        let category = arguments
            .get("category")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = SearchPromptsParams { query, category };
        let result = Self::execute(&params, &catalog);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPromptsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(catalog: Arc<CatalogStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let catalog = catalog.clone();
            async move {
                let params: SearchPromptsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &catalog))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_search_execute() {
        let catalog = CatalogStore::new();
        let params = SearchPromptsParams {
            query: "spring".to_string(),
            category: None,
        };

        let result = SearchPromptsTool::execute(&params, &catalog);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        let matches = parsed.as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["id"], "create-spring-boot-java-project");
        assert_eq!(matches[1]["id"], "create-spring-boot-kotlin-project");
    }

    #[test]
    fn test_search_with_category_filter() {
        let catalog = CatalogStore::new();
        let params = SearchPromptsParams {
            query: "best practices".to_string(),
            category: Some("testing".to_string()),
        };

        let result = SearchPromptsTool::execute(&params, &catalog);
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        for entry in parsed.as_array().unwrap() {
            assert_eq!(entry["category"], "testing");
        }
    }

    #[test]
    fn test_search_unknown_category_is_empty_success() {
        let catalog = CatalogStore::new();
        let params = SearchPromptsParams {
            query: "".to_string(),
            category: Some("no-such-category".to_string()),
        };

        let result = SearchPromptsTool::execute(&params, &catalog);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "[]");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_search_http_handler() {
        let catalog = Arc::new(CatalogStore::new());
        let args = serde_json::json!({ "query": "nunit" });
        let result = SearchPromptsTool::http_handler(args, catalog);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_search_http_handler_missing_query() {
        let catalog = Arc::new(CatalogStore::new());
        let args = serde_json::json!({ "category": "testing" });
        let result = SearchPromptsTool::http_handler(args, catalog);
        assert!(result.is_err());
    }
}
