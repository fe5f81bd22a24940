//! Usage guide tool definition.
//!
//! Renders the Markdown usage guide over the catalog, optionally restricted
//! to one category.

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

/// Parameters for the usage guide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UsageGuideParams {
    /// Optional category to restrict the guide to.
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Usage guide tool - renders a Markdown guide for the prompt catalog.
pub struct UsageGuideTool;

impl UsageGuideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_prompt_usage_guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a Markdown usage guide for the GitHub Copilot prompt catalog, grouped by category. Optionally restricted to one category.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(params: &UsageGuideParams, catalog: &CatalogStore) -> CallToolResult {
        let guide = catalog.usage_guide(params.category.as_deref());
        info!(
            "Rendered usage guide ({} bytes, category: {})",
            guide.len(),
            params.category.as_deref().unwrap_or("all")
        );

        CallToolResult::success(vec![Content::text(guide)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        catalog: Arc<CatalogStore>,
    ) -> Result<serde_json::Value, String> {
        let category = arguments
            .get("category")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = UsageGuideParams { category };
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
            input_schema: cached_schema_for_type::<UsageGuideParams>(),
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
                let params: UsageGuideParams =
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
    fn test_guide_execute() {
        let catalog = CatalogStore::new();
        let params = UsageGuideParams { category: None };

        let result = UsageGuideTool::execute(&params, &catalog);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        assert!(text.starts_with("# Awesome GitHub Copilot Prompts Usage Guide"));
        assert!(text.contains("## General Usage Instructions"));
    }

    #[test]
    fn test_guide_with_category() {
        let catalog = CatalogStore::new();
        let params = UsageGuideParams {
            category: Some("devops".to_string()),
        };

        let result = UsageGuideTool::execute(&params, &catalog);
        let text = result_text(&result);
        assert!(text.contains("## Devops Prompts"));
        assert!(!text.contains("## Testing Prompts"));
    }
}
