//! Tool-subset filter tool definition.
//!
//! Finds prompts whose declared tool set contains every requested tool.

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

/// Parameters for the tool-subset filter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PromptsByToolsParams {
    /// Tools every matching prompt must declare. An empty list matches
    /// every prompt.
    pub required_tools: Vec<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Tool-subset filter - finds prompts that use specific tools.
pub struct PromptsByToolsTool;

impl PromptsByToolsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompts_by_tools";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Find GitHub Copilot prompts that declare all of the given tools. Prompts may declare additional tools beyond the required ones.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(required = params.required_tools.len()))]
    pub fn execute(params: &PromptsByToolsParams, catalog: &CatalogStore) -> CallToolResult {
        let results = catalog.filter_by_tools(&params.required_tools);
        info!(
            "Tool filter {:?} matched {} prompts",
            params.required_tools,
            results.len()
        );

        match serde_json::to_string_pretty(&results) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize filter results: {}",
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
        let required_tools = arguments
            .get("required_tools")
            .and_then(|v| v.as_array())
            .ok_or_else(|| "Missing or invalid 'required_tools' parameter".to_string())?
            .iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| "'required_tools' entries must be strings".to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let params = PromptsByToolsParams { required_tools };
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
            input_schema: cached_schema_for_type::<PromptsByToolsParams>(),
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
                let params: PromptsByToolsParams =
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
    fn test_filter_execute() {
        let catalog = CatalogStore::new();
        let params = PromptsByToolsParams {
            required_tools: vec!["runTests".to_string(), "findTestFiles".to_string()],
        };

        let result = PromptsByToolsTool::execute(&params, &catalog);
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        for entry in parsed.as_array().unwrap() {
            assert_eq!(entry["matching_tools"][0], "runTests");
            assert_eq!(entry["matching_tools"][1], "findTestFiles");
        }
    }

    #[test]
    fn test_filter_empty_requirement_matches_all() {
        let catalog = CatalogStore::new();
        let params = PromptsByToolsParams {
            required_tools: vec![],
        };

        let result = PromptsByToolsTool::execute(&params, &catalog);
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), catalog.len());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_filter_http_handler() {
        let catalog = Arc::new(CatalogStore::new());
        let args = serde_json::json!({ "required_tools": ["codebase"] });
        let result = PromptsByToolsTool::http_handler(args, catalog);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_filter_http_handler_rejects_non_string_entries() {
        let catalog = Arc::new(CatalogStore::new());
        let args = serde_json::json!({ "required_tools": [42] });
        let result = PromptsByToolsTool::http_handler(args, catalog);
        assert!(result.is_err());
    }
}
