//! Installation instructions tool definition.
//!
//! Returns install/raw URLs and usage instructions for one prompt.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::catalog::CatalogStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the installation instructions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InstallationParams {
    /// Id of the prompt to get installation instructions for.
    pub prompt_id: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Installation instructions tool.
pub struct InstallationTool;

impl InstallationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompt_installation_instructions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get installation URLs and usage instructions for a specific GitHub Copilot prompt.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(prompt_id = %params.prompt_id))]
    pub fn execute(params: &InstallationParams, catalog: &CatalogStore) -> CallToolResult {
        let info = match catalog.installation_info(&params.prompt_id) {
            Ok(info) => info,
            Err(e) => {
                warn!("Installation lookup failed: {}", e);
                return CallToolResult::error(vec![Content::text(e.to_string())]);
            }
        };

        info!("Installation instructions resolved for {}", params.prompt_id);

        match serde_json::to_string_pretty(&info) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize installation info: {}",
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
        let prompt_id = arguments
            .get("prompt_id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'prompt_id' parameter".to_string())?
            .to_string();

        let params = InstallationParams { prompt_id };
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
            input_schema: cached_schema_for_type::<InstallationParams>(),
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
                let params: InstallationParams =
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
    fn test_installation_execute() {
        let catalog = CatalogStore::new();
        let params = InstallationParams {
            prompt_id: "multi-stage-dockerfile".to_string(),
        };

        let result = InstallationTool::execute(&params, &catalog);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["id"], "multi-stage-dockerfile");
        assert!(
            parsed["installation"]["primary_url"]
                .as_str()
                .unwrap()
                .starts_with("https://vscode.dev/redirect?url=")
        );
        assert!(
            parsed["installation"]["alternate_url"]
                .as_str()
                .unwrap()
                .starts_with("https://insiders.vscode.dev/redirect?url=")
        );
        assert_eq!(parsed["usage_instructions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_installation_unknown_id_is_error_result() {
        let catalog = CatalogStore::new();
        let params = InstallationParams {
            prompt_id: "nonexistent-id".to_string(),
        };

        let result = InstallationTool::execute(&params, &catalog);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("nonexistent-id"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_installation_http_handler_missing_param() {
        let catalog = Arc::new(CatalogStore::new());
        let args = serde_json::json!({});
        let result = InstallationTool::http_handler(args, catalog);
        assert!(result.is_err());
    }
}
