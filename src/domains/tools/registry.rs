//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::catalog::CatalogStore;

use super::definitions::{
    InstallationTool, PromptsByToolsTool, SearchPromptsTool, UsageGuideTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    catalog: Arc<CatalogStore>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given catalog.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchPromptsTool::NAME,
            PromptsByToolsTool::NAME,
            InstallationTool::NAME,
            UsageGuideTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchPromptsTool::to_tool(),
            PromptsByToolsTool::to_tool(),
            InstallationTool::to_tool(),
            UsageGuideTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            SearchPromptsTool::NAME => {
                SearchPromptsTool::http_handler(arguments, self.catalog.clone())
            }
            PromptsByToolsTool::NAME => {
                PromptsByToolsTool::http_handler(arguments, self.catalog.clone())
            }
            InstallationTool::NAME => {
                InstallationTool::http_handler(arguments, self.catalog.clone())
            }
            UsageGuideTool::NAME => UsageGuideTool::http_handler(arguments, self.catalog.clone()),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
