//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::catalog::CatalogStore;

use super::definitions::{
    InstallationTool, PromptsByToolsTool, SearchPromptsTool, UsageGuideTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(catalog: Arc<CatalogStore>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchPromptsTool::create_route(catalog.clone()))
        .with_route(PromptsByToolsTool::create_route(catalog.clone()))
        .with_route(InstallationTool::create_route(catalog.clone()))
        .with_route(UsageGuideTool::create_route(catalog))
}
