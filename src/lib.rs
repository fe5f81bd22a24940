//! Copilot Prompts MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server over the
//! prompt catalog of the GitHub awesome-copilot repository. The catalog is
//! compiled in, loaded once at startup, and queried through read-only
//! search, filter, and rendering operations.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **catalog**: The immutable prompt catalog and its query engine
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Catalog projections that can be read by clients
//!   - **prompts**: Prompt templates for common catalog workflows
//!
//! # Example
//!
//! ```rust,no_run
//! use copilot_prompts_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
