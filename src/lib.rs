//! Tool Host MCP Library
//!
//! Minimal Model Context Protocol (MCP) servers built on a small, reusable
//! core: a registry of schema-validated tools and a dispatcher that runs one
//! invocation at a time.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler,
//!   the stdio transport and process bootstrap
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool descriptors, registry, dispatcher and definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use tool_host_mcp::core::{Config, launch};
//! use tool_host_mcp::domains::tools::{ToolRegistry, definitions::HelloWorldTool};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     launch(Config::named("Hello World MCP Server"), |_| {
//!         ToolRegistry::new().with_tool(HelloWorldTool)
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
