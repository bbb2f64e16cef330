//! Hello World MCP server.
//!
//! Exposes `HELLO_WORLD` over stdio.

use anyhow::Result;

use tool_host_mcp::core::{Config, launch};
use tool_host_mcp::domains::tools::{ToolRegistry, definitions::HelloWorldTool};

#[tokio::main]
async fn main() -> Result<()> {
    launch(Config::named("Hello World MCP Server"), |_| {
        ToolRegistry::new().with_tool(HelloWorldTool)
    })
    .await?;

    Ok(())
}
