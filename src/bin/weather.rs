//! Weather MCP server.
//!
//! Exposes `GET_WEATHER` over stdio.

use anyhow::Result;

use tool_host_mcp::core::{Config, launch};
use tool_host_mcp::domains::tools::{ToolRegistry, definitions::GetWeatherTool};

#[tokio::main]
async fn main() -> Result<()> {
    launch(Config::named("Weather MCP Server"), |config| {
        ToolRegistry::new().with_tool(GetWeatherTool::new(&config.weather.api_url))
    })
    .await?;

    Ok(())
}
