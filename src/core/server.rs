//! MCP Server implementation.
//!
//! `McpServer` implements the rmcp `ServerHandler`: `tools/list` is served
//! from the tool registry and `tools/call` goes through the dispatcher.
//! Which tools a server exposes is decided by the registry it is built with.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{
    InvocationRequest, InvocationResponse, ToolDispatcher, ToolRegistry,
};

/// The main MCP server handler.
#[derive(Debug, Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the read-only tool registry.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server exposing the tools in `registry`.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// All exposed tools, as MCP metadata.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.registry().list_tools()
    }

    /// Invoke a tool by name.
    pub async fn invoke(&self, request: InvocationRequest) -> InvocationResponse {
        self.dispatcher.dispatch(request).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let tool_names = self.dispatcher.registry().tool_names().join(", ");

        let mut info = ServerInfo {
            instructions: Some(format!(
                "{} exposes the following tools: {}.",
                self.name(),
                tool_names
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let request = InvocationRequest::from_mcp(request.name.to_string(), request.arguments);
        self.invoke(request).await.into_call_result()
    }
}
