//! Tool Registry - the name → descriptor mapping a server is built around.
//!
//! The registry is populated once at startup and then shared read-only
//! (behind an `Arc`) with the dispatcher for the rest of the process.

use std::collections::HashMap;

use rmcp::model::Tool;
use tracing::{debug, warn};

use super::descriptor::{ToolDefinition, ToolDescriptor};
use super::error::ToolError;

/// Tool registry - manages all available tools.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolDescriptor>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// Fails if a tool with the same name is already present; the existing
    /// registration is kept.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        let name = descriptor.name();
        if self.tools.contains_key(name) {
            warn!("Rejecting duplicate tool registration: {}", name);
            return Err(ToolError::already_registered(name));
        }

        debug!("Registering tool: {}", name);
        self.tools.insert(name, descriptor);
        Ok(())
    }

    /// Register a tool definition, building its descriptor.
    pub fn register_tool<T: ToolDefinition>(&mut self, tool: T) -> Result<(), ToolError> {
        self.register(ToolDescriptor::new(tool))
    }

    /// Builder-style registration, for use during startup.
    pub fn with_tool<T: ToolDefinition>(mut self, tool: T) -> Result<Self, ToolError> {
        self.register_tool(tool)?;
        Ok(self)
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.tools.get(name).ok_or_else(|| ToolError::not_found(name))
    }

    /// Get all tool names, sorted.
    pub fn tool_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.tools.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get all tools as Tool models (metadata), sorted by name.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .map(ToolDescriptor::to_tool)
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
