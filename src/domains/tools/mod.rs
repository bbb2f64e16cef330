//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `descriptor.rs` - `ToolDefinition` trait and the type-erased `ToolDescriptor`
//! - `registry.rs` - Name → descriptor mapping, built once at startup
//! - `dispatcher.rs` - Validates and executes one invocation at a time
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct and implement `ToolDefinition`
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it on the `ToolRegistry` a binary starts with

pub mod definitions;
mod descriptor;
mod dispatcher;
mod error;
mod registry;

pub use descriptor::{ToolDefinition, ToolDescriptor};
pub use dispatcher::{InvocationRequest, InvocationResponse, ToolDispatcher};
pub use error::ToolError;
pub use registry::ToolRegistry;
