//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the MCP server handler, the transport
//! layer and the bootstrap shared by the server binaries.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use bootstrap::{init_logging, launch};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
