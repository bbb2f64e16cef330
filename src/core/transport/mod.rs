//! Transport layer for the MCP servers.
//!
//! Only a local stream is supported: MCP JSON-RPC over standard
//! input/output. Stdout carries protocol frames, so logs go to stderr.

mod config;
mod error;
mod service;
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
