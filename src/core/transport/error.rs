//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured transport is not available.
    #[error("Unsupported transport: {0} (only 'stdio' is available)")]
    UnsupportedTransport(String),

    /// Server initialization error (e.g. the MCP handshake failed).
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// Service error from rmcp while serving.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    /// Create an unsupported transport error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedTransport(name.into())
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }
}
