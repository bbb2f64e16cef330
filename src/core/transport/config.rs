//! Transport configuration types.

use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// Transport configuration options.
///
/// Servers only speak over a local stream; the enum leaves room for the
/// selection to be validated at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Parse a transport name as given in `MCP_TRANSPORT`.
    pub fn parse(name: &str) -> TransportResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "stdio" => Ok(Self::Stdio),
            other => Err(TransportError::unsupported(other)),
        }
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> TransportResult<Self> {
        Self::parse(&std::env::var("MCP_TRANSPORT").unwrap_or_default())
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
