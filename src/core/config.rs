//! Configuration management for the MCP servers.
//!
//! Defaults are set per binary, then overridden from a `.env` file and
//! `MCP_`-prefixed environment variables.

use super::error::Result;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for an MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Weather lookup configuration.
    pub weather: WeatherConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the `GET_WEATHER` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of a wttr.in-compatible API.
    pub api_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: "https://wttr.in".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tool-host-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Default configuration with the given server name.
    pub fn named(name: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.server.name = name.into();
        config
    }

    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env()
    }

    /// Apply `.env` and `MCP_*` environment overrides.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_TRANSPORT`, `MCP_WEATHER_API_URL`.
    pub fn merge_env(mut self) -> Result<Self> {
        dotenvy::dotenv().ok();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            self.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            self.logging.level = level;
        }

        self.transport = TransportConfig::from_env()?;

        if let Ok(api_url) = std::env::var("MCP_WEATHER_API_URL") {
            self.weather.api_url = api_url;
        }

        Ok(self)
    }

    /// One-line description of the effective settings, for the startup log.
    pub fn summary(&self) -> String {
        format!(
            "transport={}, log_level={}, weather_api_url={}",
            self.transport.description(),
            self.logging.level,
            self.weather.api_url
        )
    }
}

// Mutex to ensure env var tests run serially across modules
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
