//! Process bootstrap shared by the server binaries.
//!
//! Loads configuration, initializes logging, builds the tool registry and
//! runs the transport. Any error returned from here is a startup or
//! top-level failure; the binaries turn it into exit code 1.

use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use super::{Config, Error, McpServer, Result, TransportService};
use crate::domains::tools::{ToolError, ToolRegistry};

/// Start a server: `defaults` are overridden from the environment, then
/// `build_registry` decides which tools are exposed.
pub async fn launch<F>(defaults: Config, build_registry: F) -> Result<()>
where
    F: FnOnce(&Config) -> std::result::Result<ToolRegistry, ToolError>,
{
    run(defaults.merge_env(), build_registry).await
}

async fn run<F>(loaded: Result<Config>, build_registry: F) -> Result<()>
where
    F: FnOnce(&Config) -> std::result::Result<ToolRegistry, ToolError>,
{
    let level = loaded
        .as_ref()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    let config = loaded.inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    info!("Initializing {} v{}...", config.server.name, config.server.version);
    info!("Configuration: {}", config.summary());

    let registry = build_registry(&config)
        .inspect_err(|e| error!("Failed to register tools: {}", e))?;
    if registry.is_empty() {
        error!("No tools registered");
        return Err(Error::config("no tools registered"));
    }

    let transport = TransportService::new(config.transport.clone());
    let name = config.server.name.clone();
    let server = McpServer::new(config, registry);

    info!("Server initialized with tools: {}", server.tools().len());

    transport
        .run(server)
        .await
        .inspect_err(|e| error!("Failed to start {}: {}", name, e))?;

    info!("Server shutting down");
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for protocol frames. `RUST_LOG`
/// directives are honored on top of the configured level.
pub fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Tests may initialize logging more than once.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}
