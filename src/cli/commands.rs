//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_telemetry;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Resolve the effective configuration: file, environment, then `--port`
pub fn load_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }
    Ok(config)
}

/// Start the HTTP server
///
/// 1. Resolve configuration and require an API token
/// 2. Install the tracing subscriber
/// 3. Run the Axum server until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(config_path, port)?;
    config.require_api_token()?;

    init_telemetry(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.socket_addr(),
        "Starting bookmarks server"
    );

    let server = HttpServer::new(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration with the token masked
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path, None)?;
    let rendered = serde_json::to_string_pretty(&config.redacted())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    if config.require_api_token().is_err() {
        writeln!(stdout, "warning: API_TOKEN is not set; serve will refuse to start")?;
    }
    Ok(())
}
