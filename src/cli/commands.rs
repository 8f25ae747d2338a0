//! CLI command implementations
//!
//! `serve` resolves configuration, installs the tracing subscriber, and runs
//! the HTTP server on a tokio runtime until Ctrl+C.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::employee::InMemoryEmployeeStore;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_tracing;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Load configuration from an optional JSON file.
///
/// Without a path every field takes its default.
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let Some(path) = path else {
        return Ok(HttpServerConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    HttpServerConfig::from_json(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Load configuration, apply command-line overrides, and validate the result
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = load_config(path)?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Start the HTTP server with an empty store
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;

    init_tracing(&config.log_level);
    info!(version = crate::VERSION, addr = %config.socket_addr(), "starting employeedb");

    let server = HttpServer::with_store(config, Arc::new(InMemoryEmployeeStore::new()));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate configuration and print the effective values as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = resolve_config(config_path, None, None)?;

    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;

    Ok(())
}
