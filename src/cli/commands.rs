//! CLI command implementations.

use std::fs;
use std::path::Path;

use crate::api::{HttpServer, ServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Loads the server configuration.
///
/// A missing file falls back to defaults so `fittrack serve` works out
/// of the box. A file that exists but cannot be read or parsed is a
/// configuration error.
pub fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: ServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &ServerConfig) -> CliResult<()> {
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }

    if config.host.is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    Ok(())
}

/// Main CLI entry point; the only function `main` calls.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Starts the HTTP server and blocks until it exits.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.socket_addr();
    Logger::info("SERVER_START", &[("addr", addr.as_str())]);

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })
}
