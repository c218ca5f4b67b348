//! CLI command implementations
//!
//! Boot sequence: load configuration, open the store (creating the table
//! if absent), then serve. `init` is a convenience that writes a default
//! config file and creates the schema ahead of the first `start`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::SqliteStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Host to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_db_path() -> String {
    "./configstore.db".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.db_path.is_empty() {
            return Err(CliError::config_error("db_path must not be empty"));
        }
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        Ok(())
    }

    /// HTTP server configuration derived from this config
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Dispatch a parsed CLI to its command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config file if absent and create the database schema
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::config_error(format!("failed to encode config: {}", e)))?;
        fs::write(config_path, content)
            .map_err(|e| CliError::config_error(format!("failed to write config: {}", e)))?;
        config
    };

    // Opening the store creates the table if absent
    SqliteStore::open(&config.db_path)?;

    Logger::info(
        "store_initialized",
        &[
            ("config", &config_path.display().to_string()),
            ("db_path", &config.db_path),
        ],
    );

    Ok(())
}

/// Boot the store and serve HTTP requests until shutdown
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = Arc::new(SqliteStore::open(&config.db_path)?);
    let server = HttpServer::with_config(store, config.http_config());

    Logger::info(
        "server_starting",
        &[
            ("addr", &server.socket_addr()),
            ("db_path", &config.db_path),
        ],
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}
