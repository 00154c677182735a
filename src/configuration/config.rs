use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use serde::Deserialize;

use crate::error_handling::types::ConfigError;
use crate::storage::database_storage::DatabaseStorage;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Command-line flags. Every value flag can also come from the environment.
///
/// Flags left unset fall back to the configuration file, then to built-in
/// defaults.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Employee records and a JSON item API over HTTP")]
pub struct CliArgs {
    /// TOML configuration file
    #[arg(short, long, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// IP address to listen on
    #[arg(long, env = "ROSTER_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// TCP port to listen on
    #[arg(long, env = "ROSTER_PORT")]
    pub port: Option<u16>,

    /// SeaORM connection string, e.g. `sqlite://roster.sqlite3?mode=rwc`
    #[arg(long, env = "ROSTER_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Do not serve the employee pages
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub disable_employees: bool,

    /// Do not serve the item API
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub disable_items: bool,
}

/// Application configuration structure that defines all runtime parameters.
///
/// # Fields Overview
///
/// - `bind_address`: IP address the HTTP server binds to
/// - `port`: TCP port of the HTTP server, must not be 0
/// - `database_url`: where the employee records are persisted
/// - `employees_enabled`: serve the HTML employee pages
/// - `items_enabled`: serve the JSON item API
///
/// # Examples
///
/// ```toml
/// bind_address = "0.0.0.0"
/// port = 8080
/// database_url = "sqlite:///var/lib/roster/roster.sqlite3?mode=rwc"
/// items_enabled = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub database_url: String,
    pub employees_enabled: bool,
    pub items_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            database_url: format!("sqlite://{}?mode=rwc", DatabaseStorage::DEFAULT_DB_FILE),
            employees_enabled: true,
            items_enabled: true,
        }
    }
}

impl Config {
    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds the effective configuration: file (if any), then command-line
    /// overrides, then validation.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        config.validate()?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(bind_address) = &args.bind_address {
            self.bind_address = bind_address.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(database_url) = &args.database_url {
            self.database_url = database_url.clone();
        }
        if args.disable_employees {
            self.employees_enabled = false;
        }
        if args.disable_items {
            self.items_enabled = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_ip()?;
        if self.port == 0 {
            return Err(ConfigError::NotInRange(
                "port must be between 1 and 65535".to_string(),
            ));
        }
        if self.employees_enabled && self.database_url.trim().is_empty() {
            return Err(ConfigError::NotInRange(
                "database_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn bind_ip(&self) -> Result<IpAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|_| ConfigError::BadIPFormatting(self.bind_address.clone()))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.port))
    }
}
