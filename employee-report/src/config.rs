//! Configuration resolution for employee-report
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Arguments and environment variables are both handled by clap; the TOML
//! file is `--config` if given, else `<config dir>/employee-report/config.toml`.

use std::path::{Path, PathBuf};

use clap::Parser;
use employee_events::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_DATABASE_PATH: &str = "employee_events.db";
pub const DEFAULT_MODEL_PATH: &str = "assets/model.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments for employee-report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "employee-report")]
#[command(about = "Employee and team performance dashboard")]
#[command(version)]
pub struct Args {
    /// TOML config file
    #[arg(short, long, env = "EMPLOYEE_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Employee events SQLite database
    #[arg(long, env = "EMPLOYEE_REPORT_DB")]
    pub database: Option<PathBuf>,

    /// Exported risk model (JSON)
    #[arg(long, env = "EMPLOYEE_REPORT_MODEL")]
    pub model: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "EMPLOYEE_REPORT_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "EMPLOYEE_REPORT_PORT")]
    pub port: Option<u16>,

    /// Log level when RUST_LOG is unset
    #[arg(long, env = "EMPLOYEE_REPORT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Contents of the TOML config file; every key optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub database_path: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub model_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Resolve settings from arguments, environment and the config file
    pub fn resolve(args: &Args) -> Result<Self> {
        let toml_config = match &args.config {
            Some(path) if path.exists() => load_toml_config(path)?,
            Some(path) => {
                warn!("Config file {} not found, using defaults", path.display());
                TomlConfig::default()
            }
            None => match default_config_path() {
                Some(path) if path.exists() => load_toml_config(&path)?,
                Some(path) => {
                    debug!("No config file at {}, using defaults", path.display());
                    TomlConfig::default()
                }
                None => TomlConfig::default(),
            },
        };

        Ok(Self::merge(args, toml_config))
    }

    /// Combine arguments over file values over compiled defaults
    pub fn merge(args: &Args, file: TomlConfig) -> Self {
        Self {
            database_path: args
                .database
                .clone()
                .or(file.database_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            model_path: args
                .model
                .clone()
                .or(file.model_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            host: args
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            log_level: args
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Platform config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("employee-report").join("config.toml"))
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;
    info!("Loaded config file: {}", path.display());
    Ok(config)
}
