//! Configuration loading and typed config structures for IxStats.
//!
//! The canonical configuration lives in `ixstats-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads and validates
//! the file.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level application configuration.
///
/// Mirrors the structure of `ixstats-config.yaml`. All fields have
/// sensible defaults so a missing file section falls back cleanly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// World-level settings (name, seed data toggle).
    #[serde(default)]
    pub world: WorldConfig,

    /// IxTime settings.
    #[serde(default)]
    pub time: TimeConfig,

    /// Dashboard API server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Infrastructure connection strings.
    #[serde(default)]
    pub infrastructure: InfrastructureConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for infrastructure:
    /// - `DATABASE_URL` overrides `infrastructure.database_url`
    /// - `REDIS_URL` overrides `infrastructure.redis_url`
    /// - `IXSTATS_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the loaded configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.infrastructure.database_url = Some(url);
            }
        }
        if let Ok(url) = std::env::var("REDIS_URL") {
            if !url.is_empty() {
                self.infrastructure.redis_url = Some(url);
            }
        }
        if let Ok(port) = std::env::var("IXSTATS_PORT") {
            if let Ok(parsed) = port.parse::<u16>() {
                self.server.port = parsed;
            }
        }
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable deployment name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Whether to seed demonstration countries on startup.
    #[serde(default = "default_true")]
    pub seed_demo_countries: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed_demo_countries: true,
        }
    }
}

/// IxTime configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeConfig {
    /// Base time-scaling multiplier (in-game seconds per real second).
    #[serde(default = "default_multiplier")]
    pub base_multiplier: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            base_multiplier: default_multiplier(),
        }
    }
}

/// Dashboard API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Infrastructure connection strings. `None` disables the integration:
/// the server then runs from in-memory state only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InfrastructureConfig {
    /// `PostgreSQL` connection URL.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Redis connection URL (snapshot + tile cache).
    #[serde(default)]
    pub redis_url: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive (overridden by `RUST_LOG`).
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON-formatted log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_world_name() -> String {
    String::from("ixstats")
}

const fn default_multiplier() -> f64 {
    crate::ixtime::DEFAULT_MULTIPLIER
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}
