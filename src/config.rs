//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file. Every section and
//! field has a default, so an empty file (or no file at all) yields a working
//! service. `AppConfig` is the root configuration struct containing all settings.

use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

use crate::health::TimestampFormat;

// =============================================================================
// HTTP
// =============================================================================

/// Path of the liveness route
pub const HEALTH_PATH: &str = "/health";

/// Health responses must never be served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after SIGTERM/SIGINT
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Configuration file used when `--config` is not given and the file exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str =
    formatcp!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub http: HttpServerConfig,
    /// Health response rendering
    pub health: HealthConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            shutdown_grace_seconds: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl HttpServerConfig {
    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// "local" (naive server time, default) or "utc" (RFC 3339 with offset)
    pub timestamp: TimestampFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve configuration from an explicit path, the default path, or built-in defaults.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line / environment overrides on top of file values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
