//! Configuration loading and constants.
//!
//! Defines the fixed workload constants, the HTTP Cache-Control values, logging
//! defaults, and `AppConfig`, the root configuration struct loaded from TOML.
//! Only the listen host and the log format are configurable; the port, the
//! workload size and the CPU cap are compile-time constants.

use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Workload Constants
// =============================================================================

/// Fibonacci input computed by every `/calculate` request
pub const FIB_INPUT: u32 = 36;

/// Largest input whose Fibonacci value fits in a `u64`
pub const MAX_FIB_INPUT: u32 = 93;

/// Maximum number of worker threads the runtime may schedule on
pub const MAX_PARALLELISM: usize = 1;

/// Body returned by the root route
pub const ROOT_MESSAGE: &str =
    "CPU-intensive workload is running. Hit /calculate to trigger a calculation.\n";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Root page - static text, safe to cache briefly
pub const HTTP_CACHE_ROOT_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_ROOT: &str = formatcp!("public, max-age={}", HTTP_CACHE_ROOT_MAX_AGE);

/// Calculations must always reach the process, never an upstream cache
pub const CACHE_CONTROL_CALCULATE: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "fibload=info,tower_http=info";

/// Default listen address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Seconds to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
///
/// Only the host is read from the file. The port is always `DEFAULT_HTTP_PORT`.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(skip_deserializing, default = "HttpServerConfig::default_port")]
    pub port: u16,

    // Captured only to reject it
    #[serde(rename = "port", default)]
    requested_port: Option<u16>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            requested_port: None,
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
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
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load configuration, falling back to built-in defaults when the
    /// default config file is absent. An explicitly requested file must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        if let Some(port) = config.http.requested_port {
            return Err(ConfigError::Validation(format!(
                "http.port = {} is not allowed; the listen port is fixed at {}",
                port, DEFAULT_HTTP_PORT
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
