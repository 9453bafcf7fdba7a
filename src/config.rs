//! Configuration module for hnfollow.

use serde::Deserialize;
use std::path::Path;

use crate::{HnError, Result};

/// Environment variable overriding `store.path`.
pub const STORE_PATH_ENV: &str = "HNFOLLOW_STORE_PATH";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Hacker News API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HnConfig {
    /// Base URL of the Firebase item endpoint (`<base>/<id>.json`).
    #[serde(default = "default_item_api_url")]
    pub item_api_url: String,
    /// Base URL of the Algolia item endpoint (`<base>/<id>`).
    #[serde(default = "default_algolia_api_url")]
    pub algolia_api_url: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_item_api_url() -> String {
    "https://hacker-news.firebaseio.com/v0/item".to_string()
}

fn default_algolia_api_url() -> String {
    "https://hn.algolia.com/api/v1/items".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_total_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("hnfollow/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HnConfig {
    fn default() -> Self {
        Self {
            item_api_url: default_item_api_url(),
            algolia_api_url: default_algolia_api_url(),
            connect_timeout_secs: default_connect_timeout(),
            total_timeout_secs: default_total_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Key-value store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Backend name (`sqlite` or `memory`).
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Path to the SQLite database file.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_backend() -> String {
    "sqlite".to_string()
}

fn default_store_path() -> String {
    "data/hnfollow.db".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: default_store_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty logs to stdout only.
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl LoggingConfig {
    /// Log file path, or `None` when file logging is disabled.
    pub fn log_file(&self) -> Option<&Path> {
        let file = self.file.trim();
        (!file.is_empty()).then(|| Path::new(file))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/hnfollow.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Hacker News API configuration.
    #[serde(default)]
    pub hn: HnConfig,
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HnError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HnError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HNFOLLOW_STORE_PATH`: Override the SQLite database path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(STORE_PATH_ENV) {
            if !path.is_empty() {
                self.store.path = path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The store backend is unknown, or not compiled in
    /// - An HN API base URL is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        match self.store.backend.as_str() {
            "memory" => {}
            "sqlite" if cfg!(feature = "sqlite") => {}
            "sqlite" => {
                return Err(HnError::Config(
                    "store backend sqlite requires the `sqlite` feature".to_string(),
                ));
            }
            other => {
                return Err(HnError::Config(format!("unknown store backend: {other}")));
            }
        }

        validate_base_url("hn.item_api_url", &self.hn.item_api_url)?;
        validate_base_url("hn.algolia_api_url", &self.hn.algolia_api_url)?;

        Ok(())
    }
}

fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| HnError::Config(format!("{field} is not a valid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(HnError::Config(format!(
            "{field} uses unsupported scheme: {scheme}"
        ))),
    }
}
