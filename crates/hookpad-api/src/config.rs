//! Configuration for the webhook playground service.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use hookpad_delivery::ClientConfig;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Service configuration with defaults, file, and environment overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The service works out-of-the-box with its defaults; create
/// `config.toml` or set environment variables to customize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,

    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,

    /// Inbound HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT")]
    pub request_timeout: u64,

    /// Outbound delivery timeout in milliseconds.
    ///
    /// Environment variable: `DELIVERY_TIMEOUT_MS`
    #[serde(default = "default_delivery_timeout_ms", alias = "DELIVERY_TIMEOUT_MS")]
    pub delivery_timeout_ms: u64,

    /// Path of the history file.
    ///
    /// Environment variable: `HISTORY_FILE`
    #[serde(default = "default_history_file", alias = "HISTORY_FILE")]
    pub history_file: String,

    /// Log level configuration.
    ///
    /// Environment variable: `RUST_LOG`
    #[serde(default = "default_log_level", alias = "RUST_LOG")]
    pub rust_log: String,
}

impl Config {
    /// Loads configuration from defaults, `config.toml`, and environment
    /// variable overrides, then validates it.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Converts to the delivery client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_millis(self.delivery_timeout_ms),
            user_agent: "Hookpad/1.0".to_string(),
        }
    }

    /// Parses the server socket address from host and port.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validates configuration values.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.delivery_timeout_ms == 0 {
            anyhow::bail!("delivery_timeout_ms must be greater than 0");
        }

        if self.history_file.is_empty() {
            anyhow::bail!("history_file must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            delivery_timeout_ms: default_delivery_timeout_ms(),
            history_file: default_history_file(),
            rust_log: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_delivery_timeout_ms() -> u64 {
    10_000
}

fn default_history_file() -> String {
    "data/events.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
