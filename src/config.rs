//! Configuration module
//!
//! Builds the runtime configuration from environment variables layered over
//! in-code defaults. The deployment contract is a single `PORT` variable;
//! `WORKERS` and `ACCESS_LOG` are optional knobs with safe defaults.

use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the number of CPU cores
    #[serde(default)]
    pub workers: Option<usize>,
    /// Per-request logging toggle
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
