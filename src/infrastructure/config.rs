//! Application configuration

use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Application configuration loaded from `WORLDBOOK_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Fixed seed for record generation; fresh entropy when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_environment(config::Environment::with_prefix("WORLDBOOK"))
    }

    fn from_environment(environment: config::Environment) -> Result<Self> {
        config::Config::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 3000)?
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("WORLDBOOK_* settings are invalid")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid server address {}:{}",
                    self.server_host, self.server_port
                )
            })
    }
}
