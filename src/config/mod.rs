//! Configuration management for vanityd
//!
//! Handles server configuration loading and validation. The module registry
//! artifact itself is loaded separately by [`crate::registry::Registry`].

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Listen address used when neither the CLI nor the config file sets one
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5247);

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "vanityd=debug"); RUST_LOG takes precedence
    #[serde(default)]
    pub filter: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address
    pub listen_addr: Option<SocketAddr>,

    /// Path to the module registry artifact
    #[serde(default = "default_registry_path")]
    pub registry_path: String,

    /// Logging configuration
    pub logging: Option<LoggingConfig>,
}

fn default_registry_path() -> String {
    "config.json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: Some(DEFAULT_LISTEN_ADDR),
            registry_path: default_registry_path(),
            logging: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.registry_path.is_empty() {
            return Err(anyhow::anyhow!("registry_path must not be empty"));
        }

        Ok(())
    }
}
