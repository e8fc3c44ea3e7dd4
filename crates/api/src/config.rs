//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use forestal_infra::config::{parse_or, ConfigError, DatabaseConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// HTTP listener + storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// `true` keeps products in Postgres, `false` in process memory.
    pub use_persistent_stores: bool,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", format!("{bind_addr:?}: {e}")))?;

        let use_persistent_stores =
            parse_or("USE_PERSISTENT_STORES", lookup("USE_PERSISTENT_STORES"), false)?;

        Ok(Self {
            bind_addr,
            use_persistent_stores,
        })
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
        })
    }
}
