//! Database configuration loaded from environment variables.
//!
//! `DATABASE_URL` wins when present. Otherwise the URL is assembled from the
//! individual `DB_*` variables, with the defaults the shop's docker setup uses.

use thiserror::Error;

const DEFAULT_HOST: &str = "db";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "mopii";
const DEFAULT_PASSWORD: &str = "daw";
const DEFAULT_NAME: &str = "tienda_forestal";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

/// Connection settings for the product database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url,
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
                let port = parse_or("DB_PORT", lookup("DB_PORT"), DEFAULT_PORT)?;
                let user = lookup("DB_USER").unwrap_or_else(|| DEFAULT_USER.to_string());
                let password = lookup("DB_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
                let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_NAME.to_string());
                format!("postgres://{user}:{password}@{host}:{port}/{name}")
            }
        };

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::invalid("DB_MAX_CONNECTIONS", "must be at least 1"));
        }

        let acquire_timeout_secs = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            lookup("DB_ACQUIRE_TIMEOUT_SECS"),
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            url,
            max_connections,
            acquire_timeout_secs,
        })
    }
}

/// Parse an optional raw value, falling back to `default` when unset.
pub fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::invalid(var, format!("{v:?}: {e}"))),
    }
}
