use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
///
/// Built once in `main` and handed to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PostgreSQL connection string (required by the postgres backend)
    pub postgres_url: Option<String>,
    /// Maximum number of pooled connections (default: 5)
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection (default: 5)
    pub acquire_timeout_seconds: u64,
    /// Per-request deadline in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POSTGRES_URL` - PostgreSQL connection string (no default)
    /// - `DB_MAX_CONNECTIONS` - Pool size, at least 1 (default: 5)
    /// - `DB_ACQUIRE_TIMEOUT_SECONDS` - Pool acquire timeout (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            postgres_url: lookup("POSTGRES_URL").filter(|url| !url.trim().is_empty()),
            max_connections: parse_nonzero(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout_seconds: parse_nonzero(&lookup, "DB_ACQUIRE_TIMEOUT_SECONDS", 5)?,
            request_timeout_seconds: parse_nonzero(&lookup, "REQUEST_TIMEOUT_SECONDS", 10)?,
        })
    }

    /// Get the pool acquire timeout as a Duration.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }

    /// Get the per-request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

/// Like `parse_var`, but zero is an invalid value.
fn parse_nonzero<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
{
    let value = parse_var(lookup, name, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            name,
            value: lookup(name).unwrap_or_default(),
        });
    }
    Ok(value)
}
