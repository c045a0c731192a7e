//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Reminder API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `REMINDER_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `REMINDER_STATIC_DIR` | Static asset directory | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("REMINDER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let static_dir = env::var("REMINDER_STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Self { addr, static_dir })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REMINDER_ADDR format")]
    InvalidAddr,
}
