//! Process configuration, read from `KITCHENPOS_*` environment variables.

use std::net::SocketAddr;

use kitchenpos_observability::{LogConfig, LogFormat};
use thiserror::Error;

pub const BIND_ADDR: &str = "KITCHENPOS_BIND_ADDR";
pub const LOG_FILTER: &str = "KITCHENPOS_LOG_FILTER";
pub const LOG_FORMAT: &str = "KITCHENPOS_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR,
                message: e.to_string(),
            })?;

        let defaults = LogConfig::default();
        let filter = lookup(LOG_FILTER).unwrap_or(defaults.filter);
        let format = match lookup(LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError::Invalid {
                key: LOG_FORMAT,
                message: e.to_string(),
            })?,
            None => defaults.format,
        };

        Ok(Self {
            bind_addr,
            log: LogConfig { filter, format },
        })
    }
}
