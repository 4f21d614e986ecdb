//! Runtime settings, read from the environment.
//!
//! An optional `.env` file in the working directory is loaded first.
//!
//! | Variable | Default |
//! |---|---|
//! | `STOREFRONT_CHANNEL_BUFFER` | `32` |
//! | `STOREFRONT_REORDER_POINT` | `10` |
//! | `STOREFRONT_LOG` | `info` |
//!
//! `RUST_LOG`, when set, still wins over `STOREFRONT_LOG`.

use crate::model::DEFAULT_REORDER_POINT;
use std::env;
use thiserror::Error;
use tracing::debug;

pub const CHANNEL_BUFFER_VAR: &str = "STOREFRONT_CHANNEL_BUFFER";
pub const REORDER_POINT_VAR: &str = "STOREFRONT_REORDER_POINT";
pub const LOG_VAR: &str = "STOREFRONT_LOG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Mailbox size of every actor.
    pub channel_buffer: usize,
    /// Reorder point for inventory items created without one.
    pub default_reorder_point: u32,
    /// Fallback tracing filter.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            default_reorder_point: DEFAULT_REORDER_POINT,
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. Unset variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = parse(CHANNEL_BUFFER_VAR, &value)?;
            if config.channel_buffer == 0 {
                return Err(ConfigError::Zero(CHANNEL_BUFFER_VAR));
            }
        }
        if let Some(value) = lookup(REORDER_POINT_VAR) {
            config.default_reorder_point = parse(REORDER_POINT_VAR, &value)?;
        }
        if let Some(value) = lookup(LOG_VAR) {
            if !value.trim().is_empty() {
                config.log_filter = value.trim().to_string();
            }
        }

        Ok(config)
    }
}

fn parse<N: std::str::FromStr>(name: &'static str, value: &str) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.default_reorder_point, 10);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (CHANNEL_BUFFER_VAR, "64"),
            (REORDER_POINT_VAR, " 5 "),
            (LOG_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 64);
        assert_eq!(config.default_reorder_point, 5);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            StorefrontConfig::from_lookup(lookup(&[(REORDER_POINT_VAR, "ten")])),
            Err(ConfigError::NotANumber {
                name: REORDER_POINT_VAR,
                value: "ten".to_string()
            })
        );
        assert_eq!(
            StorefrontConfig::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "0")])),
            Err(ConfigError::Zero(CHANNEL_BUFFER_VAR))
        );
    }
}
