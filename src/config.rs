// src/config.rs
use std::env;
use std::str::FromStr;

use crate::shared::content_store::ContentStoreConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Editorial thresholds used when shaping query results for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub list_excerpt_length: usize,
    pub featured_excerpt_length: usize,
    pub featured_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_excerpt_length: 150,
            featured_excerpt_length: 100,
            featured_limit: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: ContentStoreConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; used directly by tests.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DisplayConfig::default();

        Ok(Self {
            host: optional(&get, "HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&get, "PORT", 3000)?,
            store: ContentStoreConfig::from_source(&get)?,
            display: DisplayConfig {
                list_excerpt_length: parse_or(
                    &get,
                    "EXCERPT_LIST_LENGTH",
                    defaults.list_excerpt_length,
                )?,
                featured_excerpt_length: parse_or(
                    &get,
                    "EXCERPT_FEATURED_LENGTH",
                    defaults.featured_excerpt_length,
                )?,
                featured_limit: parse_or(&get, "FEATURED_LIMIT", defaults.featured_limit)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Value of `name`, treating blank strings as unset.
pub(crate) fn optional<F>(get: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    get(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn required<F>(get: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(get, name).ok_or(ConfigError::Missing(name))
}

pub(crate) fn parse_or<F, T>(get: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match optional(get, name) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
