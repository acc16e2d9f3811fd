//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("VOLOPS_API_URL must start with http:// or https://, got {0}")]
    InvalidApiUrl(String),
    #[error("invalid VOLOPS_API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream API base URL, without a trailing slash.
    pub api_url: String,
    pub api_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VOLOPS_API_URL`: default `http://127.0.0.1:5000`
    /// - `VOLOPS_API_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_url = lookup("VOLOPS_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let timeout_secs = match lookup("VOLOPS_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self { port, api_url, api_timeout: Duration::from_secs(timeout_secs) })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
