//! Configuration management for trendlens
//!
//! This module handles loading and validating configuration from environment
//! variables, files, and command-line arguments.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trends provider configuration
    pub provider: ProviderConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for the external trends-aggregation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider base URL
    pub base_url: String,

    /// Host language sent with every payload (e.g. "en-US")
    pub hl: String,

    /// Timezone offset in minutes, as the provider expects
    pub tz: i32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Rate limit for outbound provider calls (requests per second)
    pub requests_per_second: u32,

    /// User agent string
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("TRENDLENS_PROVIDER_URL")
            .unwrap_or_else(|_| String::from("http://localhost:8600"));

        let hl = std::env::var("TRENDLENS_HL").unwrap_or_else(|_| String::from("en-US"));

        let tz = std::env::var("TRENDLENS_TZ")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(360);

        let request_timeout_secs = std::env::var("TRENDLENS_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let requests_per_second = std::env::var("TRENDLENS_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let user_agent = std::env::var("TRENDLENS_USER_AGENT")
            .unwrap_or_else(|_| format!("trendlens/{}", env!("CARGO_PKG_VERSION")));

        let log_level =
            std::env::var("TRENDLENS_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("TRENDLENS_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            provider: ProviderConfig {
                base_url,
                hl,
                tz,
                request_timeout_secs,
                requests_per_second,
                user_agent,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse TOML config file {}: {e}",
                path.display()
            ))
        })?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.provider.base_url.is_empty() {
            return Err(Error::config("provider base_url must not be empty"));
        }

        if self.provider.requests_per_second == 0 {
            return Err(Error::config("requests_per_second must be greater than 0"));
        }

        if self.provider.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }

        // Timezone offsets beyond UTC-12/UTC+14 do not exist
        if self.provider.tz < -720 || self.provider.tz > 840 {
            return Err(Error::config(format!(
                "tz offset out of range: {}",
                self.provider.tz
            )));
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8600"),
            hl: String::from("en-US"),
            tz: 360,
            request_timeout_secs: 30,
            requests_per_second: 5,
            user_agent: format!("trendlens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
