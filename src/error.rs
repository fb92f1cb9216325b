//! Unified error handling for the trendlens crate
//!
//! Validation failures on inbound requests are not errors in this sense;
//! they are answered as payload-level `{"error": ...}` bodies before any
//! provider call is made. The [`Error`] type covers everything that can go
//! wrong talking to the provider or loading configuration.

use std::io;
use thiserror::Error;

/// Unified error type for the trendlens crate
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP client errors (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the trends provider
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider error from a status code and response body
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
