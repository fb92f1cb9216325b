//! trendlens - Trends Summary API
//!
//! A thin HTTP façade over an external trends-aggregation service: it accepts
//! search keywords, fetches interest-over-time and related-query data in two
//! batched provider calls, and reshapes the result into a simplified JSON
//! summary (peak score, monthly averages, top related queries).
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`provider`] - Client for the external trends-aggregation service
//! - [`summary`] - Reshaping of raw provider data into summary records
//! - [`models`] - Core data structures and types
//! - [`server`] - HTTP API server
//!
//! # Example
//!
//! ```no_run
//! use trendlens::config::Config;
//! use trendlens::provider::TrendsClient;
//! use trendlens::summary;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = TrendsClient::new(config.provider)?;
//!     let keywords = summary::clean_keywords(&["coffee".to_string()]);
//!     let interest = client.interest_over_time(&keywords).await?;
//!     let related = client.related_queries(&keywords).await?;
//!     let records = summary::summarize_all(&keywords, &interest, &related);
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod server;
pub mod summary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ProviderConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{MonthlyInterest, TrendSummary};
    pub use crate::provider::TrendsClient;
    pub use crate::server::{ServerConfig, TrendsServer};
}

// Direct re-exports for convenience
pub use models::{MonthlyInterest, TrendSummary};
