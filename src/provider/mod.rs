//! Client for the external trends-aggregation service
//!
//! The provider is a black-box lookup service: given a batched keyword set,
//! a lookback window, and locale/timezone settings, it returns a
//! time-indexed interest table and a ranked related-query list per keyword.
//! All normalization and ranking happens on the provider side; this module
//! only speaks the wire protocol.
//!
//! # Usage
//!
//! ```ignore
//! use trendlens::config::ProviderConfig;
//! use trendlens::provider::TrendsClient;
//!
//! let client = TrendsClient::new(ProviderConfig::default())?;
//! let interest = client.interest_over_time(&keywords).await?;
//! let related = client.related_queries(&keywords).await?;
//! ```

pub mod client;
pub mod types;

// Re-export main types
pub use client::TrendsClient;
pub use types::{InterestOverTime, KeywordQueries, RankedQuery, RelatedQueries, TimelinePoint};
