//! HTTP client for the trends-aggregation service
//!
//! One long-lived, configuration-initialized handle, constructed at process
//! start and shared across requests. Outbound calls are paced with a
//! process-wide rate limiter; the provider throttles aggressively, so the
//! limit is part of the client contract rather than per-call ceremony.
//! There is no retry logic: a failed provider call surfaces to the caller.

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::Client;
use serde::Serialize;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::{Error, Result};

use super::types::{InterestOverTime, RelatedQueries};

/// Lookback window sent with every payload: the past 12 months
const TIMEFRAME_12M: &str = "today 12-m";

/// Worldwide results, no geo restriction
const GEO_WORLDWIDE: &str = "";

/// No category restriction
const CATEGORY_ALL: u32 = 0;

const INTEREST_OVER_TIME_PATH: &str = "/api/interest-over-time";
const RELATED_QUERIES_PATH: &str = "/api/related-queries";

/// Request payload shared by both provider endpoints
#[derive(Debug, Serialize)]
struct ExplorePayload<'a> {
    keywords: &'a [String],
    timeframe: &'static str,
    geo: &'static str,
    category: u32,
    hl: &'a str,
    tz: i32,
}

/// Client for the trends-aggregation service
///
/// The underlying `reqwest::Client` is safe for concurrent use, so the
/// handle is shared without a lock; the rate limiter paces overlapping
/// outbound calls process-wide.
pub struct TrendsClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control outbound request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Provider settings (base URL, locale, timezone offset)
    config: ProviderConfig,
}

impl TrendsClient {
    /// Create a new client from provider configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` if the HTTP client cannot be created
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .cookie_store(true)
            .build()?;

        let rate = NonZeroU32::new(config.requests_per_second)
            .unwrap_or(NonZeroU32::new(1).unwrap());
        let quota = Quota::per_second(rate);
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            config,
        })
    }

    /// Fetch the interest-over-time table for a keyword set
    ///
    /// One batched call regardless of keyword count. Values are normalized
    /// by the provider against the queried set.
    ///
    /// # Errors
    ///
    /// Returns `Error::Provider` on a non-success status, `Error::Http` on
    /// transport or decode failures
    pub async fn interest_over_time(&self, keywords: &[String]) -> Result<InterestOverTime> {
        self.post_json(INTEREST_OVER_TIME_PATH, keywords).await
    }

    /// Fetch related queries for a keyword set
    ///
    /// One batched call; ranking is entirely provider-side.
    ///
    /// # Errors
    ///
    /// Returns `Error::Provider` on a non-success status, `Error::Http` on
    /// transport or decode failures
    pub async fn related_queries(&self, keywords: &[String]) -> Result<RelatedQueries> {
        self.post_json(RELATED_QUERIES_PATH, keywords).await
    }

    /// Build the shared payload for a keyword set
    fn payload<'a>(&'a self, keywords: &'a [String]) -> ExplorePayload<'a> {
        ExplorePayload {
            keywords,
            timeframe: TIMEFRAME_12M,
            geo: GEO_WORLDWIDE,
            category: CATEGORY_ALL,
            hl: &self.config.hl,
            tz: self.config.tz,
        }
    }

    // Internal: rate-limited POST with JSON body and typed response
    async fn post_json<R: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
        keywords: &[String],
    ) -> Result<R> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{path}", self.config.base_url);
        let payload = self.payload(keywords);

        tracing::debug!(url = %url, keywords = ?keywords, "Querying trends provider");

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Trends provider returned an error");
            return Err(Error::provider(status.as_u16(), message));
        }

        Ok(response.json::<R>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TrendsClient::new(ProviderConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_zero_rate_falls_back() {
        let config = ProviderConfig {
            requests_per_second: 0,
            ..ProviderConfig::default()
        };
        assert!(TrendsClient::new(config).is_ok());
    }

    #[test]
    fn test_payload_carries_fixed_window_and_locale() {
        let config = ProviderConfig {
            hl: "de-DE".to_string(),
            tz: 60,
            ..ProviderConfig::default()
        };
        let client = TrendsClient::new(config).unwrap();
        let keywords = vec!["coffee".to_string(), "tea".to_string()];

        let payload = serde_json::to_value(client.payload(&keywords)).unwrap();
        assert_eq!(payload["timeframe"], "today 12-m");
        assert_eq!(payload["geo"], "");
        assert_eq!(payload["category"], 0);
        assert_eq!(payload["hl"], "de-DE");
        assert_eq!(payload["tz"], 60);
        assert_eq!(payload["keywords"][1], "tea");
    }
}
