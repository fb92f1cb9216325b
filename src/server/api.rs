//! REST API handlers for the trends server
//!
//! Declared validation failures are payload-level: they answer with HTTP 200
//! and a fixed `{"error": ...}` body before any provider call is made.
//! Provider failures are not masked and map to HTTP 500.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;
use crate::models::TrendSummary;
use crate::summary;

use super::server::AppState;

/// Fixed message for an absent or empty single keyword
pub const ERR_KEYWORD_MISSING: &str = "Keyword missing";

/// Fixed message for an absent, non-list, or empty-after-clean keyword list
pub const ERR_KEYWORDS_NOT_A_LIST: &str = "keywords must be a non-empty list";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Liveness response for the root route
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Payload-level error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Envelope for multi-keyword results
#[derive(Debug, Serialize)]
pub struct MultiTrendsResponse {
    pub results: Vec<TrendSummary>,
}

/// Single-keyword request body
#[derive(Debug, Default, Deserialize)]
pub struct TrendsRequest {
    #[serde(default)]
    pub keyword: Option<String>,
}

impl TrendsRequest {
    /// Trimmed keyword, or `None` when absent or empty after trimming
    pub fn cleaned_keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
    }
}

/// Multi-keyword request body
///
/// The field is kept as raw JSON so a wrong-typed `keywords` value yields
/// the fixed payload error instead of a framework-level rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MultiTrendsRequest {
    #[serde(default)]
    pub keywords: Option<Value>,
}

impl MultiTrendsRequest {
    /// Cleaned keyword set, or the fixed error message
    ///
    /// Non-string list entries are discarded during cleaning, matching the
    /// treatment of empty-after-trim entries.
    pub fn cleaned_keywords(&self) -> Result<Vec<String>, &'static str> {
        let Some(Value::Array(entries)) = &self.keywords else {
            return Err(ERR_KEYWORDS_NOT_A_LIST);
        };

        let raw: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect();

        let cleaned = summary::clean_keywords(&raw);
        if cleaned.is_empty() {
            return Err(ERR_KEYWORDS_NOT_A_LIST);
        }

        Ok(cleaned)
    }
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/trends", post(trends))
        .route("/multi-trends", post(multi_trends))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness message
async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        message: "trendlens API is live".to_string(),
    })
}

/// Single-keyword summary
///
/// Normalization baseline is the keyword's own 12-month peak, since the
/// provider payload carries only this keyword.
async fn trends(State(state): State<AppState>, Json(request): Json<TrendsRequest>) -> Response {
    let Some(keyword) = request.cleaned_keyword() else {
        return payload_error(ERR_KEYWORD_MISSING);
    };

    let keywords = vec![keyword.clone()];

    let interest = match state.client.interest_over_time(&keywords).await {
        Ok(interest) => interest,
        Err(e) => return internal_error("Interest lookup failed", &e),
    };

    // No data for this keyword resolves to a zero-filled record, not an
    // error, and skips the related-queries call.
    if interest.is_empty() || !interest.contains(&keyword) {
        return (StatusCode::OK, Json(TrendSummary::zero(keyword))).into_response();
    }

    let related = match state.client.related_queries(&keywords).await {
        Ok(related) => related,
        Err(e) => return internal_error("Related-queries lookup failed", &e),
    };

    let record = summary::summarize(&keyword, &interest, &related);
    (StatusCode::OK, Json(record)).into_response()
}

/// Multi-keyword comparison summary
///
/// All keywords go to the provider in one payload, so values are
/// normalized against the maximum across the whole set.
async fn multi_trends(
    State(state): State<AppState>,
    Json(request): Json<MultiTrendsRequest>,
) -> Response {
    let keywords = match request.cleaned_keywords() {
        Ok(keywords) => keywords,
        Err(message) => return payload_error(message),
    };

    let interest = match state.client.interest_over_time(&keywords).await {
        Ok(interest) => interest,
        Err(e) => return internal_error("Interest lookup failed", &e),
    };

    if interest.is_empty() {
        return (
            StatusCode::OK,
            Json(MultiTrendsResponse {
                results: Vec::new(),
            }),
        )
            .into_response();
    }

    let related = match state.client.related_queries(&keywords).await {
        Ok(related) => related,
        Err(e) => return internal_error("Related-queries lookup failed", &e),
    };

    let results = summary::summarize_all(&keywords, &interest, &related);
    (StatusCode::OK, Json(MultiTrendsResponse { results })).into_response()
}

/// Declared validation failure: HTTP 200 with a fixed error payload
fn payload_error(message: &str) -> Response {
    (StatusCode::OK, Json(ErrorResponse::new(message))).into_response()
}

/// Unexpected failure: logged and surfaced as HTTP 500
fn internal_error(context: &str, err: &Error) -> Response {
    tracing::error!(error = %err, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("{context}: {err}"))),
    )
        .into_response()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cleaned_keyword_trims() {
        let request = TrendsRequest {
            keyword: Some("  coffee  ".to_string()),
        };
        assert_eq!(request.cleaned_keyword().as_deref(), Some("coffee"));
    }

    #[test]
    fn test_cleaned_keyword_rejects_absent_and_empty() {
        assert!(TrendsRequest::default().cleaned_keyword().is_none());

        let request = TrendsRequest {
            keyword: Some("   ".to_string()),
        };
        assert!(request.cleaned_keyword().is_none());
    }

    #[test]
    fn test_cleaned_keywords_rejects_missing_field() {
        let request = MultiTrendsRequest::default();
        assert_eq!(request.cleaned_keywords(), Err(ERR_KEYWORDS_NOT_A_LIST));
    }

    #[test]
    fn test_cleaned_keywords_rejects_non_list() {
        let request = MultiTrendsRequest {
            keywords: Some(json!("coffee")),
        };
        assert_eq!(request.cleaned_keywords(), Err(ERR_KEYWORDS_NOT_A_LIST));
    }

    #[test]
    fn test_cleaned_keywords_rejects_empty_after_clean() {
        let request = MultiTrendsRequest {
            keywords: Some(json!(["  ", "", 42])),
        };
        assert_eq!(request.cleaned_keywords(), Err(ERR_KEYWORDS_NOT_A_LIST));
    }

    #[test]
    fn test_cleaned_keywords_discards_non_strings_and_dedups() {
        let request = MultiTrendsRequest {
            keywords: Some(json!(["a", "a", " a ", 7, "b"])),
        };
        assert_eq!(request.cleaned_keywords(), Ok(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new(ERR_KEYWORD_MISSING)).unwrap();
        assert_eq!(body, json!({"error": "Keyword missing"}));
    }
}
