//! Wire types for the trends-aggregation service
//!
//! These mirror the provider's JSON responses. The interest table carries
//! one value column per echoed keyword plus an `isPartial` helper flag per
//! point; the helper flag never reaches summary output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Time-indexed interest table for a batched keyword set
///
/// The echoed `keywords` list may be a subset of the requested set; values
/// in each timeline point are aligned with it by position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestOverTime {
    /// Keywords the provider returned columns for
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Chronological sequence of sample points
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
}

/// One sample point in the interest timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Sample timestamp, unix seconds (UTC)
    pub time: i64,

    /// Interest values aligned with the table's keyword columns, 0-100
    pub values: Vec<u32>,

    /// Helper column: the point falls in a still-incomplete period
    #[serde(default, rename = "isPartial")]
    pub is_partial: bool,
}

impl InterestOverTime {
    /// Check whether the table holds no sample points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Check whether the table has a column for the given keyword
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Extract the value column for one keyword as a (timestamp, value) series
    ///
    /// Returns `None` if the keyword has no column. Points with an
    /// unrepresentable timestamp or a short values row are skipped.
    #[must_use]
    pub fn series(&self, keyword: &str) -> Option<Vec<(DateTime<Utc>, u32)>> {
        let column = self.keywords.iter().position(|k| k == keyword)?;

        let mut series = Vec::with_capacity(self.timeline.len());
        for point in &self.timeline {
            let Some(&value) = point.values.get(column) else {
                continue;
            };
            let Some(timestamp) = DateTime::from_timestamp(point.time, 0) else {
                continue;
            };
            series.push((timestamp, value));
        }

        Some(series)
    }
}

/// Related-query lists for a batched keyword set, keyed by keyword
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedQueries {
    /// Per-keyword query lists; keywords may be absent from the map
    #[serde(default)]
    pub queries: HashMap<String, KeywordQueries>,
}

/// Ranked query lists for one keyword
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordQueries {
    /// Most relevant queries, provider relevance order
    #[serde(default)]
    pub top: Vec<RankedQuery>,

    /// Fastest-growing queries
    #[serde(default)]
    pub rising: Vec<RankedQuery>,
}

/// One related query with its provider relevance value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedQuery {
    pub query: String,
    pub value: u32,
}

impl RelatedQueries {
    /// Take the first `limit` query strings from a keyword's `top` list
    ///
    /// A keyword absent from the map, or one without a `top` list, yields
    /// an empty vector.
    #[must_use]
    pub fn top_for(&self, keyword: &str, limit: usize) -> Vec<String> {
        self.queries
            .get(keyword)
            .map(|lists| {
                lists
                    .top
                    .iter()
                    .take(limit)
                    .map(|entry| entry.query.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
