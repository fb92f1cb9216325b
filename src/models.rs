// Core data structures for trendlens

use serde::{Deserialize, Serialize};

/// Summary record for one keyword over the past 12 months
///
/// Field names are part of the public API schema and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// The keyword as submitted (after trimming)
    pub keyword: String,

    /// Maximum interest value observed in the window, 0 if no data
    pub peak_score_12m_worldwide: u32,

    /// Interest averaged per calendar month, chronological order
    pub monthly_interest: Vec<MonthlyInterest>,

    /// Up to 10 related queries in provider relevance order
    pub related_queries_top_10: Vec<String>,
}

impl TrendSummary {
    /// Zero-filled record for a keyword the provider returned no data for
    pub fn zero(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            peak_score_12m_worldwide: 0,
            monthly_interest: Vec::new(),
            related_queries_top_10: Vec::new(),
        }
    }
}

/// Interest averaged over one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInterest {
    /// Month label, formatted as YYYY-MM
    pub month: String,

    /// Average interest value for the month, rounded to nearest integer
    pub score: u32,
}
