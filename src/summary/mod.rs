//! Reshaping of raw provider data into summary records
//!
//! This module holds the only in-repo computation:
//! - Cleaning keyword sets (trim, drop empties, de-duplicate)
//! - Extracting the peak interest value per keyword
//! - Averaging interest per calendar month
//! - Selecting the top related queries
//!
//! Normalization and relevance ranking happen entirely inside the provider;
//! everything here is a deterministic reshape of what it returned.

use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;

use crate::models::{MonthlyInterest, TrendSummary};
use crate::provider::{InterestOverTime, RelatedQueries};

/// Maximum number of related queries carried per keyword
pub const RELATED_QUERY_LIMIT: usize = 10;

/// Clean a raw keyword list: trim, drop empties, de-duplicate
///
/// First-seen order is preserved, which keeps multi-keyword responses
/// positionally stable for callers.
#[must_use]
pub fn clean_keywords(raw: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();

    for keyword in raw {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !cleaned.iter().any(|k| k == trimmed) {
            cleaned.push(trimmed.to_string());
        }
    }

    cleaned
}

/// Build the summary record for one keyword
///
/// A keyword without a column in the table degrades to a zero-filled
/// record; a keyword without a `top` related-query list gets an empty one.
#[must_use]
pub fn summarize(
    keyword: &str,
    interest: &InterestOverTime,
    related: &RelatedQueries,
) -> TrendSummary {
    let Some(series) = interest.series(keyword) else {
        return TrendSummary::zero(keyword);
    };

    let peak = series.iter().map(|&(_, value)| value).max().unwrap_or(0);

    TrendSummary {
        keyword: keyword.to_string(),
        peak_score_12m_worldwide: peak,
        monthly_interest: monthly_interest(&series),
        related_queries_top_10: related.top_for(keyword, RELATED_QUERY_LIMIT),
    }
}

/// Build one record per requested keyword, preserving input order
///
/// An empty table yields no records at all; a non-empty table zero-fills
/// requested keywords absent from its columns.
#[must_use]
pub fn summarize_all(
    requested: &[String],
    interest: &InterestOverTime,
    related: &RelatedQueries,
) -> Vec<TrendSummary> {
    if interest.is_empty() {
        return Vec::new();
    }

    requested
        .iter()
        .map(|keyword| summarize(keyword, interest, related))
        .collect()
}

/// Group a series by calendar month (UTC) and average the values
///
/// Entries come out chronologically because the grouping key is
/// `(year, month)` in a `BTreeMap`. Averages are rounded to the nearest
/// integer and stay within the provider's 0-100 value range.
fn monthly_interest(series: &[(DateTime<Utc>, u32)]) -> Vec<MonthlyInterest> {
    let mut months: BTreeMap<(i32, u32), (u64, u64)> = BTreeMap::new();

    for &(timestamp, value) in series {
        let entry = months
            .entry((timestamp.year(), timestamp.month()))
            .or_insert((0, 0));
        entry.0 += u64::from(value);
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month), (sum, count))| MonthlyInterest {
            month: format!("{year:04}-{month:02}"),
            score: (sum as f64 / count as f64).round() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{KeywordQueries, RankedQuery, TimelinePoint};
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn ts(year: i32, month: u32, day: u32) -> i64 {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
            .timestamp()
    }

    fn table(keywords: &[&str], points: Vec<(i64, Vec<u32>)>) -> InterestOverTime {
        InterestOverTime {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            timeline: points
                .into_iter()
                .map(|(time, values)| TimelinePoint {
                    time,
                    values,
                    is_partial: false,
                })
                .collect(),
        }
    }

    fn related_with(keyword: &str, queries: &[&str]) -> RelatedQueries {
        let mut map = HashMap::new();
        map.insert(
            keyword.to_string(),
            KeywordQueries {
                top: queries
                    .iter()
                    .enumerate()
                    .map(|(i, q)| RankedQuery {
                        query: q.to_string(),
                        value: (100 - i) as u32,
                    })
                    .collect(),
                rising: Vec::new(),
            },
        );
        RelatedQueries { queries: map }
    }

    #[test]
    fn test_clean_keywords_dedup_preserves_order() {
        let raw = vec![
            "a".to_string(),
            "a".to_string(),
            " a ".to_string(),
            "b".to_string(),
        ];
        assert_eq!(clean_keywords(&raw), vec!["a", "b"]);
    }

    #[test]
    fn test_clean_keywords_drops_empties() {
        let raw = vec!["  ".to_string(), String::new(), "tea".to_string()];
        assert_eq!(clean_keywords(&raw), vec!["tea"]);
    }

    #[test]
    fn test_peak_is_series_maximum() {
        let table = table(
            &["coffee"],
            vec![
                (ts(2024, 1, 7), vec![40]),
                (ts(2024, 3, 10), vec![87]),
                (ts(2024, 5, 5), vec![60]),
            ],
        );

        let record = summarize("coffee", &table, &RelatedQueries::default());
        assert_eq!(record.peak_score_12m_worldwide, 87);
    }

    #[test]
    fn test_monthly_averages_round_to_nearest() {
        // January: (40 + 45) / 2 = 42.5 -> 43, March: 87
        let table = table(
            &["coffee"],
            vec![
                (ts(2024, 1, 7), vec![40]),
                (ts(2024, 1, 21), vec![45]),
                (ts(2024, 3, 10), vec![87]),
            ],
        );

        let record = summarize("coffee", &table, &RelatedQueries::default());
        assert_eq!(
            record.monthly_interest,
            vec![
                MonthlyInterest {
                    month: "2024-01".to_string(),
                    score: 43,
                },
                MonthlyInterest {
                    month: "2024-03".to_string(),
                    score: 87,
                },
            ]
        );
    }

    #[test]
    fn test_monthly_order_across_year_boundary() {
        let table = table(
            &["coffee"],
            vec![
                (ts(2024, 1, 7), vec![30]),
                (ts(2023, 12, 24), vec![50]),
                (ts(2023, 11, 12), vec![20]),
            ],
        );

        let record = summarize("coffee", &table, &RelatedQueries::default());
        let labels: Vec<&str> = record
            .monthly_interest
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert_eq!(labels, vec!["2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn test_absent_keyword_degrades_to_zero_record() {
        let table = table(&["coffee"], vec![(ts(2024, 1, 7), vec![40])]);

        let record = summarize("tea", &table, &RelatedQueries::default());
        assert_eq!(record, TrendSummary::zero("tea"));
    }

    #[test]
    fn test_related_queries_limited_to_ten() {
        let table = table(&["coffee"], vec![(ts(2024, 1, 7), vec![40])]);
        let queries: Vec<String> = (0..12).map(|i| format!("coffee {i}")).collect();
        let query_refs: Vec<&str> = queries.iter().map(String::as_str).collect();
        let related = related_with("coffee", &query_refs);

        let record = summarize("coffee", &table, &related);
        assert_eq!(record.related_queries_top_10.len(), 10);
        assert_eq!(record.related_queries_top_10[0], "coffee 0");
    }

    #[test]
    fn test_missing_related_entry_is_empty_list() {
        let table = table(&["coffee"], vec![(ts(2024, 1, 7), vec![40])]);
        let related = related_with("tea", &["green tea"]);

        let record = summarize("coffee", &table, &related);
        assert!(record.related_queries_top_10.is_empty());
        assert_eq!(record.peak_score_12m_worldwide, 40);
    }

    #[test]
    fn test_summarize_all_empty_table_yields_no_records() {
        let requested = vec!["x".to_string(), "y".to_string()];
        let records = summarize_all(
            &requested,
            &InterestOverTime::default(),
            &RelatedQueries::default(),
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_summarize_all_zero_fills_absent_column() {
        let requested = vec!["x".to_string(), "y".to_string()];
        let table = table(&["x"], vec![(ts(2024, 2, 4), vec![64])]);

        let records = summarize_all(&requested, &table, &RelatedQueries::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keyword, "x");
        assert_eq!(records[0].peak_score_12m_worldwide, 64);
        assert_eq!(records[1], TrendSummary::zero("y"));
    }
}
