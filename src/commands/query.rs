use anyhow::{Context, Result};
use std::path::Path;

use trendlens::config::Config;
use trendlens::provider::{RelatedQueries, TrendsClient};
use trendlens::summary;

/// Run the two-call summary pipeline once and print the records as JSON
pub async fn query(
    keywords: Vec<String>,
    config_file: Option<String>,
    provider_url: Option<String>,
) -> Result<()> {
    let mut config = match config_file.as_deref() {
        Some(path) => Config::from_file(Path::new(path)).context("Failed to load config file")?,
        None => Config::from_env().context("Failed to load environment configuration")?,
    };
    if let Some(url) = provider_url {
        config.provider.base_url = url;
    }
    config.validate().context("Invalid configuration")?;

    let cleaned = summary::clean_keywords(&keywords);
    if cleaned.is_empty() {
        anyhow::bail!("keywords must be a non-empty list");
    }

    let client =
        TrendsClient::new(config.provider).context("Failed to create trends client")?;

    tracing::info!(keywords = ?cleaned, "Fetching trend summaries");

    let interest = client
        .interest_over_time(&cleaned)
        .await
        .context("Interest lookup failed")?;

    // An empty table cannot yield records, so skip the second call
    let related = if interest.is_empty() {
        RelatedQueries::default()
    } else {
        client
            .related_queries(&cleaned)
            .await
            .context("Related-queries lookup failed")?
    };

    let records = summary::summarize_all(&cleaned, &interest, &related);
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
