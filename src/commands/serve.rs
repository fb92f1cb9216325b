use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use trendlens::config::Config;
use trendlens::provider::TrendsClient;
use trendlens::server::{ServerConfig, TrendsServer};

/// Configuration parameters for the API server
pub struct ServeParams {
    pub host: String,
    pub port: u16,
    pub config_file: Option<String>,
    pub provider_url: Option<String>,
    pub hl: Option<String>,
    pub tz: Option<i32>,
    pub disable_cors: bool,
    pub disable_access_log: bool,
}

/// Start the trends API server
pub async fn serve(params: ServeParams) -> Result<()> {
    let ServeParams {
        host,
        port,
        config_file,
        provider_url,
        hl,
        tz,
        disable_cors,
        disable_access_log,
    } = params;

    println!("Starting trendlens API Server");
    println!("=============================");
    println!("  Host: {host}");
    println!("  Port: {port}");
    if let Some(ref file) = config_file {
        println!("  Config file: {file}");
    }
    println!(
        "  CORS: {}",
        if disable_cors { "disabled" } else { "enabled" }
    );
    println!(
        "  Request Logging: {}",
        if disable_access_log {
            "disabled"
        } else {
            "enabled"
        }
    );
    println!();

    // Resolve configuration: file or environment, then CLI overrides
    let config = load_config(config_file.as_deref(), provider_url, hl, tz)?;

    println!("  Provider: {}", config.provider.base_url);
    println!("  Locale: {} (tz offset {}m)", config.provider.hl, config.provider.tz);
    println!();

    // Build bind address
    let bind_address = format!("{host}:{port}")
        .parse()
        .context("Invalid bind address")?;

    let server_config = ServerConfig::builder()
        .bind_address(bind_address)
        .enable_cors(!disable_cors)
        .enable_request_logging(!disable_access_log)
        .build();

    // One long-lived provider handle, shared by all requests
    let client = Arc::new(
        TrendsClient::new(config.provider.clone()).context("Failed to create trends client")?,
    );

    let server = TrendsServer::new(server_config, client);

    println!("{}", server.info().display());
    println!();
    println!("API Endpoints:");
    println!("  GET  /             - Liveness message");
    println!("  POST /trends       - Single-keyword summary");
    println!("  POST /multi-trends - Multi-keyword comparison summary");
    println!();
    println!("trendlens API listening on http://{bind_address}");
    println!("Press Ctrl+C to stop.\n");

    // Start with graceful shutdown
    server
        .start_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown signal received");
                }
                Err(e) => {
                    tracing::error!("Failed to wait for Ctrl+C: {}", e);
                }
            }
        })
        .await?;

    println!("trendlens API server stopped.");
    Ok(())
}

/// Load configuration from file or environment and apply CLI overrides
fn load_config(
    config_file: Option<&str>,
    provider_url: Option<String>,
    hl: Option<String>,
    tz: Option<i32>,
) -> Result<Config> {
    let mut config = match config_file {
        Some(path) => Config::from_file(Path::new(path)).context("Failed to load config file")?,
        None => Config::from_env().context("Failed to load environment configuration")?,
    };

    if let Some(url) = provider_url {
        config.provider.base_url = url;
    }
    if let Some(hl) = hl {
        config.provider.hl = hl;
    }
    if let Some(tz) = tz {
        config.provider.tz = tz;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
