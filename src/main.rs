use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::ServeParams;

#[derive(Parser)]
#[command(
    name = "trendlens",
    version,
    about = "Trends summary API over an external trends-aggregation service",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the trends API server
    Serve {
        /// Bind host
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Bind port
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Trends provider base URL
        #[arg(long)]
        provider_url: Option<String>,

        /// Host language sent to the provider
        #[arg(long)]
        hl: Option<String>,

        /// Timezone offset in minutes sent to the provider
        #[arg(long)]
        tz: Option<i32>,

        /// Disable permissive CORS
        #[arg(long, default_value = "false")]
        disable_cors: bool,

        /// Disable per-request access logging
        #[arg(long, default_value = "false")]
        disable_access_log: bool,
    },

    /// Fetch summaries for keywords once and print them as JSON
    Query {
        /// Keywords to summarize
        #[arg(required = true)]
        keywords: Vec<String>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Trends provider base URL
        #[arg(long)]
        provider_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    tracing::info!("trendlens starting");

    match cli.command {
        Commands::Serve {
            host,
            port,
            config,
            provider_url,
            hl,
            tz,
            disable_cors,
            disable_access_log,
        } => {
            tracing::info!(
                host = %host,
                port = %port,
                provider_url = ?provider_url,
                "Starting serve command"
            );
            commands::serve(ServeParams {
                host,
                port,
                config_file: config,
                provider_url,
                hl,
                tz,
                disable_cors,
                disable_access_log,
            })
            .await?;
        }

        Commands::Query {
            keywords,
            config,
            provider_url,
        } => {
            tracing::info!(keywords = ?keywords, "Starting query command");
            commands::query(keywords, config, provider_url).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("trendlens=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("trendlens=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
