//! HTTP API server for trend summaries
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Trends API Server          │
//! │                                     │
//! │  ┌──────────────────────────────┐   │
//! │  │         REST API             │   │
//! │  │  GET  /                      │   │
//! │  │  POST /trends                │   │
//! │  │  POST /multi-trends          │   │
//! │  └──────────────────────────────┘   │
//! │                │                    │
//! │  ┌──────────────────────────────┐   │
//! │  │       Summary Builder        │   │
//! │  │  - keyword cleaning          │   │
//! │  │  - peak / monthly averages   │   │
//! │  │  - top-10 related queries    │   │
//! │  └──────────────────────────────┘   │
//! │                │                    │
//! │      shared TrendsClient handle     │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use trendlens::server::{ServerConfig, TrendsServer};
//!
//! let server = TrendsServer::new(ServerConfig::default(), client);
//! server.start_with_shutdown(shutdown).await?;
//! ```

pub mod api;
pub mod config;
pub mod server;

// Re-export main types
pub use api::create_router;
pub use config::ServerConfig;
pub use server::{AppState, TrendsServer};
