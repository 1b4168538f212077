//! Static Blog Content Server
//!
//! Serves a fixed set of article pages from an immutable route table.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────────┐
//!                      │                 BLOG SERVER                     │
//!                      │                                                 │
//!   Client Request     │  ┌─────────┐    ┌──────────┐    ┌───────────┐  │
//!   ───────────────────┼─▶│  http   │───▶│ routing  │───▶│  content  │  │
//!                      │  │ server  │    │  table   │    │   store   │  │
//!                      │  └─────────┘    └──────────┘    └───────────┘  │
//!                      │       │              │                │        │
//!   Client Response    │       ▼              ▼                ▼        │
//!   ◀──────────────────┼── 200 page / 404 not-found (exact match only)  │
//!                      │                                                 │
//!                      │  ┌───────────────────────────────────────────┐ │
//!                      │  │           Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐  │ │
//!                      │  │  │ config │ │observability│ │ lifecycle│  │ │
//!                      │  │  └────────┘ └─────────────┘ └──────────┘  │ │
//!                      │  └───────────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────────┘
//! ```
//!
//! The route table and content store are built once at startup and never
//! change afterwards; request handling is read-only.

use std::path::PathBuf;

use clap::Parser;

use blog_server::config::loader::load_config;
use blog_server::config::ServerConfig;
use blog_server::lifecycle::startup;
use blog_server::observability::logging;

#[derive(Parser)]
#[command(name = "blog-server")]
#[command(about = "Static blog content server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Without it, the built-in route
    /// catalog and defaults are used.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        configured_routes = config.routes.len(),
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
