//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table and content store from validated config
//! - Start the metrics exporter
//! - Bind the listener and run the server to completion
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The route table and content store are frozen here; nothing mutates
//!   them for the rest of the process lifetime

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::content::{ContentError, ContentStore};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::routing::{catalog, RouteTable, TableError};

/// Fatal error during startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table error: {0}")]
    Table(#[from] TableError),

    #[error("content store error: {0}")]
    Content(#[from] ContentError),

    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the server with a validated configuration until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let table = if config.routes.is_empty() {
        catalog::builtin_table()?
    } else {
        RouteTable::from_config(&config.routes)?
    };
    let content = ContentStore::load(&config.content, &table)?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        route_count = table.len(),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(&config, table, content);
    server.run(listener, &shutdown).await?;

    Ok(())
}
