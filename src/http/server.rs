//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch requests to the route table
//! - Serve documents from the content store
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::content::ContentStore;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub content: Arc<ContentStore>,
}

/// HTTP server for the blog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a frozen route table and content
    /// store.
    pub fn new(config: &ServerConfig, table: RouteTable, content: ContentStore) -> Self {
        let state = AppState {
            table: Arc::new(table),
            content: Arc::new(content),
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(health_handler))
            .route("/{*path}", get(page_handler))
            .route("/", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown coordinator fires.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let shutdown = shutdown.clone();
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main page handler.
/// Looks up the path in the route table and serves the stored document.
async fn page_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().cloned();
    // Strip exactly one leading slash: "//foo" must stay "/foo" and miss,
    // route paths are exact literals.
    let raw_path = request.uri().path();
    let path = raw_path.strip_prefix('/').unwrap_or(raw_path).to_string();

    tracing::debug!(
        request_id = ?request_id,
        path = %path,
        "Resolving page"
    );

    let Some(resource) = state.table.lookup(&path) else {
        tracing::warn!(request_id = ?request_id, path = %path, "No route matched");
        metrics::record_request("GET", 404, "none", start_time);
        return response::not_found(request_id.as_ref());
    };

    match state.content.render(resource) {
        Some(document) => {
            tracing::info!(
                request_id = ?request_id,
                path = %path,
                resource = %resource,
                "Page served"
            );
            metrics::record_request("GET", 200, &path, start_time);
            response::page(document.to_string(), request_id.as_ref())
        }
        None => {
            // Startup loads a document for every registered resource, so
            // this only fires for a hand-built store with holes.
            tracing::error!(request_id = ?request_id, resource = %resource, "No document for resource");
            metrics::record_request("GET", 404, &path, start_time);
            response::not_found(request_id.as_ref())
        }
    }
}

/// Liveness probe.
async fn health_handler() -> impl IntoResponse {
    "ok"
}
