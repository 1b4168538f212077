//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use blog_server::config::ServerConfig;
use blog_server::content::ContentStore;
use blog_server::http::HttpServer;
use blog_server::lifecycle::Shutdown;
use blog_server::routing::RouteTable;

/// Start a server on an OS-assigned port.
///
/// Returns the bound address, a shutdown handle, and the server task.
pub async fn start_server(
    config: ServerConfig,
    table: RouteTable,
    content: ContentStore,
) -> (SocketAddr, Shutdown, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, table, content);

    let server_shutdown = shutdown.clone();
    let handle = tokio::spawn(async move {
        server.run(listener, &server_shutdown).await.unwrap();
    });

    wait_until_ready(addr).await;
    (addr, shutdown, handle)
}

/// Poll until the server accepts TCP connections.
async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..50 {
        if TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("server at {} never became ready", addr);
}
