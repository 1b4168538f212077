//! Black-box HTTP tests: route resolution through a running server.

use std::time::Duration;

use blog_server::config::ServerConfig;
use blog_server::content::ContentStore;
use blog_server::routing::catalog;

mod common;

fn catalog_fixture() -> (ServerConfig, blog_server::routing::RouteTable, ContentStore) {
    let config = ServerConfig::default();
    let table = catalog::builtin_table().unwrap();
    let content = ContentStore::load(&config.content, &table).unwrap();
    (config, table, content)
}

#[tokio::test]
async fn test_known_path_serves_html_page() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let res = reqwest::get(format!("http://{}/one-line-a-day", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let content_type = res.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let body = res.text().await.unwrap();
    assert!(body.contains("OneLineADay"));

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_series_path_serves_the_right_part() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let res = reqwest::get(format!(
        "http://{}/blazor-in-memory-state-management-2-3",
        addr
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("BlazorInMemoryStateManagementPartTwoOfThree"));

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let res = reqwest::get(format!("http://{}/nonexistent-path", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_doubled_slash_is_404() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    // Only one leading slash belongs to the request line; the rest of the
    // path must match a registered literal exactly.
    let res = reqwest::get(format!("http://{}//one-line-a-day", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = reqwest::get(format!("http://{}///one-line-a-day", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_root_path_is_404() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let res = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_post_is_method_not_allowed() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("http://{}/one-line-a-day", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("http://{}/one-line-a-day", addr))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_healthz_responds() {
    let (config, table, content) = catalog_fixture();
    let (addr, shutdown, handle) = common::start_server(config, table, content).await;

    let res = reqwest::get(format!("http://{}/healthz", addr)).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok");

    shutdown.trigger();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_the_server() {
    let (addr, shutdown, handle) = {
        let (config, table, content) = catalog_fixture();
        common::start_server(config, table, content).await
    };

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown trigger")
        .unwrap();

    // New connections are refused once the listener is gone.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    assert!(client
        .get(format!("http://{}/one-line-a-day", addr))
        .send()
        .await
        .is_err());
}
