//! API integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf_server::{api, repository::Repository, services::Services, AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Start a fresh server with an empty store and return its base URL
async fn spawn_server() -> String {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Repository::new())),
    };
    let app = api::create_router(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn create_book(client: &Client, base_url: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/v1/book", base_url))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn test_health_check() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_book_lifecycle() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = create_book(
        &client,
        &base_url,
        json!({
            "bookID": "978-0441013593",
            "bookTitle": "Dune",
            "bookAuthor": "Frank Herbert"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update: only the description changes
    let response = client
        .put(format!("{}/v1/book/978-0441013593", base_url))
        .json(&json!({ "bookDescription": "Desert planet" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/v1/book/978-0441013593", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["book"],
        json!({
            "bookID": "978-0441013593",
            "bookDescription": "Desert planet",
            "bookTitle": "Dune",
            "bookAuthor": "Frank Herbert"
        })
    );

    let response = client
        .delete(format!("{}/v1/book/978-0441013593", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/v1/book/978-0441013593", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_list_books() {
    let base_url = spawn_server().await;
    let client = Client::new();

    for id in ["k1", "k2"] {
        let response = create_book(&client, &base_url, json!({ "bookID": id })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = client
        .get(format!("{}/v1/book", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<Value> = response.json().await.expect("Failed to parse response");
    let mut ids: Vec<&str> = body.iter().filter_map(|b| b["bookID"].as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["k1", "k2"]);
}

#[tokio::test]
async fn test_concurrent_duplicate_creates() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            let base_url = base_url.clone();
            tokio::spawn(async move {
                create_book(&client, &base_url, json!({ "bookID": "same" }))
                    .await
                    .status()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.expect("Request task failed"));
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::FORBIDDEN).count(),
        15
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let base_url = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/v2/book", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "error", "message": "Route not found" }));
}
