//! Integration tests for the Telusur web service
//!
//! Tests the search page, the JSON search API and the corpus
//! statistics endpoint against a CSV corpus on disk.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use telusur::core::services::Services;
use telusur::core::types::*;
use telusur::http;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{create_test_services, services_from_rows, TestCorpus, PETS};

/// Create a test application over the news corpus
fn create_test_app() -> (Router, Arc<Services>, TestCorpus) {
    let fixture = TestCorpus::news();
    let services = create_test_services(&fixture);
    (http::router(services.clone()), services, fixture)
}

fn search_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_index_page() {
    let (app, _services, _fixture) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let page = String::from_utf8(read_body(response).await).unwrap();
    assert!(page.contains("Enter your search query:"));
    assert!(page.contains("Top Results:"));
    assert!(page.contains("/api/v1/search"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _services, _fixture) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
    assert_eq!(health.documents, 4);
}

#[tokio::test]
async fn test_search_endpoint_ranks_results() {
    let (app, _services, _fixture) = create_test_app();

    let response = app
        .oneshot(search_request(json!({ "query": "banjir jakarta", "k": 10 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let search: SearchResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(search.query, "banjir jakarta");
    assert_eq!(search.tokens, vec!["banjir", "jakarta"]);
    assert_eq!(search.count, 3);
    assert_eq!(search.results[0].title, "Banjir Rendam Jakarta Utara");
    assert_eq!(search.results[0].rank, 1);
    assert!(search.results.iter().all(|r| r.score > 0.0));
}

#[tokio::test]
async fn test_search_endpoint_default_k() {
    let (app, services, _fixture) = create_test_app();

    let response = app
        .oneshot(search_request(json!({ "query": "banjir" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let search: SearchResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert!(search.count <= services.search.default_k());
    assert_eq!(search.count, 3);
}

#[tokio::test]
async fn test_search_endpoint_empty_query() {
    let (app, _services, _fixture) = create_test_app();

    let response = app
        .oneshot(search_request(json!({ "query": "  ", "k": 10 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let search: SearchResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert!(search.results.is_empty());
    assert_eq!(search.count, 0);
}

#[tokio::test]
async fn test_search_endpoint_long_query() {
    let app = http::router(services_from_rows(PETS));
    let query = "cats pets ".repeat(60);

    let response = app
        .oneshot(search_request(json!({ "query": query })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let search: SearchResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(search.count, 2);
    assert_eq!(search.results[0].title, "Cats");
    assert_eq!(search.results[1].title, "Dogs");
}

#[tokio::test]
async fn test_search_endpoint_missing_query_field() {
    let (app, _services, _fixture) = create_test_app();

    let response = app
        .oneshot(search_request(json!({ "k": 3 })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_search_endpoint_keeps_duplicate_metadata() {
    let services = services_from_rows(&[
        ("Copy", "same words here", "https://one.example"),
        ("Copy", "same words here", "https://two.example"),
    ]);
    let app = http::router(services);

    let response = app
        .oneshot(search_request(json!({ "query": "words", "k": 5 })))
        .await
        .unwrap();

    let search: SearchResponse = serde_json::from_slice(&read_body(response).await).unwrap();
    let links: Vec<&str> = search.results.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links, vec!["https://one.example", "https://two.example"]);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, _services, fixture) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stats: CorpusStats = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(stats.documents, 4);
    assert_eq!(stats.dropped_rows, 1);
    assert_eq!(stats.source.as_deref(), Some(fixture.path()));
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = http::router(services_from_rows(PETS));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = http::router(services_from_rows(PETS));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
