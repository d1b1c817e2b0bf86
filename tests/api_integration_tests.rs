//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use price_cache::{api::create_router, AppState, PriceCache, SimulatedSource};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

// == Helper Functions ==

const TEST_DELAY: Duration = Duration::from_millis(10);

fn create_test_app() -> (Arc<SimulatedSource>, Router) {
    let source = Arc::new(SimulatedSource::new(TEST_DELAY));
    let state = AppState::new(PriceCache::new(source.clone()));
    (source, create_router(state))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let json = body_to_json(response.into_body()).await;
    (status, json)
}

// == Price Endpoint Tests ==

#[tokio::test]
async fn test_price_endpoint_fetches_then_serves_cached() {
    let (source, app) = create_test_app();

    // First call misses and goes to the backend
    let (status, json) = get(&app, "/price/accord").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model"], "accord");
    assert_eq!(json["price"], 40_000);
    assert_eq!(source.calls(), 1);

    // Second call is served from the cache
    let (status, json) = get(&app, "/price/accord").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["price"], 40_000);
    assert_eq!(source.calls(), 1, "cached lookup must not hit the backend");
}

#[tokio::test]
async fn test_price_endpoint_second_model() {
    let (_source, app) = create_test_app();

    let (status, json) = get(&app, "/price/civic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["price"], 32_000);
}

#[tokio::test]
async fn test_price_endpoint_unknown_model_is_404() {
    let (source, app) = create_test_app();

    let (status, json) = get(&app, "/price/tesla").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("tesla"));

    // The failure is not cached: the next call re-fetches
    let (status, _) = get(&app, "/price/tesla").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_price_endpoint_zero_priced_model_is_404() {
    let mut catalog = HashMap::new();
    catalog.insert("freebie".to_string(), 0);
    let source = Arc::new(SimulatedSource::with_catalog(catalog, TEST_DELAY));
    let state = AppState::new(PriceCache::new(source));
    let app = create_router(state);

    let (status, _) = get(&app, "/price/freebie").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Zero is never cached, so the enumeration stays empty
    let (_, json) = get(&app, "/cached").await;
    assert_eq!(json["count"], 0);
}

// == Cached Endpoint Tests ==

#[tokio::test]
async fn test_cached_endpoint_empty_at_startup() {
    let (_source, app) = create_test_app();

    let (status, json) = get(&app, "/cached").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_cached_endpoint_lists_fetched_models() {
    let (_source, app) = create_test_app();

    get(&app, "/price/accord").await;
    get(&app, "/price/civic").await;

    let (status, json) = get(&app, "/cached").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);

    let entries = json["entries"].as_array().unwrap();
    let models: Vec<&str> = entries
        .iter()
        .map(|e| e["model"].as_str().unwrap())
        .collect();
    assert!(models.contains(&"accord"));
    assert!(models.contains(&"civic"));
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_tracks_activity() {
    let (_source, app) = create_test_app();

    get(&app, "/price/accord").await; // miss + fetch
    get(&app, "/price/accord").await; // hit
    get(&app, "/price/tesla").await; // miss + fetch, not cached

    let (status, json) = get(&app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 2);
    assert_eq!(json["fetches"], 2);
    assert_eq!(json["total_entries"], 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (_source, app) = create_test_app();

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Concurrency Tests ==

#[tokio::test]
async fn test_concurrent_requests_share_one_backend_fetch() {
    let (source, app) = create_test_app();

    let a = {
        let app = app.clone();
        tokio::spawn(async move { get(&app, "/price/accord").await })
    };
    let b = {
        let app = app.clone();
        tokio::spawn(async move { get(&app, "/price/accord").await })
    };

    let (status_a, json_a) = a.await.unwrap();
    let (status_b, json_b) = b.await.unwrap();

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(json_a["price"], 40_000);
    assert_eq!(json_b["price"], 40_000);
    assert_eq!(source.calls(), 1, "concurrent misses must share one fetch");

    let (_, json) = get(&app, "/cached").await;
    assert_eq!(json["count"], 1);
}
