//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, with the store's
//! call counters used to tell cache hits from store round trips.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use profile_cache::{api::create_router, store::MemoryStore, AppState, UserService};
use serde_json::Value;
use tower::ServiceExt;

const TTL: Duration = Duration::from_secs(120);

// == Helper Functions ==

fn create_test_app(latency: Duration) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let users = UserService::new(store.clone(), TTL).with_read_latency(latency);
    let state = AppState::new(users);
    (create_router(state), store)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_user(app: &Router, username: &str, status: &str) -> (StatusCode, Value) {
    let body = format!(r#"{{"username":"{}","status":"{}"}}"#, username, status);
    send(app, "POST", "/user", Some(&body)).await
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_returns_record() {
    let (app, _store) = create_test_app(Duration::ZERO);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/user")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"username":"bob","status":"active"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["username"], "bob");
    assert_eq!(json["status"], "active");
    assert_eq!(json["id"], 1);

    let date = json["createDate"].as_str().unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(&date[2..3], "/");
    assert_eq!(&date[5..6], "/");
}

#[tokio::test]
async fn test_create_twice_conflicts() {
    let (app, store) = create_test_app(Duration::ZERO);

    let (first, _) = create_user(&app, "bob", "active").await;
    let (second, json) = create_user(&app, "bob", "other").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("bob"));
    assert_eq!(store.save_count(), 1);

    let (_, stored) = send(&app, "GET", "/user/bob", None).await;
    assert_eq!(stored["status"], "active");
}

#[tokio::test]
async fn test_create_invalid_json() {
    let (app, _store) = create_test_app(Duration::ZERO);

    let (status, _) = send(&app, "POST", "/user", Some("not json")).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_create_empty_username() {
    let (app, _store) = create_test_app(Duration::ZERO);

    let (status, json) = create_user(&app, "", "active").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

// == Read Endpoint Tests ==

#[tokio::test]
async fn test_missing_user_is_not_found_on_both_paths() {
    let (app, store) = create_test_app(Duration::ZERO);

    let (uncached, _) = send(&app, "GET", "/user/carol", None).await;
    let (cached, _) = send(&app, "GET", "/user/cached/carol", None).await;
    let (cached_again, _) = send(&app, "GET", "/user/cached/carol", None).await;

    assert_eq!(uncached, StatusCode::NOT_FOUND);
    assert_eq!(cached, StatusCode::NOT_FOUND);
    assert_eq!(cached_again, StatusCode::NOT_FOUND);
    // no negative entry: each cached read went to the store
    assert_eq!(store.lookup_count(), 3);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_cached_read_hits_within_ttl() {
    let (app, store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;
    let base = store.lookup_count();

    let (_, first) = send(&app, "GET", "/user/cached/alice", None).await;
    let (_, second) = send(&app, "GET", "/user/cached/alice", None).await;

    assert_eq!(first, second);
    assert_eq!(store.lookup_count(), base + 1);
}

#[tokio::test]
async fn test_uncached_read_always_hits_store() {
    let (app, store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;
    let base = store.lookup_count();

    send(&app, "GET", "/user/cached/alice", None).await;
    send(&app, "GET", "/user/alice", None).await;
    send(&app, "GET", "/user/alice", None).await;

    assert_eq!(store.lookup_count(), base + 3);
}

#[tokio::test(start_paused = true)]
async fn test_cached_read_requeries_after_ttl() {
    let (app, store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;
    let base = store.lookup_count();

    send(&app, "GET", "/user/cached/alice", None).await;
    tokio::time::advance(TTL).await;
    let (status, json) = send(&app, "GET", "/user/cached/alice", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "active");
    assert_eq!(store.lookup_count(), base + 2);
}

#[tokio::test(start_paused = true)]
async fn test_cache_hit_skips_read_latency() {
    let (app, _store) = create_test_app(Duration::from_secs(3));
    create_user(&app, "alice", "active").await;

    let start = tokio::time::Instant::now();
    send(&app, "GET", "/user/cached/alice", None).await;
    let miss = start.elapsed();

    let start = tokio::time::Instant::now();
    send(&app, "GET", "/user/cached/alice", None).await;
    let hit = start.elapsed();

    assert!(miss >= Duration::from_secs(3));
    assert!(hit < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_writes_skip_read_latency() {
    let (app, _store) = create_test_app(Duration::from_secs(3));

    let start = tokio::time::Instant::now();
    let (created, _) = create_user(&app, "bob", "active").await;
    let (updated, _) = send(&app, "PUT", "/user/bob?status=away&evict=true", None).await;

    assert_eq!(created, StatusCode::OK);
    assert_eq!(updated, StatusCode::OK);
    assert!(start.elapsed() < Duration::from_secs(1));
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_with_evict_scenario() {
    let (app, store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;

    let (_, cached) = send(&app, "GET", "/user/cached/alice", None).await;
    assert_eq!(cached["status"], "active");

    let (status, updated) = send(&app, "PUT", "/user/alice?status=banned&evict=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "banned");

    let (_, fresh) = send(&app, "GET", "/user/cached/alice", None).await;
    assert_eq!(fresh["status"], "banned");

    // two cached reads, both went to the store
    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["misses"], 2);
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["evictions"], 1);
    assert_eq!(store.save_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_update_without_evict_is_stale_until_expiry() {
    let (app, _store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;

    send(&app, "GET", "/user/cached/alice", None).await;
    let (status, _) = send(&app, "PUT", "/user/alice?status=banned&evict=false", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stale) = send(&app, "GET", "/user/cached/alice", None).await;
    assert_eq!(stale["status"], "active");

    let (_, direct) = send(&app, "GET", "/user/alice", None).await;
    assert_eq!(direct["status"], "banned");

    tokio::time::advance(TTL).await;
    let (_, fresh) = send(&app, "GET", "/user/cached/alice", None).await;
    assert_eq!(fresh["status"], "banned");
}

#[tokio::test]
async fn test_update_missing_user() {
    let (app, _store) = create_test_app(Duration::ZERO);

    let (status, _) = send(&app, "PUT", "/user/carol?status=banned&evict=true", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_preserves_create_date() {
    let (app, _store) = create_test_app(Duration::ZERO);
    let (_, created) = create_user(&app, "alice", "active").await;

    let (_, updated) = send(&app, "PUT", "/user/alice?status=away&evict=true", None).await;

    assert_eq!(updated["createDate"], created["createDate"]);
    assert_eq!(updated["id"], created["id"]);
}

// == Operational Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _store) = create_test_app(Duration::ZERO);

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, _store) = create_test_app(Duration::ZERO);
    create_user(&app, "alice", "active").await;

    send(&app, "GET", "/user/cached/alice", None).await;
    send(&app, "GET", "/user/cached/alice", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}
