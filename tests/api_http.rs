// tests/api_http.rs
//
// HTTP-level tests for the fortune API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /, /health
// - GET /fortunes, /fortunes/{id} (found, unknown, non-integer)
// - GET /today (escaped fortune, placeholder on empty table)
// - CORS origin header

mod common;

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use common::sample_store;
use fortune_of_the_day::api::{self, AppState};
use fortune_of_the_day::loader::PLACEHOLDER_TEXT;
use fortune_of_the_day::store::MemoryStore;

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    api::router(AppState::new(sample_store()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, String::from_utf8(bytes).expect("utf8"))
}

#[tokio::test]
async fn root_says_hello() {
    let (status, body) = get(test_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_str(&body).expect("json");
    assert_eq!(v["message"], "Hello");
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.trim(), "ok");
}

#[tokio::test]
async fn list_returns_all_ordered_by_id() {
    let (status, body) = get(test_router(), "/fortunes").await;
    assert_eq!(status, StatusCode::OK);

    // Two-space indented JSON.
    assert!(body.contains("\n  {"), "expected indented JSON, got {body}");

    let v: Json = serde_json::from_str(&body).expect("json");
    let ids: Vec<i64> = v
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![0, 3, 10]);
}

#[tokio::test]
async fn get_by_id_found() {
    let (status, body) = get(test_router(), "/fortunes/10").await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_str(&body).expect("json");
    assert_eq!(v, serde_json::json!({ "id": 10, "name": "Ten" }));
}

#[tokio::test]
async fn get_by_id_unknown_or_garbage_is_404() {
    for uri in ["/fortunes/5", "/fortunes/abc", "/fortunes/-"] {
        let (status, body) = get(test_router(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        let v: Json = serde_json::from_str(&body).expect("json");
        assert_eq!(v["message"], "fortune not found", "{uri}");
    }
}

#[tokio::test]
async fn today_renders_escaped_fortune() {
    let store = Arc::new(MemoryStore::with_fortunes(
        "t",
        (0..=10)
            .map(|id| fortune_of_the_day::Fortune::new(id, "<i>same</i> & all"))
            .collect(),
    ));
    let (status, body) = get(api::router(AppState::new(store)), "/today").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.contains(r#"<p id="fortune-text">&lt;i&gt;same&lt;/i&gt; &amp; all</p>"#),
        "{body}"
    );
}

#[tokio::test]
async fn today_keeps_placeholder_on_empty_table() {
    let store = Arc::new(MemoryStore::new("empty"));
    let (status, body) = get(api::router(AppState::new(store)), "/today").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.contains(&format!(r#"<p id="fortune-text">{PLACEHOLDER_TEXT}</p>"#)),
        "{body}"
    );
}

#[tokio::test]
async fn cors_allows_site_origin() {
    let req = Request::builder()
        .method("GET")
        .uri("/fortunes/0")
        .header("origin", "https://fortune.lnkphm.online")
        .body(Body::empty())
        .expect("build GET");
    let resp = test_router().oneshot(req).await.expect("oneshot");
    assert_eq!(resp.status(), StatusCode::OK);
    let allow = resp
        .headers()
        .get("access-control-allow-origin")
        .and_then(|h| h.to_str().ok());
    assert_eq!(allow, Some("https://fortune.lnkphm.online"));
}

#[tokio::test]
async fn cors_ignores_foreign_origin() {
    let req = Request::builder()
        .method("GET")
        .uri("/fortunes/0")
        .header("origin", "https://evil.example")
        .body(Body::empty())
        .expect("build GET");
    let resp = test_router().oneshot(req).await.expect("oneshot");
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
