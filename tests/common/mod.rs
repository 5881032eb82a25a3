// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use fortune_of_the_day::store::MemoryStore;
use fortune_of_the_day::Fortune;

/// Serve `router` on an ephemeral local port; returns the base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock");
    });
    format!("http://{addr}")
}

pub fn sample_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_fortunes(
        "fortune-of-the-day",
        vec![
            Fortune::new(0, "Zero"),
            Fortune::new(3, "Three <b>bold</b>"),
            Fortune::new(10, "Ten"),
        ],
    ))
}
