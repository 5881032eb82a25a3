// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod config;
pub mod fortune;
pub mod loader;
pub mod metrics;
pub mod store;
pub mod telemetry;

pub use crate::api::{create_router, router, AppState};
pub use crate::fortune::{Fortune, FortuneRecord};
pub use crate::loader::{Document, FortuneLoader, LoadError};

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::ServerConfig;
use crate::store::{seed, FortuneStore, MemoryStore};

/// Build the full server app from the environment:
/// seed the table, then mount routes (plus `/metrics` when `DEBUG_ROUTES=1`).
pub async fn app() -> anyhow::Result<axum::Router> {
    let cfg = ServerConfig::from_env();
    let fortunes = seed::load_fortunes_default().context("loading fortune seed")?;
    let store = Arc::new(MemoryStore::with_fortunes(cfg.table_name.clone(), fortunes));

    let len = store.len().await;
    info!(table = %cfg.table_name, fortunes = len, "fortune table ready");

    let metrics = if cfg.debug_routes {
        Some(crate::metrics::Metrics::init(len)?)
    } else {
        None
    };

    Ok(api::create_router(
        AppState::new(store),
        &cfg,
        metrics.as_ref(),
    ))
}
