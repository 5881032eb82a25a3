// src/loader/source.rs
//! Where a load cycle gets its fortune from: the remote API over HTTP,
//! or (server-side) the local store.

use async_trait::async_trait;
use reqwest::Client;

use super::LoadError;
use crate::config::LoaderConfig;
use crate::fortune::FortuneRecord;
use crate::store::DynFortuneStore;

#[async_trait]
pub trait FortuneSource: Send + Sync {
    async fn fetch_fortune(&self, id: u32) -> Result<FortuneRecord, LoadError>;
}

/// `{base}/fortunes/{id}`
pub fn fortune_url(base: &str, id: u32) -> String {
    format!("{}/fortunes/{}", base.trim_end_matches('/'), id)
}

#[derive(Clone)]
pub struct HttpFortuneSource {
    base_url: String,
    client: Client,
}

impl HttpFortuneSource {
    pub fn new(cfg: &LoaderConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(t) = cfg.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(LoadError::Transport)?;
        Ok(Self {
            base_url: cfg.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FortuneSource for HttpFortuneSource {
    async fn fetch_fortune(&self, id: u32) -> Result<FortuneRecord, LoadError> {
        let url = fortune_url(&self.base_url, id);
        tracing::debug!(target: "loader", %url, "fetching fortune");

        let rsp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(LoadError::Transport)?;

        let status = rsp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        // Read as text first so a decode failure is reported as malformed, not transport.
        let body = rsp.text().await.map_err(LoadError::Transport)?;
        serde_json::from_str::<FortuneRecord>(&body)
            .map_err(|e| LoadError::MalformedResponse(e.to_string()))
    }
}

/// Reads straight from the server's own table.
#[derive(Clone)]
pub struct StoreFortuneSource {
    store: DynFortuneStore,
}

impl StoreFortuneSource {
    pub fn new(store: DynFortuneStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FortuneSource for StoreFortuneSource {
    async fn fetch_fortune(&self, id: u32) -> Result<FortuneRecord, LoadError> {
        self.store
            .get(i64::from(id))
            .await
            .map(FortuneRecord::from)
            .ok_or(LoadError::NotFound { id })
    }
}
