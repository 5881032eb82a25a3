use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use metrics::{describe_counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

// The recorder is process-global; tests build the app more than once.
static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once) and publish the table size.
    pub fn init(table_len: usize) -> Result<Self> {
        let handle = HANDLE
            .get_or_try_init(|| {
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .map_err(|e| anyhow!("prometheus: install recorder: {e}"))?;
                describe_counter!("fortune_requests_total", "Fortune API requests by route.");
                describe_counter!(
                    "fortune_not_found_total",
                    "Lookups that answered 404 fortune not found."
                );
                describe_counter!("fortune_loads_total", "Load cycles by outcome.");
                Ok::<_, anyhow::Error>(handle)
            })?
            .clone();

        gauge!("fortune_table_size").set(table_len as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
