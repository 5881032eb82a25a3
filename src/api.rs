use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use metrics::counter;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::config::server::DEFAULT_ALLOW_ORIGIN;
use crate::config::ServerConfig;
use crate::loader::{Document, FortuneLoader, RandomPicker, StoreFortuneSource};
use crate::metrics::Metrics;
use crate::store::DynFortuneStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DynFortuneStore,
}

impl AppState {
    pub fn new(store: DynFortuneStore) -> Self {
        Self { store }
    }
}

/// Router with default server config and no `/metrics`.
pub fn router(state: AppState) -> Router {
    create_router(state, &ServerConfig::default(), None)
}

pub fn create_router(state: AppState, cfg: &ServerConfig, metrics: Option<&Metrics>) -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "ok" }))
        .route("/fortunes", get(list_fortunes))
        .route("/fortunes/{id}", get(get_fortune))
        .route("/today", get(today))
        .with_state(state);

    if cfg.static_dir.is_dir() {
        app = app.nest_service("/static", ServeDir::new(&cfg.static_dir));
    } else {
        debug!(target: "api", dir = %cfg.static_dir.display(), "static dir missing, not served");
    }

    if let Some(m) = metrics {
        app = app.merge(m.router());
    }

    app.layer(cors_layer(&cfg.allow_origin))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let origin = HeaderValue::from_str(origin).unwrap_or_else(|_| {
        warn!(target: "api", %origin, "invalid CORS origin, using default");
        HeaderValue::from_static(DEFAULT_ALLOW_ORIGIN)
    });
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET])
}

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

const NOT_FOUND: Message = Message {
    message: "fortune not found",
};

/// JSON with two-space indentation.
fn indented_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!(target: "api", error = %e, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn root() -> Response {
    counter!("fortune_requests_total", "route" => "/").increment(1);
    indented_json(StatusCode::OK, &Message { message: "Hello" })
}

async fn list_fortunes(State(state): State<AppState>) -> Response {
    counter!("fortune_requests_total", "route" => "/fortunes").increment(1);
    let all = state.store.scan().await;
    indented_json(StatusCode::OK, &all)
}

async fn get_fortune(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    counter!("fortune_requests_total", "route" => "/fortunes/{id}").increment(1);

    let Ok(id) = raw.trim().parse::<i64>() else {
        debug!(target: "api", id = %raw, "non-integer fortune id");
        counter!("fortune_not_found_total").increment(1);
        return indented_json(StatusCode::NOT_FOUND, &NOT_FOUND);
    };

    match state.store.get(id).await {
        Some(f) => indented_json(StatusCode::OK, &f),
        None => {
            debug!(target: "api", id, table = state.store.table_name(), "fortune not in table");
            counter!("fortune_not_found_total").increment(1);
            indented_json(StatusCode::NOT_FOUND, &NOT_FOUND)
        }
    }
}

/// Server-rendered page: one load cycle against the local table.
async fn today(State(state): State<AppState>) -> Html<String> {
    counter!("fortune_requests_total", "route" => "/today").increment(1);
    let loader = FortuneLoader::new(RandomPicker, StoreFortuneSource::new(state.store.clone()));
    let doc = Document::fortune_page();
    loader.on_load(&doc).await;
    Html(doc.to_html())
}
