// src/telemetry.rs
//! Tracing subscriber setup shared by the server and the loader CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "FORTUNE_DEV_LOG";

const SERVER_FILTER: &str = "fortune_of_the_day=debug,api=debug,store=debug,loader=info,warn";
const CLI_FILTER: &str = "warn";

/// Dev logging gate: FORTUNE_DEV_LOG=1 AND dev env
/// (debug build or SHUTTLE_ENV in {local, development, dev}).
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Server: compact logs in development only (no-op in production).
pub fn init_server_tracing() {
    if dev_logging_enabled() {
        install(SERVER_FILTER);
    }
}

/// CLI: always on, warnings by default, stderr so stdout stays the fortune.
pub fn init_cli_tracing() {
    install(CLI_FILTER);
}

/// `RUST_LOG` wins over `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn install(default: &str) {
    // Shuttle may already have installed a subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter(default))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
