// src/config/mod.rs
//! Env-driven configuration for the loader and the server.
//! `.env` is read by the binaries (`dotenvy`) before these are built.

pub mod loader;
pub mod server;

pub use loader::LoaderConfig;
pub use server::ServerConfig;

/// Read a non-empty, trimmed env var.
pub(crate) fn env_str(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_flag(name: &str) -> bool {
    matches!(
        env_str(name).unwrap_or_default().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
