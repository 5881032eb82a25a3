// src/config/server.rs
use std::path::PathBuf;

use super::{env_flag, env_str};

pub const DEFAULT_TABLE_NAME: &str = "fortune-of-the-day";
pub const DEFAULT_ALLOW_ORIGIN: &str = "https://fortune.lnkphm.online";
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const ENV_TABLE_NAME: &str = "FORTUNE_TABLE_NAME";
pub const ENV_ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";
pub const ENV_STATIC_DIR: &str = "FORTUNE_STATIC_DIR";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub table_name: String,
    pub allow_origin: String,
    /// Served under `/static` when the directory exists.
    pub static_dir: PathBuf,
    /// Mounts `/metrics`.
    pub debug_routes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            debug_routes: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            table_name: env_str(ENV_TABLE_NAME).unwrap_or(d.table_name),
            allow_origin: env_str(ENV_ALLOW_ORIGIN).unwrap_or(d.allow_origin),
            static_dir: env_str(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(d.static_dir),
            debug_routes: env_flag(ENV_DEBUG_ROUTES),
        }
    }
}
