// src/config/loader.rs
use std::time::Duration;

use super::env_str;

pub const DEFAULT_API_BASE_URL: &str = "https://api.lnkphm.online";

pub const ENV_API_BASE_URL: &str = "FORTUNE_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "FORTUNE_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Scheme + host of the fortune API, without a trailing slash.
    pub base_url: String,
    /// `None` means the request may wait forever.
    pub timeout: Option<Duration>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl LoaderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    pub fn from_env() -> Self {
        let base_url = env_str(ENV_API_BASE_URL)
            .map(trim_base)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout = parse_timeout(env_str(ENV_HTTP_TIMEOUT_SECS));
        Self { base_url, timeout }
    }
}

fn trim_base(s: String) -> String {
    s.trim_end_matches('/').to_string()
}

// zero or garbage disables the timeout
fn parse_timeout(raw: Option<String>) -> Option<Duration> {
    raw.and_then(|s| s.parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}
