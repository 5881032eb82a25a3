// src/loader/error.rs
use thiserror::Error;

/// Why a load cycle left the display untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fortune request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("fortune API returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed fortune response: {0}")]
    MalformedResponse(String),

    #[error("fortune {id} not found")]
    NotFound { id: u32 },

    #[error("no element with id `{id}` in the document")]
    MissingElement { id: String },
}

impl LoadError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "transport",
            LoadError::Status { .. } => "status",
            LoadError::MalformedResponse(_) => "malformed",
            LoadError::NotFound { .. } => "not_found",
            LoadError::MissingElement { .. } => "missing_element",
        }
    }
}
