// src/fortune.rs
//! Fortune record shared by the store, the API and the loader.

use serde::{Deserialize, Serialize};

/// Lowest fortune id the loader draws.
pub const MIN_FORTUNE_ID: u32 = 0;
/// Highest fortune id the loader draws (inclusive).
pub const MAX_FORTUNE_ID: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub id: i64,
    pub name: String,
}

impl Fortune {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// What the loader requires from a `/fortunes/{id}` body.
/// Extra fields (like `id`) are ignored; a missing `name` fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FortuneRecord {
    pub name: String,
}

impl From<Fortune> for FortuneRecord {
    fn from(f: Fortune) -> Self {
        Self { name: f.name }
    }
}
