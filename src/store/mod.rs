// src/store/mod.rs
//! Keyed fortune table. The server owns one behind `Arc<dyn FortuneStore>`.

pub mod seed;

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::fortune::Fortune;

pub type DynFortuneStore = Arc<dyn FortuneStore>;

#[async_trait]
pub trait FortuneStore: Send + Sync {
    fn table_name(&self) -> &str;

    /// Insert or replace by id.
    async fn add(&self, fortune: Fortune);
    async fn get(&self, id: i64) -> Option<Fortune>;
    /// All fortunes ordered by id.
    async fn scan(&self) -> Vec<Fortune>;
    /// Returns whether something was removed.
    async fn delete(&self, id: i64) -> bool;
    async fn len(&self) -> usize;
}

#[derive(Debug)]
pub struct MemoryStore {
    table: String,
    inner: RwLock<BTreeMap<i64, Fortune>>,
}

impl MemoryStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_fortunes(table: impl Into<String>, fortunes: Vec<Fortune>) -> Self {
        let store = Self::new(table);
        {
            let mut map = store.inner.write().expect("store rwlock poisoned");
            for f in fortunes {
                map.insert(f.id, f);
            }
        }
        store
    }
}

#[async_trait]
impl FortuneStore for MemoryStore {
    fn table_name(&self) -> &str {
        &self.table
    }

    async fn add(&self, fortune: Fortune) {
        debug!(target: "store", table = %self.table, id = fortune.id, "put fortune");
        let mut map = self.inner.write().expect("store rwlock poisoned");
        map.insert(fortune.id, fortune);
    }

    async fn get(&self, id: i64) -> Option<Fortune> {
        let map = self.inner.read().expect("store rwlock poisoned");
        map.get(&id).cloned()
    }

    async fn scan(&self) -> Vec<Fortune> {
        let map = self.inner.read().expect("store rwlock poisoned");
        map.values().cloned().collect()
    }

    async fn delete(&self, id: i64) -> bool {
        let mut map = self.inner.write().expect("store rwlock poisoned");
        let removed = map.remove(&id).is_some();
        debug!(target: "store", table = %self.table, id, removed, "delete fortune");
        removed
    }

    async fn len(&self) -> usize {
        self.inner.read().expect("store rwlock poisoned").len()
    }
}
