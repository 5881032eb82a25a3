// src/loader/mod.rs
//! Fortune loader: pick an id, fetch the fortune, write its name into
//! the `fortune-text` element. One cycle per trigger, no retained state.

pub mod document;
pub mod error;
pub mod picker;
pub mod source;

pub use document::{Document, Element, FORTUNE_ELEMENT_ID, PLACEHOLDER_TEXT};
pub use error::LoadError;
pub use picker::{pick_index, FixedPicker, IndexPicker, RandomPicker};
pub use source::{fortune_url, FortuneSource, HttpFortuneSource, StoreFortuneSource};

use metrics::counter;
use tracing::{info, warn};

use crate::config::LoaderConfig;
use crate::fortune::Fortune;

pub struct FortuneLoader<P = RandomPicker, S = HttpFortuneSource> {
    picker: P,
    source: S,
}

impl FortuneLoader {
    /// Random picker + HTTP source built from `cfg`.
    pub fn from_config(cfg: &LoaderConfig) -> Result<Self, LoadError> {
        Ok(Self {
            picker: RandomPicker,
            source: HttpFortuneSource::new(cfg)?,
        })
    }
}

impl<P: IndexPicker, S: FortuneSource> FortuneLoader<P, S> {
    pub fn new(picker: P, source: S) -> Self {
        Self { picker, source }
    }

    /// One fetch-parse-render pass. On error the element is not touched.
    pub async fn load_cycle(&self, doc: &Document) -> Result<Fortune, LoadError> {
        let id = self.picker.pick();
        let record = self.source.fetch_fortune(id).await?;

        let el = doc
            .get_element_by_id(FORTUNE_ELEMENT_ID)
            .ok_or_else(|| LoadError::MissingElement {
                id: FORTUNE_ELEMENT_ID.to_string(),
            })?;
        el.set_text_content(&record.name);

        Ok(Fortune::new(i64::from(id), record.name))
    }

    /// Page-ready trigger: run a cycle and log how it went. Never fails.
    pub async fn on_load(&self, doc: &Document) -> Option<Fortune> {
        match self.load_cycle(doc).await {
            Ok(f) => {
                counter!("fortune_loads_total", "outcome" => "ok").increment(1);
                info!(target: "loader", id = f.id, "fortune rendered");
                Some(f)
            }
            Err(e) => {
                counter!("fortune_loads_total", "outcome" => e.kind()).increment(1);
                warn!(target: "loader", kind = e.kind(), error = %e, "fortune load failed; display unchanged");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::FortuneRecord;
    use async_trait::async_trait;

    struct Canned(Result<&'static str, u16>);

    #[async_trait]
    impl FortuneSource for Canned {
        async fn fetch_fortune(&self, _id: u32) -> Result<FortuneRecord, LoadError> {
            match self.0 {
                Ok(name) => Ok(FortuneRecord {
                    name: name.to_string(),
                }),
                Err(status) => Err(LoadError::Status { status }),
            }
        }
    }

    #[tokio::test]
    async fn success_writes_name() {
        let loader = FortuneLoader::new(FixedPicker(7), Canned(Ok("Good fortune")));
        let doc = Document::fortune_page();
        let f = loader.load_cycle(&doc).await.unwrap();
        assert_eq!(f, Fortune::new(7, "Good fortune"));
        assert_eq!(doc.text_of(FORTUNE_ELEMENT_ID).as_deref(), Some("Good fortune"));
    }

    #[tokio::test]
    async fn failure_leaves_placeholder() {
        let loader = FortuneLoader::new(FixedPicker(1), Canned(Err(500)));
        let doc = Document::fortune_page();
        assert!(loader.on_load(&doc).await.is_none());
        assert_eq!(doc.text_of(FORTUNE_ELEMENT_ID).as_deref(), Some(PLACEHOLDER_TEXT));
    }

    #[tokio::test]
    async fn missing_element_is_reported() {
        let loader = FortuneLoader::new(FixedPicker(1), Canned(Ok("x")));
        let doc = Document::new("empty");
        let err = loader.load_cycle(&doc).await.unwrap_err();
        assert!(matches!(err, LoadError::MissingElement { .. }));
        assert_eq!(err.kind(), "missing_element");
    }
}
