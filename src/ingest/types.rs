// src/ingest/types.rs
use anyhow::Result;

/// One piece of news, shaped the same regardless of which provider produced it.
///
/// `id` may be empty when the source exposes no usable identifier; the
/// pipeline derives one before the item reaches the dedup barrier.
/// `published` stays in the source's native format and is parsed lazily.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub source: String,
    pub published: String,
}

#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>>;
    fn name(&self) -> &str;
}
