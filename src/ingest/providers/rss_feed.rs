// src/ingest/providers/rss_feed.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;

use crate::ingest::types::{NewsItem, SourceProvider};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    title: Option<String>,
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    guid: Option<Guid>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

// <guid> usually carries an isPermaLink attribute, so it cannot
// deserialize straight into a String.
#[derive(Debug, Deserialize)]
struct Guid {
    #[serde(rename = "$text")]
    value: Option<String>,
}

/// Parse one RSS document into items. The channel title becomes the
/// source label; items without a guid keep an empty id for the
/// pipeline to derive.
pub fn parse_rss(xml: &str) -> Result<Vec<NewsItem>> {
    let rss: Rss = from_str(xml).context("parsing rss xml")?;
    let label = rss.channel.title.unwrap_or_default();
    let mut out = Vec::with_capacity(rss.channel.item.len());
    for it in rss.channel.item {
        out.push(NewsItem {
            id: it.guid.and_then(|g| g.value).unwrap_or_default(),
            title: it.title.unwrap_or_default(),
            summary: it.description.unwrap_or_default(),
            link: it.link.unwrap_or_default(),
            source: label.clone(),
            published: it.pub_date.unwrap_or_default(),
        });
    }
    Ok(out)
}

/// One provider per configured feed URL.
pub struct RssFeedProvider {
    url: String,
    client: Client,
}

impl RssFeedProvider {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SourceProvider for RssFeedProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        let body = self
            .client
            .get(&self.url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("fetching feed {}", self.url))?
            .error_for_status()
            .with_context(|| format!("feed {} non-2xx", self.url))?
            .text()
            .await
            .context("reading feed body")?;
        parse_rss(&body)
    }

    fn name(&self) -> &str {
        &self.url
    }
}
