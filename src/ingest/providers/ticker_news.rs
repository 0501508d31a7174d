// src/ingest/providers/ticker_news.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ingest::types::{NewsItem, SourceProvider};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const SEARCH_URL: &str = "https://query1.finance.yahoo.com/v1/finance/search";
const NEWS_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<NewsEntry>,
}

#[derive(Debug, Deserialize)]
struct NewsEntry {
    uuid: Option<String>,
    title: Option<String>,
    publisher: Option<String>,
    link: Option<String>,
    #[serde(rename = "providerPublishTime")]
    provider_publish_time: Option<u64>,
}

/// Parse a finance-search response into items. The provider hands out
/// uuids, so ids are native here; publish times arrive as unix seconds
/// and are carried as such for the pipeline's lazy parse.
pub fn parse_search_response(json: &str, symbol: &str) -> Result<Vec<NewsItem>> {
    let resp: SearchResponse =
        serde_json::from_str(json).with_context(|| format!("parsing news json for {symbol}"))?;
    let mut out = Vec::with_capacity(resp.news.len());
    for entry in resp.news {
        out.push(NewsItem {
            id: entry.uuid.unwrap_or_default(),
            title: entry.title.unwrap_or_default(),
            summary: String::new(),
            link: entry.link.unwrap_or_default(),
            source: entry.publisher.unwrap_or_else(|| symbol.to_string()),
            published: entry
                .provider_publish_time
                .map(|t| t.to_string())
                .unwrap_or_default(),
        });
    }
    Ok(out)
}

/// One provider per configured ticker symbol.
pub struct TickerNewsProvider {
    symbol: String,
    client: Client,
}

impl TickerNewsProvider {
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SourceProvider for TickerNewsProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        let count = NEWS_COUNT.to_string();
        let body = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("q", self.symbol.as_str()),
                ("newsCount", count.as_str()),
                ("quotesCount", "0"),
            ])
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("fetching news for {}", self.symbol))?
            .error_for_status()
            .with_context(|| format!("news for {} non-2xx", self.symbol))?
            .text()
            .await
            .context("reading news body")?;
        parse_search_response(&body, &self.symbol)
    }

    fn name(&self) -> &str {
        &self.symbol
    }
}
