// src/ingest/providers/mod.rs
pub mod rss_feed;
pub mod ticker_news;
