// tests/pipeline_ordering.rs
// Candidates are delivered oldest first, regardless of provider order;
// unparseable timestamps sort last.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use market_notifier::{
    Config, KeywordFilter, NewsItem, NoTranslate, Notifier, SeenStore, SourceProvider,
};

struct FixedProvider {
    items: Vec<NewsItem>,
}

#[async_trait]
impl SourceProvider for FixedProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        Ok(self.items.clone())
    }
    fn name(&self) -> &str {
        "fixed"
    }
}

#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingSink {
    async fn send(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn item(id: &str, title: &str, published: &str) -> NewsItem {
    NewsItem {
        id: id.into(),
        title: title.into(),
        summary: String::new(),
        link: String::new(),
        source: String::new(),
        published: published.into(),
    }
}

fn test_config(seen_db: std::path::PathBuf) -> Config {
    Config {
        bot_token: "token".into(),
        chat_id: "chat".into(),
        feeds: Vec::new(),
        tickers: Vec::new(),
        seen_db,
        max_per_run: 8,
        summary_words: 18,
        translate_target: "hi".into(),
        keywords: Vec::new(),
    }
}

#[tokio::test]
async fn scrambled_input_is_delivered_chronologically() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = test_config(tmp.path().join("seen.json"));
    let store = SeenStore::new(cfg.seen_db.clone());
    let filter = KeywordFilter::new(&cfg.keywords).unwrap();

    // Mixed formats, scrambled across two providers.
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(FixedProvider {
            items: vec![
                item("c", "Newest", "Mon, 15 Jan 2024 12:00:00 +0000"),
                item("a", "Oldest", "Mon, 15 Jan 2024 08:00:00 +0000"),
            ],
        }),
        Box::new(FixedProvider {
            items: vec![item("b", "Middle", "2024-01-15T10:00:00Z")],
        }),
    ];

    let sink = RecordingSink::default();
    let report = market_notifier::run_once(&cfg, &providers, &filter, &NoTranslate, &sink, &store)
        .await
        .unwrap();
    assert_eq!(report.sent, 3);

    let sent = sink.sent.lock().unwrap();
    assert!(sent[0].contains("Oldest"));
    assert!(sent[1].contains("Middle"));
    assert!(sent[2].contains("Newest"));
}

#[tokio::test]
async fn unparseable_timestamp_sorts_after_known_ones() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = test_config(tmp.path().join("seen.json"));
    let store = SeenStore::new(cfg.seen_db.clone());
    let filter = KeywordFilter::new(&cfg.keywords).unwrap();

    let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(FixedProvider {
        items: vec![
            item("x", "Undated", "sometime last week"),
            item("y", "Dated", "Mon, 15 Jan 2024 08:00:00 +0000"),
        ],
    })];

    let sink = RecordingSink::default();
    market_notifier::run_once(&cfg, &providers, &filter, &NoTranslate, &sink, &store)
        .await
        .unwrap();

    let sent = sink.sent.lock().unwrap();
    assert!(sent[0].contains("Dated"));
    assert!(sent[1].contains("Undated"));
}
