// src/pipeline.rs
//! The one pass a run performs: fetch from every source, derive missing
//! identifiers, drop already-seen and off-topic items, order the rest
//! chronologically, deliver up to the cap, and persist the seen-set
//! reflecting exactly the successful deliveries.

use anyhow::Result;

use crate::config::Config;
use crate::filter::KeywordFilter;
use crate::ingest::parse_published;
use crate::ingest::types::{NewsItem, SourceProvider};
use crate::notify::Notifier;
use crate::render;
use crate::seen::SeenStore;
use crate::translate::Translator;

/// Derived identifiers are bounded so the seen-set file cannot grow
/// unbounded per entry.
pub const DERIVED_ID_MAX_CHARS: usize = 300;

/// Deterministic fallback identity for items whose source gave none:
/// the link when present, else the title, truncated. Repeated runs over
/// the same content derive the same id, so dedup still holds.
pub fn derive_id(item: &NewsItem) -> String {
    let basis = if item.link.is_empty() {
        &item.title
    } else {
        &item.link
    };
    basis.chars().take(DERIVED_ID_MAX_CHARS).collect()
}

/// Per-run counters; logged, never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub fetched: usize,
    pub candidates: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Run the pipeline once. Provider and delivery failures are recovered
/// locally; only a failed seen-set save propagates, since losing it
/// would silently break dedup for every future run.
pub async fn run_once(
    cfg: &Config,
    providers: &[Box<dyn SourceProvider>],
    filter: &KeywordFilter,
    translator: &dyn Translator,
    sink: &dyn Notifier,
    store: &SeenStore,
) -> Result<RunReport> {
    let mut seen = store.load();
    let mut report = RunReport::default();

    // Fetch, derive ids, dedup, filter. The seen-set membership test
    // here is the only identity check in the system.
    let mut candidates: Vec<NewsItem> = Vec::new();
    for provider in providers {
        let items = match provider.fetch_latest().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = ?e, source = provider.name(), "source fetch failed");
                Vec::new()
            }
        };
        report.fetched += items.len();
        for mut item in items {
            if item.id.is_empty() {
                item.id = derive_id(&item);
            }
            if item.id.is_empty() {
                // No link and no title: nothing to key identity on.
                continue;
            }
            if seen.contains(&item.id) {
                continue;
            }
            if !filter.matches(&item) {
                continue;
            }
            candidates.push(item);
        }
    }

    // Oldest first. Unparseable timestamps sort as "now", which lands
    // them after everything with a known publication time.
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    candidates.sort_by_key(|item| parse_published(&item.published).unwrap_or(now));
    report.candidates = candidates.len();

    for item in &candidates {
        if report.sent >= cfg.max_per_run {
            break;
        }
        let msg = render::build_message(item, translator, cfg.summary_words).await;
        match sink.send(&msg).await {
            Ok(()) => {
                seen.insert(item.id.clone());
                report.sent += 1;
                tracing::info!(title = %truncate(&item.title, 80), "sent");
            }
            Err(e) => {
                // Not marked seen: the item stays eligible next run.
                report.failed += 1;
                tracing::warn!(error = ?e, title = %truncate(&item.title, 80), "delivery failed");
            }
        }
    }

    store.save(&seen)?;
    Ok(report)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
