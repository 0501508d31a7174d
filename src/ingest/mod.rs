// src/ingest/mod.rs
pub mod providers;
pub mod types;

use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::OffsetDateTime;

/// Parse a source-native publication timestamp into unix seconds.
///
/// Feeds in the wild use RFC 2822 (`Mon, 02 Jan 2006 15:04:05 +0530`),
/// the occasional RFC 3339, and the ticker endpoint hands us bare
/// unix seconds. Returns `None` for anything else; the pipeline
/// substitutes the current wall clock so unparseable items sort late.
pub fn parse_published(raw: &str) -> Option<u64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().ok();
    }
    let parsed = OffsetDateTime::parse(s, &Rfc2822)
        .or_else(|_| OffsetDateTime::parse(s, &Rfc3339))
        .ok()?;
    u64::try_from(parsed.unix_timestamp()).ok()
}
