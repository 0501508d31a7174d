// src/config.rs
//! Process configuration, read from the environment exactly once at
//! startup and passed by reference everywhere else. No ambient globals.

use std::path::PathBuf;

use anyhow::{bail, Result};

// --- env names ---
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_FEEDS: &str = "RSS_FEEDS";
pub const ENV_TICKERS: &str = "TICKERS";
pub const ENV_SEEN_DB: &str = "SEEN_DB";
pub const ENV_MAX_PER_RUN: &str = "MAX_PER_RUN";
pub const ENV_SUMMARY_WORDS: &str = "SUMMARY_WORDS";
pub const ENV_TRANSLATE_TARGET: &str = "TRANSLATE_TARGET";
pub const ENV_KEYWORDS: &str = "KEYWORDS";

// --- defaults ---
pub const DEFAULT_SEEN_DB: &str = "seen.json";
pub const DEFAULT_MAX_PER_RUN: usize = 8;
pub const DEFAULT_SUMMARY_WORDS: usize = 18;
pub const DEFAULT_TRANSLATE_TARGET: &str = "hi";

pub const DEFAULT_FEEDS: &[&str] = &[
    "https://feeds.reuters.com/reuters/marketsNews",
    "https://feeds.reuters.com/reuters/INbusinessNews",
    "https://b2b.economictimes.indiatimes.com/rss/topstories",
    "https://economictimes.indiatimes.com/rssfeeds/1373380680.cms",
    "https://economictimes.indiatimes.com/markets/rss",
];

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "NSE", "BSE", "RBI", "RESULT", "RESULTS", "EARNINGS", "CORPORATE", "NIFTY", "SENSEX",
    "QUARTERLY", "IPO", "MERGER", "ACQUISITION",
];

pub const DEFAULT_TICKERS: &[&str] = &["RELIANCE.NS", "TCS.NS", "HDFCBANK.NS"];

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub feeds: Vec<String>,
    pub tickers: Vec<String>,
    pub seen_db: PathBuf,
    pub max_per_run: usize,
    pub summary_words: usize,
    pub translate_target: String,
    pub keywords: Vec<String>,
}

impl Config {
    /// Read everything from the environment. Only the Telegram
    /// credentials are hard requirements; everything else falls back
    /// to a default. Called before any network or state access so a
    /// misconfigured process dies without side effects.
    pub fn from_env() -> Result<Self> {
        let bot_token = env_trimmed(ENV_BOT_TOKEN);
        let chat_id = env_trimmed(ENV_CHAT_ID);
        if bot_token.is_empty() || chat_id.is_empty() {
            bail!("set {ENV_BOT_TOKEN} and {ENV_CHAT_ID} in the environment");
        }

        Ok(Self {
            bot_token,
            chat_id,
            feeds: csv_or_default(ENV_FEEDS, DEFAULT_FEEDS),
            tickers: csv_or_default(ENV_TICKERS, DEFAULT_TICKERS),
            seen_db: PathBuf::from(string_or(ENV_SEEN_DB, DEFAULT_SEEN_DB)),
            max_per_run: num_or(ENV_MAX_PER_RUN, DEFAULT_MAX_PER_RUN),
            summary_words: num_or(ENV_SUMMARY_WORDS, DEFAULT_SUMMARY_WORDS),
            translate_target: string_or(ENV_TRANSLATE_TARGET, DEFAULT_TRANSLATE_TARGET),
            keywords: csv_or_default(ENV_KEYWORDS, DEFAULT_KEYWORDS),
        })
    }
}

fn env_trimmed(name: &str) -> String {
    std::env::var(name).unwrap_or_default().trim().to_string()
}

fn string_or(name: &str, default: &str) -> String {
    let v = env_trimmed(name);
    if v.is_empty() {
        default.to_string()
    } else {
        v
    }
}

fn num_or(name: &str, default: usize) -> usize {
    env_trimmed(name).parse().unwrap_or(default)
}

/// Comma-separated values, trimmed, empty segments dropped. A blank or
/// unset variable falls back to the default list.
fn csv_or_default(name: &str, default: &[&str]) -> Vec<String> {
    let raw = env_trimmed(name);
    let parsed = split_csv(&raw);
    if parsed.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}

pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
