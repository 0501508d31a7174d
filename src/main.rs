//! market-notifier — Binary Entrypoint
//! One fetch-filter-sort-send pass per invocation: load the seen-set,
//! poll every configured source, deliver up to the cap, persist, exit.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use market_notifier::config::Config;
use market_notifier::filter::KeywordFilter;
use market_notifier::ingest::providers::{rss_feed::RssFeedProvider, ticker_news::TickerNewsProvider};
use market_notifier::ingest::types::SourceProvider;
use market_notifier::notify::telegram::TelegramNotifier;
use market_notifier::pipeline;
use market_notifier::seen::SeenStore;
use market_notifier::translate::GoogleTranslator;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("market_notifier=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when variables come from the host.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Fails fast on missing credentials, before any network or state I/O.
    let cfg = Config::from_env()?;

    let mut providers: Vec<Box<dyn SourceProvider>> = Vec::new();
    for feed in &cfg.feeds {
        providers.push(Box::new(RssFeedProvider::new(feed.clone())));
    }
    for symbol in &cfg.tickers {
        providers.push(Box::new(TickerNewsProvider::new(symbol.clone())));
    }

    let filter = KeywordFilter::new(&cfg.keywords)?;
    let translator = GoogleTranslator::new(cfg.translate_target.clone());
    let sink = TelegramNotifier::new(cfg.bot_token.clone(), cfg.chat_id.clone());
    let store = SeenStore::new(cfg.seen_db.clone());

    let report = pipeline::run_once(&cfg, &providers, &filter, &translator, &sink, &store).await?;

    info!(
        fetched = report.fetched,
        candidates = report.candidates,
        sent = report.sent,
        failed = report.failed,
        "run complete"
    );
    Ok(())
}
