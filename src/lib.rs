// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod filter;
pub mod ingest;
pub mod notify;
pub mod pipeline;
pub mod render;
pub mod seen;
pub mod translate;

// ---- Re-exports for stable public API ----
pub use crate::config::Config;
pub use crate::filter::KeywordFilter;
pub use crate::ingest::types::{NewsItem, SourceProvider};
pub use crate::notify::Notifier;
pub use crate::pipeline::{run_once, RunReport};
pub use crate::seen::SeenStore;
pub use crate::translate::{NoTranslate, Translator};
