// src/notify/mod.rs
pub mod telegram;

use anyhow::Result;

/// Delivery channel for one formatted message. An `Err` means the
/// channel did not confirm acceptance; the pipeline logs it, leaves the
/// item unmarked, and moves on. Implementations must not panic.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
