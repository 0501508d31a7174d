// src/seen.rs
//! Durable set of already-delivered item identifiers.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct SeenFile {
    seen: Vec<String>,
}

/// JSON-file-backed seen-set. Loading is lenient (missing or corrupt
/// state degrades to "nothing seen", which at worst re-delivers);
/// saving is strict, since silently losing the save would break the
/// dedup guarantee for every future run.
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> HashSet<String> {
        if !self.path.exists() {
            // Materialize empty state up front so the file exists for
            // the whole run, not only after the end-of-run save.
            if let Err(e) = self.save(&HashSet::new()) {
                tracing::warn!(error = %e, path = %self.path.display(), "could not create seen state");
            }
            return HashSet::new();
        }
        let Ok(content) = fs::read_to_string(&self.path) else {
            return HashSet::new();
        };
        match serde_json::from_str::<SeenFile>(&content) {
            Ok(f) => f.seen.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "seen state unreadable, starting empty");
                HashSet::new()
            }
        }
    }

    /// Write-then-rename so a concurrent reader never observes a
    /// partially written file.
    pub fn save(&self, seen: &HashSet<String>) -> Result<()> {
        let mut ids: Vec<String> = seen.iter().cloned().collect();
        ids.sort();
        let body = serde_json::to_string_pretty(&SeenFile { seen: ids })
            .context("serializing seen state")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .with_context(|| format!("writing seen state to {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing seen state at {}", self.path.display()))?;
        Ok(())
    }
}
