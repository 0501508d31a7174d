// src/translate.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(8);

/// Best-effort text translation. Never fails outward: any transport or
/// response-shape problem returns the input unchanged, so a flaky
/// translation backend can only cost us the translation, never the
/// notification.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> String;
}

/// Identity translator for tests and for disabling translation.
pub struct NoTranslate;

#[async_trait]
impl Translator for NoTranslate {
    async fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Unofficial Google translate endpoint (the gtx client used by the
/// web widget). Response is a nested array; the translated chunks sit
/// at `[0][i][0]`.
pub struct GoogleTranslator {
    target: String,
    client: Client,
}

impl GoogleTranslator {
    pub fn new(target: String) -> Self {
        Self {
            target,
            client: Client::new(),
        }
    }

    async fn try_translate(&self, text: &str) -> anyhow::Result<String> {
        let data: serde_json::Value = self
            .client
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .timeout(TRANSLATE_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let chunks = data
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow::anyhow!("unexpected translate response shape"))?;
        let mut out = String::new();
        for chunk in chunks {
            if let Some(part) = chunk.get(0).and_then(|v| v.as_str()) {
                out.push_str(part);
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.try_translate(text).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => text.to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}
