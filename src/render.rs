// src/render.rs
//! Turns a news item into the HTML-formatted Telegram payload.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::ingest::types::NewsItem;
use crate::translate::Translator;

/// Strip HTML tags; feed descriptions routinely embed markup.
pub fn strip_tags(s: &str) -> String {
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    re.replace_all(s, "").to_string()
}

/// First `words` whitespace-separated tokens of the tag-stripped text,
/// with an ellipsis when anything was cut.
pub fn short_summary(text: &str, words: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = strip_tags(text);
    let tokens: Vec<&str> = stripped.split_whitespace().collect();
    let mut out = tokens.iter().take(words).copied().collect::<Vec<_>>().join(" ");
    if tokens.len() > words {
        out.push('…');
    }
    out
}

fn escape(t: &str) -> String {
    html_escape::encode_text(t).to_string()
}

/// Bold translated title, italic source line, translated short summary,
/// and a read-more anchor. Telegram parses this with `parse_mode=HTML`,
/// so every text fragment is entity-escaped.
pub async fn build_message(item: &NewsItem, tr: &dyn Translator, summary_words: usize) -> String {
    let summary_en = short_summary(&item.summary, summary_words);
    let title = tr.translate(&item.title).await;
    let summary = if summary_en.is_empty() {
        String::new()
    } else {
        tr.translate(&summary_en).await
    };

    let mut msg = format!("<b>{}</b>", escape(&title));
    if !item.source.is_empty() {
        msg.push_str(&format!("\n<i>{}</i>", escape(&item.source)));
    }
    if !summary.is_empty() {
        msg.push_str(&format!("\n{}", escape(&summary)));
    }
    if !item.link.is_empty() {
        msg.push_str(&format!(
            "\n\n<a href=\"{}\">🔗 पढ़ें</a>",
            html_escape::encode_double_quoted_attribute(&item.link)
        ));
    }
    msg
}
