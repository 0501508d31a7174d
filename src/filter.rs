// src/filter.rs
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::ingest::types::NewsItem;

/// Case-insensitive keyword gate over an item's text fields.
///
/// An empty keyword list compiles to no pattern at all and accepts
/// every item: missing configuration must not silently suppress all
/// notifications.
pub struct KeywordFilter {
    pattern: Option<Regex>,
}

impl KeywordFilter {
    pub fn new(keywords: &[String]) -> Result<Self> {
        let escaped: Vec<String> = keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .map(|k| regex::escape(k.trim()))
            .collect();
        if escaped.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = RegexBuilder::new(&escaped.join("|"))
            .case_insensitive(true)
            .build()
            .context("compiling keyword pattern")?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        let Some(re) = &self.pattern else {
            return true;
        };
        let haystack = format!("{} {} {}", item.title, item.summary, item.source);
        re.is_match(&haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, summary: &str, source: &str) -> NewsItem {
        NewsItem {
            id: "x".into(),
            title: title.into(),
            summary: summary.into(),
            link: String::new(),
            source: source.into(),
            published: String::new(),
        }
    }

    #[test]
    fn empty_keyword_list_accepts_everything() {
        let f = KeywordFilter::new(&[]).unwrap();
        assert!(f.matches(&item("anything at all", "", "")));
    }

    #[test]
    fn blank_keywords_are_ignored() {
        let f = KeywordFilter::new(&["  ".to_string(), String::new()]).unwrap();
        assert!(f.matches(&item("no market terms here", "", "")));
    }

    #[test]
    fn match_is_case_insensitive() {
        let f = KeywordFilter::new(&["NIFTY".to_string()]).unwrap();
        assert!(f.matches(&item("nifty closes higher", "", "")));
        assert!(!f.matches(&item("weather update", "", "")));
    }

    #[test]
    fn summary_and_source_are_searched_too() {
        let f = KeywordFilter::new(&["RBI".to_string(), "IPO".to_string()]).unwrap();
        assert!(f.matches(&item("headline", "rbi holds rates", "")));
        assert!(f.matches(&item("headline", "", "IPO Watch Desk")));
    }

    #[test]
    fn keywords_with_regex_metacharacters_match_literally() {
        let f = KeywordFilter::new(&["Q2 (est.)".to_string()]).unwrap();
        assert!(f.matches(&item("Q2 (est.) numbers out", "", "")));
        assert!(!f.matches(&item("Q2 Xest.Y numbers out", "", "")));
    }
}
