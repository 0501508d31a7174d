// tests/providers_rss.rs
use market_notifier::ingest::providers::rss_feed::parse_rss;

// 'static fixture via include_str!, same document a live feed would serve.
const MARKET_XML: &str = include_str!("fixtures/market_rss.xml");

#[test]
fn fixture_parses_and_yields_items() {
    let items = parse_rss(MARKET_XML).expect("rss parse ok");
    assert_eq!(items.len(), 3);
    assert!(
        items.iter().all(|it| !it.title.is_empty()),
        "every item should carry a title"
    );
    assert!(
        items.iter().all(|it| it.source == "ET Markets"),
        "channel title should become the source label"
    );
}

#[test]
fn guid_text_becomes_the_native_id() {
    let items = parse_rss(MARKET_XML).expect("rss parse ok");
    assert_eq!(items[0].id, "et-2024-000123");
    // Permalink guids are still guids.
    assert_eq!(items[2].id, "https://economictimes.indiatimes.com/markets/midcap-ipo");
}

#[test]
fn missing_guid_leaves_id_empty_for_derivation() {
    let items = parse_rss(MARKET_XML).expect("rss parse ok");
    assert!(items[1].id.is_empty());
    assert_eq!(items[1].link, "https://economictimes.indiatimes.com/markets/nifty-it-slips");
}

#[test]
fn pub_date_is_carried_verbatim() {
    let items = parse_rss(MARKET_XML).expect("rss parse ok");
    assert_eq!(items[0].published, "Mon, 15 Jan 2024 09:30:00 +0530");
    assert!(items[2].published.is_empty());
}

#[test]
fn malformed_xml_is_an_error_not_a_panic() {
    assert!(parse_rss("<rss><channel><item>").is_err());
}
