//! Query helper tests

use apiclient_client::http::query::{append_params, encode_query, parse_query};
use url::Url;

#[test]
fn malformed_pairs_are_dropped_and_the_rest_kept() {
    env_logger::try_init().ok();

    let mut url = Url::parse("http://example.com/?a=%zz&b=1&c=1;d=2").unwrap();
    append_params(&mut url, [("e", ["2"])]);

    assert_eq!(url.query(), Some("b=1&e=2"));
}

#[test]
fn truncated_escape_is_dropped() {
    let url = Url::parse("http://example.com/?x=%4&y=%41").unwrap();
    let values = parse_query(&url);

    assert!(!values.contains_key("x"));
    assert_eq!(values["y"], ["A"]);
}

#[test]
fn round_trip_preserves_value_order_within_key() {
    let url = Url::parse("https://example.com/?k=3&k=1&k=2").unwrap();
    let values = parse_query(&url);

    assert_eq!(values["k"], ["3", "1", "2"]);
    assert_eq!(encode_query(&values), "k=3&k=1&k=2");
}

#[test]
fn append_creates_new_keys_and_sorts() {
    let mut url = Url::parse("https://example.com/p?z=1").unwrap();
    append_params(&mut url, [("m", ["2"]), ("a", ["3"])]);

    assert_eq!(url.query(), Some("a=3&m=2&z=1"));
}

#[test]
fn key_without_value_keeps_empty_value() {
    let mut url = Url::parse("https://example.com/?flag").unwrap();
    append_params(&mut url, [("flag", ["on"])]);

    assert_eq!(url.query(), Some("flag=&flag=on"));
}

#[test]
fn key_with_no_new_values_is_dropped_when_absent() {
    let mut url = Url::parse("https://example.com/").unwrap();
    append_params(&mut url, [("empty", Vec::<&str>::new())]);

    assert_eq!(url.query(), None);
}

#[test]
fn unicode_is_percent_encoded() {
    let mut url = Url::parse("https://example.com/").unwrap();
    append_params(&mut url, [("name", ["zoë"])]);

    assert_eq!(url.query(), Some("name=zo%C3%AB"));
}
