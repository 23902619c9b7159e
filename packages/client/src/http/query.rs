//! Query string merging
//!
//! Parameters are decoded into a key-sorted multimap, extended, and encoded
//! back with `application/x-www-form-urlencoded` escaping. Keys come out in
//! ascending order and each key keeps its values in insertion order.

use std::collections::BTreeMap;

use url::Url;
use url::form_urlencoded;

/// Decoded query parameters, sorted by key.
pub type QueryValues = BTreeMap<String, Vec<String>>;

/// Decode the query string of `url`.
///
/// Pairs containing `;` or a `%` not followed by two hex digits are dropped;
/// the remaining pairs are kept. Invalid UTF-8 is replaced, so this never
/// fails.
#[must_use]
pub fn parse_query(url: &Url) -> QueryValues {
    let mut values = QueryValues::new();
    let Some(query) = url.query() else {
        return values;
    };

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        if !is_well_formed(pair) {
            tracing::debug!(pair, "dropping malformed query pair");
            continue;
        }
        for (key, value) in form_urlencoded::parse(pair.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }
    values
}

/// A raw `key=value` pair is usable when it has no `;` and every `%` starts
/// a complete escape.
fn is_well_formed(pair: &str) -> bool {
    if pair.contains(';') {
        return false;
    }

    let bytes = pair.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// Encode `values` as a query string without the leading `?`.
#[must_use]
pub fn encode_query(values: &QueryValues) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, vals) in values {
        for value in vals {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Append every value in `params` under its key to the query of `url`.
///
/// Existing values are kept; new ones are added after them. When the merged
/// set is empty the query component is removed entirely.
pub fn append_params<I, K, T, V>(url: &mut Url, params: I)
where
    I: IntoIterator<Item = (K, T)>,
    K: AsRef<str>,
    T: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let mut values = parse_query(url);
    for (key, vals) in params {
        let entry = values.entry(key.as_ref().to_owned()).or_default();
        entry.extend(vals.into_iter().map(|v| v.as_ref().to_owned()));
    }

    let encoded = encode_query(&values);
    tracing::trace!(query = %encoded, "merged query parameters");
    if encoded.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&encoded));
    }
}
