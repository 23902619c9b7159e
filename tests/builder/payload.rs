//! Payload helper tests

use std::collections::HashMap;
use std::io::Read;

use apiclient::{form_payload, must_payload, must_post, payload};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
struct Record {
    #[serde(rename = "A")]
    a: i32,
}

/// A value whose serialization always fails
struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("functions cannot be encoded"))
    }
}

#[test]
fn must_payload_encodes_json() {
    let mut body = must_payload(&Record { a: 5 });

    let mut contents = String::new();
    body.read_to_string(&mut contents).expect("read");
    assert_eq!(contents, r#"{"A":5}"#);
    assert!(body.close().is_ok());
}

#[test]
fn close_succeeds_without_reading() {
    let body = must_payload(&vec![1, 2, 3]);
    assert_eq!(body.as_bytes(), b"[1,2,3]");
    body.close().expect("close is a no-op");
}

#[test]
fn payload_reports_encode_errors() {
    let err = payload(&Unserializable).unwrap_err();
    assert!(err.is_encode());
    assert!(err.to_string().contains("functions cannot be encoded"));
}

#[test]
fn non_string_map_keys_fail_to_encode() {
    let mut map = HashMap::new();
    map.insert((1, 2), "pair");
    assert!(payload(&map).unwrap_err().is_encode());
}

#[test]
#[should_panic(expected = "error encoding request payload")]
fn must_payload_panics_on_unserializable_value() {
    let _ = must_payload(&Unserializable);
}

#[test]
fn payload_sets_content_type_on_handoff() {
    let request = must_post("https://example.com", must_payload(&Record { a: 1 }))
        .into_http()
        .expect("into_http");

    assert_eq!(request.headers()["content-type"], "application/json");
    assert_eq!(request.body().as_ref(), br#"{"A":1}"#);
}

#[test]
fn form_payload_encodes_pairs() {
    #[derive(Serialize)]
    struct Login<'a> {
        user: &'a str,
        remember: bool,
    }

    let body = form_payload(&Login {
        user: "ada lovelace",
        remember: true,
    })
    .expect("form");
    assert_eq!(body.as_bytes(), b"user=ada+lovelace&remember=true");
    assert_eq!(body.content_type(), Some("application/x-www-form-urlencoded"));
}

#[test]
fn explicit_content_type_is_not_overridden() {
    let request = must_post("https://example.com", must_payload(&Record { a: 1 }))
        .header(
            apiclient::header::CONTENT_TYPE,
            apiclient::HeaderValue::from_static("application/vnd.api+json"),
        )
        .into_http()
        .expect("into_http");

    assert_eq!(request.headers()["content-type"], "application/vnd.api+json");
}
