//! Request model tests

use std::time::Duration;

use apiclient_client::config::DEFAULT_USER_AGENT;
use apiclient_client::{HttpRequest, Method, Payload, RequestAuth, RequestConfig};
use http::header;

#[test]
fn new_request_is_bare() {
    let request = HttpRequest::get("https://example.com").expect("get");

    assert_eq!(request.method(), Method::GET);
    assert!(request.headers().is_empty());
    assert!(request.auth().is_none());
    assert!(request.user_agent().is_none());
    assert!(request.timeout().is_none());
    assert_eq!(request.content_length(), None);
}

#[test]
fn with_config_stamps_defaults() {
    env_logger::try_init().ok();

    let request = HttpRequest::get("https://example.com")
        .expect("get")
        .with_config(&RequestConfig::default());

    assert_eq!(request.user_agent(), Some(DEFAULT_USER_AGENT));
    assert_eq!(request.timeout(), Some(Duration::from_secs(30)));

    let request = request.into_http().expect("into_http");
    assert_eq!(request.headers()[header::USER_AGENT], DEFAULT_USER_AGENT);
}

#[test]
fn explicit_user_agent_wins_over_config() {
    let request = HttpRequest::get("https://example.com")
        .expect("get")
        .with_config(&RequestConfig::default())
        .header(header::USER_AGENT, http::HeaderValue::from_static("mine/1"))
        .into_http()
        .expect("into_http");

    assert_eq!(request.headers()[header::USER_AGENT], "mine/1");
    assert_eq!(request.headers().get_all(header::USER_AGENT).iter().count(), 1);
}

#[test]
fn set_basic_auth_replaces_bearer() {
    let mut request = HttpRequest::get("https://example.com").expect("get");
    request.set_bearer_auth("token");
    request.set_basic_auth("user", "pass");

    assert!(matches!(request.auth(), Some(RequestAuth::Basic { .. })));
    assert_eq!(
        request.authorization().expect("encode"),
        Some(http::HeaderValue::from_static("Basic dXNlcjpwYXNz"))
    );
}

#[test]
fn auth_debug_redacts_secrets() {
    let auth = RequestAuth::Basic {
        username: "user".to_string(),
        password: "hunter2".to_string(),
    };
    let rendered = format!("{auth:?}");
    assert!(rendered.contains("user"));
    assert!(!rendered.contains("hunter2"));
    assert!(!format!("{:?}", RequestAuth::Bearer("tok123".into())).contains("tok123"));
}

#[test]
fn post_without_known_content_type_sends_none() {
    let request = HttpRequest::post("https://example.com", Payload::from_bytes(vec![0u8, 1, 2]))
        .expect("post")
        .into_http()
        .expect("into_http");

    assert!(request.headers().get(header::CONTENT_TYPE).is_none());
    assert_eq!(request.body().len(), 3);
}

#[test]
fn append_query_on_request() {
    let mut request = HttpRequest::get("https://example.com/?b=1").expect("get");
    request.append_query([("a", ["x y"])]);

    assert_eq!(request.url().as_str(), "https://example.com/?a=x+y&b=1");
}
