//! Example usage of the request builder with a shared, reusable chain

use apiclient::{RequestBuilder, RequestConfig, must_get, must_payload, payload, post};
use serde::Serialize;

#[derive(Serialize, Debug)]
struct SerdeRequestType {
    message: String,
    data: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().ok();

    // One chain, applied to several requests
    let api = RequestBuilder::new()
        .debug()
        .with_config(RequestConfig::default().user_agent("fluent-builder-demo/1.0"))
        .with_header_values([("accept", ["application/json"])])
        .with_auth("demo", "hunter2");

    let listing = api
        .clone()
        .with_params([("page", vec!["1"]), ("tag", vec!["rust", "http"])])
        .apply(must_get("https://httpbin.org/get?sort=asc"))?;
    println!("GET  {}", listing.url());

    let body = SerdeRequestType {
        message: "hello".to_string(),
        data: vec!["a".to_string(), "b".to_string()],
    };
    let created = api.apply(post("https://httpbin.org/post", payload(&body)?)?)?;

    let created = created.into_http()?;
    println!("{} {}", created.method(), created.uri());
    for (name, value) in created.headers() {
        println!("  {name}: {value:?}");
    }
    println!("  body: {}", String::from_utf8_lossy(created.body()));

    // The panicking helpers suit call sites where bad input is a bug
    let ping = must_payload(&serde_json::json!({"ping": true}));
    println!("ping payload: {} bytes", ping.len());
    ping.close()?;

    Ok(())
}
