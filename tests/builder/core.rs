//! Builder module tests
//!
//! Step ordering, header replacement, deferred errors and reuse of a chain.

use apiclient::{
    HeaderMap, HeaderValue, HttpRequest, Method, RequestBuilder, RequestConfig, header, must_get,
    must_post,
};

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn empty_builder_returns_request_unchanged() {
        let base = must_get("https://example.com/a?b=c");
        let request = RequestBuilder::new().apply(base.clone()).expect("apply");

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url(), base.url());
        assert!(request.headers().is_empty());
        assert!(RequestBuilder::new().is_empty());
    }

    #[test]
    fn with_headers_replaces_existing_headers() {
        env_logger::try_init().ok();

        let base = must_get("https://example.com")
            .header(header::COOKIE, HeaderValue::from_static("session=1"))
            .header(header::ACCEPT, HeaderValue::from_static("text/html"));
        let replacement = headers(&[("accept", "application/json"), ("x-trace", "abc")]);

        let request = RequestBuilder::new()
            .debug()
            .with_headers(replacement.clone())
            .apply(base)
            .expect("apply");

        assert_eq!(request.headers(), &replacement);
        assert!(request.headers().get(header::COOKIE).is_none());
    }

    #[test]
    fn later_header_step_wins() {
        let request = RequestBuilder::new()
            .with_headers(headers(&[("x-first", "1")]))
            .with_headers(headers(&[("x-second", "2")]))
            .apply(must_get("https://example.com"))
            .expect("apply");

        assert_eq!(request.headers(), &headers(&[("x-second", "2")]));
    }

    #[test]
    fn header_values_keep_multiple_values_in_order() {
        let request = RequestBuilder::new()
            .with_header_values([("accept", vec!["text/html", "application/xml"])])
            .apply(must_get("https://example.com"))
            .expect("apply");

        let values: Vec<_> = request.headers().get_all(header::ACCEPT).iter().collect();
        assert_eq!(values, ["text/html", "application/xml"]);
    }

    #[test]
    fn invalid_header_name_is_returned_from_apply() {
        let builder = RequestBuilder::new()
            .with_header_values([("not a header", ["x"])])
            .with_params([("q", ["1"])]);

        let err = builder.apply(must_get("https://example.com")).unwrap_err();
        assert!(err.is_header());
        assert!(err.to_string().contains("not a header"));
    }

    #[test]
    fn first_deferred_error_is_kept() {
        let err = RequestBuilder::new()
            .with_header_values([("bad name", ["x"])])
            .with_config(RequestConfig::empty().timeout(std::time::Duration::ZERO))
            .apply(must_get("https://example.com"))
            .unwrap_err();

        assert!(err.is_header());
    }

    #[test]
    #[should_panic(expected = "invalid header")]
    fn must_apply_panics_on_deferred_error() {
        let _ = RequestBuilder::new()
            .with_header_values([("x-ok", ["line\nbreak"])])
            .must_apply(must_get("https://example.com"));
    }

    #[test]
    fn builder_is_reusable_and_not_mutated() {
        let builder = RequestBuilder::new().with_params([("v", ["1"])]);

        let first = builder.must_apply(must_get("https://example.com/a"));
        let second = builder.must_apply(must_get("https://example.com/b?x=y"));

        assert_eq!(first.url().as_str(), "https://example.com/a?v=1");
        assert_eq!(second.url().as_str(), "https://example.com/b?v=1&x=y");
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn cloned_chains_are_independent() {
        let base = RequestBuilder::new().with_params([("a", ["1"])]);
        let extended = base.clone().with_params([("b", ["2"])]);

        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);

        let request = base.must_apply(must_get("https://example.com"));
        assert_eq!(request.url().query(), Some("a=1"));
    }

    #[test]
    fn custom_steps_run_in_chain_order() {
        let request = RequestBuilder::new()
            .with_header_values([("x-step", ["1"])])
            .map(|request| request.with_method(Method::OPTIONS))
            .map(|mut request| {
                request
                    .headers_mut()
                    .append("x-step", HeaderValue::from_static("2"));
                request
            })
            .must_apply(must_get("https://example.com"));

        assert_eq!(request.method(), Method::OPTIONS);
        let steps: Vec<_> = request.headers().get_all("x-step").iter().collect();
        assert_eq!(steps, ["1", "2"]);
    }

    #[test]
    fn config_survives_header_replacement() {
        let request = RequestBuilder::new()
            .with_config(RequestConfig::empty().user_agent("agent/2"))
            .with_headers(HeaderMap::new())
            .must_apply(must_post("https://example.com", "hi"));

        assert_eq!(request.user_agent(), Some("agent/2"));

        let request = request.into_http().expect("into_http");
        assert_eq!(request.headers()[header::USER_AGENT], "agent/2");
        assert_eq!(request.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[test]
    fn invalid_config_is_returned_from_apply() {
        let err = RequestBuilder::new()
            .with_config(RequestConfig::empty().user_agent("   "))
            .apply(HttpRequest::new(Method::GET, "https://example.com".parse().unwrap()))
            .unwrap_err();

        assert!(err.is_config());
        assert!(err.to_string().contains("user agent cannot be blank"));
    }

    #[test]
    fn debug_output_lists_steps() {
        let builder = RequestBuilder::new()
            .with_auth("ada", "pw")
            .with_params([("a", ["1"])]);

        let rendered = format!("{builder:?}");
        assert!(rendered.contains("basic auth for ada"));
        assert!(rendered.contains("append params (1 keys)"));
        assert!(!rendered.contains("pw"));
    }
}
