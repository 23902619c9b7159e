//! apiclient
//!
//! Composable HTTP request builders. A [`RequestBuilder`] is an ordered list
//! of transformations (replace headers, merge query parameters, set
//! credentials, custom steps) applied to a base request built with
//! [`get`], [`post`], [`put`], [`patch`] or [`delete`]. Every constructor has
//! a panicking `must_*` twin for call sites that treat a bad URL or an
//! unencodable body as a programming error.
//!
//! ```
//! use apiclient::{RequestBuilder, must_payload, must_post};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Item {
//!     name: &'static str,
//! }
//!
//! let authed = RequestBuilder::new()
//!     .with_header_values([("accept", ["application/json"])])
//!     .with_auth("user", "secret");
//!
//! let request = authed.must_apply(must_post(
//!     "https://api.example.com/items",
//!     must_payload(&Item { name: "widget" }),
//! ));
//!
//! let request = request.into_http()?;
//! assert_eq!(request.method(), "POST");
//! assert_eq!(request.body().as_ref(), br#"{"name":"widget"}"#);
//! # Ok::<(), apiclient::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::{
    HeaderValues, Params, RequestBuilder, RequestStep, delete, form_payload, get, header,
    must_delete, must_get, must_patch, must_payload, must_post, must_put, patch, payload, post,
    put,
};

// Re-export important types from the request model
pub use apiclient_client::config::{ConfigurationError, RequestConfig};
pub use apiclient_client::{
    Error, HeaderMap, HeaderName, HeaderValue, HttpError, HttpRequest, IntoUrl, Kind, Method,
    Payload, RequestAuth, RequestBody, Result, Url,
};
