//! apiclient prelude
//!
//! The types end users need to build and hand off requests.

pub use crate::http::request::{HttpRequest, RequestAuth, RequestBody};
pub use crate::http::payload::Payload;
pub use crate::http::into_url::IntoUrl;

// Error types
pub use crate::error::{Error, HttpError, Kind, Result};

// Request defaults
pub use crate::config::{ConfigurationError, RequestConfig, Validator};

// HTTP standard types from http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method};

// URL handling
pub use url::Url;
