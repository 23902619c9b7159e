//! Header replacement
//!
//! A headers step swaps the request's explicit header map for a new one.
//! Values are never merged with what was there before.

use apiclient_client::HeaderMap;
use apiclient_client::http::header_map;

use crate::builder::core::{RequestBuilder, Step};

/// Multi-valued header input keyed by header name
pub type HeaderValues = hashbrown::HashMap<String, Vec<String>>;

/// Header constants for common HTTP headers
pub mod header {
    pub use http::header::*;
}

impl RequestBuilder {
    /// Replace the request's headers with `headers`
    ///
    /// Any header set before this step runs is dropped, including ones set
    /// by earlier steps. Credentials from [`with_auth`] are not headers and
    /// survive.
    ///
    /// [`with_auth`]: RequestBuilder::with_auth
    ///
    /// # Examples
    /// ```
    /// use apiclient::{HeaderMap, HeaderValue, RequestBuilder, header, must_get};
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert(header::ACCEPT, HeaderValue::from_static("text/csv"));
    ///
    /// let request = RequestBuilder::new()
    ///     .with_headers(headers.clone())
    ///     .must_apply(must_get("https://example.com/report"));
    /// assert_eq!(request.headers(), &headers);
    /// ```
    #[must_use]
    pub fn with_headers(self, headers: HeaderMap) -> Self {
        if self.debug_enabled {
            log::debug!("apiclient builder: chained header replacement ({} values)", headers.len());
        }
        self.push(Step::ReplaceHeaders(headers))
    }

    /// Replace the request's headers from `(name, values)` string pairs
    ///
    /// Each name may carry several values; all of them are sent, in order.
    /// A name or value that is not a valid HTTP token is recorded and
    /// returned by [`apply`](RequestBuilder::apply).
    ///
    /// # Examples
    /// ```
    /// use apiclient::{HeaderValues, RequestBuilder, must_get};
    ///
    /// let mut headers = HeaderValues::new();
    /// headers.insert("x-trace".to_string(), vec!["a".to_string(), "b".to_string()]);
    ///
    /// let request = RequestBuilder::new()
    ///     .with_header_values(&headers)
    ///     .must_apply(must_get("https://example.com"));
    /// assert_eq!(request.headers().get_all("x-trace").iter().count(), 2);
    /// ```
    #[must_use]
    pub fn with_header_values<I, K, T, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        match header_map(headers) {
            Ok(map) => self.with_headers(map),
            Err(e) => self.defer(&e),
        }
    }
}
