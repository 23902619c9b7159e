//! Request construction helpers
//!
//! Fallible constructors for the common methods, their panicking `must_*`
//! forms, and terminal methods that build a request and run a builder over
//! it in one call.

use apiclient_client::error::Result;
use apiclient_client::{HttpRequest, IntoUrl, RequestBody};

use crate::builder::core::RequestBuilder;

/// Build a GET request with no body
///
/// # Errors
///
/// Returns a builder `Error` if `url` does not parse or has no host.
///
/// # Examples
/// ```
/// let request = apiclient::get("https://example.com")?;
/// assert_eq!(request.method(), apiclient::Method::GET);
/// assert!(request.body().is_none());
/// # Ok::<(), apiclient::Error>(())
/// ```
pub fn get<U: IntoUrl>(url: U) -> Result<HttpRequest> {
    HttpRequest::get(url)
}

/// Build a DELETE request with no body
///
/// # Errors
///
/// Returns a builder `Error` if `url` does not parse or has no host.
pub fn delete<U: IntoUrl>(url: U) -> Result<HttpRequest> {
    HttpRequest::delete(url)
}

/// Build a POST request carrying `body`
///
/// # Errors
///
/// Returns a builder `Error` if `url` does not parse or has no host.
pub fn post<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> Result<HttpRequest> {
    HttpRequest::post(url, body)
}

/// Build a PUT request carrying `body`
///
/// # Errors
///
/// Returns a builder `Error` if `url` does not parse or has no host.
pub fn put<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> Result<HttpRequest> {
    HttpRequest::put(url, body)
}

/// Build a PATCH request carrying `body`
///
/// # Errors
///
/// Returns a builder `Error` if `url` does not parse or has no host.
pub fn patch<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> Result<HttpRequest> {
    HttpRequest::patch(url, body)
}

#[track_caller]
fn must(request: Result<HttpRequest>) -> HttpRequest {
    match request {
        Ok(request) => request,
        Err(e) => panic!("{e}"),
    }
}

/// Build a GET request, panicking if `url` is invalid
///
/// # Panics
///
/// Panics if `url` does not parse or has no host.
#[must_use]
#[track_caller]
pub fn must_get<U: IntoUrl>(url: U) -> HttpRequest {
    must(get(url))
}

/// Build a DELETE request, panicking if `url` is invalid
///
/// # Panics
///
/// Panics if `url` does not parse or has no host.
#[must_use]
#[track_caller]
pub fn must_delete<U: IntoUrl>(url: U) -> HttpRequest {
    must(delete(url))
}

/// Build a POST request, panicking if `url` is invalid
///
/// # Panics
///
/// Panics if `url` does not parse or has no host.
#[must_use]
#[track_caller]
pub fn must_post<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> HttpRequest {
    must(post(url, body))
}

/// Build a PUT request, panicking if `url` is invalid
///
/// # Panics
///
/// Panics if `url` does not parse or has no host.
#[must_use]
#[track_caller]
pub fn must_put<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> HttpRequest {
    must(put(url, body))
}

/// Build a PATCH request, panicking if `url` is invalid
///
/// # Panics
///
/// Panics if `url` does not parse or has no host.
#[must_use]
#[track_caller]
pub fn must_patch<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> HttpRequest {
    must(patch(url, body))
}

// Terminal methods: construct the base request, then run the chain over it
impl RequestBuilder {
    /// Build a GET request and apply this builder to it
    ///
    /// # Errors
    ///
    /// Returns an `Error` if `url` is invalid or the chain recorded one.
    ///
    /// # Examples
    /// ```
    /// use apiclient::RequestBuilder;
    ///
    /// let request = RequestBuilder::new()
    ///     .with_params([("q", ["rust"])])
    ///     .get("https://example.com/search")?;
    /// assert_eq!(request.url().as_str(), "https://example.com/search?q=rust");
    /// # Ok::<(), apiclient::Error>(())
    /// ```
    pub fn get<U: IntoUrl>(&self, url: U) -> Result<HttpRequest> {
        let request = get(url)?;
        if self.debug_enabled {
            log::debug!("apiclient builder: GET {}", request.url());
        }
        self.apply(request)
    }

    /// Build a DELETE request and apply this builder to it
    ///
    /// # Errors
    ///
    /// Returns an `Error` if `url` is invalid or the chain recorded one.
    pub fn delete<U: IntoUrl>(&self, url: U) -> Result<HttpRequest> {
        let request = delete(url)?;
        if self.debug_enabled {
            log::debug!("apiclient builder: DELETE {}", request.url());
        }
        self.apply(request)
    }

    /// Build a POST request and apply this builder to it
    ///
    /// # Errors
    ///
    /// Returns an `Error` if `url` is invalid or the chain recorded one.
    pub fn post<U: IntoUrl, B: Into<RequestBody>>(&self, url: U, body: B) -> Result<HttpRequest> {
        let request = post(url, body)?;
        if self.debug_enabled {
            log::debug!("apiclient builder: POST {}", request.url());
        }
        self.apply(request)
    }

    /// Build a PUT request and apply this builder to it
    ///
    /// # Errors
    ///
    /// Returns an `Error` if `url` is invalid or the chain recorded one.
    pub fn put<U: IntoUrl, B: Into<RequestBody>>(&self, url: U, body: B) -> Result<HttpRequest> {
        let request = put(url, body)?;
        if self.debug_enabled {
            log::debug!("apiclient builder: PUT {}", request.url());
        }
        self.apply(request)
    }

    /// Build a PATCH request and apply this builder to it
    ///
    /// # Errors
    ///
    /// Returns an `Error` if `url` is invalid or the chain recorded one.
    pub fn patch<U: IntoUrl, B: Into<RequestBody>>(&self, url: U, body: B) -> Result<HttpRequest> {
        let request = patch(url, body)?;
        if self.debug_enabled {
            log::debug!("apiclient builder: PATCH {}", request.url());
        }
        self.apply(request)
    }
}
