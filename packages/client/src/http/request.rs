//! HTTP request types
//!
//! `HttpRequest` is the value every builder step transforms. Credentials and
//! request defaults are held apart from the explicit header map and folded
//! into the final header set by [`HttpRequest::into_http`].

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use crate::config::RequestConfig;
use crate::error;
use crate::http::headers::{basic_auth_value, bearer_auth_value, invalid};
use crate::http::into_url::IntoUrl;
use crate::http::payload::Payload;
use crate::http::query;

/// HTTP request under construction.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<RequestBody>,
    auth: Option<RequestAuth>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

/// Request body types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Raw bytes
    Bytes(Bytes),
    /// Text content
    Text(String),
    /// Encoded payload stream
    Payload(Payload),
}

impl RequestBody {
    /// Get the length of the body in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RequestBody::Bytes(bytes) => bytes.len(),
            RequestBody::Text(text) => text.len(),
            RequestBody::Payload(payload) => payload.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content type implied by how the body was encoded.
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Payload(payload) => payload.content_type(),
            RequestBody::Text(_) => Some("text/plain; charset=utf-8"),
            RequestBody::Bytes(_) => None,
        }
    }

    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            RequestBody::Bytes(bytes) => bytes,
            RequestBody::Text(text) => Bytes::from(text),
            RequestBody::Payload(payload) => payload.into_bytes(),
        }
    }
}

impl From<Payload> for RequestBody {
    fn from(payload: Payload) -> Self {
        RequestBody::Payload(payload)
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        RequestBody::Bytes(bytes)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Bytes(Bytes::from(bytes))
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&'static str> for RequestBody {
    fn from(text: &'static str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

/// Authentication methods
#[derive(Clone, PartialEq, Eq)]
pub enum RequestAuth {
    Basic { username: String, password: String },
    Bearer(String),
}

impl RequestAuth {
    /// Render the credentials as an `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns a header `Error` if a bearer token contains characters not
    /// allowed in header values.
    pub fn header_value(&self) -> error::Result<HeaderValue> {
        match self {
            RequestAuth::Basic { username, password } => basic_auth_value(username, password),
            RequestAuth::Bearer(token) => bearer_auth_value(token),
        }
    }
}

impl fmt::Debug for RequestAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestAuth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            RequestAuth::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}

impl HttpRequest {
    /// Creates a new `HttpRequest` with no headers, body or credentials.
    #[inline]
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            auth: None,
            user_agent: None,
            timeout: None,
        }
    }

    fn parsed<U: IntoUrl>(method: Method, url: U) -> error::Result<Self> {
        Ok(Self::new(method, url.into_url()?))
    }

    /// Create GET request
    ///
    /// # Errors
    ///
    /// Returns a builder `Error` if `url` does not parse or has no host.
    pub fn get<U: IntoUrl>(url: U) -> error::Result<Self> {
        Self::parsed(Method::GET, url)
    }

    /// Create DELETE request
    ///
    /// # Errors
    ///
    /// Returns a builder `Error` if `url` does not parse or has no host.
    pub fn delete<U: IntoUrl>(url: U) -> error::Result<Self> {
        Self::parsed(Method::DELETE, url)
    }

    /// Create POST request
    ///
    /// # Errors
    ///
    /// Returns a builder `Error` if `url` does not parse or has no host.
    pub fn post<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> error::Result<Self> {
        Ok(Self::parsed(Method::POST, url)?.with_body(body))
    }

    /// Create PUT request
    ///
    /// # Errors
    ///
    /// Returns a builder `Error` if `url` does not parse or has no host.
    pub fn put<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> error::Result<Self> {
        Ok(Self::parsed(Method::PUT, url)?.with_body(body))
    }

    /// Create PATCH request
    ///
    /// # Errors
    ///
    /// Returns a builder `Error` if `url` does not parse or has no host.
    pub fn patch<U: IntoUrl, B: Into<RequestBody>>(url: U, body: B) -> error::Result<Self> {
        Ok(Self::parsed(Method::PATCH, url)?.with_body(body))
    }

    // Getters

    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[inline]
    pub fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    /// Explicit headers; credentials and defaults are not included.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    #[inline]
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    #[inline]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    #[inline]
    pub fn auth(&self) -> Option<&RequestAuth> {
        self.auth.as_ref()
    }

    #[inline]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    // Setters (builder pattern)

    #[inline]
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Replace every explicit header with `headers`.
    #[inline]
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Insert a single header, replacing existing values for that name.
    #[inline]
    #[must_use]
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_body<B: Into<RequestBody>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_auth(mut self, auth: RequestAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Stamp request defaults onto the request.
    #[must_use]
    pub fn with_config(mut self, config: &RequestConfig) -> Self {
        self.user_agent.clone_from(&config.user_agent);
        self.timeout = config.timeout;
        self
    }

    /// Set HTTP Basic credentials, replacing any earlier credentials.
    pub fn set_basic_auth<U, P>(&mut self, username: U, password: P)
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.auth = Some(RequestAuth::Basic {
            username: username.into(),
            password: password.into(),
        });
    }

    /// Set a bearer token, replacing any earlier credentials.
    pub fn set_bearer_auth<T: Into<String>>(&mut self, token: T) {
        self.auth = Some(RequestAuth::Bearer(token.into()));
    }

    /// Append query parameters, keeping the values already in the URL.
    pub fn append_query<I, K, T, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        query::append_params(&mut self.url, params);
    }

    /// The `Authorization` value the credentials render to, if any.
    ///
    /// # Errors
    ///
    /// Returns a header `Error` if the credentials cannot be encoded.
    pub fn authorization(&self) -> error::Result<Option<HeaderValue>> {
        self.auth.as_ref().map(RequestAuth::header_value).transpose()
    }

    /// Get content length if a body is set
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.body.as_ref().map(|body| body.len() as u64)
    }

    /// Convert into an `http::Request` ready for an HTTP client.
    ///
    /// Explicit headers are kept as they are. `Authorization` is rendered
    /// from the credentials and overrides an explicit one. `User-Agent` and
    /// `Content-Type` are only added when absent.
    ///
    /// # Errors
    ///
    /// Returns a header `Error` if credentials or the user agent cannot be
    /// encoded, or a builder `Error` if the URL is not a valid request URI.
    pub fn into_http(self) -> error::Result<http::Request<Bytes>> {
        let authorization = self.authorization()?;
        let mut headers = self.headers;

        if let Some(value) = authorization {
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(ref user_agent) = self.user_agent
            && !headers.contains_key(USER_AGENT)
        {
            let value = HeaderValue::from_str(user_agent)
                .map_err(|e| error::header(invalid(USER_AGENT.as_str(), &e)))?;
            headers.insert(USER_AGENT, value);
        }

        let (content_type, body) = match self.body {
            Some(body) => (body.content_type(), body.into_bytes()),
            None => (None, Bytes::new()),
        };
        if let Some(content_type) = content_type
            && !headers.contains_key(CONTENT_TYPE)
        {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        let uri: http::Uri = self
            .url
            .as_str()
            .parse()
            .map_err(|e| error::builder(e).with_url(self.url.clone()))?;

        tracing::debug!(
            method = %self.method,
            uri = %uri,
            headers = headers.len(),
            body_len = body.len(),
            "finalized request"
        );

        let mut request = http::Request::new(body);
        *request.method_mut() = self.method;
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;
        Ok(request)
    }
}
