//! Core `RequestBuilder` structures and step application
//!
//! A builder is an ordered list of steps. Applying it to a base request runs
//! the steps in the order they were chained; the builder itself is never
//! modified, so one builder can shape any number of requests.

use std::fmt;
use std::sync::Arc;

use apiclient_client::error::{Error, Kind, Result};
use apiclient_client::{HeaderMap, HttpRequest, RequestAuth, RequestConfig, Validator};

/// Caller-supplied transformation run as one builder step
pub type RequestStep = Arc<dyn Fn(HttpRequest) -> HttpRequest + Send + Sync + 'static>;

/// One transformation in a builder chain.
#[derive(Clone)]
pub(crate) enum Step {
    /// Replace every explicit header
    ReplaceHeaders(HeaderMap),
    /// Append values to the query string
    AppendParams(Vec<(String, Vec<String>)>),
    /// Set credentials
    Auth(RequestAuth),
    /// Stamp request defaults
    Config(RequestConfig),
    /// Arbitrary transformation
    Custom(RequestStep),
}

impl Step {
    fn apply(&self, mut request: HttpRequest) -> HttpRequest {
        match self {
            Step::ReplaceHeaders(headers) => request.with_headers(headers.clone()),
            Step::AppendParams(params) => {
                request.append_query(params.iter().map(|(key, values)| (key, values)));
                request
            }
            Step::Auth(auth) => request.with_auth(auth.clone()),
            Step::Config(config) => request.with_config(config),
            Step::Custom(step) => (**step)(request),
        }
    }

    fn describe(&self) -> String {
        match self {
            Step::ReplaceHeaders(headers) => format!("replace headers ({} values)", headers.len()),
            Step::AppendParams(params) => format!("append params ({} keys)", params.len()),
            Step::Auth(RequestAuth::Basic { username, .. }) => format!("basic auth for {username}"),
            Step::Auth(RequestAuth::Bearer(_)) => "bearer auth".to_string(),
            Step::Config(_) => "request defaults".to_string(),
            Step::Custom(_) => "custom step".to_string(),
        }
    }
}

/// Error recorded while chaining, returned when the builder is applied.
#[derive(Debug, Clone)]
pub(crate) struct Deferred {
    kind: Kind,
    message: String,
}

impl Deferred {
    pub(crate) fn from_error(err: &Error) -> Self {
        let message = std::error::Error::source(err)
            .map_or_else(|| err.to_string(), ToString::to_string);
        Self {
            kind: err.kind().clone(),
            message,
        }
    }

    fn to_error(&self) -> Error {
        Error::new(self.kind.clone()).with(self.message.clone())
    }
}

/// Composable transformation over an [`HttpRequest`]
///
/// Start from [`RequestBuilder::new`], chain modifiers, then [`apply`] the
/// builder to a base request or use one of the terminal methods such as
/// [`get`].
///
/// [`apply`]: RequestBuilder::apply
/// [`get`]: RequestBuilder::get
///
/// # Examples
/// ```
/// use apiclient::{RequestBuilder, must_get};
///
/// let builder = RequestBuilder::new()
///     .with_header_values([("accept", ["application/json"])])
///     .with_params([("page", ["2"])])
///     .with_auth("user", "secret");
///
/// let request = builder.apply(must_get("https://api.example.com/items"))?;
/// assert_eq!(request.url().query(), Some("page=2"));
/// assert_eq!(request.headers()["accept"], "application/json");
/// # Ok::<(), apiclient::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct RequestBuilder {
    /// Steps in the order they were chained
    pub(crate) steps: Vec<Step>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
    /// First error hit while chaining
    pub(crate) error: Option<Deferred>,
}

impl RequestBuilder {
    /// An empty builder that returns requests unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable debug logging for this builder
    ///
    /// When enabled, each step is logged as it is applied.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Stamp `config` onto the request at this point in the chain
    ///
    /// The user agent and timeout are held apart from the explicit headers,
    /// so a later `with_headers` does not remove them.
    ///
    /// An invalid configuration is recorded and returned by [`apply`].
    ///
    /// [`apply`]: RequestBuilder::apply
    #[must_use]
    pub fn with_config(self, config: RequestConfig) -> Self {
        match config.validate() {
            Ok(()) => self.push(Step::Config(config)),
            Err(e) => self.defer(&apiclient_client::error::config(e)),
        }
    }

    /// Append an arbitrary transformation
    ///
    /// # Examples
    /// ```
    /// use apiclient::{Method, RequestBuilder, must_get};
    ///
    /// let head = RequestBuilder::new().map(|request| request.with_method(Method::HEAD));
    /// let request = head.must_apply(must_get("https://example.com"));
    /// assert_eq!(request.method(), Method::HEAD);
    /// ```
    #[must_use]
    pub fn map<F>(self, step: F) -> Self
    where
        F: Fn(HttpRequest) -> HttpRequest + Send + Sync + 'static,
    {
        self.push(Step::Custom(Arc::new(step)))
    }

    /// Number of steps chained so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub(crate) fn defer(mut self, err: &Error) -> Self {
        if self.debug_enabled {
            log::debug!("apiclient builder: recorded error: {err}");
        }
        // Keep the first error; later ones are usually knock-on effects
        if self.error.is_none() {
            self.error = Some(Deferred::from_error(err));
        }
        self
    }

    /// Run every step, in chain order, against `request`
    ///
    /// # Errors
    ///
    /// Returns the first error recorded while chaining (an invalid header
    /// name or value, or an invalid configuration). No step runs in that case.
    pub fn apply(&self, request: HttpRequest) -> Result<HttpRequest> {
        if let Some(ref deferred) = self.error {
            return Err(deferred.to_error());
        }

        let mut request = request;
        for (index, step) in self.steps.iter().enumerate() {
            if self.debug_enabled {
                log::debug!(
                    "apiclient builder: {} {} step {}: {}",
                    request.method(),
                    request.url(),
                    index,
                    step.describe()
                );
            }
            request = step.apply(request);
        }
        Ok(request)
    }

    /// Panicking form of [`apply`](RequestBuilder::apply)
    ///
    /// # Panics
    ///
    /// Panics if an error was recorded while chaining.
    #[must_use]
    #[track_caller]
    pub fn must_apply(&self, request: HttpRequest) -> HttpRequest {
        match self.apply(request) {
            Ok(request) => request,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self.steps.iter().map(Step::describe).collect();
        f.debug_struct("RequestBuilder")
            .field("steps", &steps)
            .field("debug_enabled", &self.debug_enabled)
            .field("error", &self.error)
            .finish()
    }
}
