//! Request defaults
//!
//! Values stamped onto every request a builder produces. They live outside
//! the explicit header map so that replacing headers never drops them.

pub mod validation;

use std::time::Duration;

pub use validation::{ConfigResult, ConfigurationError, Validator};

/// User agent sent when the caller does not provide one.
pub const DEFAULT_USER_AGENT: &str = concat!("apiclient/", env!("CARGO_PKG_VERSION"));

/// Defaults applied to requests before any builder step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// Sent as `User-Agent` unless the request carries its own.
    pub user_agent: Option<String>,
    /// Forwarded to the HTTP client that executes the request.
    pub timeout: Option<Duration>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl RequestConfig {
    /// Configuration that adds nothing to the request.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            user_agent: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Validator for RequestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(timeout) = self.timeout {
            validation::validate_timeout(timeout, "timeout")?;
        }
        if let Some(ref user_agent) = self.user_agent {
            validation::validate_user_agent(user_agent)?;
        }
        Ok(())
    }
}
