//! Request default validation

use std::time::Duration;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid user agent: {0}")]
    InvalidUserAgent(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidTimeout` - if the timeout is zero or exceeds one hour
    /// - `InvalidUserAgent` - if the user agent is empty or not a valid header value
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate timeout duration
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidTimeout` if:
/// - The timeout duration is zero
/// - The timeout duration exceeds 1 hour (3600 seconds)
pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
    if timeout.is_zero() {
        return Err(ConfigurationError::InvalidTimeout(format!(
            "{name} cannot be zero"
        )));
    }

    if timeout.as_secs() > 3600 {
        return Err(ConfigurationError::InvalidTimeout(format!(
            "{name} cannot exceed 1 hour"
        )));
    }

    Ok(())
}

/// Validate a user agent string
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidUserAgent` if the string is blank or
/// cannot be sent as a header value.
pub fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
    if user_agent.trim().is_empty() {
        return Err(ConfigurationError::InvalidUserAgent(
            "user agent cannot be blank".to_string(),
        ));
    }

    http::HeaderValue::from_str(user_agent)
        .map(|_| ())
        .map_err(|e| ConfigurationError::InvalidUserAgent(e.to_string()))
}
