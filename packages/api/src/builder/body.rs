//! Payload helpers
//!
//! Serialize a value into a closable [`Payload`] suitable as a POST, PUT or
//! PATCH body.

use apiclient_client::Payload;
use apiclient_client::error::Result;
use serde::Serialize;

/// Encode `value` as a JSON payload
///
/// # Errors
///
/// Returns an encode `Error` if `value` cannot be represented as JSON.
///
/// # Examples
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     name: String,
/// }
///
/// let body = apiclient::payload(&User { name: "Ada".to_string() })?;
/// assert_eq!(body.as_bytes(), br#"{"name":"Ada"}"#);
/// # Ok::<(), apiclient::Error>(())
/// ```
pub fn payload<T: Serialize + ?Sized>(value: &T) -> Result<Payload> {
    let payload = Payload::json(value)?;
    log::debug!("apiclient: encoded JSON payload ({} bytes)", payload.len());
    Ok(payload)
}

/// Encode `value` as a JSON payload, panicking if it cannot be encoded
///
/// # Panics
///
/// Panics if `value` cannot be represented as JSON, for example a map with
/// non-string keys or a type whose `Serialize` impl fails.
#[must_use]
#[track_caller]
pub fn must_payload<T: Serialize + ?Sized>(value: &T) -> Payload {
    match payload(value) {
        Ok(payload) => payload,
        Err(e) => panic!("{e}"),
    }
}

/// Encode `value` as an `application/x-www-form-urlencoded` payload
///
/// # Errors
///
/// Returns an encode `Error` if `value` is not a flat sequence of key/value
/// pairs.
///
/// # Examples
/// ```
/// let body = apiclient::form_payload(&[("grant_type", "client_credentials"), ("scope", "read write")])?;
/// assert_eq!(body.as_bytes(), b"grant_type=client_credentials&scope=read+write");
/// # Ok::<(), apiclient::Error>(())
/// ```
pub fn form_payload<T: Serialize + ?Sized>(value: &T) -> Result<Payload> {
    let payload = Payload::form(value)?;
    log::debug!("apiclient: encoded form payload ({} bytes)", payload.len());
    Ok(payload)
}
