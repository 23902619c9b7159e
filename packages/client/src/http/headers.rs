//! Header helpers using standard http crate types

use base64::{Engine as _, engine::general_purpose};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{self, InvalidHeader};

/// Build a `HeaderMap` from `(name, values)` pairs.
///
/// Every value is appended under its name, so a name listed with several
/// values produces several header lines in order.
///
/// # Errors
///
/// Returns a header `Error` naming the first name or value that is not a
/// valid HTTP token.
pub fn header_map<I, K, T, V>(headers: I) -> error::Result<HeaderMap>
where
    I: IntoIterator<Item = (K, T)>,
    K: AsRef<str>,
    T: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let mut map = HeaderMap::new();
    for (name, values) in headers {
        let name = name.as_ref();
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| error::header(invalid(name, &e)))?;
        for value in values {
            let header_value = HeaderValue::from_str(value.as_ref())
                .map_err(|e| error::header(invalid(name, &e)))?;
            map.append(header_name.clone(), header_value);
        }
    }
    Ok(map)
}

pub(crate) fn invalid(name: &str, reason: &dyn std::fmt::Display) -> InvalidHeader {
    InvalidHeader {
        name: name.to_owned(),
        reason: reason.to_string(),
    }
}

/// Encode credentials as an HTTP Basic `Authorization` value.
///
/// # Errors
///
/// Returns a header `Error` if the encoded value is not a valid header value.
pub fn basic_auth_value(username: &str, password: &str) -> error::Result<HeaderValue> {
    let encoded = general_purpose::STANDARD.encode(format!("{username}:{password}"));
    sensitive(&format!("Basic {encoded}"))
}

/// Encode a bearer token as an `Authorization` value.
///
/// # Errors
///
/// Returns a header `Error` if the token contains characters not allowed in
/// header values.
pub fn bearer_auth_value(token: &str) -> error::Result<HeaderValue> {
    sensitive(&format!("Bearer {token}"))
}

fn sensitive(value: &str) -> error::Result<HeaderValue> {
    let mut header_value = HeaderValue::from_str(value)
        .map_err(|e| error::header(invalid(http::header::AUTHORIZATION.as_str(), &e)))?;
    header_value.set_sensitive(true);
    Ok(header_value)
}
