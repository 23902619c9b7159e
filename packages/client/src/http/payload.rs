//! In-memory request payloads
//!
//! A `Payload` is a readable byte stream over an encoded body. Closing it
//! releases nothing and always succeeds.

use std::io::{self, Read};

use bytes::{Buf, Bytes};
use serde::Serialize;

use crate::error;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_FORM: &str = "application/x-www-form-urlencoded";

/// Closable byte stream over an encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    remaining: Bytes,
    content_type: Option<&'static str>,
}

impl Payload {
    /// Wrap already encoded bytes.
    #[must_use]
    pub fn from_bytes<B: Into<Bytes>>(bytes: B) -> Self {
        Self {
            remaining: bytes.into(),
            content_type: None,
        }
    }

    /// Encode `value` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an encode `Error` if `value` cannot be represented as JSON,
    /// for example a map whose keys are not strings.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> error::Result<Self> {
        let encoded = serde_json::to_vec(value).map_err(error::encode)?;
        Ok(Self {
            remaining: Bytes::from(encoded),
            content_type: Some(APPLICATION_JSON),
        })
    }

    /// Encode `value` as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns an encode `Error` if `value` is not a flat sequence of
    /// key/value pairs.
    pub fn form<T: Serialize + ?Sized>(value: &T) -> error::Result<Self> {
        let encoded = serde_urlencoded::to_string(value).map_err(error::encode)?;
        Ok(Self {
            remaining: Bytes::from(encoded),
            content_type: Some(APPLICATION_FORM),
        })
    }

    /// Content type the payload was encoded as, if known.
    #[inline]
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    /// Bytes not yet read.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.remaining
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Consume the payload, returning the unread bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.remaining
    }

    /// Close the stream. This is a no-op.
    ///
    /// # Errors
    ///
    /// Never fails; the signature mirrors closable readers elsewhere.
    #[allow(clippy::unnecessary_wraps)]
    pub fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Payload {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining.remaining());
        self.remaining.copy_to_slice(&mut buf[..n]);
        Ok(n)
    }
}

impl From<Payload> for Bytes {
    fn from(payload: Payload) -> Self {
        payload.into_bytes()
    }
}
