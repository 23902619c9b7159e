use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for an invalid header name or value.
pub fn header<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Header).with(e.into())
}

/// Creates an `Error` for a payload that failed to serialize.
pub fn encode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Encode).with(e.into())
}

/// Creates an `Error` for request defaults that failed validation.
pub fn config<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e.into())
}

pub fn url_bad_scheme(url: url::Url) -> Error {
    Error::new(Kind::Builder)
        .with(super::helpers::BadScheme)
        .with_url(url)
}
