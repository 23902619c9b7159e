use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error came from parsing a URL.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if a header name or value was rejected.
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self.inner.kind, Kind::Header)
    }

    /// Returns true if a payload failed to serialize.
    #[must_use]
    pub fn is_encode(&self) -> bool {
        matches!(self.inner.kind, Kind::Encode)
    }

    /// Returns true if request defaults failed validation.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, Kind::Config)
    }
}
