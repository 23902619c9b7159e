use std::fmt;

/// A marker type to indicate that a URL cannot be used for a request.
#[derive(Debug)]
pub struct BadScheme;

impl fmt::Display for BadScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("URL has no host")
    }
}

impl std::error::Error for BadScheme {}

/// Names the header that failed conversion alongside the reason.
#[derive(Debug, Clone)]
pub struct InvalidHeader {
    pub name: String,
    pub reason: String,
}

impl fmt::Display for InvalidHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

impl std::error::Error for InvalidHeader {}
