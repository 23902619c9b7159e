pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

// Re-export main types and functions
pub use constructors::*;
pub use helpers::{BadScheme, InvalidHeader};
pub use types::{Error, Inner, Kind, Result};

// Type alias matching the naming used across the request model
pub type HttpError = Error;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
