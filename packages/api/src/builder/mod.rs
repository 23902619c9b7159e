//! Request builder API modules
//!
//! `RequestBuilder` and its modifiers, the request construction helpers and
//! the payload helpers.

pub mod auth;
pub mod body;
pub mod core;
pub mod headers;
pub mod methods;
pub mod params;

pub use body::*;
pub use self::core::{RequestBuilder, RequestStep};
pub use headers::{HeaderValues, header};
pub use methods::*;
pub use params::Params;
