//! # apiclient request model
//!
//! The request value that `apiclient` builders transform, plus the pieces
//! the builder steps are made of: header construction, basic and bearer
//! credentials, query string merging and closable in-memory payloads.
//!
//! Nothing here performs I/O. A finished [`HttpRequest`] is handed to an
//! HTTP client through [`HttpRequest::into_http`].
//!
//! ```
//! use apiclient_client::{HttpRequest, Payload};
//!
//! let mut request = HttpRequest::post(
//!     "https://api.example.com/items?page=1",
//!     Payload::json(&serde_json::json!({"name": "widget"}))?,
//! )?;
//! request.append_query([("page", ["2"])]);
//! request.set_basic_auth("user", "secret");
//!
//! let request = request.into_http()?;
//! assert_eq!(request.uri(), "https://api.example.com/items?page=1&page=2");
//! assert_eq!(request.headers()["content-type"], "application/json");
//! # Ok::<(), apiclient_client::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod http;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
