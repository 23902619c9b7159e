//! Request model, payloads and the helpers that back builder steps

pub mod headers;
pub mod into_url;
pub mod payload;
pub mod query;
pub mod request;

pub use headers::{basic_auth_value, bearer_auth_value, header_map};
pub use into_url::IntoUrl;
pub use payload::Payload;
pub use request::{HttpRequest, RequestAuth, RequestBody};
