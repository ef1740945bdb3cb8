//! Request and response values.
//!
//! Everything in this module is immutable once built: handlers derive new values through
//! the builder-style `with_*` methods instead of editing what they were given.

mod body;
mod context;
mod headers;
mod params;
mod request;
mod response;
mod tests;

// Re-export public items
pub use body::Body;
pub use context::Context;
pub use headers::HeaderMap;
pub use params::Params;
pub use request::HttpRequest;
pub use response::{HttpResponse, StatusCode};
