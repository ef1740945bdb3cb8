//! HTTP parser module.
//!
//! Turns the raw bytes handed over by the network boundary into an [`HttpRequest`]
//! ready for dispatch.
//!
//! [`HttpRequest`]: crate::http::HttpRequest

mod request;
mod method;
mod version;
mod error;
mod tests;

// Re-export public items
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
