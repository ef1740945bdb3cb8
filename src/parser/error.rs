//! Parser errors.

use thiserror::Error;

/// Why a raw request could not be turned into an [`HttpRequest`](crate::http::HttpRequest).
///
/// The server answers all of these with `400 Bad Request`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty request")]
    EmptyRequest,

    /// The request head is not valid UTF-8.
    #[error("Request head is not valid UTF-8")]
    NotUtf8,

    /// The request line does not have exactly three parts.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Only origin-form targets (`/path?query`) can be routed.
    #[error("Request target must start with '/': {0}")]
    InvalidTarget(String),

    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A header line without a `:` or with an empty name.
    #[error("Invalid header line: {0}")]
    InvalidHeaderFormat(String),

    #[error("Required header is missing: {0}")]
    MissingHeader(String),
}
