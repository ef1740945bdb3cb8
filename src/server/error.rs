//! Server errors.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Failures at the network boundary.
///
/// Request-time failures inside handlers never show up here: they resolve to a response
/// through the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// The client sent bytes that are not a valid request. It has been answered with a 400.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// Binding, accepting, reading or writing failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
