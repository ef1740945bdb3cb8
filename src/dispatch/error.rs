//! Request-time errors carried by [`Outcome::Fail`](crate::dispatch::Outcome::Fail).

use std::time::Duration;
use thiserror::Error;

/// Errors a handler can fail a request with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication or authorization failure.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// No matching resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A contract violation or an unexpected collaborator failure.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A downstream chain did not finish in time.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// An error kind defined by a collaborator.
    #[error("{kind}: {message}")]
    Custom { kind: String, message: String },
}

/// The broad category of an [`Error`], used by error handlers to decide what to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Auth,
    NotFound,
    Internal,
    Timeout,
}

impl Error {
    /// Shorthand for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Shorthand for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }

    /// Shorthand for [`Error::Custom`].
    pub fn custom(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Custom {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// The category of this error. Collaborator-defined kinds count as internal errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Auth(_) => ErrorKind::Auth,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Internal(_) | Error::Custom { .. } => ErrorKind::Internal,
            Error::Timeout(_) => ErrorKind::Timeout,
        }
    }
}
