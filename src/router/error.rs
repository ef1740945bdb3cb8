//! Build-time errors for route patterns and routers.

use thiserror::Error;

/// Errors raised while compiling a path pattern or building a router.
///
/// These never surface while serving requests: a router that built successfully has no
/// pattern left to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern does not start with `/`.
    #[error("Pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A `:` segment without a name.
    #[error("Empty parameter name in pattern: {0}")]
    EmptyParamName(String),

    /// The same parameter name is bound twice.
    #[error("Duplicate parameter name '{name}' in pattern: {pattern}")]
    DuplicateParam { pattern: String, name: String },

    /// A wildcard segment that is not the last one.
    #[error("Wildcard must be the last segment in pattern: {0}")]
    WildcardNotLast(String),

    /// Mount prefixes match a fixed number of segments, so they cannot end in a wildcard.
    #[error("Wildcard not allowed in mount prefix: {0}")]
    WildcardInPrefix(String),
}
