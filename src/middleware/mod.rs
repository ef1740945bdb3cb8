//! Ready-made handlers for common cross-cutting concerns.
//!
//! These are ordinary [`Handler`](crate::dispatch::Handler)s with no special standing in
//! the dispatcher.

mod logger;
mod timeout;
mod tests;

// Re-export public items
pub use logger::{request_logger, RECEIVED_AT};
pub use timeout::Timeout;
