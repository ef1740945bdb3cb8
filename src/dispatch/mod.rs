//! The dispatch engine.
//!
//! Handlers answer every request with one of four [`Outcome`]s. The dispatcher walks a
//! router's chain one handler at a time, stops at the first `Complete` or `Fail`, routes
//! failures through the [`ErrorPipeline`], and resolves the request to a [`Resolution`].

mod dispatcher;
mod error;
mod error_pipeline;
mod handler;
mod outcome;

// Re-export public items
pub use dispatcher::Dispatcher;
pub use error::{Error, ErrorKind};
pub use error_pipeline::ErrorPipeline;
pub use handler::{BoxedErrorHandler, BoxedHandler, ErrorHandler, Handler, HandlerFuture};
pub use outcome::{
    not_found_response, unhandled_error_response, Outcome, Resolution, NOT_FOUND_BODY,
    UNHANDLED_ERROR_BODY,
};

pub(crate) use dispatcher::{walk, Walk};
