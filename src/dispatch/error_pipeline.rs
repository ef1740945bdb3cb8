//! The ordered chain of error handlers run when a request fails.

use log::{debug, trace};

use crate::dispatch::error::Error;
use crate::dispatch::handler::BoxedErrorHandler;
use crate::dispatch::outcome::Outcome;
use crate::http::{HttpRequest, HttpResponse};

/// An ordered list of error handlers.
#[derive(Clone, Default)]
pub struct ErrorPipeline {
    handlers: Vec<BoxedErrorHandler>,
}

impl ErrorPipeline {
    pub fn new(handlers: Vec<BoxedErrorHandler>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Offer `error` to each error handler in turn.
    ///
    /// Returns the response of the first handler that completes. A handler that fails
    /// replaces the error seen by the handlers after it; `Continue` and `Skip` both pass
    /// the error along. If nobody completes, the last error is returned.
    pub async fn run(&self, error: Error, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut error = error;
        let mut request = request;

        for (index, handler) in self.handlers.iter().enumerate() {
            trace!("error handler #{index} <- {error}");
            match handler.call(error.clone(), request.clone()).await {
                Outcome::Complete(response) => {
                    debug!(
                        "error handler #{index} answered {error} with {status}",
                        status = response.status().as_u16()
                    );
                    return Ok(response);
                }
                Outcome::Fail(replacement) => {
                    debug!("error handler #{index} replaced {error} with {replacement}");
                    error = replacement;
                }
                Outcome::Continue(updated) => request = updated,
                Outcome::Skip => {}
            }
        }

        Err(error)
    }
}
