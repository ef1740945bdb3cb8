//! The results handlers produce and the terminal state a dispatch resolves to.

use crate::dispatch::error::Error;
use crate::http::{HttpRequest, HttpResponse, StatusCode};

/// What a handler decided to do with a request.
///
/// Every handler invocation produces exactly one of these four cases.
#[derive(Debug)]
pub enum Outcome {
    /// Hand the (possibly updated) request to the next handler in the chain.
    Continue(HttpRequest),
    /// Finish the request with this response. Nothing after the handler runs.
    Complete(HttpResponse),
    /// Abort the chain and hand the error to the error pipeline.
    Fail(Error),
    /// Decline the request and let the next matching route try it.
    ///
    /// Only route candidates may skip. A skip from unconditional middleware is treated as
    /// an internal error.
    Skip,
}

impl Outcome {
    /// Complete on `Ok`, fail on `Err`.
    pub fn from_result(result: Result<HttpResponse, Error>) -> Self {
        match result {
            Ok(response) => Outcome::Complete(response),
            Err(error) => Outcome::Fail(error),
        }
    }
}

impl From<HttpResponse> for Outcome {
    fn from(response: HttpResponse) -> Self {
        Outcome::Complete(response)
    }
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Outcome::Fail(error)
    }
}

/// Body of the fixed response used when no route handles a request.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Body of the fixed response used when an error reaches the end of the error pipeline.
pub const UNHANDLED_ERROR_BODY: &str = "Internal Server Error";

/// How a dispatched request finally resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A handler completed the request, either in the normal chain or in the error pipeline.
    Complete(HttpResponse),
    /// The chain ran out without any handler completing or failing the request.
    NotFound,
    /// An error went through the whole error pipeline without being handled.
    Failed(Error),
}

impl Resolution {
    /// The response to send back to the client.
    ///
    /// `NotFound` always becomes `404 Not Found` and `Failed` always becomes
    /// `500 Internal Server Error`, both with a fixed `text/plain` body that never
    /// includes details of the error.
    pub fn into_response(self) -> HttpResponse {
        match self {
            Resolution::Complete(response) => response,
            Resolution::NotFound => not_found_response(),
            Resolution::Failed(_) => unhandled_error_response(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Resolution::Complete(_))
    }
}

/// The fixed 404 response.
pub fn not_found_response() -> HttpResponse {
    HttpResponse::text(StatusCode::NotFound, NOT_FOUND_BODY)
}

/// The fixed 500 response for errors no error handler completed.
pub fn unhandled_error_response() -> HttpResponse {
    HttpResponse::text(StatusCode::InternalServerError, UNHANDLED_ERROR_BODY)
}
