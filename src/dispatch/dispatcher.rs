//! Driving requests through handler chains.

use std::sync::Arc;
use log::{debug, trace};

use crate::dispatch::error::Error;
use crate::dispatch::handler::{BoxedHandler, Handler};
use crate::dispatch::outcome::{Outcome, Resolution};
use crate::http::{HttpRequest, HttpResponse};
use crate::router::{Layer, RouterConfig};

/// How a walk over one router's chain ended.
pub(crate) enum Walk {
    /// No layer completed or failed; carries the request as the last layer left it.
    Exhausted(HttpRequest),
    /// A candidate skipped and no later candidate matched.
    Declined,
    Complete(HttpResponse),
    /// Carries the request as it was when the failing layer was called.
    Failed(Error, HttpRequest),
}

/// Run `request` through `layers` one at a time, in order.
///
/// Each layer is awaited before the next is started. After a candidate skips, middleware
/// is passed over until the next candidate that matches the request; if there is none the
/// walk is declined, so an enclosing chain can keep looking for a candidate of its own.
pub(crate) async fn walk(layers: &[Layer], config: &RouterConfig, request: HttpRequest) -> Walk {
    let mut current = request;
    let mut seeking_candidate = false;

    for (index, layer) in layers.iter().enumerate() {
        if seeking_candidate && !layer.is_candidate() {
            continue;
        }
        let Some(pending) = layer.invoke(&current, config) else {
            continue;
        };
        seeking_candidate = false;

        match pending.await {
            Outcome::Continue(next) => {
                trace!("layer #{index} continued");
                current = next;
            }
            Outcome::Complete(response) => {
                trace!("layer #{index} completed");
                return Walk::Complete(response);
            }
            Outcome::Fail(error) => {
                trace!("layer #{index} failed: {error}");
                return Walk::Failed(error, current);
            }
            Outcome::Skip if layer.is_candidate() => {
                trace!("layer #{index} skipped");
                seeking_candidate = true;
            }
            Outcome::Skip => {
                let error = Error::internal(format!("middleware at position {index} returned Skip"));
                return Walk::Failed(error, current);
            }
        }
    }

    if seeking_candidate {
        trace!("no candidate after skip");
        return Walk::Declined;
    }
    Walk::Exhausted(current)
}

/// Entry point that resolves each request to exactly one [`Resolution`].
///
/// A dispatcher wraps the top-level handler, normally a built
/// [`Router`](crate::router::Router). It holds no per-request state and can be cloned
/// and shared across any number of concurrent dispatches.
#[derive(Clone)]
pub struct Dispatcher {
    root: BoxedHandler,
}

impl Dispatcher {
    /// Create a dispatcher for the given top-level handler.
    pub fn new(root: impl Handler) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Dispatch one request.
    ///
    /// A request nobody completed or failed resolves to [`Resolution::NotFound`] without
    /// touching any error handler. A failure that the error pipeline did not turn into a
    /// response resolves to [`Resolution::Failed`].
    pub async fn dispatch(&self, request: HttpRequest) -> Resolution {
        let method = request.method();
        let path = request.original_path();

        let resolution = match self.root.call(request).await {
            Outcome::Complete(response) => Resolution::Complete(response),
            // A skip that reaches the top had no further candidate to fall through to
            Outcome::Continue(_) | Outcome::Skip => Resolution::NotFound,
            Outcome::Fail(error) => Resolution::Failed(error),
        };

        match &resolution {
            Resolution::Complete(response) => {
                debug!("{method} {path} -> {status}", status = response.status().as_u16())
            }
            Resolution::NotFound => debug!("{method} {path} -> not found"),
            Resolution::Failed(error) => debug!("{method} {path} -> unhandled error: {error}"),
        }

        resolution
    }

    /// Dispatch one request and return the response to send.
    pub async fn respond(&self, request: HttpRequest) -> HttpResponse {
        self.dispatch(request).await.into_response()
    }
}
