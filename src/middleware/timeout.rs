//! Bounding how long a handler chain may run.

use std::sync::Arc;
use std::time::Duration;
use log::warn;

use crate::dispatch::{BoxedHandler, Error, Handler, HandlerFuture, Outcome};
use crate::http::HttpRequest;

/// Races a wrapped handler against a timer.
///
/// If the timer fires first the wrapped handler's future is dropped and the request
/// fails with [`Error::Timeout`]. Wrap a whole [`Router`](crate::router::Router) to put a
/// deadline on everything it does.
#[derive(Clone)]
pub struct Timeout {
    duration: Duration,
    inner: BoxedHandler,
}

impl Timeout {
    pub fn new(duration: Duration, inner: impl Handler) -> Self {
        Self {
            duration,
            inner: Arc::new(inner),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Handler for Timeout {
    fn call(&self, request: HttpRequest) -> HandlerFuture {
        let duration = self.duration;
        let path = request.original_path();
        let pending = self.inner.call(request);

        Box::pin(async move {
            match tokio::time::timeout(duration, pending).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!("{path} timed out after {duration:?}");
                    Outcome::Fail(Error::Timeout(duration))
                }
            }
        })
    }
}
