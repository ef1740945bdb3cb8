//! The handler contracts every middleware, route endpoint and error handler satisfies.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::dispatch::error::Error;
use crate::dispatch::outcome::Outcome;
use crate::http::HttpRequest;

/// Type alias for a boxed future that resolves to an [`Outcome`].
pub type HandlerFuture = Pin<Box<dyn Future<Output = Outcome> + Send>>;

/// A unit of request processing: takes a request, eventually produces an [`Outcome`].
///
/// Any `Fn(HttpRequest) -> impl Future<Output = Outcome>` closure or function is a handler,
/// and so is a built [`Router`](crate::router::Router).
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: HttpRequest) -> HandlerFuture;
}

impl<F, Fut> Handler for F
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    fn call(&self, request: HttpRequest) -> HandlerFuture {
        Box::pin(self(request))
    }
}

/// A handler in the error pipeline. It also receives the error being propagated.
///
/// `Continue` means "not mine, try the next error handler", `Complete` answers the request,
/// and `Fail` replaces the error for the error handlers that follow.
pub trait ErrorHandler: Send + Sync + 'static {
    fn call(&self, error: Error, request: HttpRequest) -> HandlerFuture;
}

impl<F, Fut> ErrorHandler for F
where
    F: Fn(Error, HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
{
    fn call(&self, error: Error, request: HttpRequest) -> HandlerFuture {
        Box::pin(self(error, request))
    }
}

/// Type alias for a shared, type-erased handler.
pub type BoxedHandler = Arc<dyn Handler>;

/// Type alias for a shared, type-erased error handler.
pub type BoxedErrorHandler = Arc<dyn ErrorHandler>;
