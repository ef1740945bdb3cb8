//! Router composition.

use std::fmt;
use std::sync::Arc;
use log::debug;

use crate::dispatch::{
    walk, BoxedErrorHandler, BoxedHandler, ErrorHandler, ErrorPipeline, Handler, HandlerFuture,
    Outcome, Walk,
};
use crate::http::HttpRequest;
use crate::parser::Method;
use crate::router::config::RouterConfig;
use crate::router::error::Error;
use crate::router::pattern::Pattern;
use crate::router::route::{Layer, MethodFilter, Mount, Route};

/// A registration waiting for [`RouterBuilder::build`] to compile its pattern.
enum Pending {
    Middleware(BoxedHandler),
    Route {
        methods: MethodFilter,
        pattern: String,
        handler: BoxedHandler,
    },
    Mount {
        prefix: String,
        handler: BoxedHandler,
        listing: Vec<String>,
    },
}

/// Collects middleware, routes, mounts and error handlers, in registration order.
///
/// Registration order is the only tie-break between overlapping routes: the first route
/// registered that matches wins, so register more specific patterns first.
#[derive(Default)]
pub struct RouterBuilder {
    pending: Vec<Pending>,
    error_handlers: Vec<BoxedErrorHandler>,
    config: RouterConfig,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching configuration for every route and mount of this router.
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Append middleware that runs for every request reaching this position.
    pub fn middleware(mut self, handler: impl Handler) -> Self {
        self.pending.push(Pending::Middleware(Arc::new(handler)));
        self
    }

    /// Register a route for the given methods.
    pub fn route(
        mut self,
        methods: impl Into<MethodFilter>,
        pattern: impl Into<String>,
        handler: impl Handler,
    ) -> Self {
        self.pending.push(Pending::Route {
            methods: methods.into(),
            pattern: pattern.into(),
            handler: Arc::new(handler),
        });
        self
    }

    /// Register a route for every method.
    pub fn any(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(MethodFilter::Any, pattern, handler)
    }

    pub fn get(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::GET, pattern, handler)
    }

    pub fn post(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::POST, pattern, handler)
    }

    pub fn put(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::PUT, pattern, handler)
    }

    pub fn delete(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::DELETE, pattern, handler)
    }

    pub fn patch(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::PATCH, pattern, handler)
    }

    pub fn head(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::HEAD, pattern, handler)
    }

    pub fn options(self, pattern: impl Into<String>, handler: impl Handler) -> Self {
        self.route(Method::OPTIONS, pattern, handler)
    }

    /// Mount a router under `prefix`.
    ///
    /// Requests whose path starts with the prefix (on a segment boundary) are handed to
    /// `router` with the prefix removed. Parameters and context set upstream stay visible.
    pub fn mount(mut self, prefix: impl Into<String>, router: Router) -> Self {
        let listing = router.describe();
        self.pending.push(Pending::Mount {
            prefix: prefix.into(),
            handler: Arc::new(router),
            listing,
        });
        self
    }

    /// Mount any handler under `prefix`, with the same path handling as [`RouterBuilder::mount`].
    pub fn mount_handler(mut self, prefix: impl Into<String>, handler: impl Handler) -> Self {
        self.pending.push(Pending::Mount {
            prefix: prefix.into(),
            handler: Arc::new(handler),
            listing: Vec::new(),
        });
        self
    }

    /// Append a handler to this router's error pipeline.
    pub fn error_handler(mut self, handler: impl ErrorHandler) -> Self {
        self.error_handlers.push(Arc::new(handler));
        self
    }

    /// Compile every pattern and freeze the router.
    ///
    /// # Errors
    ///
    /// Returns the first pattern or prefix that fails to compile.
    pub fn build(self) -> Result<Router, Error> {
        let layers = self
            .pending
            .into_iter()
            .map(|pending| -> Result<Layer, Error> {
                Ok(match pending {
                    Pending::Middleware(handler) => Layer::Middleware(handler),
                    Pending::Route {
                        methods,
                        pattern,
                        handler,
                    } => Layer::Route(Route {
                        methods,
                        pattern: Pattern::compile(&pattern)?,
                        handler,
                    }),
                    Pending::Mount {
                        prefix,
                        handler,
                        listing,
                    } => Layer::Mount(Mount {
                        prefix: Pattern::compile_prefix(&prefix)?,
                        handler,
                        listing,
                    }),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            "built router with {count} layers and {errors} error handlers",
            count = layers.len(),
            errors = self.error_handlers.len()
        );

        Ok(Router {
            inner: Arc::new(Inner {
                layers,
                errors: ErrorPipeline::new(self.error_handlers),
                config: self.config,
            }),
        })
    }
}

struct Inner {
    layers: Vec<Layer>,
    errors: ErrorPipeline,
    config: RouterConfig,
}

impl Inner {
    async fn run(&self, request: HttpRequest) -> Outcome {
        match walk(&self.layers, &self.config, request).await {
            Walk::Complete(response) => Outcome::Complete(response),
            Walk::Exhausted(request) => Outcome::Continue(request),
            Walk::Declined => Outcome::Skip,
            Walk::Failed(error, request) => match self.errors.run(error, request).await {
                Ok(response) => Outcome::Complete(response),
                Err(error) => Outcome::Fail(error),
            },
        }
    }
}

/// A built, read-only router.
///
/// Cloning is cheap and every clone shares the same routes. As a [`Handler`], a router
/// completes, fails (after its own error pipeline declined), or continues with the request
/// when nothing in it answered. It skips only when one of its routes skipped and no later
/// route matched, so a mounted router keeps the enclosing chain looking for a route.
#[derive(Clone)]
pub struct Router {
    inner: Arc<Inner>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    pub fn config(&self) -> RouterConfig {
        self.inner.config
    }

    /// List routes as `METHOD /pattern` lines, including those of mounted routers.
    pub fn describe(&self) -> Vec<String> {
        self.inner.layers.iter().flat_map(Layer::describe).collect()
    }
}

impl Handler for Router {
    fn call(&self, request: HttpRequest) -> HandlerFuture {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move { inner.run(request).await })
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.describe())
            .field("error_handlers", &self.inner.errors.len())
            .field("config", &self.inner.config)
            .finish()
    }
}
