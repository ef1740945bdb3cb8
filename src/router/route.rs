//! Route table entries.

use std::fmt;

use crate::dispatch::{BoxedHandler, HandlerFuture, Outcome};
use crate::http::HttpRequest;
use crate::parser::Method;
use crate::router::config::RouterConfig;
use crate::router::pattern::Pattern;

/// Which request methods a route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodFilter {
    /// Every method.
    Any,
    /// A single method.
    Only(Method),
}

impl MethodFilter {
    pub fn allows(&self, method: Method) -> bool {
        match self {
            MethodFilter::Any => true,
            MethodFilter::Only(only) => *only == method,
        }
    }
}

impl From<Method> for MethodFilter {
    fn from(method: Method) -> Self {
        MethodFilter::Only(method)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::Any => write!(f, "ANY"),
            MethodFilter::Only(method) => write!(f, "{method}"),
        }
    }
}

/// A (method filter, pattern, handler) entry.
pub(crate) struct Route {
    pub(crate) methods: MethodFilter,
    pub(crate) pattern: Pattern,
    pub(crate) handler: BoxedHandler,
}

/// A handler, usually a nested router, reached through a path prefix.
pub(crate) struct Mount {
    pub(crate) prefix: Pattern,
    pub(crate) handler: BoxedHandler,
    /// Route listing of the mounted router, empty for plain handlers
    pub(crate) listing: Vec<String>,
}

/// One position in a router's chain, in registration order.
pub(crate) enum Layer {
    Middleware(BoxedHandler),
    Route(Route),
    Mount(Mount),
}

impl Layer {
    /// Routes and mounts are candidates: they only run when the request matches them,
    /// and they may answer with `Skip`.
    pub(crate) fn is_candidate(&self) -> bool {
        !matches!(self, Layer::Middleware(_))
    }

    /// Start this layer on `request`, or return `None` if the layer does not apply to it.
    pub(crate) fn invoke(
        &self,
        request: &HttpRequest,
        config: &RouterConfig,
    ) -> Option<HandlerFuture> {
        match self {
            Layer::Middleware(handler) => Some(handler.call(request.clone())),
            Layer::Route(route) => {
                if !route.methods.allows(request.method()) {
                    return None;
                }
                let params = route
                    .pattern
                    .matches(request.path(), config.trailing_slash)?;
                Some(route.handler.call(request.clone().with_params(&params)))
            }
            Layer::Mount(mount) => {
                let (params, consumed, remainder) = mount.prefix.match_prefix(request.path())?;
                let base_path = request.base_path().to_string();
                let path = request.path().to_string();
                let nested = request
                    .clone()
                    .with_params(&params)
                    .nested(&consumed, remainder);
                let inner = mount.handler.call(nested);

                Some(Box::pin(async move {
                    match inner.await {
                        // Back in the parent router: restore the path it matched against
                        Outcome::Continue(request) => {
                            Outcome::Continue(request.with_location(base_path, path))
                        }
                        other => other,
                    }
                }))
            }
        }
    }

    /// Lines for the route listing; middleware contributes none.
    pub(crate) fn describe(&self) -> Vec<String> {
        match self {
            Layer::Middleware(_) => Vec::new(),
            Layer::Route(route) => vec![format!(
                "{methods} {pattern}",
                methods = route.methods,
                pattern = route.pattern.as_str()
            )],
            Layer::Mount(mount) if mount.listing.is_empty() => {
                vec![format!("ANY {prefix}/*", prefix = mount.prefix.as_str().trim_end_matches('/'))]
            }
            Layer::Mount(mount) => {
                let prefix = mount.prefix.as_str().trim_end_matches('/');
                mount
                    .listing
                    .iter()
                    .map(|line| match line.split_once(' ') {
                        Some((methods, "/")) if !prefix.is_empty() => format!("{methods} {prefix}"),
                        Some((methods, pattern)) => format!("{methods} {prefix}{pattern}"),
                        None => line.clone(),
                    })
                    .collect()
            }
        }
    }
}
