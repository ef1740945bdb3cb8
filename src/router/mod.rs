//! Path matching and router composition.
//!
//! A [`Router`] is an ordered list of middleware, routes and mounts, plus its own error
//! pipeline. Routers are built once through a [`RouterBuilder`] and are read-only after
//! that; a built router is itself a handler, so routers nest without limit.

mod config;
mod error;
mod pattern;
mod route;
#[allow(clippy::module_inception)]
mod router;

// Re-export public items
pub use config::{RouterConfig, TrailingSlash};
pub use error::Error;
pub use pattern::{Pattern, WILDCARD};
pub use route::MethodFilter;
pub use router::{Router, RouterBuilder};

pub(crate) use route::Layer;
