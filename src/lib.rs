//! A small HTTP request-dispatch framework.
//!
//! Requests are matched against registered path patterns and threaded through an ordered
//! chain of asynchronous handlers. Every handler answers with one of four outcomes:
//!
//! - [`Outcome::Continue`] passes a (possibly updated) request to the next handler,
//! - [`Outcome::Complete`] answers the request and ends the chain,
//! - [`Outcome::Fail`] aborts the chain and hands the error to the error pipeline,
//! - [`Outcome::Skip`] lets a route decline so the next matching route can try.
//!
//! Each request resolves to exactly one [`Resolution`]: a response, a fixed not-found
//! state, or an error no error handler dealt with.
//!
//! # Features
//!
//! - Path patterns with `:name` parameters and trailing `*` wildcards
//! - Middleware, routes and mounted sub-routers in one registration-ordered chain
//! - Per-router error pipelines, nested routers escalating to their parents
//! - Immutable requests with a typed, copy-on-write context for middleware output
//! - A tokio-based HTTP/1.1 server adapter
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use microroute_rs::{Dispatcher, HttpRequest, HttpResponse, Method, Outcome, Router, StatusCode};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let router = Router::builder()
//!     .get("/users/:id", |req: HttpRequest| async move {
//!         let id = req.param("id").unwrap_or_default().to_string();
//!         Outcome::Complete(HttpResponse::text(StatusCode::Ok, id))
//!     })
//!     .build()
//!     .expect("valid patterns");
//!
//! let dispatcher = Dispatcher::new(router);
//! let response = dispatcher.respond(HttpRequest::new(Method::GET, "/users/42")).await;
//! assert_eq!(response.body().to_string_lossy(), "42");
//! # });
//! ```
//!
//! ## Middleware and error handling
//!
//! ```
//! use microroute_rs::{DispatchError, HttpRequest, HttpResponse, Outcome, Router, StatusCode};
//!
//! let router = Router::builder()
//!     .middleware(|req: HttpRequest| async move {
//!         match req.header("Authorization") {
//!             Some(token) => {
//!                 let user = token.trim_start_matches("Bearer ").to_string();
//!                 Outcome::Continue(req.with_context("user", user))
//!             }
//!             None => Outcome::Fail(DispatchError::Auth("missing token".to_string())),
//!         }
//!     })
//!     .get("/me", |req: HttpRequest| async move {
//!         let user = req.context().get::<String>("user").cloned().unwrap_or_default();
//!         Outcome::Complete(HttpResponse::text(StatusCode::Ok, user))
//!     })
//!     .error_handler(|err: DispatchError, _req: HttpRequest| async move {
//!         Outcome::Complete(HttpResponse::text(StatusCode::Unauthorized, err.to_string()))
//!     })
//!     .build();
//!
//! assert!(router.is_ok());
//! ```
//!
//! See `demos/http_server.rs` for a complete server.

// Export the request/response values
pub mod http;

// Export the parser module
pub mod parser;

// Export the routing and dispatch modules
pub mod router;
pub mod dispatch;
pub mod middleware;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use dispatch::{Dispatcher, Error as DispatchError, ErrorKind, Handler, ErrorHandler, Outcome, Resolution};
pub use http::{Context, HeaderMap, HttpRequest, HttpResponse, Params, StatusCode};
pub use parser::{Error as ParserError, HttpVersion, Method, parse_request};
pub use router::{Error as PatternError, MethodFilter, Pattern, Router, RouterBuilder, RouterConfig, TrailingSlash};
pub use server::{Error as ServerError, HttpServer, ServerConfig};
