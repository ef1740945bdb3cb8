//! Request logging.

use std::future::{ready, Ready};
use std::time::Instant;
use log::info;

use crate::dispatch::Outcome;
use crate::http::HttpRequest;

/// Context key under which [`request_logger`] stores the time the request arrived.
pub const RECEIVED_AT: &str = "microroute.received_at";

/// Middleware that logs each request at `info` and records its arrival time.
///
/// The arrival time is stored in the context as an [`Instant`] under [`RECEIVED_AT`].
pub fn request_logger() -> impl Fn(HttpRequest) -> Ready<Outcome> + Send + Sync + 'static {
    |request: HttpRequest| {
        match request.query() {
            "" => info!("{} {}", request.method(), request.original_path()),
            query => info!("{} {}?{query}", request.method(), request.original_path()),
        }
        ready(Outcome::Continue(request.with_context(RECEIVED_AT, Instant::now())))
    }
}
