//! HTTP server for microroute-rs.
//!
//! This module is the network boundary: it accepts TCP connections, parses requests,
//! hands them to a [`Dispatcher`](crate::dispatch::Dispatcher) and writes back the
//! resolved response.

mod config;
mod error;
mod http_server;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
