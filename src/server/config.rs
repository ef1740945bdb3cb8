//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Listener settings for [`HttpServer`](crate::server::HttpServer).
///
/// Routing behaviour lives in [`RouterConfig`](crate::router::RouterConfig) instead.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Connections served at once; further connections get a 503.
    pub max_connections: usize,
    /// Bytes read per request. Anything past this is not seen by the parser.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            max_connections: 1024,
            read_buffer_size: 8192,
        }
    }
}
