//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::signal;
use log::{debug, info, warn, error};

use crate::dispatch::{Dispatcher, Resolution};
use crate::http::{HttpResponse, StatusCode};
use crate::parser::parse_request;
use crate::router::Router;
use crate::server::config::ServerConfig;
use crate::server::error::Error;

/// How long shutdown waits for in-flight connections.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// An HTTP server that feeds every request to a router.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The dispatcher shared by every connection.
    dispatcher: Dispatcher,
    /// Route listing logged at startup.
    routes: Vec<String>,
}

impl HttpServer {
    /// Create a new HTTP server serving `router` with the given configuration.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        let routes = router.describe();
        Self {
            config,
            dispatcher: Dispatcher::new(router),
            routes,
        }
    }

    /// The dispatcher requests are handed to.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The routes this server answers, as `METHOD /pattern` lines.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Start the server and serve connections until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        info!("Registered endpoints:");
        for route in &self.routes {
            info!("  {route}");
        }

        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);

        self.serve(listener, ctrl_c()).await
    }

    /// Serve connections from `listener` until `shutdown` resolves, then give in-flight
    /// connections [`SHUTDOWN_GRACE`] to finish.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));
        let mut tasks = JoinSet::new();

        self.accept_until(&listener, shutdown, &semaphore, &mut tasks).await;

        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let drained = tokio::time::timeout(SHUTDOWN_GRACE, async {
            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    error!("Connection task failed during shutdown: {e}");
                }
            }
        })
        .await;
        if drained.is_err() {
            warn!("Shutdown grace period elapsed with connections still open");
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// The accept loop. Connection tasks land in `tasks`, which only ever holds live ones:
    /// finished tasks are collected before anything else is done.
    pub(crate) async fn accept_until(
        &self,
        listener: &TcpListener,
        shutdown: impl Future<Output = ()>,
        semaphore: &Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        error!("Connection task failed: {e}");
                    }
                }
                _ = &mut shutdown => break,
                accepted = listener.accept() => match accepted {
                    Ok((socket, addr)) => self.spawn_connection(socket, addr, semaphore, tasks).await,
                    Err(e) => {
                        error!("Error accepting connection: {e}");
                        // Back off briefly so a persistent accept error does not spin
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                },
            }
        }
    }

    /// Serve one accepted connection on its own task, or turn it away when at capacity.
    async fn spawn_connection(
        &self,
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: &Arc<Semaphore>,
        tasks: &mut JoinSet<()>,
    ) {
        let Ok(permit) = Arc::clone(semaphore).try_acquire_owned() else {
            warn!("Connection limit reached, rejecting connection from {addr}");
            let response = HttpResponse::text(
                StatusCode::ServiceUnavailable,
                "Server is at capacity, please try again later",
            );
            let _ = socket.write_all(&response.to_bytes()).await;
            return;
        };

        let dispatcher = self.dispatcher.clone();
        let read_buffer_size = self.config.read_buffer_size;

        tasks.spawn(async move {
            // Held until the connection is done
            let _permit = permit;

            match Self::handle_connection(&mut socket, &dispatcher, read_buffer_size).await {
                Ok(()) => {}
                Err(Error::ParseError(e)) => debug!("Rejected malformed request from {addr}: {e}"),
                Err(e) => warn!("Error handling connection from {addr}: {e}"),
            }
        });
    }

    /// Handle a single connection.
    ///
    /// Reads one request, dispatches it and writes the resolved response. Requests that
    /// fail to parse are answered with `400 Bad Request`.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        dispatcher: &Dispatcher,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        let request = match parse_request(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                let response = HttpResponse::text(
                    StatusCode::BadRequest,
                    format!("Error parsing request: {e}"),
                );
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };

        let method = request.method();
        let path = request.path().to_string();
        let resolution = dispatcher.dispatch(request).await;
        if let Resolution::Failed(e) = &resolution {
            warn!("Unhandled error for {method} {path}: {e}");
        }

        socket.write_all(&resolution.into_response().to_bytes()).await?;
        Ok(())
    }
}

/// Resolves on Ctrl+C. If the handler cannot be installed the server runs until killed.
async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            error!("Error setting up Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
