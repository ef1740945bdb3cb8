//! A more advanced HTTP server example demonstrating routers, middleware and error handling.

use std::time::Duration;

use microroute_rs::middleware::{request_logger, Timeout};
use microroute_rs::{
    DispatchError, ErrorKind, HttpRequest, HttpResponse, HttpServer, Outcome, Router,
    ServerConfig, StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

/// Middleware: require a bearer token and expose the caller's name downstream.
async fn authenticate(req: HttpRequest) -> Outcome {
    let user = match req.header("Authorization").and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return Outcome::Fail(DispatchError::Auth("missing bearer token".to_string())),
    };
    Outcome::Continue(req.with_context("user", user))
}

async fn get_user(req: HttpRequest) -> Outcome {
    let id = match req.param("id").map(str::parse::<u64>) {
        Some(Ok(id)) => id,
        _ => return Outcome::Fail(DispatchError::validation("user id must be a number")),
    };
    let user = User {
        id,
        name: format!("user-{id}"),
    };
    match HttpResponse::new(StatusCode::Ok).with_json(&user) {
        Ok(response) => Outcome::Complete(response),
        Err(e) => Outcome::Fail(DispatchError::internal(e.to_string())),
    }
}

async fn create_user(req: HttpRequest) -> Outcome {
    let user: User = match req.json() {
        Ok(user) => user,
        Err(e) => return Outcome::Fail(e),
    };
    let created_by = req.context().get::<String>("user").cloned().unwrap_or_default();
    Outcome::from_result(
        HttpResponse::new(StatusCode::Created)
            .with_header("X-Created-By", created_by)
            .with_json(&user)
            .map_err(|e| DispatchError::internal(e.to_string())),
    )
}

/// Error handler: map error kinds to status codes.
async fn render_error(err: DispatchError, req: HttpRequest) -> Outcome {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::BadRequest,
        ErrorKind::Auth => StatusCode::Unauthorized,
        ErrorKind::NotFound => StatusCode::NotFound,
        ErrorKind::Timeout => StatusCode::GatewayTimeout,
        // Leave internal errors to the default response
        ErrorKind::Internal => return Outcome::Continue(req),
    };
    Outcome::Complete(HttpResponse::text(status, err.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let users = Router::builder()
        .middleware(authenticate)
        .get("/:id", get_user)
        .post("/", create_user)
        .build()?;

    let router = Router::builder()
        .middleware(request_logger())
        .get("/", |_req: HttpRequest| async {
            Outcome::Complete(
                HttpResponse::new(StatusCode::Ok)
                    .with_content_type("text/html")
                    .with_body_string("<html><body><h1>Welcome to microroute-rs!</h1></body></html>"),
            )
        })
        .get("/hello", |req: HttpRequest| async move {
            let name = req.query_param("name").unwrap_or_else(|| "World".to_string());
            Outcome::Complete(HttpResponse::text(StatusCode::Ok, format!("Hello, {name}!")))
        })
        .mount_handler("/api/users", Timeout::new(Duration::from_secs(2), users))
        .error_handler(render_error)
        .build()?;

    let config = ServerConfig {
        addr: "127.0.0.1:8080".parse()?,
        ..ServerConfig::default()
    };

    HttpServer::new(config, router).start().await?;

    Ok(())
}
