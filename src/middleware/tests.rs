//! Tests for the bundled middleware.

#[cfg(test)]
mod middleware_tests {
    use std::time::{Duration, Instant};

    use crate::dispatch::{Dispatcher, Error, ErrorKind, Handler, Outcome, Resolution};
    use crate::http::{HttpRequest, HttpResponse, StatusCode};
    use crate::middleware::{request_logger, Timeout, RECEIVED_AT};
    use crate::parser::Method;
    use crate::router::Router;

    fn slow_router() -> Router {
        Router::builder()
            .get("/slow", |_req: HttpRequest| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Outcome::Complete(HttpResponse::text(StatusCode::Ok, "slow"))
            })
            .get("/fast", |_req: HttpRequest| async {
                Outcome::Complete(HttpResponse::text(StatusCode::Ok, "fast"))
            })
            .build()
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fails_slow_chain() {
        let timeout = Timeout::new(Duration::from_millis(50), slow_router());
        let outcome = timeout.call(HttpRequest::new(Method::GET, "/slow")).await;
        match outcome {
            Outcome::Fail(error) => {
                assert_eq!(error, Error::Timeout(Duration::from_millis(50)));
                assert_eq!(error.kind(), ErrorKind::Timeout);
            }
            other => panic!("expected a timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_passes_fast_chain_through() {
        let timeout = Timeout::new(Duration::from_millis(50), slow_router());
        assert_eq!(timeout.duration(), Duration::from_millis(50));
        let outcome = timeout.call(HttpRequest::new(Method::GET, "/fast")).await;
        assert!(matches!(outcome, Outcome::Complete(ref r) if r.body().to_string_lossy() == "fast"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_error_goes_through_outer_error_pipeline() {
        let router = Router::builder()
            .mount_handler("/", Timeout::new(Duration::from_millis(10), slow_router()))
            .error_handler(|err: Error, req: HttpRequest| async move {
                match err.kind() {
                    ErrorKind::Timeout => Outcome::Complete(HttpResponse::text(
                        StatusCode::GatewayTimeout,
                        err.to_string(),
                    )),
                    _ => Outcome::Continue(req),
                }
            })
            .build()
            .unwrap();

        let response = Dispatcher::new(router)
            .respond(HttpRequest::new(Method::GET, "/slow"))
            .await;
        assert_eq!(response.status(), StatusCode::GatewayTimeout);
    }

    #[tokio::test]
    async fn test_request_logger_continues_with_arrival_time() {
        let before = Instant::now();
        let router = Router::builder()
            .middleware(request_logger())
            .get("/", |req: HttpRequest| async move {
                let stamped = req.context().get::<Instant>(RECEIVED_AT).is_some();
                Outcome::Complete(HttpResponse::text(StatusCode::Ok, stamped.to_string()))
            })
            .build()
            .unwrap();

        let resolution = Dispatcher::new(router)
            .dispatch(HttpRequest::new(Method::GET, "/?verbose=1"))
            .await;
        match resolution {
            Resolution::Complete(response) => assert_eq!(response.body().to_string_lossy(), "true"),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(before.elapsed() < Duration::from_secs(5));
    }
}
