use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Times a request from construction until drop.
///
/// The end line is written from `Drop`, so it still appears when the inner
/// service panics or the request future is cancelled.
pub struct RequestTimer {
    label: String,
    started: Instant,
}

impl RequestTimer {
    pub fn start(method: &str, uri: &str) -> Self {
        Self {
            label: format!("[{}] {}", method.to_uppercase(), uri),
            started: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        info!("{}: {:.3}ms", self.label, elapsed.as_secs_f64() * 1000.0);
    }
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let _timer = RequestTimer::start(request.method().as_str(), &request.uri().to_string());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Json, Router};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    fn logged_router() -> Router {
        Router::new()
            .route(
                "/fail",
                get(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": "Repositorie Not found." })),
                    )
                }),
            )
            .route("/hang", get(|| std::future::pending::<&'static str>()))
            .layer(middleware::from_fn(log_requests))
    }

    #[test]
    fn test_label_format() {
        let timer = RequestTimer::start("post", "/repositories/1/like?x=1");
        assert_eq!(timer.label(), "[POST] /repositories/1/like?x=1");
    }

    #[tokio::test]
    async fn test_failed_request_passes_through_and_is_logged() {
        let (logs, _guard) = capture_logs();

        let request = Request::builder()
            .uri("/fail?page=2")
            .body(Body::empty())
            .unwrap();
        let response = logged_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Repositorie Not found." }));

        let output = logs.contents();
        assert!(output.contains("[GET] /fail?page=2: "), "{output}");
        assert!(output.contains("ms"), "{output}");
    }

    #[tokio::test]
    async fn test_cancelled_request_is_still_logged() {
        let (logs, _guard) = capture_logs();

        let request = Request::builder().uri("/hang").body(Body::empty()).unwrap();
        let outcome =
            tokio::time::timeout(Duration::from_millis(20), logged_router().oneshot(request))
                .await;

        assert!(outcome.is_err());
        assert!(logs.contents().contains("[GET] /hang: "));
    }
}
