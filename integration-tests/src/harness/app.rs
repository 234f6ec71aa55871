use anyhow::anyhow;
use async_trait::async_trait;
use chrono::NaiveDate;
use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use prettylog_core::access_log::{FixedClock, RequestLogger};
use prettylog_core::ctx::{RequestCtx, ResponseCtx};
use prettylog_core::handler::{Handler, HandlerChain, HandlerError};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Routes used by the tests:
///
/// - `GET /` replies "Hello, World!"
/// - `GET /redirect` replies 301
/// - `POST /echo` echoes the request body
/// - `GET /sleep/<ms>` sleeps then replies 204
/// - `GET /boom` fails with an internal error
/// - anything else fails with 404
struct TestRouter;

#[async_trait]
impl Handler for TestRouter {
    async fn handle(&self, req: &RequestCtx, res: &mut ResponseCtx) -> Result<(), HandlerError> {
        match (&req.method, req.path.as_str()) {
            (&Method::GET, "/") => res.string(StatusCode::OK, "Hello, World!"),
            (&Method::GET, "/redirect") => res.redirect(StatusCode::MOVED_PERMANENTLY, "/"),
            (&Method::POST, "/echo") => res.respond(StatusCode::OK, req.body.clone()),
            (&Method::GET, "/boom") => {
                return Err(anyhow!("upstream exploded").into());
            }
            (&Method::GET, path) if path.starts_with("/sleep/") => {
                let ms = path["/sleep/".len()..].parse().unwrap_or(0);
                tokio::time::sleep(Duration::from_millis(ms)).await;
                res.respond(StatusCode::NO_CONTENT, Vec::new());
            }
            _ => return Err(HandlerError::http(StatusCode::NOT_FOUND)),
        }
        Ok(())
    }
}

/// A router wrapped in a single access logger.
pub struct TestApp {
    handler: Arc<dyn Handler>,
}

impl TestApp {
    pub fn new(logger: RequestLogger) -> Self {
        Self {
            handler: HandlerChain::new()
                .with(logger)
                .build(Arc::new(TestRouter)),
        }
    }

    pub async fn send(
        &self,
        method: Method,
        target: &str,
        body: Vec<u8>,
    ) -> (ResponseCtx, Result<(), HandlerError>) {
        let mut headers = HeaderMap::new();
        if !body.is_empty() {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }

        self.send_with_headers(method, target, headers, body).await
    }

    pub async fn send_with_headers(
        &self,
        method: Method,
        target: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> (ResponseCtx, Result<(), HandlerError>) {
        let req = RequestCtx::new(method, target, headers, body);
        let mut res = ResponseCtx::new();
        let result = self.handler.handle(&req, &mut res).await;
        (res, result)
    }
}

/// 2026-10-18 08:30:00
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap(),
    ))
}

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}
