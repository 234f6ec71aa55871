use async_trait::async_trait;
use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use prettylog_core::access_log::RequestLogger;
use prettylog_core::ctx::{RequestCtx, ResponseCtx};
use prettylog_core::handler::{Handler, HandlerChain, HandlerError};
use std::sync::Arc;
use tracing::debug;

const KILOBYTE: usize = 1024;
const MEGABYTE: usize = 1024 * KILOBYTE;

/// In-process stand-in for the routes of a small web app.
pub struct DemoRouter;

#[async_trait]
impl Handler for DemoRouter {
    async fn handle(&self, req: &RequestCtx, res: &mut ResponseCtx) -> Result<(), HandlerError> {
        match (&req.method, req.path.as_str()) {
            (&Method::GET, "/") => res.string(StatusCode::OK, "Hello, World!"),
            (&Method::GET, "/redirect") => res.redirect(StatusCode::MOVED_PERMANENTLY, "/"),
            (&Method::GET, "/unauthorized") => res.string(StatusCode::UNAUTHORIZED, "Unauthorized"),
            (&Method::POST, "/post") => {
                res.blob(StatusCode::OK, "application/octet-stream", vec![0; MEGABYTE]);
            }
            _ => return Err(HandlerError::http(StatusCode::NOT_FOUND)),
        }
        Ok(())
    }
}

struct DemoRequest {
    method: Method,
    target: &'static str,
    body_len: usize,
}

fn demo_requests() -> Vec<DemoRequest> {
    let get = |target| DemoRequest {
        method: Method::GET,
        target,
        body_len: 0,
    };

    vec![
        get("/"),
        get("/redirect"),
        get("/unauthorized"),
        DemoRequest {
            method: Method::CONNECT,
            target: "/not_found",
            body_len: 0,
        },
        DemoRequest {
            method: Method::POST,
            target: "/post",
            body_len: MEGABYTE,
        },
    ]
}

fn build_request(demo: &DemoRequest) -> RequestCtx {
    let mut headers = HeaderMap::new();
    if demo.body_len > 0 {
        headers.insert(CONTENT_LENGTH, HeaderValue::from(demo.body_len));
    }

    RequestCtx::new(
        demo.method.clone(),
        demo.target,
        headers,
        vec![0; demo.body_len],
    )
}

/// Sends every sample request through `logger` wrapped around the router.
pub async fn replay(logger: RequestLogger) {
    let handler = HandlerChain::new()
        .with(logger)
        .build(Arc::new(DemoRouter));

    for demo in demo_requests() {
        let req = build_request(&demo);
        let mut res = ResponseCtx::new();

        if let Err(err) = handler.handle(&req, &mut res).await {
            debug!(method = %req.method, path = %req.path, error = %err, "demo request failed");
        }
    }
}
