use http::header::CONTENT_LENGTH;
use http::{HeaderMap, Method};

/// The request side of one cycle, as handed over by the dispatch layer.
#[derive(Debug)]
pub struct RequestCtx {
    pub method: Method,
    /// Path portion of the request target. May be empty.
    pub path: String,
    pub query: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RequestCtx {
    pub fn new(method: Method, target: &str, headers: HeaderMap, body: Vec<u8>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (target.to_string(), String::new()),
        };

        Self {
            method,
            path,
            query,
            headers,
            body,
        }
    }

    /// Declared request size from `Content-Length`.
    ///
    /// A missing, non-UTF-8 or non-numeric header counts as zero.
    pub fn bytes_in(&self) -> u64 {
        self.headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }
}
