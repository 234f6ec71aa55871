use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderValue, StatusCode};

#[derive(Debug)]
pub struct ResponseCtx {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Set once a handler has written a reply.
    pub committed: bool,
}

impl Default for ResponseCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCtx {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            headers: HeaderMap::new(),
            body: Vec::new(),
            committed: false,
        }
    }

    pub fn respond(&mut self, status: StatusCode, body: impl Into<Vec<u8>>) {
        self.status = status.as_u16();
        self.body = body.into();
        self.committed = true;
    }

    pub fn string(&mut self, status: StatusCode, text: impl Into<String>) {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=UTF-8"),
        );
        let text: String = text.into();
        self.respond(status, text);
    }

    pub fn blob(&mut self, status: StatusCode, content_type: &'static str, body: Vec<u8>) {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self.respond(status, body);
    }

    /// Writes an empty-bodied redirect. A location that is not a valid
    /// header value is dropped rather than failing the reply.
    pub fn redirect(&mut self, status: StatusCode, location: &str) {
        if let Ok(value) = HeaderValue::from_str(location) {
            self.headers.insert(LOCATION, value);
        }
        self.respond(status, Vec::new());
    }

    /// Number of body bytes written to the client.
    pub fn size_bytes(&self) -> u64 {
        self.body.len() as u64
    }
}
