use crate::ctx::RequestCtx;
use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderValue, Method};
use pretty_assertions::assert_eq;

fn request_with_length(value: &'static str) -> RequestCtx {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static(value));
    RequestCtx::new(Method::POST, "/post", headers, Vec::new())
}

#[test]
fn target_is_split_into_path_and_query() {
    let req = RequestCtx::new(Method::GET, "/search?q=rust&page=2", HeaderMap::new(), Vec::new());

    assert_eq!(req.path, "/search");
    assert_eq!(req.query, "q=rust&page=2");
}

#[test]
fn empty_target_keeps_empty_path() {
    let req = RequestCtx::new(Method::GET, "", HeaderMap::new(), Vec::new());

    assert_eq!(req.path, "");
    assert_eq!(req.query, "");
}

#[test]
fn bytes_in_reads_content_length() {
    assert_eq!(request_with_length("1048576").bytes_in(), 1_048_576);
}

#[test]
fn missing_content_length_is_zero() {
    let req = RequestCtx::new(Method::GET, "/", HeaderMap::new(), Vec::new());

    assert_eq!(req.bytes_in(), 0);
}

#[test]
fn malformed_content_length_is_zero() {
    assert_eq!(request_with_length("abc").bytes_in(), 0);
    assert_eq!(request_with_length("-5").bytes_in(), 0);
    assert_eq!(request_with_length("").bytes_in(), 0);
}
