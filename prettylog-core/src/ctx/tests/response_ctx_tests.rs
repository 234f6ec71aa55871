use crate::ctx::ResponseCtx;
use http::StatusCode;
use http::header::{CONTENT_TYPE, LOCATION};
use pretty_assertions::assert_eq;

#[test]
fn new_response_defaults_to_ok_and_uncommitted() {
    let res = ResponseCtx::new();

    assert_eq!(res.status, 200);
    assert_eq!(res.size_bytes(), 0);
    assert!(!res.committed);
}

#[test]
fn string_reply_sets_status_body_and_type() {
    let mut res = ResponseCtx::new();
    res.string(StatusCode::OK, "Hello, World!");

    assert_eq!(res.status, 200);
    assert_eq!(res.size_bytes(), 13);
    assert_eq!(res.headers[CONTENT_TYPE], "text/plain; charset=UTF-8");
    assert!(res.committed);
}

#[test]
fn redirect_has_location_and_no_body() {
    let mut res = ResponseCtx::new();
    res.redirect(StatusCode::MOVED_PERMANENTLY, "/");

    assert_eq!(res.status, 301);
    assert_eq!(res.headers[LOCATION], "/");
    assert_eq!(res.size_bytes(), 0);
}

#[test]
fn blob_reply_counts_every_byte() {
    let mut res = ResponseCtx::new();
    res.blob(StatusCode::OK, "application/octet-stream", vec![0; 1024 * 1024]);

    assert_eq!(res.size_bytes(), 1_048_576);
}
