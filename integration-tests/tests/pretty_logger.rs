use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use integration_tests::harness::{TestApp, fixed_clock};
use pretty_assertions::assert_eq;
use prettylog_core::access_log::{MemorySink, PrettyLogger, RequestLogger};
use std::sync::Arc;

fn pretty_app() -> (TestApp, MemorySink) {
    let sink = MemorySink::new();
    let logger = PrettyLogger::new(Arc::new(sink.clone())).with_clock(fixed_clock());
    (TestApp::new(RequestLogger::Pretty(logger)), sink)
}

/// Splits a line around the duration column, which depends on timing.
fn split_duration(line: &str) -> (&str, &str) {
    let (head, rest) = line.split_once(" \x1b[0;34m").unwrap();
    let (_, tail) = rest.split_once("\x1b[0m ").unwrap();
    (head, tail)
}

#[tokio::test]
async fn root_request_matches_template() {
    let (app, sink) = pretty_app();

    let (res, result) = app.send(Method::GET, "/", Vec::new()).await;
    result.unwrap();
    assert_eq!(res.status, 200);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);

    let (head, tail) = split_duration(&lines[0]);
    assert_eq!(
        head,
        format!(
            "08:30:00 \x1b[0;33mGET    \x1b[0m → /{} (\x1b[0;32m200\x1b[0m)",
            " ".repeat(39)
        )
    );
    assert_eq!(
        tail,
        "[ In: \x1b[0;35m    0.00b\x1b[0m | Out: \x1b[0;36m   13.00b\x1b[0m ]"
    );
}

#[tokio::test]
async fn request_and_response_sizes_are_reported() {
    let (app, sink) = pretty_app();

    let (_, result) = app.send(Method::POST, "/echo", vec![7; 2048]).await;
    result.unwrap();

    let line = sink.take().remove(0);
    assert!(line.contains("In: \x1b[0;35m   2.00Kb\x1b[0m"));
    assert!(line.contains("Out: \x1b[0;36m   2.00Kb\x1b[0m"));
}

#[tokio::test]
async fn malformed_content_length_counts_as_zero() {
    let (app, sink) = pretty_app();
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("lots"));

    let (_, result) = app
        .send_with_headers(Method::POST, "/echo", headers, b"hi".to_vec())
        .await;
    result.unwrap();

    let line = sink.take().remove(0);
    assert!(line.contains("In: \x1b[0;35m    0.00b\x1b[0m"));
    assert!(line.contains("Out: \x1b[0;36m    2.00b\x1b[0m"));
}

#[tokio::test]
async fn not_found_is_logged_and_returned() {
    let (app, sink) = pretty_app();

    let (res, result) = app.send(Method::CONNECT, "/not_found", Vec::new()).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.status, 404);

    let line = sink.take().remove(0);
    assert!(line.contains("\x1b[0;33mCONNECT\x1b[0m → /not_found"));
    assert!(line.contains("(\x1b[0;31m404\x1b[0m)"));
}

#[tokio::test]
async fn internal_failure_is_logged_as_server_error() {
    let (app, sink) = pretty_app();

    let (res, result) = app.send(Method::GET, "/boom", Vec::new()).await;

    assert_eq!(result.unwrap_err().to_string(), "upstream exploded");
    assert_eq!(res.status, 500);
    assert!(sink.take()[0].contains("(\x1b[0;35m500\x1b[0m)"));
}

#[tokio::test]
async fn redirect_is_cyan() {
    let (app, sink) = pretty_app();

    app.send(Method::GET, "/redirect", Vec::new()).await.1.unwrap();

    assert!(sink.take()[0].contains("(\x1b[0;36m301\x1b[0m)"));
}

#[tokio::test]
async fn long_path_is_truncated_in_the_middle() {
    let (app, sink) = pretty_app();
    let path = format!("/{}", "a".repeat(99));

    app.send(Method::GET, &path, Vec::new()).await;

    let line = sink.take().remove(0);
    let expected = format!("/{}...{}", "a".repeat(17), "a".repeat(19));
    assert!(line.contains(&format!(" → {expected} (")), "{line}");
}

#[tokio::test]
async fn query_string_is_not_part_of_the_path_column() {
    let (app, sink) = pretty_app();

    app.send(Method::GET, "/?lang=en", Vec::new()).await.1.unwrap();

    let line = sink.take().remove(0);
    assert!(line.contains(&format!(" → /{} (", " ".repeat(39))));
    assert!(!line.contains("lang"));
}
