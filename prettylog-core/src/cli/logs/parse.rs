use crate::access_log::{ACCESS_EVENT, EVENT_TIME_FORMAT, LogEvent};
use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;

fn is_access_event(event: &Value) -> bool {
    event.get("event").and_then(Value::as_str) == Some(ACCESS_EVENT)
}

fn timestamp(event: &Value) -> Option<NaiveDateTime> {
    if let Some(time) = event.get("time").and_then(Value::as_str) {
        return NaiveDateTime::parse_from_str(time, EVENT_TIME_FORMAT).ok();
    }

    // Fall back to the subscriber's own RFC 3339 timestamp.
    event
        .get("timestamp")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|ts| ts.with_timezone(&Local).naive_local())
}

fn number(event: &Value, key: &str) -> u64 {
    event.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Parses one JSON log record into an access event.
///
/// Returns `None` for records that are not access events or carry no
/// usable timestamp.
pub fn parse_access_event(event: &Value) -> Option<LogEvent> {
    if !is_access_event(event) {
        return None;
    }

    Some(LogEvent {
        timestamp: timestamp(event)?,
        method: event
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or("-")
            .to_string(),
        path: event
            .get("path")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        status: u16::try_from(number(event, "status")).unwrap_or(0),
        duration_ms: number(event, "duration_ms"),
        bytes_in: number(event, "bytes_in"),
        bytes_out: number(event, "bytes_out"),
    })
}
