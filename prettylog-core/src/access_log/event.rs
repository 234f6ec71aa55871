use crate::ctx::{RequestCtx, ResponseCtx};
use chrono::NaiveDateTime;
use std::time::Duration;

/// Everything one access line needs, captured after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: NaiveDateTime,
    pub method: String,
    /// Request path; empty means root.
    pub path: String,
    pub status: u16,
    pub duration_ms: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl LogEvent {
    pub fn capture(
        timestamp: NaiveDateTime,
        req: &RequestCtx,
        res: &ResponseCtx,
        elapsed: Duration,
    ) -> Self {
        Self {
            timestamp,
            method: req.method.as_str().to_string(),
            path: req.path.clone(),
            status: res.status,
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            bytes_in: req.bytes_in(),
            bytes_out: res.size_bytes(),
        }
    }
}
