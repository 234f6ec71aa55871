use super::ACCESS_TARGET;
use super::clock::{Clock, SystemClock};
use super::event::LogEvent;
use crate::logging::{LogLevel, emit};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Value of the `event` field on structured access events.
pub const ACCESS_EVENT: &str = "access";

/// Layout of the `time` field on structured access events.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Emits one tracing event per cycle, with every line field as a separate
/// structured field.
#[derive(Clone)]
pub struct StructuredLogger {
    level: LogLevel,
    clock: Arc<dyn Clock>,
}

impl StructuredLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn log(&self, event: &LogEvent) {
        emit!(
            self.level,
            target: ACCESS_TARGET,
            event = ACCESS_EVENT,
            time = %event.timestamp.format(EVENT_TIME_FORMAT),
            method = %event.method,
            path = %event.path,
            status = event.status,
            duration_ms = event.duration_ms,
            bytes_in = event.bytes_in,
            bytes_out = event.bytes_out,
            "request completed"
        );
    }
}
