use super::clock::{Clock, SystemClock};
use super::compose::render_line;
use super::event::LogEvent;
use super::sink::LogSink;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Writes one colorized, fixed-width line per cycle to its sink.
#[derive(Clone)]
pub struct PrettyLogger {
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
}

impl PrettyLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
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
        self.sink.write_line(&render_line(event));
    }
}
