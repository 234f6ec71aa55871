use super::ACCESS_TARGET;
use crate::logging::{LogLevel, emit};
use serde::Deserialize;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Destination for composed access lines.
///
/// Implementations must write each line as a unit: concurrent cycles share
/// one sink and their lines must not interleave.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    Tracing,
}

impl SinkKind {
    pub fn build(self, level: LogLevel) -> Arc<dyn LogSink> {
        match self {
            SinkKind::Stdout => Arc::new(StdoutSink),
            SinkKind::Stderr => Arc::new(StderrSink),
            SinkKind::Tracing => Arc::new(TracingSink::new(level)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}") {
            warn!(error = %err, "failed to write access line to stdout");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut out = io::stderr().lock();
        if let Err(err) = writeln!(out, "{line}") {
            warn!(error = %err, "failed to write access line to stderr");
        }
    }
}

/// Forwards each line as the message of a single tracing event.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: LogLevel,
}

impl TracingSink {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        emit!(self.level, target: ACCESS_TARGET, "{line}");
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
