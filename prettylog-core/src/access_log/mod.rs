//! Per-request access logging.
//!
//! A [`RequestLogger`] is chosen once at startup and installed as middleware.
//! For every cycle it times the wrapped handler, snapshots the request and
//! response into a [`LogEvent`], and hands that event to the selected
//! strategy:
//!
//! handler completes
//! LogEvent::capture
//! render_line (pretty) / tracing event (structured)
//! LogSink

mod clock;
mod compose;
mod event;
mod pretty;
mod sink;
mod strategy;
mod structured;


pub use clock::*;
pub use compose::*;
pub use event::*;
pub use pretty::*;
pub use sink::*;
pub use strategy::*;
pub use structured::*;

/// Target used for every access event emitted through `tracing`.
pub const ACCESS_TARGET: &str = "prettylog::access";
