//! Re-renders structured access events as pretty lines.
//!
//! A process running with the structured strategy and JSON logging writes
//! one JSON object per access event. Piping that output through
//! `prettylog logs` turns each access event back into the colorized line
//! the pretty strategy would have printed.
//!
//! stdin
//! parse_access_event
//! LogEvent
//! render_line
//! stdout

mod parse;
mod run;

pub use parse::parse_access_event;
pub use run::*;
