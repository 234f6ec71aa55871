use super::event::LogEvent;
use crate::format::{Color, Pad, annotate, colorize_status, fit, format_bytes, format_path};

pub const METHOD_WIDTH: usize = 7;
pub const DURATION_WIDTH: usize = 7;
pub const BYTES_WIDTH: usize = 9;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Renders the colorized one-line summary of a cycle:
///
/// `HH:MM:SS GET     → /path    (200)    12ms [ In:    0.00b | Out:  13.00b ]`
pub fn render_line(event: &LogEvent) -> String {
    let method = annotate(
        &fit(&event.method, METHOD_WIDTH, Pad::Right, 0),
        Color::Yellow,
    );
    let path = format_path(&event.path);
    let status = colorize_status(event.status);
    let duration = annotate(
        &fit(&format!("{}ms", event.duration_ms), DURATION_WIDTH, Pad::Left, 0),
        Color::Blue,
    );
    let bytes_in = bytes_column(event.bytes_in, Color::Magenta);
    let bytes_out = bytes_column(event.bytes_out, Color::Cyan);

    format!(
        "{} {method} → {path} ({status}) {duration} [ In: {bytes_in} | Out: {bytes_out} ]",
        event.timestamp.format(TIME_FORMAT),
    )
}

fn bytes_column(bytes: u64, color: Color) -> String {
    annotate(&fit(&format_bytes(bytes), BYTES_WIDTH, Pad::Left, 0), color)
}
