use super::color::{Color, annotate};

/// Maps a status code to its palette color. Informational and out-of-range
/// codes fall through to yellow.
pub fn color_for_status(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500.. => Color::Magenta,
        _ => Color::Yellow,
    }
}

pub fn colorize_status(code: u16) -> String {
    annotate(&code.to_string(), color_for_status(code))
}
