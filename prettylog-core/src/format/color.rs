/// The fixed ANSI palette used by the pretty access line.
///
/// Being a closed enum, there is no way to hand an arbitrary escape
/// sequence to [`annotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[0;31m",
            Color::Green => "\x1b[0;32m",
            Color::Yellow => "\x1b[0;33m",
            Color::Blue => "\x1b[0;34m",
            Color::Magenta => "\x1b[0;35m",
            Color::Cyan => "\x1b[0;36m",
        }
    }
}

/// Wraps `text` in the escape for `color`, followed by a reset.
pub fn annotate(text: &str, color: Color) -> String {
    let mut out = String::with_capacity(text.len() + 12);
    out.push_str(color.escape());
    out.push_str(text);
    out.push_str(Color::Reset.escape());
    out
}
