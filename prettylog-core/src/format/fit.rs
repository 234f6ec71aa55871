const ELLIPSIS: &str = "...";

/// Which side receives padding when a value is shorter than its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Left,
    Right,
}

/// Fits `text` into a fixed-width column.
///
/// - If `max_allowed_len > 0` and the text is longer than that, the middle is
///   cut out and replaced by `"..."`. The ellipsis is added on top of the
///   kept characters, so the result is `max_allowed_len + 3` chars long.
/// - Otherwise, text shorter than `desired_len` is padded with spaces on the
///   `pad` side up to exactly `desired_len`.
/// - Anything else is returned unchanged.
///
/// Lengths are counted in `char`s.
pub fn fit(text: &str, desired_len: usize, pad: Pad, max_allowed_len: usize) -> String {
    let len = text.chars().count();

    if max_allowed_len > 0 && len > max_allowed_len {
        return truncate_middle(text, len, max_allowed_len);
    }

    if len < desired_len {
        let padding = " ".repeat(desired_len - len);
        return match pad {
            Pad::Left => padding + text,
            Pad::Right => format!("{text}{padding}"),
        };
    }

    text.to_string()
}

fn truncate_middle(text: &str, len: usize, max_allowed_len: usize) -> String {
    let first_half = max_allowed_len / 2;
    let second_half = first_half + max_allowed_len % 2;

    let mut out = String::with_capacity(text.len().min(max_allowed_len * 4) + ELLIPSIS.len());
    out.extend(text.chars().take(first_half));
    out.push_str(ELLIPSIS);
    out.extend(text.chars().skip(len - second_half));
    out
}
