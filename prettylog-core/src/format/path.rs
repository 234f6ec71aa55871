use super::fit::{Pad, fit};

pub const PATH_WIDTH: usize = 40;
pub const PATH_MAX_LEN: usize = 37;

/// Normalizes an empty path to `/` and fits it into the path column.
pub fn format_path(path: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };

    fit(path, PATH_WIDTH, Pad::Right, PATH_MAX_LEN)
}
