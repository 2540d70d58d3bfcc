//! Page-range punctuation: render ranges with an en-dash (`--`).

/// Returns the normalized range, or `None` when the value is already fine.
pub fn normalize_pages(value: &str) -> Option<String> {
    if value.contains('-') && !value.contains("--") {
        return Some(value.replace('-', "--"));
    }
    if value.contains(' ') && !value.contains("--") {
        return Some(value.replace(' ', "--"));
    }
    None
}
