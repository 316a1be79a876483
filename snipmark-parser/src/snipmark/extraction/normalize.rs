//! Line-ending normalization

/// Replace every CRLF pair with a bare LF.
///
/// Runs once, before any marker matching, so the marker patterns and the
/// render-skip line filter only ever see `\n` line breaks. Lone carriage
/// returns are left untouched.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
