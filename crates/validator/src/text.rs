//! Plain-text validators: hex colors and alphanumeric strings.

use std::sync::LazyLock;

use regex::Regex;

// #RGB, #RGBA, #RRGGBB or #RRGGBBAA, leading # optional.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[A-Fa-f0-9]{3}|[A-Fa-f0-9]{4}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{8})$").unwrap()
});

/// Returns `true` if the input is a hex color: an optional leading `#`
/// followed by exactly 3, 4, 6, or 8 hex digits.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_hex_color;
///
/// assert!(is_hex_color("#fff"));
/// assert!(is_hex_color("#abcd")); // short RGBA
/// assert!(is_hex_color("00ff7f"));
/// assert!(!is_hex_color("#ggg"));
/// assert!(!is_hex_color("#12345"));
/// ```
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s.trim())
}

/// Returns `true` if the input is non-empty and contains only ASCII
/// letters and digits.
pub fn is_alphanumeric(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_lengths() {
        assert!(is_hex_color("#abc"));
        assert!(is_hex_color("#abcd"));
        assert!(is_hex_color("#aabbcc"));
        assert!(is_hex_color("#aabbccdd"));
        assert!(!is_hex_color("#ab"));
        assert!(!is_hex_color("#abcde"));
        assert!(!is_hex_color("#aabbccd"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn hex_color_hash_optional() {
        assert!(is_hex_color("abc"));
        assert!(is_hex_color("AABBCC"));
        assert!(!is_hex_color("##abc"));
    }

    #[test]
    fn alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric(" abc123 ")); // trimmed
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(!is_alphanumeric("héllo"));
    }
}
