//! Base64 validator.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

/// Returns `true` if the input decodes as standard base64, with padding or
/// (as a fallback) without.
///
/// Internal newlines, carriage returns, and spaces are stripped first, so
/// wrapped PEM-style payloads pass.
pub fn is_base64(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let compact: String = s
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ' '))
        .collect();
    STANDARD.decode(&compact).is_ok() || STANDARD_NO_PAD.decode(&compact).is_ok()
}
