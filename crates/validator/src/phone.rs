//! Phone number validator.
//!
//! Intentionally conservative: either E.164-ish international form
//! (`+` then a non-zero digit then 7..=14 more digits) or a bare national
//! number of 7..=15 digits. No per-country rules, no separators.

use std::sync::LazyLock;

use regex::Regex;

static INTERNATIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").unwrap());
static LOCAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").unwrap());

/// Returns `true` if the input is a phone number in international or bare
/// national form.
pub fn is_phone(s: &str) -> bool {
    let s = s.trim();
    INTERNATIONAL.is_match(s) || LOCAL.is_match(s)
}
