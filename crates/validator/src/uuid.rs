//! UUID validator (canonical hyphenated form, versions 1-5).

use std::sync::LazyLock;

use regex::Regex;

// 8-4-4-4-12 hex layout; version nibble 1-5, variant nibble 8/9/a/b.
static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[1-5][a-fA-F0-9]{3}-[89aAbB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$",
    )
    .unwrap()
});

/// Returns `true` if the input is a canonical UUID (versions 1-5),
/// case-insensitive.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_uuid;
///
/// assert!(is_uuid("123e4567-e89b-42d3-a456-426614174000"));
/// assert!(!is_uuid("123e4567e89b42d3a456426614174000")); // no hyphens
/// ```
pub fn is_uuid(s: &str) -> bool {
    UUID.is_match(s.trim())
}
