//! Hostname and FQDN validators (RFC 1123 label rules).
//!
//! - Labels: 1..=63 characters, `[A-Za-z0-9-]` only, no leading or
//!   trailing hyphen.
//! - FQDN: at least one dot, total length <= 253, trailing dot tolerated.
//! - Hostname: one bare label, no dot.

/// Returns `true` if the input is a fully-qualified domain name.
///
/// A single trailing dot is tolerated and stripped before checking.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_fqdn;
///
/// assert!(is_fqdn("example.com"));
/// assert!(is_fqdn("example.com."));
/// assert!(is_fqdn("a.b.c.d.example.org"));
/// assert!(!is_fqdn("localhost"));   // no dot
/// assert!(!is_fqdn("-bad.com"));    // leading hyphen in label
/// assert!(!is_fqdn(""));
/// ```
pub fn is_fqdn(s: &str) -> bool {
    let s = s.trim();
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() || s.len() > 253 || !s.contains('.') {
        return false;
    }
    s.split('.').all(valid_label)
}

/// Returns `true` if the input is a single bare hostname label (<= 63
/// chars), the same per-label rule as [`is_fqdn`] but with no dot.
pub fn is_hostname(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.len() <= 63 && valid_label(s)
}

fn valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > 63 {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqdn_requires_a_dot() {
        assert!(!is_fqdn("localhost"));
        assert!(is_fqdn("localhost.localdomain"));
    }

    #[test]
    fn fqdn_label_rules() {
        assert!(is_fqdn("a-b.example.com"));
        assert!(!is_fqdn("a-.example.com"));
        assert!(!is_fqdn("-a.example.com"));
        assert!(!is_fqdn("a_b.example.com"));
        assert!(!is_fqdn("a..com"));
        assert!(!is_fqdn(".example.com"));
    }

    #[test]
    fn fqdn_length_limits() {
        let long_label = "a".repeat(63);
        assert!(is_fqdn(&format!("{long_label}.com")));
        let too_long = "a".repeat(64);
        assert!(!is_fqdn(&format!("{too_long}.com")));

        // 4 * 63 + dots pushes past 253
        let huge = [long_label.as_str(); 4].join(".");
        assert!(!is_fqdn(&huge));
    }

    #[test]
    fn trailing_dot_is_tolerated_once() {
        assert!(is_fqdn("example.com."));
        assert!(!is_fqdn("example.com.."));
        assert!(!is_fqdn("."));
    }

    #[test]
    fn hostname_is_one_label() {
        assert!(is_hostname("localhost"));
        assert!(is_hostname("web-01"));
        assert!(!is_hostname("web_01"));
        assert!(!is_hostname("example.com"));
        assert!(!is_hostname(""));
        assert!(!is_hostname(&"a".repeat(64)));
    }
}
