//! Email address validator.
//!
//! Lenient RFC-5322-ish parse: a display-name wrapping (`Name <addr>`) is
//! unwrapped, then the addr-spec must be exactly `local@domain` with a
//! domain that is either a valid FQDN or an IP literal. A bare hostname
//! domain with no dot (`user@localhost`) is rejected.

use crate::{is_fqdn, is_ip};

/// Returns `true` if the input is a plausible email address.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_email;
///
/// assert!(is_email("user@example.com"));
/// assert!(is_email("Jane Doe <jane@example.com>"));
/// assert!(is_email("user@127.0.0.1"));
/// assert!(!is_email("user@localhost")); // FQDN-or-IP, not hostname
/// assert!(!is_email("a@b@c.com"));
/// assert!(!is_email("@example.com"));
/// ```
pub fn is_email(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let Some(addr) = addr_spec(s) else {
        return false;
    };
    if addr.is_empty() || addr.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = addr.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    is_fqdn(domain) || is_ip(domain)
}

/// Extracts the addr-spec from an optional display-name wrapping,
/// e.g. `Jane Doe <jane@example.com>` yields `jane@example.com`.
fn addr_spec(s: &str) -> Option<&str> {
    match s.rfind('<') {
        Some(start) if s.ends_with('>') => Some(&s[start + 1..s.len() - 1]),
        Some(_) => None, // unbalanced angle bracket
        None => Some(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_addresses() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.co"));
        assert!(!is_email(""));
        assert!(!is_email("user"));
        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn display_name_wrapping() {
        assert!(is_email("Jane Doe <jane@example.com>"));
        assert!(is_email("<jane@example.com>"));
        assert!(!is_email("Jane Doe <jane@example.com")); // unbalanced
        assert!(!is_email("Jane Doe jane@exam ple.com"));
    }

    #[test]
    fn domain_must_be_fqdn_or_ip() {
        assert!(is_email("user@127.0.0.1"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@-bad.com"));
    }

    #[test]
    fn exactly_one_at_sign() {
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a@@example.com"));
    }
}
