//! HTTP(S) URL validator.

use url::{Host, Url};

use crate::{is_fqdn, is_hostname};

/// Returns `true` if the input is an absolute `http` or `https` URL with a
/// plausible host.
///
/// The host must be an IPv4 literal, a bracketed IPv6 literal, an FQDN, or
/// a plain single-label hostname. A port, path, query, or fragment does not
/// affect the host check.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_url;
///
/// assert!(is_url("https://example.com/path?q=1"));
/// assert!(is_url("http://localhost:8080"));
/// assert!(is_url("https://[2001:db8::1]"));
/// assert!(!is_url("ftp://example.com"));
/// assert!(!is_url("example.com")); // not absolute
/// ```
pub fn is_url(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let Ok(parsed) = Url::parse(s) else {
        return false;
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    match parsed.host() {
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => is_fqdn(domain) || is_hostname(domain),
        None => false,
    }
}
