//! IP and hardware address validators.

use std::net::IpAddr;

// ============================================================================
// IP ADDRESSES
// ============================================================================

/// Returns `true` if the input parses as an IPv4 or IPv6 address literal.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_ip;
///
/// assert!(is_ip("192.168.1.1"));
/// assert!(is_ip("2001:db8::1"));
/// assert!(!is_ip("256.0.0.1"));
/// assert!(!is_ip("example.com"));
/// ```
pub fn is_ip(s: &str) -> bool {
    s.trim().parse::<IpAddr>().is_ok()
}

/// Returns `true` if the input is an IPv4 address literal.
///
/// IPv4-mapped IPv6 literals (`::ffff:a.b.c.d`) count as IPv4.
pub fn is_ipv4(s: &str) -> bool {
    match s.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => true,
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_some(),
        Err(_) => false,
    }
}

/// Returns `true` if the input is an IPv6 address literal.
///
/// IPv4-mapped forms are classified as IPv4, not IPv6.
pub fn is_ipv6(s: &str) -> bool {
    match s.trim().parse::<IpAddr>() {
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_none(),
        _ => false,
    }
}

// ============================================================================
// HARDWARE ADDRESSES
// ============================================================================

/// Returns `true` if the input is a MAC-48 or EUI-64 hardware address.
///
/// Accepts six or eight two-hex-digit groups joined by a single consistent
/// separator, either `:` or `-`.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_mac;
///
/// assert!(is_mac("aa:bb:cc:dd:ee:ff"));
/// assert!(is_mac("AA-BB-CC-DD-EE-FF"));
/// assert!(is_mac("01:23:45:67:89:ab:cd:ef")); // EUI-64
/// assert!(!is_mac("aa:bb:cc:dd:ee"));
/// assert!(!is_mac("gg:hh:ii:jj:kk:ll"));
/// ```
pub fn is_mac(s: &str) -> bool {
    let s = s.trim();
    let sep = if s.contains(':') {
        ':'
    } else if s.contains('-') {
        '-'
    } else {
        return false;
    };
    let groups: Vec<&str> = s.split(sep).collect();
    (groups.len() == 6 || groups.len() == 8)
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

// ============================================================================
// TESTS
// ============================================================================
