//! Credit card number validator (format check + Luhn checksum).

/// Returns `true` if the input looks like a valid card number.
///
/// Spaces and hyphens are stripped; any other non-digit invalidates the
/// input. The remaining digit count must be 12..=19 and the Luhn checksum
/// must hold.
///
/// # Examples
///
/// ```
/// use satchel_validator::is_credit_card;
///
/// assert!(is_credit_card("4111 1111 1111 1111"));
/// assert!(is_credit_card("4111-1111-1111-1111"));
/// assert!(!is_credit_card("4111 1111 1111 1112")); // checksum off by one
/// assert!(!is_credit_card("4111111111111111x"));
/// ```
pub fn is_credit_card(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let mut digits = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - u32::from(b'0')),
            ' ' | '-' => {}
            _ => return false,
        }
    }
    if !(12..=19).contains(&digits.len()) {
        return false;
    }
    luhn(&digits)
}

/// Luhn checksum: starting from the rightmost digit, double every second
/// digit moving left, subtract 9 when the doubled value exceeds 9, sum
/// everything; valid iff the sum is a multiple of 10.
fn luhn(digits: &[u32]) -> bool {
    let mut sum = 0;
    let mut double = false;
    for &digit in digits.iter().rev() {
        let mut d = digit;
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_test_numbers() {
        // Standard network test numbers, all Luhn-valid.
        assert!(is_credit_card("4111111111111111")); // Visa
        assert!(is_credit_card("5500005555555559")); // Mastercard
        assert!(is_credit_card("340000000000009")); // Amex (15 digits)
        assert!(is_credit_card("6011000000000004")); // Discover
    }

    #[test]
    fn separators() {
        assert!(is_credit_card("4111 1111 1111 1111"));
        assert!(is_credit_card("4111-1111-1111-1111"));
        assert!(!is_credit_card("4111_1111_1111_1111"));
        assert!(!is_credit_card("4111.1111.1111.1111"));
    }

    #[test]
    fn digit_count_bounds() {
        assert!(!is_credit_card("4111111111")); // 10 digits
        assert!(!is_credit_card("41111111111111111111111")); // 23 digits
    }

    #[test]
    fn checksum_failures() {
        assert!(!is_credit_card("4111111111111112"));
        assert!(!is_credit_card("1234567890123456"));
    }

    #[test]
    fn luhn_direct() {
        assert!(luhn(&[1, 8])); // 8 + (1*2) = 10
        assert!(luhn(&[0, 0, 0, 0]));
        assert!(!luhn(&[1, 1]));
    }
}
