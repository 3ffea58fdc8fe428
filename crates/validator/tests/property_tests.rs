//! Property-based tests for satchel-validator.

use proptest::prelude::*;
use satchel_validator::*;

/// Reference Luhn implementation, kept independent of the crate's.
fn luhn_sum_is_zero(digits: &[u8]) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for &d in digits.iter().rev() {
        let mut d = u32::from(d);
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

// ============================================================================
// IDEMPOTENCY: same input, same answer
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        prop_assert_eq!(is_email(&s), is_email(&s));
    }

    #[test]
    fn fqdn_idempotent(s in ".*") {
        prop_assert_eq!(is_fqdn(&s), is_fqdn(&s));
    }

    #[test]
    fn credit_card_idempotent(s in ".*") {
        prop_assert_eq!(is_credit_card(&s), is_credit_card(&s));
    }

    #[test]
    fn hex_color_idempotent(s in ".*") {
        prop_assert_eq!(is_hex_color(&s), is_hex_color(&s));
    }
}

// ============================================================================
// LUHN: digit strings of card length agree with the reference checksum
// ============================================================================

proptest! {
    #[test]
    fn credit_card_matches_reference_luhn(digits in prop::collection::vec(0u8..10, 12..=19)) {
        let s: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(is_credit_card(&s), luhn_sum_is_zero(&digits));
    }

    #[test]
    fn exactly_one_check_digit_works(payload in prop::collection::vec(0u8..10, 11..=18)) {
        let prefix: String = payload.iter().map(|d| char::from(b'0' + d)).collect();
        let valid_count = (0u8..10)
            .filter(|check| {
                let mut full = payload.clone();
                full.push(*check);
                is_credit_card(&format!("{prefix}{check}")) && luhn_sum_is_zero(&full)
            })
            .count();
        prop_assert_eq!(valid_count, 1);
    }
}

// ============================================================================
// FQDN: acceptance implies the label grammar
// ============================================================================

proptest! {
    #[test]
    fn fqdn_acceptance_implies_label_grammar(s in ".{0,300}") {
        if is_fqdn(&s) {
            let stripped = s.trim().trim_end_matches('.');
            prop_assert!(stripped.contains('.'));
            prop_assert!(stripped.len() <= 253);
            for label in stripped.split('.') {
                prop_assert!(!label.is_empty() && label.len() <= 63);
                prop_assert!(label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
                prop_assert!(!label.starts_with('-') && !label.ends_with('-'));
            }
        }
    }
}

// ============================================================================
// TRIMMING: surrounding whitespace never changes the answer
// ============================================================================

proptest! {
    #[test]
    fn whitespace_insensitive(s in "[a-z0-9.@+-]{0,40}") {
        let padded = format!("  {s}\t");
        prop_assert_eq!(is_email(&s), is_email(&padded));
        prop_assert_eq!(is_uuid(&s), is_uuid(&padded));
        prop_assert_eq!(is_phone(&s), is_phone(&padded));
        prop_assert_eq!(is_ip(&s), is_ip(&padded));
    }
}
