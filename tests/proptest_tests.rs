//! Property-based tests for the validators and formatters.

use proptest::prelude::*;

use checkout_validator::{
    card_brand, format_card_number, format_cvv, format_expiry_date, is_valid_card_number,
    luhn, parse_expiry, validate, validate_card_number, CardBrand, CardNumberError, CheckoutForm,
};

/// A digit vector completed with its Luhn check digit.
fn luhn_valid_digits(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, len - 1).prop_map(|mut digits| {
        let check = luhn::check_digit(&digits);
        digits.push(check);
        digits
    })
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| (b'0' + d) as char).collect()
}

proptest! {
    #[test]
    fn generated_numbers_pass_luhn(digits in (13usize..=19).prop_flat_map(luhn_valid_digits)) {
        prop_assert!(luhn::passes(&digits));
        prop_assert!(is_valid_card_number(&digits_to_string(&digits)));
    }

    #[test]
    fn single_digit_mutation_breaks_checksum(
        digits in (13usize..=19).prop_flat_map(luhn_valid_digits),
        pos in 0usize..19,
        delta in 1u8..10,
    ) {
        let pos = pos % digits.len();
        let mut mutated = digits.clone();
        mutated[pos] = (mutated[pos] + delta) % 10;
        let s = digits_to_string(&mutated);
        prop_assert_eq!(
            validate_card_number(&s).unwrap_err(),
            CardNumberError::InvalidChecksum
        );
    }

    #[test]
    fn out_of_range_lengths_rejected_before_checksum(digits in prop::collection::vec(0u8..10, 1..13)) {
        let s = digits_to_string(&digits);
        prop_assert_eq!(
            validate_card_number(&s).unwrap_err(),
            CardNumberError::WrongLength { length: digits.len() }
        );
    }

    #[test]
    fn card_formatter_is_idempotent(input in ".*") {
        let once = format_card_number(&input);
        prop_assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn expiry_formatter_is_idempotent(input in ".*") {
        let once = format_expiry_date(&input);
        prop_assert_eq!(format_expiry_date(&once), once);
    }

    #[test]
    fn cvv_formatter_is_idempotent(input in ".*") {
        let once = format_cvv(&input);
        prop_assert_eq!(format_cvv(&once), once);
    }

    #[test]
    fn card_formatter_output_shape(input in ".*") {
        let formatted = format_card_number(&input);
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert!(digits.len() <= 16);
        if digits.len() >= 4 {
            // Grouped output: digits and single spaces every 4 digits
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
            prop_assert!(!formatted.contains("  "));
        }
    }

    #[test]
    fn formatted_expiry_parses_or_is_partial(digits in prop::collection::vec(0u8..10, 0..8)) {
        let raw = digits_to_string(&digits);
        let formatted = format_expiry_date(&raw);
        if formatted.len() == 5 {
            // A complete token either parses or fails only on the month range
            match parse_expiry(&formatted) {
                Ok(_) => {}
                Err(e) => prop_assert!(
                    matches!(e, checkout_validator::ExpiryError::InvalidMonth(_)),
                    "unexpected error {:?}",
                    e
                ),
            }
        }
    }

    #[test]
    fn month_out_of_range_always_rejected(month in 13u8..=99, year in 0u8..=99) {
        let token = format!("{:02}/{:02}", month, year);
        prop_assert_eq!(
            parse_expiry(&token).unwrap_err(),
            checkout_validator::ExpiryError::InvalidMonth(month)
        );
    }

    #[test]
    fn brand_follows_leading_digits(digits in prop::collection::vec(0u8..10, 2..19)) {
        let s = digits_to_string(&digits);
        let expected = match (digits[0], digits[1]) {
            (4, _) => CardBrand::Visa,
            (5, 1..=5) => CardBrand::Mastercard,
            (6, _) => CardBrand::Discover,
            _ => CardBrand::Unknown,
        };
        prop_assert_eq!(card_brand(&s), expected);
    }

    #[test]
    fn validate_never_panics(
        name in ".*",
        email in ".*",
        number in ".*",
        exp in ".*",
        cvv in ".*",
        country in ".*",
    ) {
        let mut form = CheckoutForm::default();
        form.cardholder_name = name;
        form.email = email;
        form.card_number = number;
        form.expiry_date = exp;
        form.cvv = cvv;
        form.country = country;
        let report = validate(&form);
        // Exercise the accessors too
        let _ = report.is_valid();
        let _ = report.errors().count();
    }
}
