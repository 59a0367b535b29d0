//! Keystroke formatters for the checkout form.
//!
//! Each formatter turns whatever the user has typed so far into the
//! canonical display form the validators expect: card numbers grouped in
//! fours, expiry as `MM/YY`, CVV digits only. They are pure transforms -
//! no validation happens here, and every formatter is idempotent, so
//! re-formatting an already-formatted value is a no-op.
//!
//! # Example
//!
//! ```
//! use checkout_validator::format::{format_card_number, format_expiry_date, format_cvv};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_expiry_date("1230"), "12/30");
//! assert_eq!(format_cvv("12x34"), "1234");
//! ```

/// Maximum digits kept by the card-number formatter.
const CARD_FORMAT_MAX_DIGITS: usize = 16;

/// Strips everything but ASCII digits from a string.
///
/// # Example
///
/// ```
/// use checkout_validator::format::strip_digits;
///
/// assert_eq!(strip_digits("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_digits("12/30"), "1230");
/// ```
#[inline]
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a card number as the user types.
///
/// Strips all non-digits, keeps the first run of 4-16 digits, and
/// re-inserts a single space every 4 digits. Inputs with fewer than 4
/// digits pass through unchanged - there is nothing to group yet.
///
/// # Example
///
/// ```
/// use checkout_validator::format::format_card_number;
///
/// assert_eq!(format_card_number("41111"), "4111 1");
/// assert_eq!(format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
/// // Digits past 16 are dropped
/// assert_eq!(format_card_number("41111111111111112222"), "4111 1111 1111 1111");
/// // Too few digits to group: left as typed
/// assert_eq!(format_card_number("411"), "411");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits = strip_digits(input);

    if digits.len() < 4 {
        return input.to_string();
    }

    let capped = &digits[..digits.len().min(CARD_FORMAT_MAX_DIGITS)];

    let mut result = String::with_capacity(capped.len() + capped.len() / 4);
    for (i, c) in capped.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Formats an expiry date as the user types.
///
/// Strips all non-digits, caps at 4 digits (MMYY), and inserts a `/`
/// after the second digit once at least two digits are present.
///
/// # Example
///
/// ```
/// use checkout_validator::format::format_expiry_date;
///
/// assert_eq!(format_expiry_date("1"), "1");
/// assert_eq!(format_expiry_date("12"), "12/");
/// assert_eq!(format_expiry_date("123"), "12/3");
/// assert_eq!(format_expiry_date("12/30"), "12/30");
/// assert_eq!(format_expiry_date("123456"), "12/34");
/// ```
pub fn format_expiry_date(input: &str) -> String {
    let digits = strip_digits(input);

    if digits.len() < 2 {
        return digits;
    }

    let end = digits.len().min(4);
    format!("{}/{}", &digits[..2], &digits[2..end])
}

/// Formats a CVV as the user types: digits only, capped at 4.
///
/// Brand-agnostic by design - the *validator* enforces the exact 3-vs-4
/// length for the card, the formatter just keeps the field typeable.
///
/// # Example
///
/// ```
/// use checkout_validator::format::format_cvv;
///
/// assert_eq!(format_cvv("123"), "123");
/// assert_eq!(format_cvv("12345"), "1234");
/// assert_eq!(format_cvv("1a2b3c"), "123");
/// ```
pub fn format_cvv(input: &str) -> String {
    let mut digits = strip_digits(input);
    digits.truncate(4);
    digits
}
