//! Card-number field validation.
//!
//! The checkout form displays the card number grouped in fours
//! (`4111 1111 1111 1111`), so the validator accepts whitespace between
//! digit groups and rejects everything else. Validation runs in order:
//!
//! 1. Strip whitespace, rejecting any other non-digit character
//! 2. Length gate: exactly 13-19 digits
//! 3. Luhn checksum
//!
//! The length gate short-circuits before the checksum, so a too-short
//! number reports [`CardNumberError::WrongLength`] rather than
//! [`CardNumberError::InvalidChecksum`].

use crate::error::CardNumberError;
use crate::luhn;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Validates a card number string from the checkout form.
///
/// Whitespace separators (the canonical grouped display) are allowed and
/// ignored; any other non-digit fails validation.
///
/// # Example
///
/// ```
/// use checkout_validator::card::validate_card_number;
/// use checkout_validator::CardNumberError;
///
/// assert!(validate_card_number("4111 1111 1111 1111").is_ok());
///
/// // Length gate fires before the checksum is consulted
/// assert_eq!(
///     validate_card_number("123").unwrap_err(),
///     CardNumberError::WrongLength { length: 3 }
/// );
///
/// // Right length, bad check digit
/// assert_eq!(
///     validate_card_number("4111111111111112").unwrap_err(),
///     CardNumberError::InvalidChecksum
/// );
/// ```
pub fn validate_card_number(input: &str) -> Result<(), CardNumberError> {
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;

    for (pos, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                // Past MAX we only keep counting for the error report
                if count < MAX_CARD_DIGITS {
                    digits[count] = (c as u8) - b'0';
                }
                count += 1;
            }
            c if c.is_whitespace() => {}
            _ => {
                return Err(CardNumberError::InvalidCharacter {
                    position: pos,
                    character: c,
                });
            }
        }
    }

    if count == 0 {
        return Err(CardNumberError::Empty);
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&count) {
        return Err(CardNumberError::WrongLength { length: count });
    }

    if !luhn::passes(&digits[..count]) {
        return Err(CardNumberError::InvalidChecksum);
    }

    Ok(())
}

/// Quick boolean check for card-number validity.
///
/// # Example
///
/// ```
/// use checkout_validator::is_valid_card_number;
///
/// assert!(is_valid_card_number("4111 1111 1111 1111"));
/// assert!(!is_valid_card_number("4111 1111 1111 1112"));
/// ```
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

/// Checks the Luhn checksum only, ignoring the length gate.
///
/// Strips every non-digit character first. Returns `false` when the input
/// contains no digits.
///
/// # Example
///
/// ```
/// use checkout_validator::passes_luhn;
///
/// assert!(passes_luhn("4111111111111111"));
/// assert!(!passes_luhn("4111111111111112"));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    luhn::passes(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Standard processor test numbers
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const DISCOVER: &str = "6011111111111117";

    #[test]
    fn test_valid_numbers() {
        assert!(validate_card_number(VISA_16).is_ok());
        assert!(validate_card_number(VISA_13).is_ok());
        assert!(validate_card_number(MASTERCARD).is_ok());
        assert!(validate_card_number(DISCOVER).is_ok());
    }

    #[test]
    fn test_grouped_display_form() {
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        // Stray interior whitespace is tolerated too
        assert!(validate_card_number(" 4111  1111 1111 1111 ").is_ok());
    }

    #[test]
    fn test_dashes_rejected() {
        // The form's canonical display uses spaces only
        let err = validate_card_number("4111-1111-1111-1111").unwrap_err();
        assert_eq!(
            err,
            CardNumberError::InvalidCharacter {
                position: 4,
                character: '-'
            }
        );
    }

    #[test]
    fn test_length_gate_before_checksum() {
        // "123" fails Luhn too, but the length gate must win
        assert_eq!(
            validate_card_number("123").unwrap_err(),
            CardNumberError::WrongLength { length: 3 }
        );

        // 12 digits, one short of the minimum
        assert_eq!(
            validate_card_number("411111111111").unwrap_err(),
            CardNumberError::WrongLength { length: 12 }
        );

        // 20 digits, one past the maximum
        assert_eq!(
            validate_card_number("41111111111111111111").unwrap_err(),
            CardNumberError::WrongLength { length: 20 }
        );
    }

    #[test]
    fn test_checksum_failure() {
        assert_eq!(
            validate_card_number("4111111111111112").unwrap_err(),
            CardNumberError::InvalidChecksum
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(validate_card_number("").unwrap_err(), CardNumberError::Empty);
        assert_eq!(
            validate_card_number("   ").unwrap_err(),
            CardNumberError::Empty
        );
    }

    #[test]
    fn test_invalid_character() {
        let err = validate_card_number("4111a11111111111").unwrap_err();
        assert_eq!(
            err,
            CardNumberError::InvalidCharacter {
                position: 4,
                character: 'a'
            }
        );
    }

    #[test]
    fn test_is_valid_card_number() {
        assert!(is_valid_card_number(VISA_16));
        assert!(!is_valid_card_number("4111111111111112"));
        assert!(!is_valid_card_number(""));
    }

    #[test]
    fn test_passes_luhn_ignores_length() {
        assert!(passes_luhn(VISA_16));
        assert!(!passes_luhn("4111111111111112"));
        // Too short for the form, but the checksum itself holds
        assert!(passes_luhn("0"));
        assert!(!passes_luhn(""));
    }
}
