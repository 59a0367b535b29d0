//! Luhn checksum for payment card numbers.
//!
//! The Luhn algorithm ("modulus 10") catches virtually all single-digit
//! typos and most adjacent transpositions, which is why payment forms run
//! it before a card number ever leaves the browser.
//!
//! The functions here operate on pure digit slices. Stripping separators
//! and enforcing the 13-19 digit length gate happen upstream in
//! [`crate::card`]; an out-of-range length never reaches this module
//! through the public form pipeline.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Avoids the branch in the inner loop. Index is the digit (0-9).
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns `true` if the digit sequence passes the Luhn check.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit, moving left
/// 2. Double every second digit (the second-from-right first)
/// 3. If doubling exceeds 9, subtract 9
/// 4. Sum all digits
/// 5. Valid iff the sum is divisible by 10
///
/// An empty slice is invalid.
///
/// # Example
///
/// ```
/// use checkout_validator::luhn::passes;
///
/// // Standard Visa test number
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(passes(&digits));
///
/// // Last digit changed
/// let mutated = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!passes(&mutated));
/// ```
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10) for a digit slice.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;

    // Walk right to left; position 0 (the check digit) is not doubled,
    // position 1 is doubled, and so on alternating.
    for (i, &digit) in digits.iter().rev().enumerate() {
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    sum
}

/// Computes the check digit that completes a partial number.
///
/// Given the digits of a card number without its final check digit,
/// returns the digit that makes the full sequence pass [`passes`]. Handy
/// for constructing valid fixtures in tests.
///
/// # Example
///
/// ```
/// use checkout_validator::luhn::{check_digit, passes};
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
///
/// let mut full = partial.to_vec();
/// full.push(check_digit(&partial));
/// assert!(passes(&full));
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    let mut sum: u32 = 0;

    // Once the check digit is appended, everything shifts one position
    // left: the current rightmost digit lands on a doubled position.
    for (i, &digit) in digits.iter().rev().enumerate() {
        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        // Visa
        assert!(passes(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(passes(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));
        // 13-digit Visa
        assert!(passes(&[4, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]));
        // Mastercard
        assert!(passes(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));
        assert!(passes(&[5, 1, 0, 5, 1, 0, 5, 1, 0, 5, 1, 0, 5, 1, 0, 0]));
        // Discover
        assert!(passes(&[6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 7]));
        // Amex-style prefix
        assert!(passes(&[3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9]));
    }

    #[test]
    fn test_known_invalid_numbers() {
        // Last digit changed
        assert!(!passes(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        // First digit changed
        assert!(!passes(&[5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        // Sequential digits
        assert!(!passes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!passes(&[]));
    }

    #[test]
    fn test_single_digit() {
        // A lone zero sums to zero
        assert!(passes(&[0]));
        assert!(!passes(&[1]));
        assert!(!passes(&[9]));
    }

    #[test]
    fn test_check_digit_completes() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(check_digit(&partial), 4);

        let partial = [3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(check_digit(&partial), 9);
    }

    #[test]
    fn test_double_table() {
        for d in 0..10u8 {
            let doubled = d * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[d as usize], expected);
        }
    }
}
