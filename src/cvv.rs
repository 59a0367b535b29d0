//! CVV validation with card-number-dependent length rules.
//!
//! The security code is three digits for most cards and four for cards
//! whose number starts with `34` or `37`. That prefix check is made
//! directly against the card number, *not* via [`crate::brand`] — the
//! display classifier currently reports `Unknown` for those prefixes
//! while this module still demands the four-digit code. The mismatch is
//! intentional legacy behavior; see the note in [`crate::brand`] and
//! DESIGN.md.
//!
//! # Example
//!
//! ```
//! use checkout_validator::cvv::{required_cvv_length, validate_cvv_for_card};
//!
//! assert_eq!(required_cvv_length("4111111111111111"), 3);
//! assert_eq!(required_cvv_length("340000000000009"), 4);
//!
//! assert!(validate_cvv_for_card("123", "4111111111111111").is_ok());
//! assert!(validate_cvv_for_card("1234", "4111111111111111").is_err());
//! ```

use std::fmt;

/// Errors that can occur during CVV validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// The input is empty.
    Empty,
    /// A non-digit character was found.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Position of the offending character (0-indexed, in chars).
        position: usize,
    },
    /// The CVV is not 3 or 4 digits long.
    InvalidLength {
        /// Actual number of digits provided.
        length: usize,
    },
    /// The CVV length does not match what the card number requires.
    WrongLengthForCard {
        /// Actual number of digits provided.
        length: usize,
        /// Length required for this card number.
        expected: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
            Self::InvalidLength { length } => {
                write!(f, "CVV must be 3 or 4 digits, got {}", length)
            }
            Self::WrongLengthForCard { length, expected } => {
                write!(f, "this card requires a {} digit CVV, got {}", expected, length)
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Returns the CVV length the given card number requires.
///
/// Card numbers starting with `34` or `37` (after stripping whitespace)
/// require 4 digits; everything else, including numbers too short to
/// classify, requires 3.
#[inline]
pub fn required_cvv_length(card_number: &str) -> usize {
    let mut lead = [0u8; 2];
    let mut count = 0;

    for c in card_number.chars() {
        if let Some(d) = c.to_digit(10) {
            lead[count] = d as u8;
            count += 1;
            if count == 2 {
                break;
            }
        } else if !c.is_whitespace() {
            break;
        }
    }

    match &lead[..count] {
        [3, 4] | [3, 7] => 4,
        _ => 3,
    }
}

/// Validates a CVV string generically (3 or 4 digits).
///
/// Use [`validate_cvv_for_card`] to also enforce the card-dependent
/// exact length.
pub fn validate_cvv(input: &str) -> Result<(), CvvError> {
    if input.is_empty() {
        return Err(CvvError::Empty);
    }

    let mut count = 0usize;
    for (pos, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(CvvError::InvalidCharacter {
                character: c,
                position: pos,
            });
        }
        count += 1;
    }

    if !(3..=4).contains(&count) {
        return Err(CvvError::InvalidLength { length: count });
    }

    Ok(())
}

/// Validates a CVV against the card number it accompanies.
///
/// Runs the generic check first, then enforces the exact length the card
/// number's prefix demands.
///
/// # Example
///
/// ```
/// use checkout_validator::cvv::{validate_cvv_for_card, CvvError};
///
/// // Amex-style prefix wants 4 digits
/// assert!(validate_cvv_for_card("1234", "340000000000000").is_ok());
/// assert_eq!(
///     validate_cvv_for_card("123", "340000000000000").unwrap_err(),
///     CvvError::WrongLengthForCard { length: 3, expected: 4 }
/// );
/// ```
pub fn validate_cvv_for_card(cvv: &str, card_number: &str) -> Result<(), CvvError> {
    validate_cvv(cvv)?;

    let length = cvv.chars().count();
    let expected = required_cvv_length(card_number);

    if length != expected {
        return Err(CvvError::WrongLengthForCard { length, expected });
    }

    Ok(())
}

/// Quick boolean check for the generic 3-4 digit rule.
#[inline]
pub fn is_valid_cvv(input: &str) -> bool {
    validate_cvv(input).is_ok()
}

/// Quick boolean check for the card-dependent rule.
#[inline]
pub fn is_valid_cvv_for_card(cvv: &str, card_number: &str) -> bool {
    validate_cvv_for_card(cvv, card_number).is_ok()
}
