//! Error type for card-number field validation.
//!
//! Each variant carries enough context to explain exactly why the number
//! was rejected, so the form layer can surface a precise message.

use std::fmt;

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};

/// Errors that can occur while validating a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardNumberError {
    /// The input contains no digits at all.
    Empty,

    /// A character other than a digit or whitespace was found.
    InvalidCharacter {
        /// Position of the offending character (0-indexed, in chars).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The digit count falls outside the 13-19 range.
    ///
    /// This is the format gate: it is checked before the Luhn checksum,
    /// so an out-of-range number never reports a checksum failure.
    WrongLength {
        /// The actual number of digits after stripping whitespace.
        length: usize,
    },

    /// The Luhn checksum failed. Usually a typo in the number.
    InvalidChecksum,
}

impl fmt::Display for CardNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits and spaces allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::WrongLength { length } => {
                write!(
                    f,
                    "card number must be {}-{} digits, got {}",
                    MIN_CARD_DIGITS, MAX_CARD_DIGITS, length
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for CardNumberError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CardNumberError::Empty.to_string(), "card number is empty");

        assert_eq!(
            CardNumberError::WrongLength { length: 3 }.to_string(),
            "card number must be 13-19 digits, got 3"
        );

        assert_eq!(
            CardNumberError::InvalidCharacter {
                position: 4,
                character: 'x'
            }
            .to_string(),
            "invalid character 'x' at position 4 (only digits and spaces allowed)"
        );

        assert_eq!(
            CardNumberError::InvalidChecksum.to_string(),
            "invalid checksum (Luhn check failed) - please verify the card number"
        );
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardNumberError>();
    }
}
