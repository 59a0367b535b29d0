//! Text-field validators for the checkout form.
//!
//! Cardholder name, email, and the optional billing-address block are
//! plain bounded-length and pattern rules; the only wrinkle is that the
//! email is lowercase-normalized before validation so case differences
//! never cause false negatives, and the name must look like a full name
//! (at least two space-separated tokens).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum cardholder-name length in characters.
pub const NAME_MIN_LEN: usize = 2;
/// Maximum cardholder-name length in characters.
pub const NAME_MAX_LEN: usize = 50;
/// Minimum email length in characters.
pub const EMAIL_MIN_LEN: usize = 5;
/// Maximum email length in characters.
pub const EMAIL_MAX_LEN: usize = 100;
/// Maximum billing-address length in characters.
pub const ADDRESS_MAX_LEN: usize = 100;
/// Maximum city length in characters.
pub const CITY_MAX_LEN: usize = 50;
/// Maximum state/province length in characters.
pub const STATE_MAX_LEN: usize = 50;
/// Maximum ZIP/postal-code length in characters.
pub const ZIP_MAX_LEN: usize = 10;

/// Country codes offered by the checkout country selector.
///
/// ISO 3166-1 alpha-2, matched exactly (the selector supplies canonical
/// uppercase codes).
pub const COUNTRY_CODES: &[&str] = &[
    "AT", "AU", "BE", "BR", "CA", "CH", "DE", "DK", "ES", "FI", "FR", "GB", "HK", "IE", "IN",
    "IT", "JP", "MX", "NL", "NO", "NZ", "PT", "SE", "SG", "US",
];

/// Letters, spaces, hyphens, and apostrophes only.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z' -]+$").unwrap());

/// local@domain.tld - simplified but effective.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

/// Letters and internal spaces (multi-word city names).
static CITY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// Errors produced by the text-field validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty or whitespace-only.
    Empty,
    /// The value has too few characters.
    TooShort {
        /// Actual character count.
        length: usize,
        /// Minimum allowed.
        minimum: usize,
    },
    /// The value has too many characters.
    TooLong {
        /// Actual character count.
        length: usize,
        /// Maximum allowed.
        maximum: usize,
    },
    /// The value contains characters outside the field's pattern.
    InvalidCharacters,
    /// The name has fewer than two space-separated tokens.
    MissingFullName,
    /// The email does not match the expected syntax.
    InvalidEmail,
    /// The country code is not in [`COUNTRY_CODES`].
    UnknownCountry,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::TooShort { length, minimum } => {
                write!(f, "too short: got {} characters, minimum is {}", length, minimum)
            }
            Self::TooLong { length, maximum } => {
                write!(f, "too long: got {} characters, maximum is {}", length, maximum)
            }
            Self::InvalidCharacters => write!(f, "contains characters outside the allowed set"),
            Self::MissingFullName => write!(f, "expected at least two space-separated names"),
            Self::InvalidEmail => write!(f, "invalid email syntax"),
            Self::UnknownCountry => write!(f, "not a supported two-letter country code"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Validates the cardholder name.
///
/// 2-50 characters drawn from letters, spaces, hyphens, and apostrophes,
/// with at least two space-separated tokens (a first-plus-last-name
/// heuristic). The value is trimmed before any rule runs.
///
/// # Example
///
/// ```
/// use checkout_validator::fields::{validate_cardholder_name, FieldError};
///
/// assert!(validate_cardholder_name("John Doe").is_ok());
/// assert!(validate_cardholder_name("Mary-Jane O'Brien").is_ok());
/// assert_eq!(
///     validate_cardholder_name("Prince").unwrap_err(),
///     FieldError::MissingFullName
/// );
/// ```
pub fn validate_cardholder_name(input: &str) -> Result<(), FieldError> {
    let name = input.trim();

    if name.is_empty() {
        return Err(FieldError::Empty);
    }

    let length = name.chars().count();
    if length < NAME_MIN_LEN {
        return Err(FieldError::TooShort {
            length,
            minimum: NAME_MIN_LEN,
        });
    }
    if length > NAME_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: NAME_MAX_LEN,
        });
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(FieldError::InvalidCharacters);
    }

    if name.split_whitespace().count() < 2 {
        return Err(FieldError::MissingFullName);
    }

    Ok(())
}

/// Trims and lowercases an email address.
///
/// Validation and any downstream storage both use this canonical form,
/// so case differences never cause false negatives or duplicate entries.
///
/// # Example
///
/// ```
/// use checkout_validator::fields::normalize_email;
///
/// assert_eq!(normalize_email("  JOHN@Example.COM "), "john@example.com");
/// ```
#[inline]
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validates an email address after normalization.
///
/// # Example
///
/// ```
/// use checkout_validator::fields::validate_email;
///
/// assert!(validate_email("john@example.com").is_ok());
/// assert!(validate_email("JOHN@EXAMPLE.COM").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(input: &str) -> Result<(), FieldError> {
    let email = normalize_email(input);

    if email.is_empty() {
        return Err(FieldError::Empty);
    }

    let length = email.chars().count();
    if length < EMAIL_MIN_LEN {
        return Err(FieldError::TooShort {
            length,
            minimum: EMAIL_MIN_LEN,
        });
    }
    if length > EMAIL_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: EMAIL_MAX_LEN,
        });
    }

    if !EMAIL_PATTERN.is_match(&email) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

/// Validates an optional billing-address line (bounded length only).
pub fn validate_billing_address(input: &str) -> Result<(), FieldError> {
    let length = input.trim().chars().count();
    if length > ADDRESS_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: ADDRESS_MAX_LEN,
        });
    }
    Ok(())
}

/// Validates an optional city name (letters and spaces, bounded length).
pub fn validate_city(input: &str) -> Result<(), FieldError> {
    let city = input.trim();
    if city.is_empty() {
        return Ok(());
    }

    let length = city.chars().count();
    if length > CITY_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: CITY_MAX_LEN,
        });
    }

    if !CITY_PATTERN.is_match(city) {
        return Err(FieldError::InvalidCharacters);
    }

    Ok(())
}

/// Validates an optional state/province (bounded length only).
pub fn validate_state(input: &str) -> Result<(), FieldError> {
    let length = input.trim().chars().count();
    if length > STATE_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: STATE_MAX_LEN,
        });
    }
    Ok(())
}

/// Validates an optional ZIP/postal code (bounded length only).
pub fn validate_zip_code(input: &str) -> Result<(), FieldError> {
    let length = input.trim().chars().count();
    if length > ZIP_MAX_LEN {
        return Err(FieldError::TooLong {
            length,
            maximum: ZIP_MAX_LEN,
        });
    }
    Ok(())
}

/// Validates the required country code against [`COUNTRY_CODES`].
///
/// # Example
///
/// ```
/// use checkout_validator::fields::{validate_country, FieldError};
///
/// assert!(validate_country("US").is_ok());
/// assert_eq!(validate_country("USA").unwrap_err(), FieldError::UnknownCountry);
/// assert_eq!(validate_country("").unwrap_err(), FieldError::Empty);
/// ```
pub fn validate_country(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Empty);
    }

    // Exactly two characters and in the fixed list
    if input.chars().count() != 2 || !COUNTRY_CODES.contains(&input) {
        return Err(FieldError::UnknownCountry);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_typical_forms() {
        assert!(validate_cardholder_name("John Doe").is_ok());
        assert!(validate_cardholder_name("Mary-Jane O'Brien").is_ok());
        assert!(validate_cardholder_name("Jean Claude van Damme").is_ok());
        assert!(validate_cardholder_name("  John Doe  ").is_ok());
    }

    #[test]
    fn test_name_rejections() {
        assert_eq!(validate_cardholder_name("").unwrap_err(), FieldError::Empty);
        assert_eq!(validate_cardholder_name("   ").unwrap_err(), FieldError::Empty);
        assert_eq!(
            validate_cardholder_name("J").unwrap_err(),
            FieldError::TooShort {
                length: 1,
                minimum: NAME_MIN_LEN
            }
        );
        assert!(matches!(
            validate_cardholder_name(&"a ".repeat(26)),
            Err(FieldError::TooLong { .. })
        ));
        assert_eq!(
            validate_cardholder_name("John D0e").unwrap_err(),
            FieldError::InvalidCharacters
        );
        assert_eq!(
            validate_cardholder_name("Prince").unwrap_err(),
            FieldError::MissingFullName
        );
    }

    #[test]
    fn test_email_normalization() {
        assert_eq!(normalize_email("JOHN@EXAMPLE.COM"), "john@example.com");
        assert_eq!(normalize_email("  a@b.co  "), "a@b.co");
        assert!(validate_email("JOHN@EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_email_rejections() {
        assert_eq!(validate_email("").unwrap_err(), FieldError::Empty);
        assert_eq!(
            validate_email("a@b").unwrap_err(),
            FieldError::TooShort {
                length: 3,
                minimum: EMAIL_MIN_LEN
            }
        );
        assert_eq!(
            validate_email("no-at-sign.com").unwrap_err(),
            FieldError::InvalidEmail
        );
        assert_eq!(
            validate_email("missing@tld").unwrap_err(),
            FieldError::InvalidEmail
        );
        let long = format!("{}@example.com", "a".repeat(100));
        assert!(matches!(
            validate_email(&long),
            Err(FieldError::TooLong { .. })
        ));
    }

    #[test]
    fn test_optional_fields() {
        assert!(validate_billing_address("").is_ok());
        assert!(validate_billing_address("123 First Ave, Apt 4").is_ok());
        assert!(matches!(
            validate_billing_address(&"x".repeat(101)),
            Err(FieldError::TooLong { .. })
        ));

        assert!(validate_city("").is_ok());
        assert!(validate_city("Portland").is_ok());
        assert!(validate_city("New York").is_ok());
        assert_eq!(validate_city("Ci7y").unwrap_err(), FieldError::InvalidCharacters);

        assert!(validate_state("Oregon").is_ok());
        assert!(validate_zip_code("97201").is_ok());
        assert!(validate_zip_code("12345-6789").is_ok());
        assert!(matches!(
            validate_zip_code("12345-67890x"),
            Err(FieldError::TooLong { .. })
        ));
    }

    #[test]
    fn test_country_codes() {
        assert!(validate_country("US").is_ok());
        assert!(validate_country("GB").is_ok());
        assert_eq!(validate_country("").unwrap_err(), FieldError::Empty);
        assert_eq!(validate_country("USA").unwrap_err(), FieldError::UnknownCountry);
        assert_eq!(validate_country("ZZ").unwrap_err(), FieldError::UnknownCountry);
        // Lowercase is not canonical selector output
        assert_eq!(validate_country("us").unwrap_err(), FieldError::UnknownCountry);
    }

    #[test]
    fn test_country_list_is_sorted_and_two_letter() {
        let mut sorted = COUNTRY_CODES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, COUNTRY_CODES);
        assert!(COUNTRY_CODES.iter().all(|c| c.len() == 2));
    }
}
