//! Expiry date validation for the checkout form.
//!
//! The form emits exactly `MM/YY` (the formatter inserts the slash), so
//! parsing is strict: two month digits, a slash, two year digits.
//!
//! # Two-digit years
//!
//! The year is kept and compared as a raw two-digit value against the
//! current two-digit year. There is no century reconstruction and no
//! pivot window: in 2026 an expiry of `05/05` compares as `05 < 26` and
//! is expired, and the comparison will behave the same way across any
//! century-like rollover. This matches the long-standing behavior of the
//! form and is documented rather than fixed; see DESIGN.md before
//! changing it.
//!
//! # Example
//!
//! ```
//! use checkout_validator::expiry::parse_expiry;
//!
//! let exp = parse_expiry("12/30").unwrap();
//! assert_eq!(exp.month(), 12);
//! assert_eq!(exp.year(), 30);
//!
//! // Not yet expired at 06/26; expired once the month has passed
//! assert!(!exp.is_expired_at(6, 26));
//! assert!(exp.is_expired_at(1, 31));
//! ```

use std::fmt;

use chrono::{Datelike, Utc};

/// A parsed `MM/YY` expiry date.
///
/// The year is a raw two-digit value; see the module docs for the
/// comparison semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12).
    month: u8,
    /// Two-digit year (0-99), exactly as entered.
    year: u8,
}

impl ExpiryDate {
    /// Creates an expiry date, rejecting months outside 1-12.
    pub fn new(month: u8, year: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || year > 99 {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year exactly as entered.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Pure expiry comparison against an explicit "now".
    ///
    /// The card is valid through the end of its stated month: expired iff
    /// the year is before `current_year`, or the years match and the
    /// month is before `current_month`. Both year values are raw
    /// two-digit numbers.
    #[inline]
    pub const fn is_expired_at(&self, current_month: u8, current_year: u8) -> bool {
        self.year < current_year || (self.year == current_year && self.month < current_month)
    }

    /// Returns `true` if the card has expired as of the system clock.
    pub fn is_expired(&self) -> bool {
        let (month, year) = current_month_year();
        self.is_expired_at(month, year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Errors that can occur during expiry parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input string is empty.
    Empty,
    /// The input does not match `MM/YY`.
    InvalidFormat,
    /// The month digits are outside 1-12.
    InvalidMonth(u8),
    /// The date lies before the current month.
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry two-digit year.
        year: u8,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiry date is empty"),
            Self::InvalidFormat => write!(f, "invalid expiry format (expected MM/YY)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
            Self::Expired { month, year } => {
                write!(f, "card expired ({:02}/{:02})", month, year)
            }
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses a strict `MM/YY` token.
///
/// Exactly five characters: two month digits, `/`, two year digits.
/// Months outside 1-12 report [`ExpiryError::InvalidMonth`].
///
/// # Example
///
/// ```
/// use checkout_validator::expiry::{parse_expiry, ExpiryError};
///
/// assert!(parse_expiry("01/28").is_ok());
/// assert_eq!(parse_expiry("1/28").unwrap_err(), ExpiryError::InvalidFormat);
/// assert_eq!(parse_expiry("13/28").unwrap_err(), ExpiryError::InvalidMonth(13));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let bytes = input.as_bytes();
    if bytes.len() != 5
        || !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || bytes[2] != b'/'
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return Err(ExpiryError::InvalidFormat);
    }

    let month = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let year = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');

    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    Ok(ExpiryDate { month, year })
}

/// Parses an expiry token and rejects dates before the current month.
///
/// # Example
///
/// ```
/// use checkout_validator::expiry::{validate_expiry, ExpiryError};
///
/// assert!(validate_expiry("12/99").is_ok());
/// assert_eq!(
///     validate_expiry("01/20").unwrap_err(),
///     ExpiryError::Expired { month: 1, year: 20 }
/// );
/// ```
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired() {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Returns `true` if the token parses and represents an expired date.
///
/// Unparseable input returns `false`; the format error is reported
/// separately by the schema.
#[inline]
pub fn is_expired(input: &str) -> bool {
    parse_expiry(input).map(|e| e.is_expired()).unwrap_or(false)
}

/// Current (month, two-digit year) from the system clock.
fn current_month_year() -> (u8, u8) {
    let now = Utc::now();
    (now.month() as u8, (now.year() % 100) as u8)
}
