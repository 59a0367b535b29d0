//! Card brand classification from number prefixes.
//!
//! The brand label drives the card badge shown next to the number field.
//! Classification is first-match-wins over the leading digits and falls
//! back to [`CardBrand::Unknown`].
//!
//! Note that this classifier and the CVV length rules in [`crate::cvv`]
//! deliberately disagree about Amex-style prefixes: `34`/`37` numbers
//! classify as `Unknown` here (the arm is switched off below) while still
//! requiring a four-digit CVV. DESIGN.md tracks the open question of
//! unifying the two.

use std::fmt;

/// Card brand labels used for display next to the card-number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// Visa - prefix 4.
    Visa,
    /// Mastercard - prefixes 51-55.
    Mastercard,
    /// Discover - prefix 6.
    Discover,
    /// American Express - prefixes 34/37.
    ///
    /// Currently never produced by [`card_brand`]; the matching arm is
    /// switched off pending a decision on whether display badges should
    /// follow the CVV length rules. The variant stays so the CVV rules
    /// and any future unification have a label to agree on.
    Amex,
    /// No known prefix matched.
    Unknown,
}

impl CardBrand {
    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Discover => "Discover",
            Self::Amex => "American Express",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a card number by its leading digits.
///
/// Whitespace is ignored, so both raw and grouped display forms work.
/// Rules are checked in order; the first match wins and anything else is
/// [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use checkout_validator::{card_brand, CardBrand};
///
/// assert_eq!(card_brand("4111 1111 1111 1111"), CardBrand::Visa);
/// assert_eq!(card_brand("5500000000000004"), CardBrand::Mastercard);
/// assert_eq!(card_brand("6011111111111117"), CardBrand::Discover);
///
/// // Amex-style prefixes classify as Unknown while the Amex arm is
/// // switched off, even though the CVV rules still treat them as Amex.
/// assert_eq!(card_brand("340000000000009"), CardBrand::Unknown);
/// ```
pub fn card_brand(input: &str) -> CardBrand {
    // Two leading digits are enough for every active rule
    let mut lead = [0u8; 2];
    let mut count = 0;

    for c in input.chars() {
        if let Some(d) = c.to_digit(10) {
            lead[count] = d as u8;
            count += 1;
            if count == 2 {
                break;
            }
        } else if !c.is_whitespace() {
            return CardBrand::Unknown;
        }
    }

    match &lead[..count] {
        [4, ..] => CardBrand::Visa,
        [5, 1..=5] => CardBrand::Mastercard,
        [6, ..] => CardBrand::Discover,
        // [3, 4] | [3, 7] => CardBrand::Amex,
        _ => CardBrand::Unknown,
    }
}
