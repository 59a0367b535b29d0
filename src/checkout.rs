//! Full-form schema composition for the checkout payment form.
//!
//! [`validate`] re-runs the whole rule table against a complete form
//! snapshot on every call - validation is total and stateless, there is
//! no incremental path. Rules are independent, named predicate+message
//! pairs held in a fixed order; the first failing rule per field supplies
//! that field's message. The single cross-field rule (CVV length depends
//! on the card number) runs after the table and, when it fails, takes
//! over the `cvv` error slot.
//!
//! # Example
//!
//! ```
//! use checkout_validator::{validate, CheckoutForm, Field};
//! use checkout_validator::checkout::messages;
//!
//! let mut form = CheckoutForm::default();
//! form.cardholder_name = "John Doe".into();
//! form.email = "john@example.com".into();
//! form.card_number = "4111 1111 1111 1111".into();
//! form.expiry_date = "12/99".into();
//! form.cvv = "123".into();
//! form.country = "US".into();
//!
//! let report = validate(&form);
//! assert!(report.is_valid());
//!
//! let mut bad = form.clone();
//! bad.cvv = "1234".into();
//! let report = validate(&bad);
//! assert_eq!(report.error(Field::Cvv), Some(messages::CVV_CARD_MISMATCH));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::card;
use crate::cvv::{self, CvvError};
use crate::error::CardNumberError;
use crate::expiry;
use crate::fields::{self, FieldError};

/// One snapshot of the payment form, validated as a whole.
///
/// Field values are the canonical display forms produced by
/// [`crate::format`] (grouped card number, `MM/YY` expiry). The struct is
/// wiped on drop and its `Debug` output masks the card number and CVV,
/// so a stray log line never leaks them.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct CheckoutForm {
    /// Cardholder name as printed on the card.
    pub cardholder_name: String,
    /// Contact email; normalized to lowercase for validation and storage.
    pub email: String,
    /// Card number, optionally grouped with spaces.
    pub card_number: String,
    /// Expiry token in `MM/YY` form.
    pub expiry_date: String,
    /// Security code, 3 or 4 digits depending on the card.
    pub cvv: String,
    /// Optional billing street address.
    pub billing_address: Option<String>,
    /// Optional city.
    pub city: Option<String>,
    /// Optional state or province.
    pub state: Option<String>,
    /// Optional ZIP or postal code.
    pub zip_code: Option<String>,
    /// Required two-letter country code from the checkout selector.
    pub country: String,
}

impl CheckoutForm {
    /// The email in its canonical lowercase form.
    #[inline]
    pub fn normalized_email(&self) -> String {
        fields::normalize_email(&self.email)
    }
}

impl fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("cardholder_name", &self.cardholder_name)
            .field("email", &self.email)
            .field("card_number", &mask_digits(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .field("billing_address", &self.billing_address)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("zip_code", &self.zip_code)
            .field("country", &self.country)
            .finish()
    }
}

/// Masks all but the last four digits of a card number for logging.
fn mask_digits(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    let mut masked: String = "*".repeat(digits.len() - 4);
    masked.extend(&digits[digits.len() - 4..]);
    masked
}

/// The form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Field {
    /// Cardholder name.
    CardholderName,
    /// Contact email.
    Email,
    /// Card number.
    CardNumber,
    /// Expiry date.
    ExpiryDate,
    /// Security code.
    Cvv,
    /// Billing street address.
    BillingAddress,
    /// City.
    City,
    /// State or province.
    State,
    /// ZIP or postal code.
    ZipCode,
    /// Country code.
    Country,
}

impl Field {
    /// The form-layer field name (the key used by the UI).
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardholderName => "cardholderName",
            Self::Email => "email",
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvv => "cvv",
            Self::BillingAddress => "billingAddress",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User-facing messages attached to failing fields.
///
/// Format failures and semantic failures read differently on purpose:
/// a wrong-length card number says so, a failed checksum asks the user
/// to re-check the number.
pub mod messages {
    /// Cardholder name length out of bounds.
    pub const NAME_LENGTH: &str = "Name must be 2-50 characters";
    /// Cardholder name contains disallowed characters.
    pub const NAME_CHARSET: &str = "Name can only contain letters, spaces, hyphens and apostrophes";
    /// Cardholder name is not a full name.
    pub const NAME_FULL: &str = "Please enter your full name";
    /// Email failed syntax or length checks.
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    /// Card number failed the 13-19 digit format gate.
    pub const CARD_NUMBER_FORMAT: &str = "Card number must be 13-19 digits";
    /// Card number failed the Luhn checksum.
    pub const CARD_NUMBER_CHECKSUM: &str = "Please enter a valid card number";
    /// Expiry token is not a well-formed MM/YY date.
    pub const EXPIRY_FORMAT: &str = "Expiry date must be in MM/YY format";
    /// Expiry date lies before the current month.
    pub const EXPIRY_PAST: &str = "Card has expired";
    /// CVV is not 3 or 4 digits.
    pub const CVV_FORMAT: &str = "CVV must be 3 or 4 digits";
    /// CVV length does not match the card type (cross-field rule).
    pub const CVV_CARD_MISMATCH: &str = "CVV length does not match the card type";
    /// Billing address too long.
    pub const ADDRESS_LENGTH: &str = "Address must be 100 characters or fewer";
    /// City contains disallowed characters.
    pub const CITY_CHARSET: &str = "City can only contain letters and spaces";
    /// City too long.
    pub const CITY_LENGTH: &str = "City must be 50 characters or fewer";
    /// State too long.
    pub const STATE_LENGTH: &str = "State must be 50 characters or fewer";
    /// ZIP too long.
    pub const ZIP_LENGTH: &str = "ZIP code must be 10 characters or fewer";
    /// Country missing or not in the selector list.
    pub const COUNTRY_INVALID: &str = "Please select a valid country";
}

/// The outcome of validating a full form snapshot.
///
/// Holds at most one message per field: the first failing rule in table
/// order, except that the cross-field CVV rule overwrites the `cvv` slot
/// when it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationReport {
    /// `true` when no rule failed; the form may be submitted.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message attached to a field, if any.
    #[inline]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// All `(field, message)` pairs, in field display order.
    #[inline]
    pub fn errors(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    /// Number of fields with an error.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when there are no errors (same as [`Self::is_valid`]).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A named field rule: predicate plus the message reported on failure.
struct Rule {
    field: Field,
    name: &'static str,
    message: &'static str,
    passes: fn(&CheckoutForm) -> bool,
}

/// Single-field rules in evaluation order. The first failure per field
/// wins its message slot; the cross-field CVV rule is not in this table
/// because it runs last with overwrite semantics.
const RULES: &[Rule] = &[
    Rule {
        field: Field::CardholderName,
        name: "name-length",
        message: messages::NAME_LENGTH,
        passes: name_length_ok,
    },
    Rule {
        field: Field::CardholderName,
        name: "name-charset",
        message: messages::NAME_CHARSET,
        passes: name_charset_ok,
    },
    Rule {
        field: Field::CardholderName,
        name: "name-full",
        message: messages::NAME_FULL,
        passes: name_full_ok,
    },
    Rule {
        field: Field::Email,
        name: "email-syntax",
        message: messages::EMAIL_INVALID,
        passes: email_ok,
    },
    Rule {
        field: Field::CardNumber,
        name: "card-number-format",
        message: messages::CARD_NUMBER_FORMAT,
        passes: card_number_format_ok,
    },
    Rule {
        field: Field::CardNumber,
        name: "card-number-checksum",
        message: messages::CARD_NUMBER_CHECKSUM,
        passes: card_number_checksum_ok,
    },
    Rule {
        field: Field::ExpiryDate,
        name: "expiry-format",
        message: messages::EXPIRY_FORMAT,
        passes: expiry_format_ok,
    },
    Rule {
        field: Field::ExpiryDate,
        name: "expiry-not-past",
        message: messages::EXPIRY_PAST,
        passes: expiry_not_past_ok,
    },
    Rule {
        field: Field::Cvv,
        name: "cvv-format",
        message: messages::CVV_FORMAT,
        passes: cvv_format_ok,
    },
    Rule {
        field: Field::BillingAddress,
        name: "address-length",
        message: messages::ADDRESS_LENGTH,
        passes: address_ok,
    },
    Rule {
        field: Field::City,
        name: "city-length",
        message: messages::CITY_LENGTH,
        passes: city_length_ok,
    },
    Rule {
        field: Field::City,
        name: "city-charset",
        message: messages::CITY_CHARSET,
        passes: city_charset_ok,
    },
    Rule {
        field: Field::State,
        name: "state-length",
        message: messages::STATE_LENGTH,
        passes: state_ok,
    },
    Rule {
        field: Field::ZipCode,
        name: "zip-length",
        message: messages::ZIP_LENGTH,
        passes: zip_ok,
    },
    Rule {
        field: Field::Country,
        name: "country-code",
        message: messages::COUNTRY_INVALID,
        passes: country_ok,
    },
];

fn name_length_ok(form: &CheckoutForm) -> bool {
    !matches!(
        fields::validate_cardholder_name(&form.cardholder_name),
        Err(FieldError::Empty | FieldError::TooShort { .. } | FieldError::TooLong { .. })
    )
}

fn name_charset_ok(form: &CheckoutForm) -> bool {
    !matches!(
        fields::validate_cardholder_name(&form.cardholder_name),
        Err(FieldError::InvalidCharacters)
    )
}

fn name_full_ok(form: &CheckoutForm) -> bool {
    !matches!(
        fields::validate_cardholder_name(&form.cardholder_name),
        Err(FieldError::MissingFullName)
    )
}

fn email_ok(form: &CheckoutForm) -> bool {
    fields::validate_email(&form.email).is_ok()
}

fn card_number_format_ok(form: &CheckoutForm) -> bool {
    !matches!(
        card::validate_card_number(&form.card_number),
        Err(CardNumberError::Empty
            | CardNumberError::InvalidCharacter { .. }
            | CardNumberError::WrongLength { .. })
    )
}

fn card_number_checksum_ok(form: &CheckoutForm) -> bool {
    !matches!(
        card::validate_card_number(&form.card_number),
        Err(CardNumberError::InvalidChecksum)
    )
}

fn expiry_format_ok(form: &CheckoutForm) -> bool {
    expiry::parse_expiry(&form.expiry_date).is_ok()
}

fn expiry_not_past_ok(form: &CheckoutForm) -> bool {
    // Unparseable tokens are the format rule's problem
    !expiry::is_expired(&form.expiry_date)
}

fn cvv_format_ok(form: &CheckoutForm) -> bool {
    cvv::validate_cvv(&form.cvv).is_ok()
}

fn address_ok(form: &CheckoutForm) -> bool {
    form.billing_address
        .as_deref()
        .map_or(true, |a| fields::validate_billing_address(a).is_ok())
}

fn city_length_ok(form: &CheckoutForm) -> bool {
    !matches!(
        form.city.as_deref().map(fields::validate_city),
        Some(Err(FieldError::TooLong { .. }))
    )
}

fn city_charset_ok(form: &CheckoutForm) -> bool {
    !matches!(
        form.city.as_deref().map(fields::validate_city),
        Some(Err(FieldError::InvalidCharacters))
    )
}

fn state_ok(form: &CheckoutForm) -> bool {
    form.state
        .as_deref()
        .map_or(true, |s| fields::validate_state(s).is_ok())
}

fn zip_ok(form: &CheckoutForm) -> bool {
    form.zip_code
        .as_deref()
        .map_or(true, |z| fields::validate_zip_code(z).is_ok())
}

fn country_ok(form: &CheckoutForm) -> bool {
    fields::validate_country(&form.country).is_ok()
}

/// The cross-field rule: a well-formed CVV must have the exact length
/// the card number's prefix demands. Fires only on the length mismatch -
/// a CVV that already failed the generic format keeps that message.
fn cvv_matches_card(form: &CheckoutForm) -> bool {
    !matches!(
        cvv::validate_cvv_for_card(&form.cvv, &form.card_number),
        Err(CvvError::WrongLengthForCard { .. })
    )
}

/// Validates a complete form snapshot.
///
/// Runs every single-field rule in table order, keeping the first failing
/// message per field, then evaluates the cross-field CVV rule last; when
/// that fails it takes over the `cvv` slot (last-message-wins).
///
/// Pure and total: no input panics, no state is kept between calls. The
/// form layer re-invokes this on every keystroke.
///
/// # Example
///
/// ```
/// use checkout_validator::{validate, CheckoutForm, Field};
/// use checkout_validator::checkout::messages;
///
/// let mut form = CheckoutForm::default();
/// form.cardholder_name = "John Doe".into();
/// form.email = "john@example.com".into();
/// form.card_number = "123".into();
/// form.expiry_date = "12/99".into();
/// form.cvv = "123".into();
/// form.country = "US".into();
///
/// // The length gate reports before the checksum is consulted
/// let report = validate(&form);
/// assert_eq!(report.error(Field::CardNumber), Some(messages::CARD_NUMBER_FORMAT));
///
/// form.card_number = "4111 1111 1111 1111".into();
/// assert!(validate(&form).is_valid());
/// ```
pub fn validate(form: &CheckoutForm) -> ValidationReport {
    let mut errors: BTreeMap<Field, &'static str> = BTreeMap::new();

    for rule in RULES {
        if !(rule.passes)(form) {
            // First failing rule per field keeps the slot
            errors.entry(rule.field).or_insert(rule.message);
        }
    }

    // Cross-field rule runs last and owns the cvv slot when it fails
    if !cvv_matches_card(form) {
        errors.insert(Field::Cvv, messages::CVV_CARD_MISMATCH);
    }

    ValidationReport { errors }
}
