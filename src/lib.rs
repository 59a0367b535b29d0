//! # checkout_validator
//!
//! Validation core for a SaaS checkout payment form: card number
//! checksum and brand detection, card-dependent CVV rules, `MM/YY`
//! expiry handling, keystroke formatters, and a whole-form rule schema.
//!
//! Everything here is pure and allocation-light; the form layer calls
//! [`validate`] with a full snapshot on every keystroke and renders the
//! per-field messages from the returned [`ValidationReport`].
//!
//! ## Quick start
//!
//! ```
//! use checkout_validator::{validate, CheckoutForm, Field};
//!
//! let mut form = CheckoutForm::default();
//! form.cardholder_name = "Jane Smith".into();
//! form.email = "jane@example.com".into();
//! form.card_number = "4111 1111 1111 1111".into();
//! form.expiry_date = "12/99".into();
//! form.cvv = "123".into();
//! form.country = "US".into();
//!
//! assert!(validate(&form).is_valid());
//! ```
//!
//! ## Piecemeal validation
//!
//! The individual validators are exported for callers that validate one
//! field at a time:
//!
//! ```
//! use checkout_validator::{card_brand, is_valid_card_number, CardBrand};
//! use checkout_validator::cvv::required_cvv_length;
//!
//! assert!(is_valid_card_number("4111 1111 1111 1111"));
//! assert_eq!(card_brand("4111111111111111"), CardBrand::Visa);
//! assert_eq!(required_cvv_length("370000000000002"), 4);
//! ```
//!
//! ## Formatting as the user types
//!
//! ```
//! use checkout_validator::{format_card_number, format_expiry_date};
//!
//! assert_eq!(format_card_number("41111111"), "4111 1111");
//! assert_eq!(format_expiry_date("123"), "12/3");
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`CheckoutForm`] and
//!   the report types, with camelCase field names matching the form
//!   layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod card;
pub mod checkout;
pub mod cvv;
pub mod error;
pub mod expiry;
pub mod fields;
pub mod format;
pub mod luhn;

pub use brand::{card_brand, CardBrand};
pub use card::{
    is_valid_card_number, passes_luhn, validate_card_number, MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};
pub use checkout::{validate, CheckoutForm, Field, ValidationReport};
pub use error::CardNumberError;
pub use expiry::{parse_expiry, validate_expiry, ExpiryDate, ExpiryError};
pub use format::{format_card_number, format_cvv, format_expiry_date, strip_digits};
