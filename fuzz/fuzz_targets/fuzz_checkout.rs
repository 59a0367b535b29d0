//! Fuzz target for full-form validation.
//!
//! Tests that [`checkout_validator::validate`] never panics on an
//! arbitrary form snapshot.

#![no_main]

use arbitrary::Arbitrary;
use checkout_validator::{validate, CheckoutForm};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RawForm {
    cardholder_name: String,
    email: String,
    card_number: String,
    expiry_date: String,
    cvv: String,
    billing_address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    country: String,
}

fuzz_target!(|raw: RawForm| {
    let form = CheckoutForm {
        cardholder_name: raw.cardholder_name,
        email: raw.email,
        card_number: raw.card_number,
        expiry_date: raw.expiry_date,
        cvv: raw.cvv,
        billing_address: raw.billing_address,
        city: raw.city,
        state: raw.state,
        zip_code: raw.zip_code,
        country: raw.country,
    };

    let report = validate(&form);
    let _ = report.is_valid();
    let _ = report.errors().count();
    // Masked debug output must never panic either
    let _ = format!("{:?}", form);
});
