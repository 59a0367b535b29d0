//! Fuzz target for the keystroke formatters.
//!
//! Tests that formatting never panics and stays idempotent on arbitrary
//! input.

#![no_main]

use checkout_validator::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let card = format::format_card_number(data);
    assert_eq!(format::format_card_number(&card), card);

    let expiry = format::format_expiry_date(data);
    assert_eq!(format::format_expiry_date(&expiry), expiry);

    let cvv = format::format_cvv(data);
    assert_eq!(format::format_cvv(&cvv), cvv);

    let _ = format::strip_digits(data);
});
