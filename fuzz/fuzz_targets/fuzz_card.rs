//! Fuzz target for card number validation and brand detection.
//!
//! Tests that these functions never panic on arbitrary input.

#![no_main]

use checkout_validator::{brand, card};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = card::validate_card_number(data);
    let _ = card::is_valid_card_number(data);
    let _ = card::passes_luhn(data);

    let detected = brand::card_brand(data);
    let _ = detected.name();
    let _ = format!("{}", detected);

    // A number that validates must also pass the standalone Luhn check
    if card::validate_card_number(data).is_ok() {
        assert!(card::passes_luhn(data));
    }
});
