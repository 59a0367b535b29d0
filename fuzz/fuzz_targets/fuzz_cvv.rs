//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input, including
//! the card-dependent length rule.

#![no_main]

use checkout_validator::cvv;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (cvv_input, card_input) = data;

    // These should never panic
    let _ = cvv::validate_cvv(cvv_input);
    let _ = cvv::is_valid_cvv(cvv_input);
    let _ = cvv::validate_cvv_for_card(cvv_input, card_input);
    let _ = cvv::is_valid_cvv_for_card(cvv_input, card_input);

    let required = cvv::required_cvv_length(card_input);
    assert!(required == 3 || required == 4);

    // The card-dependent check is strictly stronger than the generic one
    if cvv::is_valid_cvv_for_card(cvv_input, card_input) {
        assert!(cvv::is_valid_cvv(cvv_input));
    }
});
