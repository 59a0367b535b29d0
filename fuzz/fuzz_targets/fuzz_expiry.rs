//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use checkout_validator::expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = expiry::parse_expiry(data);
    let _ = expiry::validate_expiry(data);
    let _ = expiry::is_expired(data);

    // If parsing succeeds, exercise the parsed value
    if let Ok(exp) = expiry::parse_expiry(data) {
        assert!((1..=12).contains(&exp.month()));
        assert!(exp.year() <= 99);
        let _ = exp.is_expired();
        let _ = exp.is_expired_at(6, 26);
        let _ = exp.to_string();
    }
});
