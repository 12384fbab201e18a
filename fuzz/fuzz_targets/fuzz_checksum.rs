#![no_main]

use libfuzzer_sys::fuzz_target;
use sepa_pain::core::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Never panics, whatever the input.
        let _ = validate_iban(s);
        let _ = validate_creditor_id(s);
        let iban = checksum_iban(s);
        let creditor_id = checksum_creditor_id(s);

        // Well-formed ASCII input must round-trip.
        if s.len() >= 8 && s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            assert!(validate_iban(&iban), "{s} -> {iban}");
            assert!(validate_creditor_id(&creditor_id), "{s} -> {creditor_id}");
        }
    }
});
