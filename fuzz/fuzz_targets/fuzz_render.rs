#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use sepa_pain::core::*;
use sepa_pain::pain;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let date = NaiveDate::from_ymd_opt(2024, 7, 1);

    // Arbitrary text in every free-form field must still render.
    let mut doc = Document::new("pain.008.001.02", s).unwrap();
    doc.header.initiator_name = s.into();
    let mut batch = doc.create_batch();
    batch.party = PartyBuilder::new(s, s).address(s, s, s).bank_code(s).build();
    batch.collection_date = date;
    let batch = doc.add_batch(batch).unwrap();
    let mut tx = batch.create_transaction();
    tx.remittance_info = s.into();
    tx.mandate_id = s.into();
    tx.mandate_signature_date = date;
    batch.add_transaction(tx).unwrap();

    let _ = pain::to_pain_xml(&mut doc);
});
