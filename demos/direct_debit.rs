use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain;

fn main() {
    // Monthly membership fees collected from two members
    let mut doc = Document::new("pain.008.003.02", "FEES-2024-07").expect("registered format");
    doc.header.initiator_name = "Sportverein Musterstadt e.V.".into();

    let mut batch = doc.create_batch();
    batch.party = PartyBuilder::new("Sportverein Musterstadt e.V.", "DE87123456781234567890")
        .bank_code("COBADEFFXXX")
        .address("Am Sportplatz 1", "12345 Musterstadt", "DE")
        .build();
    batch.creditor_scheme_id = checksum_creditor_id("DE00ZZZ09999999999");
    batch.collection_date = NaiveDate::from_ymd_opt(2024, 7, 1);
    batch.sequence_type = SequenceType::Recurring;
    let batch = doc.add_batch(batch).expect("direct debit batch");

    let members = [
        ("Erika Mustermann", "DE89370400440532013000", "MEMBER-0001", dec!(12.50)),
        ("Max Mustermann", "DE87123456781234567890", "MEMBER-0002", dec!(25)),
    ];
    for (name, iban, mandate, fee) in members {
        let mut tx = batch.create_transaction();
        tx.end_to_end_id = format!("{mandate}-2024-07");
        tx.amount = fee;
        tx.mandate_id = mandate.into();
        tx.mandate_signature_date = NaiveDate::from_ymd_opt(2023, 1, 15);
        tx.remittance_info = "Mitgliedsbeitrag Juli 2024".into();
        tx.counterparty = PartyBuilder::new(name, iban).build();
        batch.add_transaction(tx).expect("direct debit transaction");
    }

    // Pre-flight checks before anything is sent to the bank
    let errors = validate_document(&doc);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("  {e}");
        }
        return;
    }

    match pain::to_pain_xml(&mut doc) {
        Ok(xml) => {
            println!("{xml}");
            println!(
                "\n{} collections, total {} EUR",
                doc.header.transaction_count(),
                doc.header.control_sum()
            );
        }
        Err(e) => eprintln!("Serialization failed: {e}"),
    }
}
