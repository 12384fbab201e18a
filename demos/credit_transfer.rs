use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sepa_pain::core::*;
use sepa_pain::pain;

fn main() {
    // ── 1. Salary run in the current pain.001.001.03 layout ───────────
    println!("=== Salary transfer ===");
    let mut doc = Document::new("pain.001.001.03", "SAL-2024-06").expect("registered format");
    doc.header.initiator_name = "ACME GmbH".into();

    let mut batch = doc.create_batch();
    batch.id = "salaries".into();
    batch.party = PartyBuilder::new("ACME GmbH", "DE87123456781234567890")
        .bank_code("COBADEFFXXX")
        .build();
    batch.execution_date = NaiveDate::from_ymd_opt(2024, 6, 28);
    batch.instruction_priority = Some("NORM".into());
    let batch = doc.add_batch(batch).expect("transfer batch");

    let mut tx = batch.create_transaction();
    tx.end_to_end_id = "SAL-06-0001".into();
    tx.amount = dec!(3250.00);
    tx.purpose_code = Some("SALA".into());
    tx.remittance_info = "Gehalt Juni 2024".into();
    tx.counterparty = PartyBuilder::new("Erika Musterfrau", "DE89370400440532013000")
        .address("Marienplatz 1", "80331 München", "DE")
        .build();
    batch.add_transaction(tx).expect("transfer transaction");

    match pain::to_pain_xml(&mut doc) {
        Ok(xml) => println!("{xml}"),
        Err(e) => eprintln!("Serialization failed: {e}"),
    }

    // ── 2. The same payment in a legacy format ────────────────────────
    println!("\n=== Legacy pain.001.001.02 ===");
    let mut legacy = Document::new("pain.001.001.02", "SAL-2024-06-L").expect("registered format");
    let mut batch = legacy.create_batch();
    batch.party = doc.batches()[0].party.clone();
    batch.execution_date = doc.batches()[0].execution_date;
    let batch = legacy.add_batch(batch).expect("transfer batch");
    for tx in doc.batches()[0].transactions() {
        let mut copy = tx.clone();
        copy.id.clear();
        batch.add_transaction(copy).expect("transfer transaction");
    }
    match pain::to_pain_xml(&mut legacy) {
        Ok(xml) => println!("{xml}"),
        Err(e) => eprintln!("Serialization failed: {e}"),
    }

    // ── 3. Errors ─────────────────────────────────────────────────────
    println!("\n=== Errors ===");
    let debit = Document::new("pain.008.001.02", "DD").expect("registered format");
    if let Err(e) = legacy.add_batch(debit.create_batch()) {
        println!("  {e}");
    }
    if let Err(e) = Document::new("pain.002.001.03", "X") {
        println!("  {e}");
    }
    let mut undated = Document::new("pain.001.001.03", "UNDATED").expect("registered format");
    undated.add_batch(undated.create_batch()).expect("transfer batch");
    if let Err(e) = pain::serialize(&mut undated) {
        println!("  {e}");
    }
}
