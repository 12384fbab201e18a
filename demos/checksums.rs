use sepa_pain::core::*;

fn main() {
    println!("=== IBAN ===");
    for iban in [
        "DE89370400440532013000",
        "DE89 3704 0044 0532 0130 00",
        "DE88370400440532013000",
        "GB82WEST12345698765432",
    ] {
        let verdict = if validate_iban(iban) { "valid" } else { "invalid" };
        println!("  {iban:<30} {verdict}");
    }

    // Fill in check digits for a freshly assembled account number
    let skeleton = "DE00123456781234567890";
    println!("  {skeleton} -> {}", checksum_iban(skeleton));

    println!("\n=== Creditor identifier ===");
    let skeleton = "DE00ZZZ09999999999";
    let creditor_id = checksum_creditor_id(skeleton);
    println!("  {skeleton} -> {creditor_id}");
    println!(
        "  {creditor_id} is {}",
        if validate_creditor_id(&creditor_id) { "valid" } else { "invalid" }
    );
}
