//! ISO 7064 mod-97 check digits for IBANs and SEPA creditor identifiers.
//!
//! These functions never fail. Characters other than ASCII letters and digits
//! are dropped before the arithmetic, so a structurally broken identifier
//! yields a meaningless (but deterministic) answer. Check length and country
//! prefix before trusting the result.

/// Map an identifier to its digit string: `A`/`a` → 10 … `Z`/`z` → 35,
/// digits unchanged, anything else dropped.
pub fn to_digit_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            'A'..='Z' => out.push_str(&(c as u32 - 55).to_string()),
            'a'..='z' => out.push_str(&(c as u32 - 87).to_string()),
            '0'..='9' => out.push(c),
            _ => {}
        }
    }
    out
}

/// Remainder of an arbitrarily long decimal digit string divided by 97.
///
/// Folds digit by digit, so the number is never materialized. Non-digit
/// characters are skipped; the empty string yields 0.
pub fn mod97(digits: &str) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| (acc * 10 + u32::from(b - b'0')) % 97)
}

fn check_digits(rotated: &str) -> String {
    format!("{:02}", 98 - mod97(&to_digit_string(rotated)))
}

/// Byte-safe slice; identifiers are ASCII, anything else collapses to "".
fn part(s: &str, from: usize, to: Option<usize>) -> &str {
    let to = to.unwrap_or(s.len()).min(s.len());
    s.get(from.min(to)..to).unwrap_or("")
}

/// Check an IBAN: the first four characters move to the end and the digit
/// string must leave remainder 1.
pub fn validate_iban(iban: &str) -> bool {
    let rotated = format!("{}{}", part(iban, 4, None), part(iban, 0, Some(4)));
    mod97(&to_digit_string(&rotated)) == 1
}

/// Compute the check digits of an IBAN and splice them into positions 2–3.
///
/// ```
/// use sepa_pain::checksum_iban;
/// assert_eq!(checksum_iban("DE00123456781234567890"), "DE87123456781234567890");
/// ```
pub fn checksum_iban(iban: &str) -> String {
    let country = part(iban, 0, Some(2));
    let body = part(iban, 4, None);
    let check = check_digits(&format!("{body}{country}00"));
    format!("{country}{check}{body}")
}

/// Check a SEPA creditor identifier (`CCkkBBBnnnn…`).
///
/// The three-character business code at positions 4–6 is not part of the
/// check; the rotation takes the body from position 7 plus the leading four
/// characters.
pub fn validate_creditor_id(id: &str) -> bool {
    let rotated = format!("{}{}", part(id, 7, None), part(id, 0, Some(4)));
    mod97(&to_digit_string(&rotated)) == 1
}

/// Compute the check digits of a creditor identifier and splice them into
/// positions 2–3. The business code is kept but not checked.
///
/// ```
/// use sepa_pain::checksum_creditor_id;
/// assert_eq!(checksum_creditor_id("DE00ZZZ09999999999"), "DE98ZZZ09999999999");
/// ```
pub fn checksum_creditor_id(id: &str) -> String {
    let country = part(id, 0, Some(2));
    let check = check_digits(&format!("{}{country}00", part(id, 7, None)));
    format!("{country}{check}{}", part(id, 4, None))
}
