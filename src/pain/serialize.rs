use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::tree::Element;
use super::{CHARGE_BEARER, NOT_PROVIDED, SERVICE_LEVEL, XSI_NS};
use crate::core::*;

/// Build the element tree of a pain message.
///
/// Normalizes the document first, so batch and header aggregates always
/// reflect the current transactions. Fails before producing anything if a
/// control sum overflows or a date required by the payment method is missing.
pub fn serialize(doc: &mut Document) -> Result<Element, PainError> {
    doc.normalize()?;
    let format = resolve(doc.format().id)?;
    debug!(
        format = format.id,
        version = format.version,
        batches = doc.batches().len(),
        "serializing pain document"
    );

    let mut root = Element::new("Document")
        .with_attr("xmlns", format.namespace())
        .with_attr("xmlns:xsi", XSI_NS)
        .with_attr("xsi:schemaLocation", format.schema_location());

    let body = root.container(&[format.root_tag]);
    body.push(group_header(&doc.header, format.version));
    for batch in doc.batches() {
        body.push(payment_info(batch, format.version)?);
    }

    debug!(
        message_id = %doc.header.message_id,
        transactions = doc.header.transaction_count(),
        "pain document serialized"
    );
    Ok(root)
}

/// Serialize and render a document as XML text.
pub fn to_pain_xml(doc: &mut Document) -> Result<String, PainError> {
    serialize(doc)?.to_xml_string()
}

/// Element prefixes of (batch party, transaction counterparty).
fn party_prefixes(method: PaymentMethod) -> (&'static str, &'static str) {
    match method {
        PaymentMethod::DirectDebit => ("Cdtr", "Dbtr"),
        PaymentMethod::Transfer => ("Dbtr", "Cdtr"),
    }
}

/// Agent container suffix; version 2 schemas spell it "Agnt".
fn agent_suffix(version: u8) -> &'static str {
    if version == 2 { "Agnt" } else { "Agt" }
}

fn group_header(header: &GroupHeader, version: u8) -> Element {
    let mut grp = Element::new("GrpHdr");
    grp.required(&["MsgId"], &header.message_id);
    grp.required(&["CreDtTm"], &format_timestamp(header.created));
    if version == 2 {
        grp.required(&["BtchBookg"], bool_text(header.batch_booking));
    }
    grp.required(&["NbOfTxs"], &header.transaction_count().to_string());
    grp.required(&["CtrlSum"], &format_amount(header.control_sum()));
    if version == 2 {
        grp.required(&["Grpg"], &header.grouping);
    }
    grp.required(&["InitgPty", "Nm"], &header.initiator_name);
    grp
}

fn payment_info(batch: &Batch, version: u8) -> Result<Element, PainError> {
    let method = batch.method();
    let (prefix, _) = party_prefixes(method);

    let mut pmt = Element::new("PmtInf");
    pmt.required(&["PmtInfId"], &batch.id);
    pmt.required(&["PmtMtd"], method.code());
    if version == 3 {
        pmt.required(&["BtchBookg"], bool_text(batch.batch_booking));
        pmt.required(&["NbOfTxs"], &batch.transaction_count().to_string());
        pmt.required(&["CtrlSum"], &format_amount(batch.control_sum()));
    }

    let tp = pmt.container(&["PmtTpInf"]);
    if method == PaymentMethod::Transfer {
        tp.optional(&["InstrPrty"], batch.instruction_priority.as_deref());
    }
    tp.required(&["SvcLvl", "Cd"], SERVICE_LEVEL);
    tp.optional(&["LclInstrm", "Cd"], batch.local_instrument.as_deref());
    if method == PaymentMethod::DirectDebit {
        tp.required(&["SeqTp"], batch.sequence_type.code());
    }

    let date_tag = match method {
        PaymentMethod::DirectDebit => "ReqdColltnDt",
        PaymentMethod::Transfer => "ReqdExctnDt",
    };
    let date = batch
        .required_date()
        .ok_or_else(|| PainError::MissingRequiredTemporal {
            entity: "batch",
            id: batch.id.clone(),
            field: date_tag,
        })?;
    pmt.required(&[date_tag], &format_date(date));

    write_party(&mut pmt, prefix, &batch.party);
    write_account(&mut pmt, prefix, &batch.party);
    write_agent(&mut pmt, prefix, version, &batch.party);
    pmt.required(&["ChrgBr"], CHARGE_BEARER);

    if method == PaymentMethod::DirectDebit {
        let other = pmt.container(&["CdtrSchmeId", "Id", "PrvtId", "Othr"]);
        other.required(&["Id"], &batch.creditor_scheme_id);
        other.required(&["SchmeNm", "Prtry"], SERVICE_LEVEL);
    }

    for tx in batch.transactions() {
        pmt.push(transaction(tx, version)?);
    }
    Ok(pmt)
}

fn transaction(tx: &Transaction, version: u8) -> Result<Element, PainError> {
    let method = tx.method();
    let (_, prefix) = party_prefixes(method);

    let mut inf = Element::new(match method {
        PaymentMethod::DirectDebit => "DrctDbtTxInf",
        PaymentMethod::Transfer => "CdtTrfTxInf",
    });

    let pmt_id = inf.container(&["PmtId"]);
    pmt_id.required(&["InstrId"], &tx.id);
    pmt_id.required(&["EndToEndId"], &tx.end_to_end_id);

    let amount = format_amount(tx.amount);
    match method {
        PaymentMethod::DirectDebit => {
            inf.required(&["InstdAmt"], &amount)
                .set_attr("Ccy", tx.currency.as_str());

            let signed = tx
                .mandate_signature_date
                .ok_or_else(|| PainError::MissingRequiredTemporal {
                    entity: "transaction",
                    id: tx.id.clone(),
                    field: "DtOfSgntr",
                })?;
            let mandate = inf.container(&["DrctDbtTx", "MndtRltdInf"]);
            mandate.required(&["MndtId"], &tx.mandate_id);
            mandate.required(&["DtOfSgntr"], &format_date(signed));
            match tx.amendment.as_deref().filter(|note| !note.is_empty()) {
                Some(note) => {
                    mandate.required(&["AmdmntInd"], "true");
                    mandate.required(&["AmdmntInfDtls"], note);
                }
                None => {
                    mandate.required(&["AmdmntInd"], "false");
                }
            }
        }
        PaymentMethod::Transfer => {
            inf.required(&["Amt", "InstdAmt"], &amount)
                .set_attr("Ccy", tx.currency.as_str());
        }
    }

    write_agent(&mut inf, prefix, version, &tx.counterparty);
    write_party(&mut inf, prefix, &tx.counterparty);
    write_account(&mut inf, prefix, &tx.counterparty);
    inf.required(&["RmtInf", "Ustrd"], &tx.remittance_info);
    if version != 3 {
        inf.optional(&["Purp", "Cd"], tx.purpose_code.as_deref());
    }
    Ok(inf)
}

/// `<prefix>` with `Nm` and, if complete, `PstlAdr`.
fn write_party(parent: &mut Element, prefix: &str, party: &Party) {
    let node = parent.container(&[prefix]);
    node.required(&["Nm"], &party.name);
    match party.postal_address() {
        Some((street, city, country)) => {
            let adr = node.container(&["PstlAdr"]);
            adr.required(&["Ctry"], country);
            adr.required(&["AdrLine"], street);
            adr.required(&["AdrLine"], city);
        }
        None if party.has_partial_address() => {
            warn!(party = prefix, name = %party.name, "incomplete postal address dropped");
        }
        None => {}
    }
}

fn write_account(parent: &mut Element, prefix: &str, party: &Party) {
    let tag = format!("{prefix}Acct");
    parent.required(&[tag.as_str(), "Id", "IBAN"], &party.account);
}

fn write_agent(parent: &mut Element, prefix: &str, version: u8, party: &Party) {
    let tag = format!("{prefix}{}", agent_suffix(version));
    let institution = parent.container(&[tag.as_str(), "FinInstnId"]);
    match party.bic() {
        Some(bic) => {
            institution.required(&["BIC"], bic);
        }
        None => {
            institution.required(&["Othr", "Id"], NOT_PROVIDED);
        }
    }
}

fn bool_text(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

/// Amount with exactly two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Date-only rendering (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// UTC timestamp with millisecond precision, e.g. `2024-06-15T08:30:00.000Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
