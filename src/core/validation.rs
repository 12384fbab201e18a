use rust_decimal::Decimal;

use super::checksum::{validate_creditor_id, validate_iban};
use super::error::ValidationError;
use super::format::PaymentMethod;
use super::types::*;

/// Longest id accepted by the pain schemas (`Max35Text`).
pub const MAX_ID_LEN: usize = 35;

/// Pre-flight check of a document before serialization.
/// Returns all validation errors found (not just the first).
///
/// Covers id lengths, the dates each payment method requires, IBAN and
/// creditor id check digits, and negative amounts. Business plausibility of
/// amounts and dates is left to the caller.
pub fn validate_document(doc: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_id(&doc.header.message_id, "header.message_id", &mut errors);

    for (bi, batch) in doc.batches.iter().enumerate() {
        let path = format!("batches[{bi}]");
        validate_batch(batch, &path, &mut errors);

        for (ti, tx) in batch.transactions.iter().enumerate() {
            let path = format!("{path}.transactions[{ti}]");
            validate_transaction(tx, &path, &mut errors);
        }
    }

    errors
}

fn validate_id(id: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if id.is_empty() {
        errors.push(ValidationError::with_rule(field, "id must not be empty", "ID-01"));
    } else if id.chars().count() > MAX_ID_LEN {
        errors.push(ValidationError::with_rule(
            field,
            format!("id '{id}' exceeds {MAX_ID_LEN} characters"),
            "ID-01",
        ));
    }
}

fn validate_account(party: &Party, field: &str, errors: &mut Vec<ValidationError>) {
    if !party.account.is_empty() && !validate_iban(&party.account) {
        errors.push(ValidationError::with_rule(
            field,
            format!("IBAN '{}' has invalid check digits", party.account),
            "CK-01",
        ));
    }
}

fn validate_batch(batch: &Batch, path: &str, errors: &mut Vec<ValidationError>) {
    validate_id(&batch.id, &format!("{path}.id"), errors);
    validate_account(&batch.party, &format!("{path}.party.account"), errors);

    match batch.method {
        PaymentMethod::DirectDebit => {
            if batch.collection_date.is_none() {
                errors.push(ValidationError::with_rule(
                    format!("{path}.collection_date"),
                    "direct debit batch requires a collection date",
                    "DT-01",
                ));
            }
            if batch.creditor_scheme_id.is_empty() {
                errors.push(ValidationError::with_rule(
                    format!("{path}.creditor_scheme_id"),
                    "direct debit batch requires a creditor scheme id",
                    "CK-02",
                ));
            } else if !validate_creditor_id(&batch.creditor_scheme_id) {
                errors.push(ValidationError::with_rule(
                    format!("{path}.creditor_scheme_id"),
                    format!(
                        "creditor id '{}' has invalid check digits",
                        batch.creditor_scheme_id
                    ),
                    "CK-02",
                ));
            }
        }
        PaymentMethod::Transfer => {
            if batch.execution_date.is_none() {
                errors.push(ValidationError::with_rule(
                    format!("{path}.execution_date"),
                    "credit transfer batch requires an execution date",
                    "DT-01",
                ));
            }
        }
    }
}

fn validate_transaction(tx: &Transaction, path: &str, errors: &mut Vec<ValidationError>) {
    validate_id(&tx.id, &format!("{path}.id"), errors);
    validate_account(&tx.counterparty, &format!("{path}.counterparty.account"), errors);

    if tx.amount < Decimal::ZERO {
        errors.push(ValidationError::with_rule(
            format!("{path}.amount"),
            format!("amount {} must not be negative", tx.amount),
            "AM-01",
        ));
    }

    if tx.method == PaymentMethod::DirectDebit && tx.mandate_signature_date.is_none() {
        errors.push(ValidationError::with_rule(
            format!("{path}.mandate_signature_date"),
            "direct debit requires a mandate signature date",
            "DT-02",
        ));
    }
}
