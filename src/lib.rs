//! # sepa-pain
//!
//! Builds SEPA payment initiation messages in the ISO 20022 pain formats:
//! credit transfer batches (pain.001) and direct debit batches (pain.008),
//! in both the version 2 and version 3 element layouts.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! IBANs and SEPA creditor identifiers can be checked or completed with the
//! mod-97 routines in [`core::checksum`], which need no document at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sepa_pain::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut doc = Document::new("pain.008.001.02", "MSG-2024-001").unwrap();
//! doc.header.initiator_name = "ACME GmbH".into();
//!
//! let mut batch = doc.create_batch();
//! batch.party = PartyBuilder::new("ACME GmbH", checksum_iban("DE00123456781234567890")).build();
//! batch.creditor_scheme_id = checksum_creditor_id("DE00ZZZ09999999999");
//! batch.collection_date = NaiveDate::from_ymd_opt(2024, 7, 1);
//! let batch = doc.add_batch(batch).unwrap();
//!
//! let mut tx = batch.create_transaction();
//! tx.amount = dec!(49.90);
//! tx.mandate_id = "MANDATE-7".into();
//! tx.mandate_signature_date = NaiveDate::from_ymd_opt(2024, 1, 10);
//! tx.counterparty = PartyBuilder::new("Kunde AG", "DE89370400440532013000").build();
//! batch.add_transaction(tx).unwrap();
//!
//! assert!(validate_document(&doc).is_empty());
//! doc.normalize().unwrap();
//! assert_eq!(doc.header.control_sum(), dec!(49.90));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Entities, format registry, IBAN/creditor id checksums, validation |
//! | `pain` (default) | Element tree, pain XML serialization |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pain")]
pub mod pain;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
