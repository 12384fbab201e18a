//! ISO 20022 pain XML generation (pain.001 credit transfer, pain.008 direct debit).
//!
//! [`serialize`] maps a [`Document`](crate::core::Document) onto an element
//! tree whose layout depends on the schema version of its format;
//! [`Element::to_xml_string`] renders that tree as text.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use sepa_pain::core::*;
//! use sepa_pain::pain;
//!
//! let mut doc = Document::new("pain.001.001.03", "MSG1").unwrap();
//! let mut batch = doc.create_batch();
//! batch.execution_date = NaiveDate::from_ymd_opt(2024, 6, 17);
//! batch.party = PartyBuilder::new("ACME GmbH", "DE87123456781234567890").build();
//! let batch = doc.add_batch(batch).unwrap();
//!
//! let mut tx = batch.create_transaction();
//! tx.amount = dec!(99.9);
//! tx.counterparty = PartyBuilder::new("Kunde AG", "DE89370400440532013000").build();
//! batch.add_transaction(tx).unwrap();
//!
//! let xml = pain::to_pain_xml(&mut doc).unwrap();
//! assert!(xml.contains("<InstdAmt Ccy=\"EUR\">99.90</InstdAmt>"));
//! ```

mod serialize;
mod tree;

pub use serialize::{format_amount, format_date, format_timestamp, serialize, to_pain_xml};
pub use tree::{Element, Emit};

/// XML Schema instance namespace, carrier of `xsi:schemaLocation`.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Service level code and proprietary creditor scheme name.
pub const SERVICE_LEVEL: &str = "SEPA";

/// Charge bearer code: charges follow the service level.
pub const CHARGE_BEARER: &str = "SLEV";

/// Agent id used when no BIC is known.
pub const NOT_PROVIDED: &str = "NOTPROVIDED";
