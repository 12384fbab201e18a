//! Core payment entities, format registry, checksums and validation.
//!
//! This module provides the in-memory model of a pain message (document,
//! group header, batches, transactions) together with the mod-97 check
//! digit routines for IBANs and creditor identifiers.

mod builder;
pub mod checksum;
mod config;
mod document;
mod error;
pub mod format;
mod types;
mod validation;

pub use builder::*;
pub use checksum::{
    checksum_creditor_id, checksum_iban, mod97, to_digit_string, validate_creditor_id,
    validate_iban,
};
pub use config::*;
pub use error::*;
pub use format::{DEFAULT_FORMAT, PainFormat, PaymentMethod, resolve};
pub use types::*;
pub use validation::*;
