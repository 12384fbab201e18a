//! Registry of supported pain message formats.

use serde::{Deserialize, Serialize};

use super::error::PainError;

/// Registry row of the format used when the caller does not name one.
const DEFAULT_ENTRY: (&str, &str) = ("pain.008.001.02", "CstmrDrctDbtInitn");

/// Format used when the caller does not name one.
pub const DEFAULT_FORMAT: &str = DEFAULT_ENTRY.0;

/// Registered format identifiers and the root element each one wraps.
const FORMATS: &[(&str, &str)] = &[
    ("pain.001.001.02", "pain.001.001.02"),
    ("pain.001.003.02", "pain.001.003.02"),
    ("pain.001.001.03", "CstmrCdtTrfInitn"),
    ("pain.001.002.03", "CstmrCdtTrfInitn"),
    ("pain.001.003.03", "CstmrCdtTrfInitn"),
    ("pain.008.001.01", "pain.008.001.01"),
    ("pain.008.003.01", "pain.008.003.01"),
    DEFAULT_ENTRY,
    ("pain.008.003.02", "CstmrDrctDbtInitn"),
];

/// Payment method of a batch: SEPA credit transfer or SEPA direct debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// `TRF`: credit transfer (pain.001 family).
    Transfer,
    /// `DD`: direct debit (pain.008 family).
    DirectDebit,
}

impl PaymentMethod {
    /// `PmtMtd` code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transfer => "TRF",
            Self::DirectDebit => "DD",
        }
    }

    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer => "credit transfer",
            Self::DirectDebit => "direct debit",
        }
    }
}

/// Resolved properties of a registered format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainFormat {
    /// The identifier itself, e.g. "pain.008.001.02".
    pub id: &'static str,
    /// Tag of the element wrapped by `Document`.
    pub root_tag: &'static str,
    /// Schema generation deciding element placement (2 or 3).
    pub version: u8,
    /// Default payment method of the format family.
    pub method: PaymentMethod,
}

impl PainFormat {
    /// XML namespace of the format.
    pub fn namespace(&self) -> String {
        format!("{}{}", ISO20022_NS_BASE, self.id)
    }

    /// Value of the `xsi:schemaLocation` attribute.
    pub fn schema_location(&self) -> String {
        format!("{} {}.xsd", self.namespace(), self.id)
    }
}

impl Default for PainFormat {
    /// [`DEFAULT_FORMAT`].
    fn default() -> Self {
        describe(DEFAULT_ENTRY)
    }
}

/// Namespace prefix shared by all ISO 20022 message schemas.
pub const ISO20022_NS_BASE: &str = "urn:iso:std:iso:20022:tech:xsd:";

/// Look up a format identifier.
///
/// The version number is taken from the last two digits of the identifier;
/// direct debit identifiers count one generation higher, so
/// `pain.008.001.02` shares its layout with `pain.001.001.03`.
pub fn resolve(format_id: &str) -> Result<PainFormat, PainError> {
    FORMATS
        .iter()
        .find(|(id, _)| *id == format_id)
        .copied()
        .map(describe)
        .ok_or_else(|| PainError::UnknownFormat(format_id.to_string()))
}

/// Properties of a registry row. Every registered id ends in two digits.
fn describe((id, root_tag): (&'static str, &'static str)) -> PainFormat {
    let method = if id.starts_with("pain.001") {
        PaymentMethod::Transfer
    } else {
        PaymentMethod::DirectDebit
    };

    let digits = id.as_bytes();
    let generation = (digits[digits.len() - 2] - b'0') * 10 + (digits[digits.len() - 1] - b'0');
    let version = match method {
        PaymentMethod::DirectDebit => generation + 1,
        PaymentMethod::Transfer => generation,
    };

    PainFormat {
        id,
        root_tag,
        version,
        method,
    }
}

/// All registered format identifiers.
pub fn supported_formats() -> impl Iterator<Item = &'static str> {
    FORMATS.iter().map(|(id, _)| *id)
}
