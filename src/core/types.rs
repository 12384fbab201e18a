use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::DocumentConfig;
use super::format::{PainFormat, PaymentMethod};

/// Name, address and bank account of one side of a payment.
///
/// On a [`Batch`] this is the acting party (creditor for direct debit, debtor
/// for credit transfer); on a [`Transaction`] it is the other side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Name as printed on statements.
    pub name: String,
    /// Street and house number.
    pub street: Option<String>,
    /// Postal code and city.
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    /// IBAN.
    pub account: String,
    /// BIC. Empty or absent means the agent is not provided.
    pub bank_code: Option<String>,
}

impl Party {
    /// `(street, city, country)` when all three are set and non-empty.
    /// A partial address is treated as no address.
    pub fn postal_address(&self) -> Option<(&str, &str, &str)> {
        let street = non_empty(&self.street)?;
        let city = non_empty(&self.city)?;
        let country = non_empty(&self.country)?;
        Some((street, city, country))
    }

    /// True if some but not all address fields are set.
    pub fn has_partial_address(&self) -> bool {
        let set = [&self.street, &self.city, &self.country]
            .iter()
            .filter(|f| non_empty(f).is_some())
            .count();
        set > 0 && set < 3
    }

    /// The BIC, if one is set and non-empty.
    pub fn bic(&self) -> Option<&str> {
        non_empty(&self.bank_code)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Direct debit sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SequenceType {
    /// `FRST`: first collection of a recurring mandate.
    #[default]
    First,
    /// `RCUR`: follow-up collection.
    Recurring,
    /// `OOFF`: one-off collection.
    OneOff,
    /// `FNAL`: last collection of a recurring mandate.
    Final,
}

impl SequenceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::First => "FRST",
            Self::Recurring => "RCUR",
            Self::OneOff => "OOFF",
            Self::Final => "FNAL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FRST" => Some(Self::First),
            "RCUR" => Some(Self::Recurring),
            "OOFF" => Some(Self::OneOff),
            "FNAL" => Some(Self::Final),
            _ => None,
        }
    }
}

/// Group header, one per document.
#[derive(Debug, Clone)]
pub struct GroupHeader {
    /// `MsgId`; also the prefix of every batch id.
    pub message_id: String,
    /// `CreDtTm`.
    pub created: DateTime<Utc>,
    /// `InitgPty/Nm`.
    pub initiator_name: String,
    /// `BtchBookg`.
    pub batch_booking: bool,
    /// `Grpg` (version 2 layouts only).
    pub grouping: String,
    pub(crate) transaction_count: usize,
    pub(crate) control_sum: Decimal,
}

impl GroupHeader {
    pub(crate) fn new(message_id: String) -> Self {
        Self {
            message_id,
            created: Utc::now(),
            initiator_name: String::new(),
            batch_booking: false,
            grouping: "MIXD".to_string(),
            transaction_count: 0,
            control_sum: Decimal::ZERO,
        }
    }

    /// Number of transactions across all batches, as of the last normalization.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Sum of all transaction amounts, as of the last normalization.
    pub fn control_sum(&self) -> Decimal {
        self.control_sum
    }
}

/// Payment information block: transactions sharing one payment method,
/// acting party and settlement date.
#[derive(Debug, Clone)]
pub struct Batch {
    /// `PmtInfId`. An id set before the batch is attached becomes the suffix
    /// of the composite id.
    pub id: String,
    /// Creditor (direct debit) or debtor (credit transfer).
    pub party: Party,
    /// `BtchBookg` (version 3 layouts only).
    pub batch_booking: bool,
    /// `SeqTp`, direct debit only.
    pub sequence_type: SequenceType,
    /// `ReqdColltnDt`, direct debit only.
    pub collection_date: Option<NaiveDate>,
    /// `ReqdExctnDt`, credit transfer only.
    pub execution_date: Option<NaiveDate>,
    /// `LclInstrm/Cd`, e.g. "CORE" or "B2B".
    pub local_instrument: Option<String>,
    /// Creditor scheme identifier, direct debit only.
    pub creditor_scheme_id: String,
    /// `InstrPrty`, credit transfer only ("NORM" or "HIGH").
    pub instruction_priority: Option<String>,
    pub(crate) method: PaymentMethod,
    pub(crate) config: DocumentConfig,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) transaction_count: usize,
    pub(crate) control_sum: Decimal,
}

impl Batch {
    pub(crate) fn bound(method: PaymentMethod, config: DocumentConfig) -> Self {
        Self {
            id: String::new(),
            party: Party::default(),
            batch_booking: false,
            sequence_type: SequenceType::First,
            collection_date: None,
            execution_date: None,
            local_instrument: match method {
                PaymentMethod::DirectDebit => Some("CORE".to_string()),
                PaymentMethod::Transfer => None,
            },
            creditor_scheme_id: String::new(),
            instruction_priority: None,
            method,
            config,
            transactions: Vec::new(),
            transaction_count: 0,
            control_sum: Decimal::ZERO,
        }
    }

    /// Payment method, fixed at creation.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// `"creditor"` or `"debtor"`, whichever side [`Batch::party`] is.
    pub fn party_role(&self) -> &'static str {
        match self.method {
            PaymentMethod::DirectDebit => "creditor",
            PaymentMethod::Transfer => "debtor",
        }
    }

    /// The settlement date the method requires.
    pub fn required_date(&self) -> Option<NaiveDate> {
        match self.method {
            PaymentMethod::DirectDebit => self.collection_date,
            PaymentMethod::Transfer => self.execution_date,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions, as of the last normalization.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Sum of transaction amounts, as of the last normalization.
    pub fn control_sum(&self) -> Decimal {
        self.control_sum
    }
}

/// A single credit transfer or direct debit instruction.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// `InstrId`. Left empty, it is assigned when the transaction is attached.
    pub id: String,
    /// `EndToEndId`.
    pub end_to_end_id: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Instructed amount.
    pub amount: Decimal,
    /// Debtor (direct debit) or creditor (credit transfer).
    pub counterparty: Party,
    /// `RmtInf/Ustrd`.
    pub remittance_info: String,
    /// `Purp/Cd` (version 2 layouts only).
    pub purpose_code: Option<String>,
    /// Mandate reference, direct debit only.
    pub mandate_id: String,
    /// Mandate signature date, direct debit only.
    pub mandate_signature_date: Option<NaiveDate>,
    /// Amendment note; marks the mandate as amended.
    pub amendment: Option<String>,
    pub(crate) method: PaymentMethod,
}

impl Transaction {
    /// A standalone transaction of the given method. Prefer
    /// [`Batch::create_transaction`].
    pub fn new(method: PaymentMethod) -> Self {
        Self {
            id: String::new(),
            end_to_end_id: String::new(),
            currency: "EUR".to_string(),
            amount: Decimal::ZERO,
            counterparty: Party::default(),
            remittance_info: String::new(),
            purpose_code: None,
            mandate_id: String::new(),
            mandate_signature_date: None,
            amendment: None,
            method,
        }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// `"debtor"` or `"creditor"`, whichever side [`Transaction::counterparty`] is.
    pub fn counterparty_role(&self) -> &'static str {
        match self.method {
            PaymentMethod::DirectDebit => "debtor",
            PaymentMethod::Transfer => "creditor",
        }
    }
}

/// A pain message: group header plus ordered payment batches.
#[derive(Debug, Clone)]
pub struct Document {
    pub header: GroupHeader,
    pub(crate) format: PainFormat,
    pub(crate) config: DocumentConfig,
    pub(crate) batches: Vec<Batch>,
}
