use thiserror::Error;

/// Errors that can occur while assembling or serializing a payment message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PainError {
    /// A batch or transaction of a different payment method was attached
    /// to a parent bound to another method.
    #[error("type mismatch: expected {expected} entry, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The format identifier is not a registered pain message format.
    #[error("unknown pain format: {0}")]
    UnknownFormat(String),

    /// A date the payment method requires was absent at serialization time.
    #[error("{entity} '{id}' is missing required date {field}")]
    MissingRequiredTemporal {
        entity: &'static str,
        id: String,
        field: &'static str,
    },

    /// A control sum left the range of `Decimal`.
    #[error("control sum of {entity} '{id}' exceeds the decimal range")]
    AmountOverflow { entity: &'static str, id: String },

    /// XML rendering error.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A single pre-flight validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "batches[0].party.account").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule identifier if applicable (e.g. "CK-01").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
