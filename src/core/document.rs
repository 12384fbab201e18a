use rust_decimal::Decimal;
use tracing::debug;

use super::config::DocumentConfig;
use super::error::PainError;
use super::format::{self, PainFormat, PaymentMethod};
use super::types::*;

impl Document {
    /// Create an empty document for a registered format, using the default
    /// id separator.
    ///
    /// ```
    /// use sepa_pain::core::*;
    ///
    /// let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
    /// let batch = doc.add_batch(doc.create_batch()).unwrap();
    /// assert_eq!(batch.id, "MSG1.0");
    /// ```
    pub fn new(format_id: &str, message_id: impl Into<String>) -> Result<Self, PainError> {
        Self::with_config(format_id, message_id, DocumentConfig::default())
    }

    /// Create an empty document in the default direct debit format.
    pub fn default_format(message_id: impl Into<String>) -> Self {
        Self::empty(PainFormat::default(), message_id.into(), DocumentConfig::default())
    }

    /// Create an empty document with an explicit configuration.
    pub fn with_config(
        format_id: &str,
        message_id: impl Into<String>,
        config: DocumentConfig,
    ) -> Result<Self, PainError> {
        let format = format::resolve(format_id)?;
        Ok(Self::empty(format, message_id.into(), config))
    }

    fn empty(format: PainFormat, message_id: String, config: DocumentConfig) -> Self {
        Self {
            header: GroupHeader::new(message_id),
            format,
            config,
            batches: Vec::new(),
        }
    }

    pub fn format(&self) -> &PainFormat {
        &self.format
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Payment method every batch of this document must use.
    pub fn method(&self) -> PaymentMethod {
        self.format.method
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn batch_mut(&mut self, index: usize) -> Option<&mut Batch> {
        self.batches.get_mut(index)
    }

    /// A new, unattached batch bound to this document's method and separator.
    pub fn create_batch(&self) -> Batch {
        Batch::bound(self.format.method, self.config.clone())
    }

    /// Attach a batch and assign its id: `<message id><sep><suffix>`, where
    /// the suffix is the batch's own id if set, else its position.
    pub fn add_batch(&mut self, mut batch: Batch) -> Result<&mut Batch, PainError> {
        if batch.method != self.format.method {
            return Err(PainError::TypeMismatch {
                expected: self.format.method.kind(),
                found: batch.method.kind(),
            });
        }

        let index = self.batches.len();
        let suffix = if batch.id.is_empty() {
            index.to_string()
        } else {
            std::mem::take(&mut batch.id)
        };
        batch.id = self.config.compose(&self.header.message_id, &suffix);
        batch.config = self.config.clone();
        debug!(batch_id = %batch.id, method = batch.method.code(), "batch attached");

        self.batches.push(batch);
        Ok(&mut self.batches[index])
    }

    /// Recompute every batch aggregate, then the header aggregate.
    /// Idempotent for unchanged children.
    ///
    /// Fails with [`PainError::AmountOverflow`] if a control sum exceeds the
    /// range of [`Decimal`]; the header aggregate is left as it was.
    pub fn normalize(&mut self) -> Result<(), PainError> {
        let mut count = 0;
        let mut sum = Decimal::ZERO;
        for batch in &mut self.batches {
            batch.normalize()?;
            count += batch.transaction_count;
            sum = sum
                .checked_add(batch.control_sum)
                .ok_or_else(|| PainError::AmountOverflow {
                    entity: "document",
                    id: self.header.message_id.clone(),
                })?;
        }
        self.header.transaction_count = count;
        self.header.control_sum = sum;
        debug!(
            message_id = %self.header.message_id,
            transactions = count,
            control_sum = %sum,
            "document normalized"
        );
        Ok(())
    }
}

impl Batch {
    /// A standalone batch for a registered format. Prefer
    /// [`Document::create_batch`].
    pub fn new(format_id: &str) -> Result<Self, PainError> {
        let format = format::resolve(format_id)?;
        Ok(Self::bound(format.method, DocumentConfig::default()))
    }

    /// A new, unattached transaction bound to this batch's method.
    pub fn create_transaction(&self) -> Transaction {
        Transaction::new(self.method)
    }

    /// Attach a transaction. An empty id becomes `<batch id><sep><position>`;
    /// an explicit id is kept as given.
    pub fn add_transaction(&mut self, mut tx: Transaction) -> Result<&mut Transaction, PainError> {
        if tx.method != self.method {
            return Err(PainError::TypeMismatch {
                expected: self.method.kind(),
                found: tx.method.kind(),
            });
        }

        let index = self.transactions.len();
        if tx.id.is_empty() {
            tx.id = self.config.compose(&self.id, &index.to_string());
        }
        debug!(batch_id = %self.id, transaction_id = %tx.id, "transaction attached");

        self.transactions.push(tx);
        Ok(&mut self.transactions[index])
    }

    /// Recompute count and control sum from the current transactions.
    /// Not called automatically by [`Batch::add_transaction`].
    pub fn normalize(&mut self) -> Result<(), PainError> {
        let sum = self
            .transactions
            .iter()
            .try_fold(Decimal::ZERO, |acc, tx| acc.checked_add(tx.amount))
            .ok_or_else(|| PainError::AmountOverflow {
                entity: "batch",
                id: self.id.clone(),
            })?;
        self.transaction_count = self.transactions.len();
        self.control_sum = sum;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::DEFAULT_FORMAT;
    use rust_decimal_macros::dec;

    fn debit_tx(batch: &Batch, amount: Decimal) -> Transaction {
        let mut tx = batch.create_transaction();
        tx.amount = amount;
        tx
    }

    #[test]
    fn ids_are_composed_on_attach() {
        let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
        let batch = doc.add_batch(doc.create_batch()).unwrap();
        assert_eq!(batch.id, "MSG1.0");
        let tx = batch.create_transaction();
        let tx = batch.add_transaction(tx).unwrap();
        assert_eq!(tx.id, "MSG1.0.0");
    }

    #[test]
    fn explicit_ids() {
        let mut doc = Document::new("pain.001.001.03", "MSG1").unwrap();
        let mut batch = doc.create_batch();
        batch.id = "salaries".into();
        let batch = doc.add_batch(batch).unwrap();
        assert_eq!(batch.id, "MSG1.salaries");

        let mut tx = batch.create_transaction();
        tx.id = "T-42".into();
        assert_eq!(batch.add_transaction(tx).unwrap().id, "T-42");
    }

    #[test]
    fn custom_separator() {
        let mut doc =
            Document::with_config("pain.008.001.02", "MSG1", DocumentConfig::with_separator("-"))
                .unwrap();
        doc.add_batch(doc.create_batch()).unwrap();
        let batch = doc.add_batch(doc.create_batch()).unwrap();
        assert_eq!(batch.id, "MSG1-1");
        let tx = batch.create_transaction();
        assert_eq!(batch.add_transaction(tx).unwrap().id, "MSG1-1-0");
    }

    #[test]
    fn batch_of_other_method_is_rejected() {
        let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
        let transfer = Batch::new("pain.001.001.03").unwrap();
        assert_eq!(
            doc.add_batch(transfer).unwrap_err(),
            PainError::TypeMismatch {
                expected: "direct debit",
                found: "credit transfer",
            }
        );
        assert!(doc.batches().is_empty());
    }

    #[test]
    fn transaction_of_other_method_is_rejected() {
        let mut batch = Batch::new("pain.001.001.03").unwrap();
        let err = batch
            .add_transaction(Transaction::new(PaymentMethod::DirectDebit))
            .unwrap_err();
        assert!(matches!(err, PainError::TypeMismatch { .. }));
        assert!(batch.transactions().is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
        let batch = doc.add_batch(doc.create_batch()).unwrap();
        let a = debit_tx(batch, dec!(10.00));
        let b = debit_tx(batch, dec!(5.50));
        batch.add_transaction(a).unwrap();
        batch.add_transaction(b).unwrap();

        doc.normalize().unwrap();
        assert_eq!(doc.header.control_sum(), dec!(15.50));
        assert_eq!(doc.header.transaction_count(), 2);

        doc.normalize().unwrap();
        assert_eq!(doc.header.control_sum(), dec!(15.50));
        assert_eq!(doc.header.transaction_count(), 2);
    }

    #[test]
    fn batch_aggregates_wait_for_normalize() {
        let mut batch = Batch::new("pain.008.001.02").unwrap();
        let tx = debit_tx(&batch, dec!(3));
        batch.add_transaction(tx).unwrap();
        assert_eq!(batch.transaction_count(), 0);
        batch.normalize().unwrap();
        assert_eq!(batch.transaction_count(), 1);
        assert_eq!(batch.control_sum(), dec!(3));
    }

    #[test]
    fn overflowing_control_sum_is_an_error() {
        let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
        let batch = doc.add_batch(doc.create_batch()).unwrap();
        for _ in 0..2 {
            let tx = debit_tx(batch, Decimal::MAX);
            batch.add_transaction(tx).unwrap();
        }
        assert_eq!(
            doc.normalize(),
            Err(PainError::AmountOverflow {
                entity: "batch",
                id: "MSG1.0".into(),
            })
        );
        assert_eq!(doc.header.control_sum(), Decimal::ZERO);
    }

    #[test]
    fn overflow_across_batches_names_the_document() {
        let mut doc = Document::new("pain.008.001.02", "MSG1").unwrap();
        for _ in 0..2 {
            let batch = doc.add_batch(doc.create_batch()).unwrap();
            let tx = debit_tx(batch, Decimal::MAX);
            batch.add_transaction(tx).unwrap();
        }
        let err = doc.normalize().unwrap_err();
        assert_eq!(
            err.to_string(),
            "control sum of document 'MSG1' exceeds the decimal range"
        );
    }

    #[test]
    fn default_format_is_direct_debit() {
        let doc = Document::default_format("MSG1");
        assert_eq!(doc.format(), &format::resolve(DEFAULT_FORMAT).unwrap());
        assert_eq!(doc.method(), PaymentMethod::DirectDebit);
        assert_eq!(doc.config(), &DocumentConfig::default());
        assert!(doc.batches().is_empty());
    }
}
