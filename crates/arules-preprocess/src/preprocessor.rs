//! End-to-end preprocessing facade.

use arules_model::{Dataset, FieldSpec};
use tracing::trace;

use crate::builder::{IdPolicy, TransactionBuilder};
use crate::error::EncodeError;

/// Owns the transaction builder and the accumulating dataset for one run.
///
/// All aggregation state (the transaction sequence, the unique-item counts,
/// the ID counter) lives here; nothing is ambient. One record is processed
/// to completion before the next begins.
#[derive(Debug, Default)]
pub struct Preprocessor {
    builder: TransactionBuilder,
    dataset: Dataset,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IdPolicy) -> Self {
        Self {
            builder: TransactionBuilder::with_policy(policy),
            dataset: Dataset::new(),
        }
    }

    /// Encode one record and commit its transaction to the dataset.
    ///
    /// Returns the assigned transaction ID.
    ///
    /// # Errors
    ///
    /// Propagates the first [`EncodeError`]; nothing is committed for the
    /// failed record.
    pub fn process_record(
        &mut self,
        record: &str,
        specs: &[FieldSpec],
    ) -> Result<u64, EncodeError> {
        let transaction = self.builder.build(record, specs)?;
        let id = transaction.id;
        trace!(id, items = transaction.len(), "committed transaction");
        self.dataset.append(transaction);
        Ok(id)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Hand the accumulated dataset to the mining stage.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}
