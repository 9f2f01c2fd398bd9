//! Transaction construction over fixed-width records.

use std::collections::BTreeSet;

use arules_model::{FieldSpec, Item, Transaction};

use crate::encode::encode;
use crate::error::EncodeError;

/// When the transaction counter advances relative to field encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Advance once per build attempt, even when a field fails. A rejected
    /// record therefore consumes an ID and leaves a gap.
    #[default]
    Eager,
    /// Advance only after every field of the record encoded successfully,
    /// keeping committed IDs contiguous.
    Deferred,
}

/// Assigns sequential 1-based IDs and turns raw records into canonical
/// transactions.
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    last_id: u64,
    policy: IdPolicy,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IdPolicy) -> Self {
        Self {
            last_id: 0,
            policy,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Build the canonical transaction for one record.
    ///
    /// All-or-nothing: the first field error aborts the record and no
    /// partial item set escapes the builder.
    ///
    /// # Errors
    ///
    /// Propagates the first [`EncodeError`] from field extraction or
    /// encoding. Under [`IdPolicy::Eager`] the failed attempt still
    /// consumed an ID.
    pub fn build(&mut self, record: &str, specs: &[FieldSpec]) -> Result<Transaction, EncodeError> {
        if self.policy == IdPolicy::Eager {
            self.last_id += 1;
        }
        let items = collect_items(record, specs)?;
        if self.policy == IdPolicy::Deferred {
            self.last_id += 1;
        }
        Ok(Transaction::new(self.last_id, items))
    }
}

fn collect_items(record: &str, specs: &[FieldSpec]) -> Result<BTreeSet<Item>, EncodeError> {
    let mut items = BTreeSet::new();
    for spec in specs {
        let raw = extract(record, spec)?;
        items.insert(encode(raw, spec)?);
    }
    Ok(items)
}

/// Slice the spec's 1-based inclusive span out of the record.
fn extract<'a>(record: &'a str, spec: &FieldSpec) -> Result<&'a str, EncodeError> {
    record
        .get(spec.span.start - 1..spec.span.end)
        .ok_or_else(|| EncodeError::ShortRecord {
            column: spec.column.clone(),
            start: spec.span.start,
            end: spec.span.end,
            len: record.len(),
        })
}
