use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::Item;

/// One input record reduced to its canonical item set.
///
/// Items are deduplicated and held in lexicographic name order, so two
/// transactions built from the same field-derived items are identical
/// regardless of input field ordering. IDs are 1-based and assigned in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub items: BTreeSet<Item>,
}

impl Transaction {
    pub fn new(id: u64, items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            id,
            items: items.into_iter().collect(),
        }
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Running per-item occurrence counts across every transaction seen so far.
///
/// Name-ordered enumeration is part of the contract: downstream consumers
/// walk the counts in item-name order. Counts are never decremented for the
/// lifetime of a preprocessing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueItemCounts {
    counts: BTreeMap<Item, u64>,
}

impl UniqueItemCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count of every item, initializing new items to 1.
    pub fn record<'a>(&mut self, items: impl IntoIterator<Item = &'a Item>) {
        for item in items {
            *self.counts.entry(item.clone()).or_insert(0) += 1;
        }
    }

    pub fn get(&self, item: &Item) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Items with their counts, in item-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Item, u64)> {
        self.counts.iter().map(|(item, count)| (item, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Owner of all transactions and unique-item counts for one run.
///
/// The dataset is appended to while records are processed and read
/// afterwards by the mining stage; accessors hand out views only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    transactions: Vec<Transaction>,
    counts: UniqueItemCounts,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished transaction and fold its items into the counts.
    pub fn append(&mut self, transaction: Transaction) {
        self.counts.record(transaction.items.iter());
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions committed so far.
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn unique_counts(&self) -> &UniqueItemCounts {
        &self.counts
    }
}
