//! JSON persistence for preprocessed datasets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use arules_model::{Dataset, Transaction, UniqueItemCounts};

use crate::error::OutputError;

/// On-disk shape of one run's transactions.
#[derive(Debug, Serialize)]
struct TransactionsDocument<'a> {
    transaction_count: usize,
    transactions: &'a [Transaction],
}

/// Write the dataset's transactions as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`OutputError`] when the file cannot be created or serialization
/// fails.
pub fn write_transactions_json(dataset: &Dataset, path: &Path) -> Result<(), OutputError> {
    let document = TransactionsDocument {
        transaction_count: dataset.count(),
        transactions: dataset.transactions(),
    };
    write_json(&document, path)
}

/// Write the name-ordered unique-item counts as a JSON object.
///
/// # Errors
///
/// Returns [`OutputError`] when the file cannot be created or serialization
/// fails.
pub fn write_counts_json(counts: &UniqueItemCounts, path: &Path) -> Result<(), OutputError> {
    write_json(counts, path)
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    // Trailing newline so the files are friendly to line-oriented tooling.
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
}
