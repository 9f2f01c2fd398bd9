//! CSV persistence for preprocessed datasets.

use std::path::Path;

use arules_model::{Dataset, Item, UniqueItemCounts};

use crate::error::OutputError;

/// Write one row per transaction: `id,items`, the item names joined with
/// `;` in canonical (name) order.
///
/// # Errors
///
/// Returns [`OutputError::Csv`] when the writer fails.
pub fn write_transactions_csv(dataset: &Dataset, path: &Path) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| csv_error(path, source))?;
    writer
        .write_record(["id", "items"])
        .map_err(|source| csv_error(path, source))?;
    for transaction in dataset.transactions() {
        let items: Vec<&str> = transaction.items.iter().map(Item::as_str).collect();
        writer
            .write_record([transaction.id.to_string(), items.join(";")])
            .map_err(|source| csv_error(path, source))?;
    }
    flush(&mut writer, path)
}

/// Write one row per unique item: `item,count`, in item-name order.
///
/// # Errors
///
/// Returns [`OutputError::Csv`] when the writer fails.
pub fn write_counts_csv(counts: &UniqueItemCounts, path: &Path) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| csv_error(path, source))?;
    writer
        .write_record(["item", "count"])
        .map_err(|source| csv_error(path, source))?;
    for (item, count) in counts.iter() {
        writer
            .write_record([item.as_str(), count.to_string().as_str()])
            .map_err(|source| csv_error(path, source))?;
    }
    flush(&mut writer, path)
}

fn flush<W: std::io::Write>(writer: &mut csv::Writer<W>, path: &Path) -> Result<(), OutputError> {
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> OutputError {
    OutputError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
