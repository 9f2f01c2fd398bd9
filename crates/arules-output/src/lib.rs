//! Persistence for preprocessed datasets.
//!
//! The mining stage consumes the in-memory [`arules_model::Dataset`]
//! directly; these writers exist for external consumers and inspection:
//!
//! - **JSON**: one document with the transaction count and the ordered
//!   transactions, plus a name-ordered counts object
//! - **CSV**: `id,items` rows and `item,count` rows

mod dataset_csv;
mod dataset_json;
mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use arules_model::Dataset;

pub use crate::dataset_csv::{write_counts_csv, write_transactions_csv};
pub use crate::dataset_json::{write_counts_json, write_transactions_json};
pub use crate::error::OutputError;

/// Which persistence formats to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl OutputFormat {
    fn wants_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    fn wants_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }
}

/// Write every requested output file into `output_dir`, creating the
/// directory when needed. Returns the paths written.
///
/// # Errors
///
/// Returns [`OutputError`] on the first writer failure.
pub fn write_outputs(
    dataset: &Dataset,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, OutputError> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let mut written = Vec::new();
    if format.wants_json() {
        let transactions = output_dir.join("transactions.json");
        write_transactions_json(dataset, &transactions)?;
        written.push(transactions);
        let counts = output_dir.join("unique_counts.json");
        write_counts_json(dataset.unique_counts(), &counts)?;
        written.push(counts);
    }
    if format.wants_csv() {
        let transactions = output_dir.join("transactions.csv");
        write_transactions_csv(dataset, &transactions)?;
        written.push(transactions);
        let counts = output_dir.join("unique_counts.csv");
        write_counts_csv(dataset.unique_counts(), &counts)?;
        written.push(counts);
    }
    info!(dir = %output_dir.display(), files = written.len(), "outputs written");
    Ok(written)
}
