//! The record-processing run loop.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use arules_model::FieldSpec;
use arules_preprocess::Preprocessor;

use crate::error::IngestError;
use crate::reader::RecordReader;

/// Malformed-record handling during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    /// The first bad record fails the whole run.
    #[default]
    Abort,
    /// Bad records are dropped (with a warning) and processing continues.
    Skip,
}

/// Counters describing one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub records_read: usize,
    pub transactions_built: usize,
    pub records_skipped: usize,
}

/// Drive the preprocessor over every record of a file.
///
/// # Errors
///
/// Returns [`IngestError`] when the file cannot be opened, a read fails, or
/// (under [`RecordPolicy::Abort`]) a record fails to encode.
pub fn run_file(
    path: &Path,
    preprocessor: &mut Preprocessor,
    specs: &[FieldSpec],
    policy: RecordPolicy,
) -> Result<IngestSummary, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = run_reader(BufReader::new(file), preprocessor, specs, policy)?;
    info!(
        path = %path.display(),
        records = summary.records_read,
        transactions = summary.transactions_built,
        skipped = summary.records_skipped,
        "ingestion finished"
    );
    Ok(summary)
}

/// Drive the preprocessor over every record of a line source.
///
/// One record is processed to completion before the next begins; the
/// preprocessor serializes ID assignment and count updates by ownership.
///
/// # Errors
///
/// Returns [`IngestError::Read`] on source failures and, under
/// [`RecordPolicy::Abort`], [`IngestError::Record`] carrying the 1-based
/// line number of the first record that failed to encode.
pub fn run_reader<R: BufRead>(
    reader: R,
    preprocessor: &mut Preprocessor,
    specs: &[FieldSpec],
    policy: RecordPolicy,
) -> Result<IngestSummary, IngestError> {
    let mut summary = IngestSummary::default();
    let mut records = RecordReader::new(reader);
    while let Some((line, record)) = records.next_record()? {
        summary.records_read += 1;
        match preprocessor.process_record(&record, specs) {
            Ok(_) => summary.transactions_built += 1,
            Err(source) => match policy {
                RecordPolicy::Abort => return Err(IngestError::Record { line, source }),
                RecordPolicy::Skip => {
                    warn!(line, error = %source, "skipping record");
                    summary.records_skipped += 1;
                }
            },
        }
    }
    Ok(summary)
}
