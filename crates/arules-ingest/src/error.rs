use std::path::PathBuf;

use arules_preprocess::EncodeError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read record at line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("record at line {line} could not be encoded: {source}")]
    Record {
        line: u64,
        #[source]
        source: EncodeError,
    },
}
