use thiserror::Error;

/// Failures raised synchronously at the offending field while encoding one
/// record. Never retried here; skip-vs-abort policy belongs to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("column {column}: code {code} is not in the value map")]
    UnmappedCode { column: String, code: i64 },

    #[error("column {column}: code {code} outside allowed range [{min}, {max}]")]
    OutOfRange {
        column: String,
        code: i64,
        min: i64,
        max: i64,
    },

    #[error("column {column}: value {value} does not fall strictly inside any interval")]
    NoMatchingInterval { column: String, value: f64 },

    #[error("column {column}: cannot parse {raw:?} as a number")]
    InvalidNumber { column: String, raw: String },

    #[error("column {column}: span {start}..={end} exceeds record length {len}")]
    ShortRecord {
        column: String,
        start: usize,
        end: usize,
        len: usize,
    },
}
