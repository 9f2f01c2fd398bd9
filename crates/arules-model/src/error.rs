use thiserror::Error;

/// Validation failures raised once, when a field spec is checked at
/// configuration-load time. Per-record encoding never re-validates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("column {column}: invalid span {start}..{end} (1-based, start <= end required)")]
    InvalidSpan {
        column: String,
        start: usize,
        end: usize,
    },

    #[error("column {column}: value map is empty")]
    EmptyValues { column: String },

    #[error("column {column}: interval count must be at least 1")]
    InvalidIntervals { column: String },

    #[error("column {column}: bounds min={min} max={max} do not span an interval")]
    InvalidBounds { column: String, min: f64, max: f64 },

    #[error("column {column}: code range [{min}, {max}] is inverted")]
    InvalidCodeRange { column: String, min: i64, max: i64 },

    #[error("column {column}: others-bucket code {code} lies outside the code range")]
    OthersOutsideRange { column: String, code: i64 },
}
