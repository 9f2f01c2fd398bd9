//! Field-value encoding: one raw field value plus its spec becomes one
//! canonical item name.

use arules_model::{FieldKind, FieldSpec, Item};

use crate::error::EncodeError;
use crate::intervals::IntervalTable;

/// Label shared by every code collapsed into a categorical others bucket.
pub const OTHERS_LABEL: &str = "OTHERS";

/// Encode one raw field value against its spec.
///
/// The raw text is parsed as an integer code (binary, categorical) or a
/// float (continuous) before the encoding rule is applied.
///
/// # Errors
///
/// Returns an [`EncodeError`] for unparseable text, codes outside the value
/// map or domain guard, and continuous values that match no interval.
pub fn encode(raw: &str, spec: &FieldSpec) -> Result<Item, EncodeError> {
    match &spec.kind {
        FieldKind::Binary { values } => {
            let code = parse_code(raw, &spec.column)?;
            lookup(values, code, &spec.column)
        }
        FieldKind::Categorical {
            values,
            others,
            code_range,
        } => {
            let code = parse_code(raw, &spec.column)?;
            if !code_range.contains(code) {
                return Err(EncodeError::OutOfRange {
                    column: spec.column.clone(),
                    code,
                    min: code_range.min,
                    max: code_range.max,
                });
            }
            // The bucket wins over a direct value-map entry: several raw
            // categories collapse into the one shared label.
            if let Some(bucket) = others {
                if bucket.contains(&code) {
                    return Ok(Item::new(&spec.column, OTHERS_LABEL));
                }
            }
            lookup(values, code, &spec.column)
        }
        FieldKind::Continuous {
            min,
            max,
            intervals,
        } => {
            let value = parse_value(raw, &spec.column)?;
            let table = IntervalTable::build(*min, *max, *intervals);
            match table.locate(value) {
                Some(bin) => Ok(Item::new(&spec.column, &bin.label())),
                None => Err(EncodeError::NoMatchingInterval {
                    column: spec.column.clone(),
                    value,
                }),
            }
        }
    }
}

fn lookup(
    values: &std::collections::BTreeMap<i64, String>,
    code: i64,
    column: &str,
) -> Result<Item, EncodeError> {
    match values.get(&code) {
        Some(label) => Ok(Item::new(column, label)),
        None => Err(EncodeError::UnmappedCode {
            column: column.to_string(),
            code,
        }),
    }
}

fn parse_code(raw: &str, column: &str) -> Result<i64, EncodeError> {
    raw.trim().parse().map_err(|_| EncodeError::InvalidNumber {
        column: column.to_string(),
        raw: raw.to_string(),
    })
}

fn parse_value(raw: &str, column: &str) -> Result<f64, EncodeError> {
    raw.trim().parse().map_err(|_| EncodeError::InvalidNumber {
        column: column.to_string(),
        raw: raw.to_string(),
    })
}
