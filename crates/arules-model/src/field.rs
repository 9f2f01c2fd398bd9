use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SpecError;

/// 1-based inclusive character span of a field within a fixed-width record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters the span covers. Only meaningful for a
    /// validated span.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Allowed raw-code window for categorical fields.
///
/// The default of `[-9, 25]` reflects the survey codebooks this tool was
/// built against (negative codes mark missing/legitimate-skip values);
/// layouts for other datasets override it per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRange {
    pub min: i64,
    pub max: i64,
}

impl Default for CodeRange {
    fn default() -> Self {
        Self { min: -9, max: 25 }
    }
}

impl CodeRange {
    pub fn contains(&self, code: i64) -> bool {
        code >= self.min && code <= self.max
    }
}

/// Encoding rule for one field, carrying only the parameters that rule
/// needs. Checked once by [`FieldSpec::validate`] at configuration-load
/// time, never per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "encoding", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    /// Direct value-map lookup by raw integer code.
    Binary {
        #[serde(deserialize_with = "code_map")]
        values: BTreeMap<i64, String>,
    },

    /// Value-map lookup with an optional shared OTHERS bucket and a
    /// configurable raw-code domain guard.
    Categorical {
        #[serde(deserialize_with = "code_map")]
        values: BTreeMap<i64, String>,
        #[serde(default)]
        others: Option<BTreeSet<i64>>,
        #[serde(default)]
        code_range: CodeRange,
    },

    /// Continuous value discretized into `intervals` equal-width bins
    /// over `[floor(min), ceil(max)]`.
    Continuous { min: f64, max: f64, intervals: usize },
}

/// JSON object keys are always strings, so value-map codes arrive quoted;
/// parse them back into integers.
fn code_map<'de, D>(deserializer: D) -> Result<BTreeMap<i64, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut values = BTreeMap::new();
    for (key, label) in raw {
        let code = key
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid code key {key:?}")))?;
        values.insert(code, label);
    }
    Ok(values)
}

impl FieldKind {
    /// Canonical encoding name as it appears in layout documents.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Binary { .. } => "BINARY",
            FieldKind::Categorical { .. } => "CATEGORICAL",
            FieldKind::Continuous { .. } => "CONTINUOUS",
        }
    }
}

/// One field of a fixed-width record layout: where it sits and how its raw
/// value becomes an item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub column: String,
    #[serde(flatten)]
    pub span: ColumnSpan,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Check the structural invariants of this spec.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] naming the offending column when the span is
    /// inverted or 0-based, a value map is empty, interval parameters are
    /// degenerate, or an others-bucket code falls outside the code range.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.span.start == 0 || self.span.start > self.span.end {
            return Err(SpecError::InvalidSpan {
                column: self.column.clone(),
                start: self.span.start,
                end: self.span.end,
            });
        }
        match &self.kind {
            FieldKind::Binary { values } => {
                if values.is_empty() {
                    return Err(SpecError::EmptyValues {
                        column: self.column.clone(),
                    });
                }
            }
            FieldKind::Categorical {
                values,
                others,
                code_range,
            } => {
                if values.is_empty() {
                    return Err(SpecError::EmptyValues {
                        column: self.column.clone(),
                    });
                }
                if code_range.min > code_range.max {
                    return Err(SpecError::InvalidCodeRange {
                        column: self.column.clone(),
                        min: code_range.min,
                        max: code_range.max,
                    });
                }
                if let Some(bucket) = others {
                    for code in bucket {
                        if !code_range.contains(*code) {
                            return Err(SpecError::OthersOutsideRange {
                                column: self.column.clone(),
                                code: *code,
                            });
                        }
                    }
                }
            }
            FieldKind::Continuous {
                min,
                max,
                intervals,
            } => {
                if *intervals == 0 {
                    return Err(SpecError::InvalidIntervals {
                        column: self.column.clone(),
                    });
                }
                // floor(min) == ceil(max) would produce zero-width bins.
                if !min.is_finite() || !max.is_finite() || min > max || min.floor() >= max.ceil() {
                    return Err(SpecError::InvalidBounds {
                        column: self.column.clone(),
                        min: *min,
                        max: *max,
                    });
                }
            }
        }
        Ok(())
    }
}
