//! Layout documents: the ordered field specs applied to every record.
//!
//! A layout is a JSON document of the form:
//!
//! ```json
//! {
//!   "name": "student-survey",
//!   "fields": [
//!     { "column": "SEX", "start": 24, "end": 25, "encoding": "BINARY",
//!       "values": { "1": "MALE", "2": "FEMALE" } },
//!     { "column": "RACE", "start": 26, "end": 27, "encoding": "CATEGORICAL",
//!       "values": { "1": "AMER", "3": "BLACK" }, "others": [3, 4, 5] },
//!     { "column": "SCORE", "start": 106, "end": 111, "encoding": "CONTINUOUS",
//!       "min": 20.91, "max": 81.04, "intervals": 5 }
//!   ]
//! }
//! ```
//!
//! Every spec is validated once here, at load time; the per-record encoding
//! path assumes a checked layout.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use arules_model::FieldSpec;

use crate::error::LayoutError;

/// A named, ordered field layout. Field order in the document is the
/// encoding order for every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl Layout {
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Load and validate a layout document.
///
/// # Errors
///
/// Returns a [`LayoutError`] when the file cannot be read or parsed, when
/// it declares no fields or a column twice, or when any field spec fails
/// its structural checks.
pub fn load_layout(path: &Path) -> Result<Layout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let layout: Layout = serde_json::from_str(&text).map_err(|source| LayoutError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if layout.fields.is_empty() {
        return Err(LayoutError::Empty {
            path: path.to_path_buf(),
        });
    }
    let mut seen = BTreeSet::new();
    for field in &layout.fields {
        if !seen.insert(field.column.to_uppercase()) {
            return Err(LayoutError::DuplicateColumn {
                path: path.to_path_buf(),
                column: field.column.clone(),
            });
        }
        field.validate().map_err(|source| LayoutError::Spec {
            path: path.to_path_buf(),
            source,
        })?;
    }
    debug!(name = %layout.name, fields = layout.fields.len(), "loaded layout");
    Ok(layout)
}
