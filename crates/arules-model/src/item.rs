use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical symbolic name for "column X took value Y".
///
/// The name has the fixed form `<COLUMN>_IS_<LABEL>`, uppercased, and is
/// immutable once produced. Some attributes carry labels like
/// `MISSING_VALUE` that only make sense together with their column name,
/// which is why the column is always part of the item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Build the item name for a column/label pair.
    pub fn new(column: &str, label: &str) -> Self {
        Self(format!(
            "{}_IS_{}",
            column.to_uppercase(),
            label.to_uppercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
