use std::path::PathBuf;

use arules_model::SpecError;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid field spec in {path}: {source}")]
    Spec {
        path: PathBuf,
        #[source]
        source: SpecError,
    },

    #[error("layout {path} declares no fields")]
    Empty { path: PathBuf },

    #[error("layout {path} declares column {column} more than once")]
    DuplicateColumn { path: PathBuf, column: String },
}
