pub mod error;
pub mod reader;
pub mod run;

pub use error::IngestError;
pub use reader::RecordReader;
pub use run::{IngestSummary, RecordPolicy, run_file, run_reader};
