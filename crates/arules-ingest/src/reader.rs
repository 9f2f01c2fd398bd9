//! Fixed-width record sources.

use std::io::BufRead;

use crate::error::IngestError;

/// Yields fixed-width records from a line-oriented source, tracking
/// 1-based line numbers for error reporting.
///
/// Line terminators are stripped but trailing field padding is kept: the
/// character offsets of a fixed-width layout address the padded record.
/// Blank lines are skipped and never reach the preprocessor.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    line: u64,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    /// Next non-blank record with its line number, or `None` at EOF.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Read`] when the underlying source fails.
    pub fn next_record(&mut self) -> Result<Option<(u64, String)>, IngestError> {
        loop {
            let mut buffer = String::new();
            let read = self
                .inner
                .read_line(&mut buffer)
                .map_err(|source| IngestError::Read {
                    line: self.line + 1,
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;
            while buffer.ends_with('\n') || buffer.ends_with('\r') {
                buffer.pop();
            }
            if buffer.trim().is_empty() {
                continue;
            }
            return Ok(Some((self.line, buffer)));
        }
    }
}
