//! The `ResultWriter` trait implemented by all results backends.

use crate::{OutputResult, ResultRow};

/// Trait implemented by the CSV and SQLite results writers.
pub trait ResultWriter {
    /// Append one experiment row.
    fn write_result(&mut self, row: &ResultRow) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
