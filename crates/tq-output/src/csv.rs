//! CSV output backends.
//!
//! - [`CsvResultWriter`] — the results table, one row per grid point.
//! - [`write_trajectory_csv`] — one run's snapshot sequence, for plotting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tq_core::Snapshot;

use crate::writer::ResultWriter;
use crate::{OutputResult, ResultRow};

pub const RESULT_HEADER: [&str; 7] = [
    "lambda",
    "mu1",
    "mu2",
    "T",
    "average_customers",
    "theoretical_value",
    "error_percent",
];

pub const TRAJECTORY_HEADER: [&str; 3] = ["time", "queue1_length", "queue2_length"];

/// Writes the results table to a CSV file.
///
/// Undefined theoretical values and error percentages become empty fields.
pub struct CsvResultWriter<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvResultWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvResultWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(RESULT_HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

fn optional(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl<W: Write> ResultWriter for CsvResultWriter<W> {
    fn write_result(&mut self, row: &ResultRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.lambda.to_string(),
            row.mu1.to_string(),
            row.mu2.to_string(),
            row.horizon.to_string(),
            row.average_customers.to_string(),
            optional(row.theoretical_value),
            optional(row.error_percent),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

/// Write one snapshot sequence as `time,queue1_length,queue2_length` rows.
pub fn write_trajectory_csv(path: &Path, snapshots: &[Snapshot]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(TRAJECTORY_HEADER)?;
    for s in snapshots {
        w.write_record(&[
            s.time.to_string(),
            s.queue1.to_string(),
            s.queue2.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
