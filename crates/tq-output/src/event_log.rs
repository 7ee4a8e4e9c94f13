//! `EventLogObserver<W>` — renders `SimObserver` events as a text log.
//!
//! One line per applied event, with the queue lengths found when it fired:
//!
//! ```text
//! At time 1.37: Arrival, Queue 1 Length: 0, Queue 2 Length: 0
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tq_sim::{EventRecord, RunResult, SimObserver};

use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that appends every event of every run to one writer.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the batch or sweep returns, call
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct EventLogObserver<W: Write> {
    out:        W,
    lines:      u64,
    last_error: Option<OutputError>,
}

impl EventLogObserver<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> EventLogObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0, last_error: None }
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Flush buffered lines to the underlying writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect an in-memory log).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> SimObserver for EventLogObserver<W> {
    fn on_event(&mut self, e: &EventRecord) {
        let result = writeln!(
            self.out,
            "At time {:.2}: {}, Queue 1 Length: {}, Queue 2 Length: {}",
            e.time, e.kind, e.queue1, e.queue2
        );
        if result.is_ok() {
            self.lines += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _run: usize, _result: &RunResult) {
        let result = self.out.flush();
        self.store_err(result);
    }
}
