//! `tq-output` — output collaborators for the tandem-queue simulator.
//!
//! | Item                     | Output                                          |
//! |--------------------------|-------------------------------------------------|
//! | [`EventLogObserver`]     | Text event log, one line per applied event      |
//! | [`CsvResultWriter`]      | Results table (`ExperimentPoint` rows)          |
//! | [`write_trajectory_csv`] | One run's `(time, q1, q2)` snapshots            |
//! | `SqliteResultWriter`     | Results table in SQLite (feature `sqlite`)      |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tq_output::{CsvResultWriter, EventLogObserver, ResultWriter};
//!
//! let mut log = EventLogObserver::create(Path::new("events.log"))?;
//! let mut results = CsvResultWriter::create(Path::new("results.csv"))?;
//! run_sweep(&grid, &mut log, |outcome| { /* results.write_result(..) */ });
//! log.finish()?;
//! results.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod event_log;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::{CsvResultWriter, write_trajectory_csv};
pub use error::{OutputError, OutputResult};
pub use event_log::EventLogObserver;
pub use row::ResultRow;
pub use writer::ResultWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteResultWriter;
