//! part_a — steady-state sweep of the tandem queue.
//!
//! Runs 100 repetitions for every (λ, μ1, μ2, T) on the lab grid, starting
//! from an empty network, and compares the simulated mean occupancy with
//! the M/M/1 tandem prediction.  Writes:
//!
//! - `queue_simulation_results.csv` — one row per grid point
//! - `part_a_simulation_log.txt`    — every event of every run
//! - `experiment_results.db`        — same rows in SQLite (`sqlite` feature)

mod common;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use tq_output::{CsvResultWriter, EventLogObserver, OutputError, ResultRow, ResultWriter};
use tq_sim::{NoopObserver, SimObserver};
use tq_sweep::{PointOutcome, SweepGrid, SweepSummary, run_sweep};

use common::{Args, init_tracing, load_grid};

const RESULTS_FILE: &str = "queue_simulation_results.csv";
const LOG_FILE:     &str = "part_a_simulation_log.txt";
#[cfg(feature = "sqlite")]
const DB_FILE:      &str = "experiment_results.db";

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)?;

    let grid = load_grid(&args, SweepGrid::part_a)?;
    info!(points = grid.len(), runs_per_point = grid.run.repetitions(), "part A sweep");

    let mut writers: Vec<Box<dyn ResultWriter>> =
        vec![Box::new(CsvResultWriter::create(&args.out_dir.join(RESULTS_FILE))?)];
    #[cfg(feature = "sqlite")]
    writers.push(Box::new(tq_output::SqliteResultWriter::new(&args.out_dir.join(DB_FILE))?));
    let t0 = Instant::now();

    let summary = if args.no_event_log {
        sweep(&grid, &mut NoopObserver, &mut writers)
    } else {
        let mut log = EventLogObserver::create(&args.out_dir.join(LOG_FILE))?;
        let summary = sweep(&grid, &mut log, &mut writers);
        log.finish()?;
        if let Some(e) = log.take_error() {
            error!("event log error: {e}");
        }
        summary
    };
    for writer in &mut writers {
        writer.finish()?;
    }

    println!(
        "{} points simulated, {} skipped in {:.1} s",
        summary.completed,
        summary.skipped,
        t0.elapsed().as_secs_f64()
    );
    println!(
        "Results saved to '{}'",
        args.out_dir.join(RESULTS_FILE).display()
    );
    Ok(())
}

fn sweep<O: SimObserver>(
    grid:     &SweepGrid,
    observer: &mut O,
    writers:  &mut [Box<dyn ResultWriter>],
) -> SweepSummary {
    let mut write_error: Option<OutputError> = None;
    let summary = run_sweep(grid, observer, |outcome| match outcome {
        PointOutcome::Completed { point, .. } => {
            println!("{point}");
            let row = ResultRow::from(&point);
            for writer in writers.iter_mut() {
                if let Err(e) = writer.write_result(&row) {
                    write_error.get_or_insert(e);
                }
            }
        }
        PointOutcome::Skipped { at, reason } => {
            println!("Skipped λ={}, μ1={}, μ2={}, T={}: {reason}", at.lambda, at.mu1, at.mu2, at.horizon);
        }
    });
    if let Some(e) = write_error {
        error!("results write error: {e}");
    }
    summary
}
