//! part_b — transient behaviour from a large backlog.
//!
//! For every (λ, μ1, μ2) on the lab grid, runs one simulation over T = 2000
//! starting with 1000 customers at Server 1, and exports its queue-length
//! trajectory for plotting.  Writes:
//!
//! - `queue_lengths_{n}.csv`      — `time,queue1_length,queue2_length`
//! - `part_b_simulation_log.txt`  — every event of every run

mod common;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};

use tq_output::{EventLogObserver, write_trajectory_csv};
use tq_sim::{NoopObserver, SimObserver};
use tq_sweep::{PointOutcome, SweepGrid, SweepSummary, run_sweep};

use common::{Args, init_tracing, load_grid};

const LOG_FILE: &str = "part_b_simulation_log.txt";

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)?;

    let grid = load_grid(&args, SweepGrid::part_b)?;
    info!(points = grid.len(), initial_queue1 = grid.initial_queue1, "part B trajectories");

    let (summary, written) = if args.no_event_log {
        export(&grid, &mut NoopObserver, &args)
    } else {
        let mut log = EventLogObserver::create(&args.out_dir.join(LOG_FILE))?;
        let out = export(&grid, &mut log, &args);
        log.finish()?;
        if let Some(e) = log.take_error() {
            error!("event log error: {e}");
        }
        out
    };

    println!(
        "Simulation complete. {} trajectories saved to '{}' as queue_lengths_1.csv to queue_lengths_{}.csv ({} skipped)",
        written,
        args.out_dir.display(),
        written,
        summary.skipped
    );
    Ok(())
}

fn export<O: SimObserver>(grid: &SweepGrid, observer: &mut O, args: &Args) -> (SweepSummary, usize) {
    let mut written = 0;
    let summary = run_sweep(grid, observer, |outcome| {
        let PointOutcome::Completed { point, batch } = outcome else {
            return;
        };
        let Some(trajectory) = batch.trajectories.first() else {
            return;
        };
        let path = args.out_dir.join(format!("queue_lengths_{}.csv", written + 1));
        match write_trajectory_csv(&path, trajectory) {
            Ok(()) => {
                written += 1;
                info!(
                    lambda = point.lambda,
                    mu1 = point.mu1,
                    mu2 = point.mu2,
                    snapshots = trajectory.len(),
                    path = %path.display(),
                    "trajectory written"
                );
            }
            Err(e) => warn!(path = %path.display(), "trajectory write failed: {e}"),
        }
    });
    (summary, written)
}
