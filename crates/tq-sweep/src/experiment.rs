//! Running grid points and comparing them with theory.

use std::fmt;

use tracing::{info, warn};

use tq_core::{QueueParams, RunConfig};
use tq_model::{Comparison, expected_occupancy_for, percentage_error};
use tq_sim::{BatchResult, SimObserver, run_batch};

use crate::{GridPoint, SweepError, SweepGrid, SweepResult};

/// One row of the results table.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentPoint {
    pub lambda:              f64,
    pub mu1:                 f64,
    pub mu2:                 f64,
    pub horizon:             f64,
    pub simulated_average:   f64,
    /// `None` when the system is unstable and no steady state exists.
    pub theoretical_average: Option<f64>,
    pub error:               Comparison,
}

impl fmt::Display for ExperimentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "For T={}, λ={}, μ1={}, μ2={}, Average Number of Customers in System: {:.2}, ",
            self.horizon, self.lambda, self.mu1, self.mu2, self.simulated_average
        )?;
        match self.theoretical_average {
            Some(t) => write!(f, "Theoretical Value: {t:.2}, Error: {}", self.error),
            None    => write!(f, "Theoretical Value: undefined (unstable), Error: {}", self.error),
        }
    }
}

/// What happened at one grid point.
#[derive(Debug)]
pub enum PointOutcome {
    Completed {
        point: ExperimentPoint,
        batch: BatchResult,
    },
    /// The point could not be run.  The sweep carries on with the next one.
    Skipped {
        at:     GridPoint,
        reason: SweepError,
    },
}

/// Tally of a finished sweep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub completed: usize,
    pub skipped:   usize,
}

/// Simulate one validated parameter set and compare it with theory.
///
/// Unstable systems are still simulated; they come back with
/// `theoretical_average = None` and `Comparison::Undefined`.
pub fn run_point<O: SimObserver>(
    params:   &QueueParams,
    run:      &RunConfig,
    observer: &mut O,
) -> SweepResult<(ExperimentPoint, BatchResult)> {
    let batch = run_batch(params, run, observer)?;

    let (theoretical_average, error) = match expected_occupancy_for(params) {
        Ok(theory) => (Some(theory), percentage_error(theory, batch.mean)),
        Err(e) => {
            warn!(error = %e, "no theoretical comparison for this point");
            (None, Comparison::Undefined)
        }
    };

    let point = ExperimentPoint {
        lambda:              params.arrival_rate().get(),
        mu1:                 params.service_rate_1().get(),
        mu2:                 params.service_rate_2().get(),
        horizon:             params.horizon().value(),
        simulated_average:   batch.mean,
        theoretical_average,
        error,
    };
    Ok((point, batch))
}

/// Walk every point of `grid`, handing each outcome to `on_point` as soon as
/// it is ready.  A failing point is reported as `Skipped` and never aborts
/// the rest of the sweep.
pub fn run_sweep<O, F>(grid: &SweepGrid, observer: &mut O, mut on_point: F) -> SweepSummary
where
    O: SimObserver,
    F: FnMut(PointOutcome),
{
    let mut summary = SweepSummary::default();
    let total = grid.len();

    for (n, at) in grid.points().enumerate() {
        let outcome = QueueParams::new(at.lambda, at.mu1, at.mu2, at.horizon, grid.initial_queue1)
            .map_err(SweepError::from)
            .and_then(|params| run_point(&params, &grid.run, &mut *observer));

        match outcome {
            Ok((point, batch)) => {
                info!(point = n + 1, of = total, "{point}");
                summary.completed += 1;
                on_point(PointOutcome::Completed { point, batch });
            }
            Err(reason) => {
                warn!(point = n + 1, of = total, ?at, %reason, "skipping grid point");
                summary.skipped += 1;
                on_point(PointOutcome::Skipped { at, reason });
            }
        }
    }
    summary
}
