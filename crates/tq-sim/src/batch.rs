//! Monte Carlo repetition of a run for one parameter point.

use tracing::info;

use tq_core::{QueueParams, RunConfig, Snapshot, VariateSource, entropy_seed};
use tq_model::batch_mean;

use crate::{Run, RunResult, SimObserver, SimResult};

/// Aggregate of `N` independent runs with the same parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchResult {
    /// Mean of the per-run time-weighted averages.
    pub mean:         f64,
    /// One average per run, in run-index order.
    pub run_averages: Vec<f64>,
    /// One snapshot sequence per run, in run-index order.
    pub trajectories: Vec<Vec<Snapshot>>,
    /// Root seed the per-run streams were derived from.  Re-running with
    /// `RunConfig::new(n, Some(root_seed))` reproduces this batch.
    pub root_seed:    u64,
}

impl BatchResult {
    /// `(mean occupancy, per-run snapshot sequences)`.
    pub fn into_parts(self) -> (f64, Vec<Vec<Snapshot>>) {
        (self.mean, self.trajectories)
    }
}

/// Run `config.repetitions()` independent timelines and average them.
///
/// Run `i` draws from `VariateSource::for_run(root_seed, i)`.  Observer
/// callbacks are delivered run by run in index order, also with the
/// `parallel` feature.
pub fn run_batch<O: SimObserver>(
    params:   &QueueParams,
    config:   &RunConfig,
    observer: &mut O,
) -> SimResult<BatchResult> {
    let root_seed = config.seed().unwrap_or_else(entropy_seed);
    let results = run_all(params, config.repetitions(), root_seed, observer)?;

    let run_averages: Vec<f64> = results.iter().map(|r| r.average).collect();
    let mean = batch_mean(&run_averages)?;
    let trajectories = results.into_iter().map(|r| r.snapshots).collect();

    info!(
        lambda = params.arrival_rate().get(),
        mu1 = params.service_rate_1().get(),
        mu2 = params.service_rate_2().get(),
        horizon = params.horizon().value(),
        runs = run_averages.len(),
        root_seed,
        mean,
        "batch finished"
    );

    Ok(BatchResult { mean, run_averages, trajectories, root_seed })
}

#[cfg(not(feature = "parallel"))]
fn run_all<O: SimObserver>(
    params:    &QueueParams,
    runs:      usize,
    root_seed: u64,
    observer:  &mut O,
) -> SimResult<Vec<RunResult>> {
    (0..runs)
        .map(|i| {
            Run::new(params, VariateSource::for_run(root_seed, i as u64))
                .with_index(i)
                .run(&mut *observer)
        })
        .collect()
}

/// Runs execute on Rayon's pool with events buffered per run, then the
/// buffers are replayed to `observer` sequentially in run-index order.
#[cfg(feature = "parallel")]
fn run_all<O: SimObserver>(
    params:    &QueueParams,
    runs:      usize,
    root_seed: u64,
    observer:  &mut O,
) -> SimResult<Vec<RunResult>> {
    use rayon::prelude::*;

    use crate::EventRecord;

    struct Buffer {
        enabled: bool,
        events:  Vec<EventRecord>,
    }

    impl SimObserver for Buffer {
        fn on_event(&mut self, event: &EventRecord) {
            if self.enabled {
                self.events.push(*event);
            }
        }
    }

    let enabled = observer.wants_events();
    let outcomes: Vec<SimResult<(RunResult, Vec<EventRecord>)>> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut buffer = Buffer { enabled, events: Vec::new() };
            let result = Run::new(params, VariateSource::for_run(root_seed, i as u64))
                .with_index(i)
                .run(&mut buffer)?;
            Ok((result, buffer.events))
        })
        .collect();

    let mut results = Vec::with_capacity(runs);
    for (i, outcome) in outcomes.into_iter().enumerate() {
        let (result, events) = outcome?;
        observer.on_run_start(i, params);
        for event in &events {
            observer.on_event(event);
        }
        observer.on_run_end(i, &result);
        results.push(result);
    }
    Ok(results)
}
