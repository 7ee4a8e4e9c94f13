//! Time integration of the occupancy step function.

use tq_core::{SimTime, Snapshot};

use crate::{ModelError, ModelResult};

/// Time-weighted mean of `queue1 + queue2` over the run, divided by `horizon`.
///
/// Each snapshot's occupancy is weighted by the gap to the next snapshot:
///
/// ```text
/// Σ (q1_i + q2_i) * (t_{i+1} - t_i)  /  horizon
/// ```
///
/// With fewer than two snapshots there is no interval to weight and the
/// result is 0.  A final snapshot stamped past `horizon` (a service
/// completion that was already scheduled when the horizon was crossed) is
/// integrated as-is, not clamped.  Duplicate timestamps contribute nothing.
pub fn time_weighted_average(snapshots: &[Snapshot], horizon: SimTime) -> f64 {
    debug_assert!(horizon.value() > 0.0, "horizon is validated by QueueParams");
    if snapshots.len() < 2 {
        return 0.0;
    }
    let area: f64 = snapshots
        .windows(2)
        .map(|w| w[0].total() as f64 * w[1].time.since(w[0].time))
        .sum();
    area / horizon.value()
}

/// Arithmetic mean of per-run averages for one parameter point.
pub fn batch_mean(run_averages: &[f64]) -> ModelResult<f64> {
    if run_averages.is_empty() {
        return Err(ModelError::EmptyBatch);
    }
    Ok(run_averages.iter().sum::<f64>() / run_averages.len() as f64)
}
