//! `tq-sweep` — repeat the tandem-queue simulation over a parameter grid.
//!
//! For every (λ, μ1, μ2, T) in a [`SweepGrid`], run a seeded batch with
//! `tq_sim::run_batch`, evaluate the closed-form prediction, and emit an
//! [`ExperimentPoint`].  Invalid points are skipped and reported; unstable
//! points are simulated with an undefined comparison.
//!
//! ```rust,ignore
//! let grid = SweepGrid::part_a(Some(42))?;
//! run_sweep(&grid, &mut NoopObserver, |outcome| {
//!     if let PointOutcome::Completed { point, .. } = outcome {
//!         println!("{point}");
//!     }
//! });
//! ```

pub mod error;
pub mod experiment;
pub mod grid;


pub use error::{SweepError, SweepResult};
pub use experiment::{ExperimentPoint, PointOutcome, SweepSummary, run_point, run_sweep};
pub use grid::{GridPoint, SweepGrid};
