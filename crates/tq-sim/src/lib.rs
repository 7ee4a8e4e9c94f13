//! `tq-sim` — the discrete-event engine for a two-stage tandem queue.
//!
//! An arrival stream (rate λ) feeds Server 1 (rate μ1), whose departures
//! feed Server 2 (rate μ2).  Every holding time is exponential.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`clock`]    | `EventClock` — three optional timers, ordered pop        |
//! | [`state`]    | `NetworkState`, transition rules, `Transition`           |
//! | [`run`]      | `Run`, `RunResult`, `simulate_run`                       |
//! | [`batch`]    | `run_batch`, `BatchResult`                               |
//! | [`observer`] | `SimObserver` log sink, `EventRecord`, `NoopObserver`    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the repetitions of a batch on Rayon's pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tq_core::{QueueParams, RunConfig};
//! use tq_sim::{NoopObserver, run_batch};
//!
//! let params = QueueParams::new(1.0, 2.0, 3.0, 1_000.0, 0)?;
//! let config = RunConfig::new(100, Some(42))?;
//! let batch = run_batch(&params, &config, &mut NoopObserver)?;
//! println!("L ≈ {:.3}", batch.mean);
//! ```

pub mod batch;
pub mod clock;
pub mod error;
pub mod observer;
pub mod run;
pub mod state;

#[cfg(test)]
mod tests;

pub use batch::{BatchResult, run_batch};
pub use clock::EventClock;
pub use error::{SimError, SimResult};
pub use observer::{EventRecord, NoopObserver, SimObserver};
pub use run::{Run, RunResult, simulate_run};
pub use state::{NetworkState, TimerAction, Transition};
