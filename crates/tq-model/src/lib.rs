//! `tq-model` — what a run's snapshots mean, and what theory says they
//! should mean.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`aggregate`] | `time_weighted_average`, `batch_mean`                     |
//! | [`theory`]    | `expected_occupancy`, `percentage_error`, `Comparison`    |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                            |
//!
//! The theoretical value treats the two stations as independent M/M/1
//! queues (Jackson's theorem for a tandem line):
//!
//! ```text
//! L = ρ1 / (1 - ρ1) + ρ2 / (1 - ρ2),   ρi = λ / μi,   valid iff ρ1, ρ2 < 1
//! ```

pub mod aggregate;
pub mod error;
pub mod theory;


pub use aggregate::{batch_mean, time_weighted_average};
pub use error::{ModelError, ModelResult};
pub use theory::{Comparison, expected_occupancy, expected_occupancy_for, percentage_error};
