//! `tq-core` — foundational types for the tandem-queue simulator.
//!
//! This crate is a dependency of every other `tq-*` crate.  It has no `tq-*`
//! dependencies and few external ones (`rand`, `rand_distr`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`time`]     | `SimTime` (continuous simulated time)                  |
//! | [`params`]   | `Rate`, `QueueParams`, `RunConfig`                     |
//! | [`event`]    | `EventKind`, `Snapshot`                                |
//! | [`rng`]      | `DurationSource` trait, `VariateSource` (seeded)       |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to parameters and snapshots.|

pub mod error;
pub mod event;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use event::{EventKind, Snapshot};
pub use params::{QueueParams, Rate, RunConfig};
pub use rng::{DurationSource, VariateSource, entropy_seed};
pub use time::SimTime;
