//! Exponential variate generation.
//!
//! # Stream ownership
//!
//! There is no process-wide random stream.  Every run owns a
//! [`VariateSource`] seeded by:
//!
//!   seed = root_seed XOR ((run_index + 1) * MIXING_CONSTANT)
//!
//! so run `i` of a batch always sees the same stream for a given root seed,
//! regardless of how many other runs exist or the order (or thread) they
//! execute on.
//!
//! The engine only needs [`DurationSource`]; tests substitute a scripted
//! implementation to pin exact event times.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp1;

use crate::Rate;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Supplies random holding times to the simulation engine.
pub trait DurationSource {
    /// A non-negative duration drawn from Exp(`rate`).  Successive calls are
    /// independent.
    fn draw(&mut self, rate: Rate) -> f64;
}

/// Seeded exponential variate generator backed by `SmallRng`.
pub struct VariateSource {
    rng:  SmallRng,
    seed: u64,
}

impl VariateSource {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// The stream for run `run_index` under `root_seed`.
    pub fn for_run(root_seed: u64, run_index: u64) -> Self {
        let seed = root_seed ^ run_index.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        Self::new(seed)
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Exp(`rate`) sample: a unit exponential scaled by the mean `1 / rate`.
    #[inline]
    pub fn exponential(&mut self, rate: Rate) -> f64 {
        let unit: f64 = self.rng.sample(Exp1);
        unit / rate.get()
    }
}

impl DurationSource for VariateSource {
    #[inline]
    fn draw(&mut self, rate: Rate) -> f64 {
        self.exponential(rate)
    }
}

impl<D: DurationSource + ?Sized> DurationSource for &mut D {
    #[inline]
    fn draw(&mut self, rate: Rate) -> f64 {
        (**self).draw(rate)
    }
}

/// A fresh root seed from OS entropy.
pub fn entropy_seed() -> u64 {
    rand::random()
}
