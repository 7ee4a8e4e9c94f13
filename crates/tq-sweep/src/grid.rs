//! The (λ, μ1, μ2, T) grid a sweep walks.

use tq_core::{CoreResult, RunConfig};

/// Cartesian product of parameter lists plus the per-point run settings.
///
/// Points are visited in nested order λ → μ1 → μ2 → T (T varies fastest).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepGrid {
    pub arrival_rates:   Vec<f64>,
    pub service_rates_1: Vec<f64>,
    pub service_rates_2: Vec<f64>,
    pub horizons:        Vec<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_queue1:  u32,
    pub run:             RunConfig,
}

/// One raw grid point.  Not yet validated.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GridPoint {
    pub lambda:  f64,
    pub mu1:     f64,
    pub mu2:     f64,
    pub horizon: f64,
}

impl SweepGrid {
    /// Steady-state comparison grid: 2 × 2 × 2 × 4 points, empty start,
    /// 100 runs each.
    pub fn part_a(seed: Option<u64>) -> CoreResult<Self> {
        Ok(Self {
            arrival_rates:   vec![1.0, 5.0],
            service_rates_1: vec![2.0, 4.0],
            service_rates_2: vec![3.0, 4.0],
            horizons:        vec![10.0, 50.0, 100.0, 1_000.0],
            initial_queue1:  0,
            run:             RunConfig::new(100, seed)?,
        })
    }

    /// Transient grid: one long run per rate combination starting from a
    /// backlog of 1000 customers at Server 1, kept for plotting.
    pub fn part_b(seed: Option<u64>) -> CoreResult<Self> {
        Ok(Self {
            arrival_rates:   vec![1.0, 5.0],
            service_rates_1: vec![2.0, 4.0],
            service_rates_2: vec![3.0, 4.0],
            horizons:        vec![2_000.0],
            initial_queue1:  1_000,
            run:             RunConfig::new(1, seed)?,
        })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.arrival_rates.len()
            * self.service_rates_1.len()
            * self.service_rates_2.len()
            * self.horizons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every grid point in nested λ → μ1 → μ2 → T order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.arrival_rates.iter().flat_map(move |&lambda| {
            self.service_rates_1.iter().flat_map(move |&mu1| {
                self.service_rates_2.iter().flat_map(move |&mu2| {
                    self.horizons
                        .iter()
                        .map(move |&horizon| GridPoint { lambda, mu1, mu2, horizon })
                })
            })
        })
    }
}
