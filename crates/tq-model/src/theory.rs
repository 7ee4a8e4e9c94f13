//! Closed-form occupancy and the simulation-vs-theory comparison.

use std::fmt;

use tq_core::{QueueParams, Rate};

use crate::{ModelError, ModelResult};

/// Steady-state mean number of customers in the tandem network.
///
/// Returns [`ModelError::UnstableSystem`] unless both ρ1 = λ/μ1 and
/// ρ2 = λ/μ2 are strictly below 1.
pub fn expected_occupancy(arrival: Rate, service_1: Rate, service_2: Rate) -> ModelResult<f64> {
    let rho1 = arrival.utilization(service_1);
    let rho2 = arrival.utilization(service_2);
    if rho1 >= 1.0 || rho2 >= 1.0 {
        return Err(ModelError::UnstableSystem { rho1, rho2 });
    }
    Ok(rho1 / (1.0 - rho1) + rho2 / (1.0 - rho2))
}

/// [`expected_occupancy`] for a validated parameter set.
pub fn expected_occupancy_for(params: &QueueParams) -> ModelResult<f64> {
    expected_occupancy(params.arrival_rate(), params.service_rate_1(), params.service_rate_2())
}

/// Outcome of comparing a simulated value against its theoretical prediction.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Comparison {
    /// `|theoretical - observed| / theoretical * 100`.
    Percent(f64),
    /// No meaningful percentage exists: the theoretical value is zero,
    /// negative, or not finite (typically an unstable system).
    Undefined,
}

impl Comparison {
    pub fn percent(self) -> Option<f64> {
        match self {
            Comparison::Percent(p) => Some(p),
            Comparison::Undefined  => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Comparison::Percent(_))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Percent(p) => write!(f, "{p:.2}%"),
            Comparison::Undefined  => f.write_str("undefined"),
        }
    }
}

/// Percentage deviation of `observed` from `theoretical`.
pub fn percentage_error(theoretical: f64, observed: f64) -> Comparison {
    if !(theoretical.is_finite() && theoretical > 0.0) || !observed.is_finite() {
        return Comparison::Undefined;
    }
    Comparison::Percent((theoretical - observed).abs() / theoretical * 100.0)
}
