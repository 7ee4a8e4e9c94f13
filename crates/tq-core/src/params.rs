//! Run parameters and their validation.
//!
//! All checks happen here, when a [`QueueParams`] or [`RunConfig`] is built.
//! Past that point the simulation core may assume every rate is positive and
//! finite, the horizon is positive, and at least one repetition is requested.

use crate::{CoreError, CoreResult, SimTime};

// ── Rate ──────────────────────────────────────────────────────────────────────

/// A strictly positive, finite event rate (events per unit time).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Rate(f64);

impl Rate {
    /// Validate `value`; `what` names the parameter in the error message.
    pub fn new(what: &'static str, value: f64) -> CoreResult<Rate> {
        if value.is_finite() && value > 0.0 {
            Ok(Rate(value))
        } else {
            Err(CoreError::InvalidRate { what, value })
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Utilization `self / service` of a server fed at this rate.
    #[inline]
    pub fn utilization(self, service: Rate) -> f64 {
        self.0 / service.0
    }
}

impl TryFrom<f64> for Rate {
    type Error = CoreError;
    fn try_from(value: f64) -> CoreResult<Rate> {
        Rate::new("rate", value)
    }
}

impl From<Rate> for f64 {
    fn from(r: Rate) -> f64 {
        r.0
    }
}

// ── QueueParams ───────────────────────────────────────────────────────────────

/// One point of the configuration surface: (λ, μ1, μ2, T, initial queue 1).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawQueueParams", into = "RawQueueParams"))]
pub struct QueueParams {
    arrival_rate:   Rate,
    service_rate_1: Rate,
    service_rate_2: Rate,
    horizon:        SimTime,
    initial_queue1: u32,
}

impl QueueParams {
    /// Validate and build.  Fails fast on any non-positive or non-finite
    /// rate and on a non-positive horizon.
    pub fn new(
        arrival_rate:   f64,
        service_rate_1: f64,
        service_rate_2: f64,
        horizon:        f64,
        initial_queue1: u32,
    ) -> CoreResult<Self> {
        let arrival_rate   = Rate::new("arrival rate λ", arrival_rate)?;
        let service_rate_1 = Rate::new("service rate μ1", service_rate_1)?;
        let service_rate_2 = Rate::new("service rate μ2", service_rate_2)?;
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(CoreError::InvalidHorizon(horizon));
        }
        Ok(Self {
            arrival_rate,
            service_rate_1,
            service_rate_2,
            horizon: SimTime(horizon),
            initial_queue1,
        })
    }

    #[inline] pub fn arrival_rate(&self) -> Rate { self.arrival_rate }
    #[inline] pub fn service_rate_1(&self) -> Rate { self.service_rate_1 }
    #[inline] pub fn service_rate_2(&self) -> Rate { self.service_rate_2 }
    #[inline] pub fn horizon(&self) -> SimTime { self.horizon }
    #[inline] pub fn initial_queue1(&self) -> u32 { self.initial_queue1 }

    /// ρ1 = λ / μ1.
    #[inline]
    pub fn rho1(&self) -> f64 {
        self.arrival_rate.utilization(self.service_rate_1)
    }

    /// ρ2 = λ / μ2.
    #[inline]
    pub fn rho2(&self) -> f64 {
        self.arrival_rate.utilization(self.service_rate_2)
    }

    /// Both servers have utilization strictly below 1.
    pub fn is_stable(&self) -> bool {
        self.rho1() < 1.0 && self.rho2() < 1.0
    }
}

/// Unvalidated mirror of [`QueueParams`] used as the serde wire shape.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawQueueParams {
    arrival_rate:   f64,
    service_rate_1: f64,
    service_rate_2: f64,
    horizon:        f64,
    #[serde(default)]
    initial_queue1: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQueueParams> for QueueParams {
    type Error = CoreError;
    fn try_from(r: RawQueueParams) -> CoreResult<Self> {
        QueueParams::new(r.arrival_rate, r.service_rate_1, r.service_rate_2, r.horizon, r.initial_queue1)
    }
}

#[cfg(feature = "serde")]
impl From<QueueParams> for RawQueueParams {
    fn from(p: QueueParams) -> Self {
        RawQueueParams {
            arrival_rate:   p.arrival_rate.get(),
            service_rate_1: p.service_rate_1.get(),
            service_rate_2: p.service_rate_2.get(),
            horizon:        p.horizon.value(),
            initial_queue1: p.initial_queue1,
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Monte Carlo settings for one parameter point.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRunConfig", into = "RawRunConfig"))]
pub struct RunConfig {
    /// Number of independent runs averaged per parameter point.  At least 1.
    repetitions: usize,

    /// Root seed.  `Some(s)` makes every run reproducible: run `i` always
    /// draws from the child stream of `(s, i)`.  `None` draws a fresh root
    /// seed from OS entropy each batch.
    seed: Option<u64>,
}

impl RunConfig {
    pub fn new(repetitions: usize, seed: Option<u64>) -> CoreResult<Self> {
        if repetitions == 0 {
            return Err(CoreError::InvalidRepetitions(repetitions));
        }
        Ok(Self { repetitions, seed })
    }

    #[inline] pub fn repetitions(&self) -> usize { self.repetitions }
    #[inline] pub fn seed(&self) -> Option<u64> { self.seed }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRunConfig {
    repetitions: usize,
    #[serde(default)]
    seed:        Option<u64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRunConfig> for RunConfig {
    type Error = CoreError;
    fn try_from(r: RawRunConfig) -> CoreResult<Self> {
        RunConfig::new(r.repetitions, r.seed)
    }
}

#[cfg(feature = "serde")]
impl From<RunConfig> for RawRunConfig {
    fn from(c: RunConfig) -> Self {
        RawRunConfig { repetitions: c.repetitions, seed: c.seed }
    }
}
