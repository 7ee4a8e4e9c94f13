use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("cannot average an empty batch of runs")]
    EmptyBatch,

    #[error("unstable system (ρ1 = {rho1:.3}, ρ2 = {rho2:.3}): steady-state occupancy is undefined")]
    UnstableSystem { rho1: f64, rho2: f64 },
}

pub type ModelResult<T> = Result<T, ModelError>;
