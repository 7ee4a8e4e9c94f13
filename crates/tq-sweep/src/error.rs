use thiserror::Error;
use tq_core::CoreError;
use tq_sim::SimError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    #[error("invalid parameters: {0}")]
    Core(#[from] CoreError),

    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),
}

pub type SweepResult<T> = Result<T, SweepError>;
