use thiserror::Error;
use tq_core::{EventKind, SimTime};
use tq_model::ModelError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("{kind} fired at t = {time} with an empty queue")]
    EmptyQueue { kind: EventKind, time: SimTime },

    #[error("queue length overflow at t = {time}")]
    QueueOverflow { time: SimTime },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
