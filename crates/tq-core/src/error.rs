//! Parameter and configuration errors.
//!
//! Every check here runs at the boundary between configuration and the
//! simulation core, so a bad combination is rejected before a run starts.

use thiserror::Error;

/// The error type for `tq-core` and a common base for the other crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("{what} must be a positive finite rate, got {value}")]
    InvalidRate { what: &'static str, value: f64 },

    #[error("horizon must be positive and finite, got {0}")]
    InvalidHorizon(f64),

    #[error("repetition count must be at least 1, got {0}")]
    InvalidRepetitions(usize),
}

/// Shorthand result type for `tq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
