//! Simulation-subsystem error type.

use thiserror::Error;

/// Errors produced by `evac-sim`.
///
/// Contract violations (out-of-bounds queries, degenerate sampling weights)
/// are not represented here — they fail fast with a panic.  These variants
/// cover recoverable conditions a caller can act on.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("cannot place {requested} pedestrians: only {free} reachable free cells")]
    NotEnoughFreeCells { requested: usize, free: usize },
}

pub type SimResult<T> = Result<T, SimError>;
