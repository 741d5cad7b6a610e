//! Scenario-subsystem error type.

use evac_core::Cell;
use thiserror::Error;

/// Errors produced by `evac-scenario`.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario grid must have positive dimensions, got {rows}×{columns}")]
    EmptyGrid { rows: u32, columns: u32 },

    #[error("cell dimension must be positive metres, got {0}")]
    InvalidCellDimension(f64),

    #[error("cell {0} is marked both blocked and exit")]
    BlockedExitOverlap(Cell),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
