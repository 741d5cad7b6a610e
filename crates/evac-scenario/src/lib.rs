//! `evac-scenario` — the static world of an evacuation run.
//!
//! # Crate layout
//!
//! | Module            | Contents                                             |
//! |-------------------|------------------------------------------------------|
//! | [`neighbourhood`] | `Neighbourhood` (von Neumann / Moore adjacency)      |
//! | [`scenario`]      | `Scenario` (immutable grid), `ScenarioBuilder`       |
//! | [`floor_field`]   | `FloorField` (multi-source Dijkstra distance field)  |
//! | [`error`]         | `ScenarioError`, `ScenarioResult<T>`                 |
//!
//! A `Scenario` is immutable after construction: dimensions, blocked cells,
//! exit cells, the adjacency model, and the floor field (computed exactly
//! once inside [`ScenarioBuilder::build`]) never change during a run.  That
//! immutability is what lets the tick engine and any rendering reader share
//! it without synchronisation.

pub mod error;
pub mod floor_field;
pub mod neighbourhood;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult};
pub use floor_field::FloorField;
pub use neighbourhood::Neighbourhood;
pub use scenario::{Scenario, ScenarioBuilder};
