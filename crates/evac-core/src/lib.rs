//! `evac-core` — foundational types for the evacuation cellular automaton.
//!
//! This crate is a dependency of every other `evac-*` crate.  It intentionally
//! has no `evac-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `PedestrianId`                                |
//! | [`grid`]    | `Cell`, `Rect`                                |
//! | [`time`]    | `Tick`, `SimClock`                            |
//! | [`rng`]     | `SimRng` (seeded, deterministic)              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::{Cell, Rect};
pub use ids::PedestrianId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
