//! `evac-sim` — movement model and tick engine of the evacuation automaton.
//!
//! # Tick transaction
//!
//! ```text
//! for each tick while pedestrians remain and the time limit is not reached:
//!   ① Clear    — reset the next-occupancy staging buffer.
//!   ② Shuffle  — uniformly random processing order for the live population
//!                (order decides conflict winners; reshuffling every tick
//!                prevents systematic bias).
//!   ③ Resolve  — per pedestrian, in order:
//!                  on an exit cell      → move to the evacuated population,
//!                                         exit tick = current counter
//!                  speed gate fails     → stay, re-mark current cell
//!                  propose destination  → taken if still unclaimed in the
//!                                         staging buffer, else stay
//!   ④ Commit   — swap the occupancy buffers (O(1) handle swap).
//!   ⑤ Advance  — increment the tick counter.
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`config`]     | `AutomatonParameters`, `PedestrianParameters`        |
//! | [`occupancy`]  | `OccupancyGrid` (double-buffered by the engine)      |
//! | [`pedestrian`] | `Pedestrian`, `PedestrianRecord`, movement decision  |
//! | [`automaton`]  | `Automaton`, `GridView`, the tick engine             |
//! | [`observer`]   | `AutomatonObserver`, `Frame`, `NoopObserver`         |
//! | [`stats`]      | `Statistics`, `mean`, `median`                       |
//! | [`error`]      | `SimError`, `SimResult<T>`                           |

pub mod automaton;
pub mod config;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod pedestrian;
pub mod stats;


pub use automaton::{Automaton, GridView};
pub use config::{AutomatonParameters, PedestrianParameters};
pub use error::{SimError, SimResult};
pub use observer::{AutomatonObserver, Frame, NoopObserver, PedestrianSprite};
pub use occupancy::OccupancyGrid;
pub use pedestrian::{Pedestrian, PedestrianRecord};
pub use stats::{mean, median, Statistics};
