//! Run and pedestrian configuration.
//!
//! Both parameter sets are plain structs with public fields — values, not
//! staged builders.  Validation happens once, up front: the automaton
//! validates its own parameters at construction and each pedestrian's
//! parameters at placement.

use crate::{SimError, SimResult};

// ── AutomatonParameters ───────────────────────────────────────────────────────

/// Top-level configuration of one simulation run.
#[derive(Clone, Debug)]
pub struct AutomatonParameters {
    /// Wall-clock limit of the simulated evacuation, in seconds.  The run
    /// stops after `floor(time_limit / time_per_tick)` ticks if pedestrians
    /// remain.
    pub time_limit_secs: f64,

    /// Simulated seconds one tick represents — the time a reference
    /// pedestrian needs to cross one cell.
    pub time_per_tick_secs: f64,

    /// Animation speed-up factor for a rendering collaborator (x-times
    /// faster than real time).  The engine itself never paces; this value is
    /// only carried into [`Frame`][crate::Frame].
    pub gui_time_factor: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl AutomatonParameters {
    /// Derive the tick duration from a real-world reference walking speed:
    /// one tick is the time the fastest pedestrian needs to cross one cell,
    /// `cell_dimension / speed`.
    pub fn from_walking_speed(
        cell_dimension_m: f64,
        speed_mps: f64,
        time_limit_secs: f64,
        seed: u64,
    ) -> Self {
        Self {
            time_limit_secs,
            time_per_tick_secs: cell_dimension_m / speed_mps,
            gui_time_factor: 1,
            seed,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.time_limit_secs > 0.0) || !self.time_limit_secs.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "time_limit_secs",
                reason: format!("must be positive and finite, got {}", self.time_limit_secs),
            });
        }
        if !(self.time_per_tick_secs > 0.0) || !self.time_per_tick_secs.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "time_per_tick_secs",
                reason: format!("must be positive and finite, got {}", self.time_per_tick_secs),
            });
        }
        if self.gui_time_factor == 0 {
            return Err(SimError::InvalidParameter {
                name: "gui_time_factor",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

// ── PedestrianParameters ──────────────────────────────────────────────────────

/// Immutable behavioral parameters of one pedestrian.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PedestrianParameters {
    /// Sensitivity to the floor-field gradient (attraction toward exits).
    /// Must be positive.
    pub field_attraction_bias: f64,

    /// Aversion to moving into locally congested cells.  Must be positive.
    pub crowd_repulsion: f64,

    /// Probability of attempting to move in any given tick, modeling
    /// sub-maximum walking speed.  Must lie in `(0, 1]`.
    pub velocity_percent: f64,
}

impl Default for PedestrianParameters {
    fn default() -> Self {
        Self {
            field_attraction_bias: 1.0,
            crowd_repulsion: 1.10,
            velocity_percent: 1.0,
        }
    }
}

impl PedestrianParameters {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.field_attraction_bias > 0.0) || !self.field_attraction_bias.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "field_attraction_bias",
                reason: format!("must be positive and finite, got {}", self.field_attraction_bias),
            });
        }
        if !(self.crowd_repulsion > 0.0) || !self.crowd_repulsion.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "crowd_repulsion",
                reason: format!("must be positive and finite, got {}", self.crowd_repulsion),
            });
        }
        if !(self.velocity_percent > 0.0 && self.velocity_percent <= 1.0) {
            return Err(SimError::InvalidParameter {
                name: "velocity_percent",
                reason: format!("must lie in (0, 1], got {}", self.velocity_percent),
            });
        }
        Ok(())
    }
}
