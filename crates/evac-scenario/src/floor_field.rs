//! The static floor field: per-cell distance to the nearest exit.
//!
//! # Construction
//!
//! Multi-source Dijkstra over the grid graph whose nodes are non-blocked
//! cells, edges are given by the scenario's [`Neighbourhood`] with its
//! milli-unit weights, and sources are all exit cells at distance 0.
//! Standard priority-queue relaxation with stale-entry skipping; cells never
//! reached keep `u32::MAX` and surface as `+∞`.
//!
//! Computed exactly once per scenario, before any tick executes; never
//! recomputed, never mutated.  Read-only thereafter — which is what allows
//! lock-free concurrent reads during simulation and makes runs reproducible
//! under a fixed seed.
//!
//! # Distance vs. potential
//!
//! [`distance`](FloorField::distance) is the raw shortest distance in cell
//! units (orthogonal step = 1.0): 0 at exits, `+∞` where no exit is
//! reachable.  [`potential`](FloorField::potential) is the same surface
//! normalized into a closeness value in `[0, 1]` — 1.0 at exits, falling to
//! 0.0 at the farthest reachable cell — which is the form the movement
//! model's attraction term consumes: higher potential must mean nearer an
//! exit for the desirability exponent to pull pedestrians the right way.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use evac_core::Cell;

use crate::Neighbourhood;

/// Milli-units per cell unit (an orthogonal step).
const COST_SCALE: f64 = Neighbourhood::ORTHOGONAL_COST_MILLI as f64;

/// Marker for "no exit reachable from this cell".
const UNREACHED: u32 = u32::MAX;

/// Precomputed per-cell distance-to-nearest-exit surface.
pub struct FloorField {
    rows: u32,
    columns: u32,
    /// Shortest distance to the nearest exit in milli-units; `UNREACHED`
    /// where no path to any exit exists (including blocked cells).
    dist_milli: Vec<u32>,
    /// Normalized closeness: `1 − dist/max_finite_dist`; 0.0 for
    /// unreachable cells.
    potential: Vec<f64>,
}

impl FloorField {
    /// Run multi-source Dijkstra from every exit over the non-blocked cells.
    ///
    /// `blocked` is the scenario's row-major blocked grid; exits are assumed
    /// non-blocked (a [`ScenarioBuilder`][crate::ScenarioBuilder] invariant).
    pub(crate) fn compute(
        rows: u32,
        columns: u32,
        blocked: &[bool],
        exits: &[Cell],
        neighbourhood: Neighbourhood,
    ) -> FloorField {
        let n = rows as usize * columns as usize;
        let mut dist_milli = vec![UNREACHED; n];

        // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
        // Cell's row-major Ord is the deterministic tie-break.
        let mut heap: BinaryHeap<Reverse<(u32, Cell)>> = BinaryHeap::new();
        for &exit in exits {
            dist_milli[exit.flat_index(columns)] = 0;
            heap.push(Reverse((0, exit)));
        }

        let mut neighbours = Vec::with_capacity(neighbourhood.max_neighbours());
        while let Some(Reverse((cost, cell))) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist_milli[cell.flat_index(columns)] {
                continue;
            }

            neighbourhood.neighbours_into(cell, rows, columns, &mut neighbours);
            for &neighbour in &neighbours {
                let idx = neighbour.flat_index(columns);
                if blocked[idx] {
                    continue;
                }
                let new_cost = cost.saturating_add(neighbourhood.step_cost_milli(cell, neighbour));
                if new_cost < dist_milli[idx] {
                    dist_milli[idx] = new_cost;
                    heap.push(Reverse((new_cost, neighbour)));
                }
            }
        }

        let potential = derive_potential(&dist_milli);

        FloorField {
            rows,
            columns,
            dist_milli,
            potential,
        }
    }

    #[inline]
    fn flat(&self, cell: Cell) -> usize {
        assert!(
            cell.in_bounds(self.rows, self.columns),
            "FloorField: cell {cell} outside {}×{} grid",
            self.rows,
            self.columns
        );
        cell.flat_index(self.columns)
    }

    /// Shortest distance from `cell` to its nearest exit, in cell units
    /// (orthogonal step = 1.0, diagonal ≈ 1.414).  Exits are 0.0; cells with
    /// no path to any exit are `f64::INFINITY`.
    pub fn distance(&self, cell: Cell) -> f64 {
        match self.dist_milli[self.flat(cell)] {
            UNREACHED => f64::INFINITY,
            milli => milli as f64 / COST_SCALE,
        }
    }

    /// Normalized closeness to the nearest exit in `[0, 1]`: 1.0 at exits,
    /// 0.0 at the farthest reachable cell and at unreachable cells.
    pub fn potential(&self, cell: Cell) -> f64 {
        self.potential[self.flat(cell)]
    }

    /// `true` if some exit is reachable from `cell` through non-blocked
    /// cells.
    pub fn is_reachable_from_exit(&self, cell: Cell) -> bool {
        self.dist_milli[self.flat(cell)] != UNREACHED
    }
}

/// Invert distances into closeness values.
///
/// With no reachable cell at all the surface is all zeros; when the only
/// reachable cells are the exits themselves everything reachable maps to 1.0.
fn derive_potential(dist_milli: &[u32]) -> Vec<f64> {
    let max_finite = dist_milli
        .iter()
        .copied()
        .filter(|&d| d != UNREACHED)
        .max();

    dist_milli
        .iter()
        .map(|&d| match (d, max_finite) {
            (UNREACHED, _) | (_, None) => 0.0,
            (_, Some(0)) => 1.0,
            (d, Some(max)) => 1.0 - d as f64 / max as f64,
        })
        .collect()
}
