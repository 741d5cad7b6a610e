//! The pedestrian entity and its per-tick movement decision.
//!
//! A pedestrian owns only its own state (position, path history, behavioral
//! parameters).  The per-tick decision reads the world through a borrowed
//! [`GridView`] — scenario plus start-of-tick occupancy — passed in by the
//! tick engine, so there is no owning back-reference from pedestrian to
//! automaton.

use evac_core::{Cell, PedestrianId, SimRng, Tick};

use crate::automaton::GridView;
use crate::PedestrianParameters;

/// Minimum weight of a candidate move, so no candidate is ever impossible.
const DESIRABILITY_EPSILON: f64 = 1e-5;

/// A candidate move: a destination and the willingness to move there.
/// Desirabilities are relative weights, not probabilities — they need not
/// sum to 1.
struct TentativeMove {
    cell: Cell,
    desirability: f64,
}

/// A pedestrian in the simulation.
pub struct Pedestrian {
    id: PedestrianId,
    cell: Cell,
    /// Ticks in which the pedestrian actually changed cell.
    steps: u32,
    /// Tick at which the pedestrian reached an exit.  Set exactly once.
    exit_tick: Option<Tick>,
    parameters: PedestrianParameters,
    /// Visited cells, one entry per elapsed tick including the initial
    /// placement.  Append-only.
    path: Vec<Cell>,
}

impl Pedestrian {
    pub(crate) fn new(id: PedestrianId, cell: Cell, parameters: PedestrianParameters) -> Self {
        Self {
            id,
            cell,
            steps: 0,
            exit_tick: None,
            parameters,
            path: vec![cell],
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PedestrianId {
        self.id
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub fn exit_tick(&self) -> Option<Tick> {
        self.exit_tick
    }

    #[inline]
    pub fn parameters(&self) -> &PedestrianParameters {
        &self.parameters
    }

    /// The cell occupied at each elapsed tick; `path()[t]` is the position
    /// at tick `t`.
    #[inline]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Snapshot for the trace/statistics collaborators.
    pub fn record(&self) -> PedestrianRecord {
        PedestrianRecord {
            id: self.id,
            path: self.path.clone(),
            steps: self.steps,
            exit_tick: self.exit_tick,
        }
    }

    // ── State transitions (driven by the tick engine) ─────────────────────

    pub(crate) fn move_to(&mut self, cell: Cell) {
        self.cell = cell;
        self.steps += 1;
        self.path.push(cell);
    }

    pub(crate) fn stay(&mut self) {
        self.path.push(self.cell);
    }

    pub(crate) fn record_exit(&mut self, tick: Tick) {
        debug_assert!(self.exit_tick.is_none(), "exit tick set twice for {}", self.id);
        self.exit_tick = Some(tick);
    }

    // ── Movement decision ─────────────────────────────────────────────────

    /// Compute desirabilities for the reachable cells in this pedestrian's
    /// neighbourhood.
    ///
    /// For each candidate `n`: attraction is the floor-field closeness
    /// scaled by the pedestrian's bias; repulsion shrinks with the number of
    /// reachable cells around `n` (an estimate of how open `n` is); the raw
    /// desirability is `exp(attraction − repulsion)`.  Raw values are then
    /// min-shifted by `DESIRABILITY_EPSILON` so every weight is strictly
    /// positive and the exponential-scale signal stays numerically usable
    /// for weighted sampling without losing relative ordering.
    fn movement_desirabilities(&self, view: &GridView<'_>) -> Vec<TentativeMove> {
        let scenario = view.scenario();
        let field = scenario.floor_field();

        let mut neighbours = Vec::with_capacity(scenario.neighbourhood().max_neighbours());
        let mut around = Vec::with_capacity(scenario.neighbourhood().max_neighbours());
        scenario.neighbours_into(self.cell, &mut neighbours);

        let mut moves = Vec::with_capacity(neighbours.len());
        let mut min_desirability = f64::MAX;
        for &neighbour in &neighbours {
            if !view.is_cell_reachable(neighbour) {
                continue;
            }

            // Count reachable cells around the candidate.
            scenario.neighbours_into(neighbour, &mut around);
            let crowding_count = around.iter().filter(|&&c| view.is_cell_reachable(c)).count();

            let attraction = self.parameters.field_attraction_bias * field.potential(neighbour);
            let repulsion = self.parameters.crowd_repulsion / (1.0 + crowding_count as f64);
            let desirability = (attraction - repulsion).exp();

            if desirability < min_desirability {
                min_desirability = desirability;
            }
            moves.push(TentativeMove { cell: neighbour, desirability });
        }

        for m in &mut moves {
            m.desirability = DESIRABILITY_EPSILON + m.desirability - min_desirability;
        }
        moves
    }

    /// Choose this tick's proposed destination, or `None` to stay put.
    ///
    /// `None` is the normal outcome for a failed speed-gate trial or a fully
    /// hemmed-in pedestrian — backpressure, not an error.
    pub(crate) fn choose_movement(&self, view: &GridView<'_>, rng: &mut SimRng) -> Option<Cell> {
        // Move only in a velocity_percent fraction of ticks to respect the
        // pedestrian's walking speed.
        if !rng.bernoulli(self.parameters.velocity_percent) {
            return None;
        }
        let moves = self.movement_desirabilities(view);
        if moves.is_empty() {
            return None;
        }
        let chosen = rng.discrete_by(&moves, |m| m.desirability);
        Some(moves[chosen].cell)
    }
}

// ── PedestrianRecord ──────────────────────────────────────────────────────────

/// Owned snapshot of one pedestrian's run, for trace and statistics output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedestrianRecord {
    pub id: PedestrianId,
    /// `path[t]` is the cell occupied at tick `t`; shorter than the total
    /// tick count if the pedestrian evacuated early.
    pub path: Vec<Cell>,
    pub steps: u32,
    pub exit_tick: Option<Tick>,
}
