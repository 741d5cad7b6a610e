//! The cellular automaton: occupancy grids, population, and the tick engine.

use std::mem;
use std::sync::{Mutex, MutexGuard};

use evac_core::{Cell, PedestrianId, SimClock, SimRng};
use evac_scenario::Scenario;

use crate::observer::{AutomatonObserver, Frame, PedestrianSprite};
use crate::occupancy::OccupancyGrid;
use crate::pedestrian::{Pedestrian, PedestrianRecord};
use crate::stats::{mean, median, Statistics};
use crate::{AutomatonParameters, PedestrianParameters, SimError, SimResult};

// ── GridView ──────────────────────────────────────────────────────────────────

/// Read-only view of the world as of the start of the current tick:
/// scenario layout plus current occupancy.
///
/// The tick engine hands this to each pedestrian's movement decision instead
/// of a reference to the automaton itself, so pedestrians hold no
/// back-reference and the next-occupancy buffer stays invisible to them.
pub struct GridView<'a> {
    scenario: &'a Scenario,
    occupied: &'a OccupancyGrid,
}

impl<'a> GridView<'a> {
    #[inline]
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    /// `true` if some pedestrian occupies `cell` (start-of-tick state).
    #[inline]
    pub fn is_cell_occupied(&self, cell: Cell) -> bool {
        self.occupied.get(cell)
    }

    /// `true` if a pedestrian could move into `cell`: in the grid, not
    /// blocked, not occupied.
    #[inline]
    pub fn is_cell_reachable(&self, cell: Cell) -> bool {
        !self.occupied.get(cell) && !self.scenario.is_blocked(cell)
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// The two pedestrian partitions, guarded together by one mutex: the tick
/// engine and any rendering reader take the same coarse lock, so neither
/// ever iterates a collection the other is restructuring.
struct Population {
    live: Vec<Pedestrian>,
    evacuated: Vec<Pedestrian>,
}

// ── Automaton ─────────────────────────────────────────────────────────────────

/// Cellular automaton simulating pedestrian evacuation over a [`Scenario`].
///
/// Owns the double-buffered occupancy grids, the pedestrian population, the
/// run RNG, and the clock.  All mutation happens on the single tick-driving
/// control loop; see [`run`](Self::run) and [`tick`](Self::tick).
pub struct Automaton {
    scenario: Scenario,
    parameters: AutomatonParameters,
    /// Occupancy in the current discrete state.
    occupied: OccupancyGrid,
    /// Write-only staging buffer for the next discrete state; swapped into
    /// `occupied` at tick end.
    occupied_next: OccupancyGrid,
    population: Mutex<Population>,
    rng: SimRng,
    clock: SimClock,
    next_id: u32,
}

impl Automaton {
    /// Create an automaton over `scenario` with validated run parameters.
    pub fn new(scenario: Scenario, parameters: AutomatonParameters) -> SimResult<Self> {
        parameters.validate()?;
        let (rows, columns) = (scenario.rows(), scenario.columns());
        Ok(Self {
            occupied: OccupancyGrid::new(rows, columns),
            occupied_next: OccupancyGrid::new(rows, columns),
            population: Mutex::new(Population {
                live: Vec::new(),
                evacuated: Vec::new(),
            }),
            rng: SimRng::new(parameters.seed),
            clock: SimClock::new(parameters.time_per_tick_secs),
            next_id: 0,
            scenario,
            parameters,
        })
    }

    fn lock_population(&self) -> MutexGuard<'_, Population> {
        // A poisoned lock means a prior tick panicked; keep unwinding.
        self.population.lock().expect("population lock poisoned")
    }

    // ── Read-only surface ─────────────────────────────────────────────────

    #[inline]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    #[inline]
    pub fn parameters(&self) -> &AutomatonParameters {
        &self.parameters
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.scenario.rows()
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.scenario.columns()
    }

    /// Discrete time steps elapsed since the start of the simulation.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.clock.current_tick.0
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// `true` if `cell` is never traversable.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.scenario.is_blocked(cell)
    }

    /// `true` if some pedestrian occupies `cell` in the current state.
    #[inline]
    pub fn is_cell_occupied(&self, cell: Cell) -> bool {
        self.occupied.get(cell)
    }

    /// `true` if a pedestrian could move into `cell`: not blocked, not
    /// occupied.
    #[inline]
    pub fn is_cell_reachable(&self, cell: Cell) -> bool {
        !self.occupied.get(cell) && !self.scenario.is_blocked(cell)
    }

    /// `true` if some pedestrian has already claimed `cell` for the next
    /// discrete state.  Only meaningful inside a tick's resolution pass —
    /// the buffer is cleared at the start of every tick.
    #[inline]
    pub fn will_be_occupied(&self, cell: Cell) -> bool {
        self.occupied_next.get(cell)
    }

    /// Neighbours of `cell` under the scenario's adjacency model.
    pub fn neighbours(&self, cell: Cell) -> Vec<Cell> {
        self.scenario.neighbours(cell)
    }

    pub fn live_count(&self) -> usize {
        self.lock_population().live.len()
    }

    pub fn evacuated_count(&self) -> usize {
        self.lock_population().evacuated.len()
    }

    /// Owned snapshots of every pedestrian (live and evacuated), ascending
    /// by identifier — the persistence/statistics surface.
    pub fn records(&self) -> Vec<PedestrianRecord> {
        let population = self.lock_population();
        let mut records: Vec<PedestrianRecord> = population
            .live
            .iter()
            .chain(population.evacuated.iter())
            .map(Pedestrian::record)
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Place a new pedestrian at `cell`.
    ///
    /// Returns `Ok(None)` when the cell is blocked or already occupied — a
    /// normal outcome the placement policy handles by retrying elsewhere —
    /// and `Err` for invalid parameters.
    pub fn add_pedestrian(
        &mut self,
        cell: Cell,
        parameters: PedestrianParameters,
    ) -> SimResult<Option<PedestrianId>> {
        parameters.validate()?;
        assert!(
            self.scenario.contains(cell),
            "add_pedestrian: cell {cell} out of bounds"
        );
        if !self.is_cell_reachable(cell) {
            return Ok(None);
        }

        let id = PedestrianId(self.next_id);
        self.next_id += 1;
        self.occupied.set(cell, true);
        self.lock_population()
            .live
            .push(Pedestrian::new(id, cell, parameters));
        Ok(Some(id))
    }

    /// Place `count` new pedestrians uniformly at random over free cells,
    /// drawing fresh parameters from `parameters_for` for each one.
    ///
    /// Draws landing on blocked or occupied cells are rejected and redrawn.
    /// Fails up front if fewer than `count` free cells exist — retrying
    /// could never terminate.
    pub fn add_pedestrians_uniformly(
        &mut self,
        count: usize,
        mut parameters_for: impl FnMut() -> PedestrianParameters,
    ) -> SimResult<Vec<PedestrianId>> {
        let free = self.free_cell_count();
        if free < count {
            return Err(SimError::NotEnoughFreeCells { requested: count, free });
        }

        let (rows, columns) = (self.rows(), self.columns());
        let mut placed = Vec::with_capacity(count);
        while placed.len() < count {
            let cell = Cell::new(
                self.rng.gen_range(0..rows),
                self.rng.gen_range(0..columns),
            );
            if let Some(id) = self.add_pedestrian(cell, parameters_for())? {
                placed.push(id);
            }
        }
        Ok(placed)
    }

    fn free_cell_count(&self) -> usize {
        let mut free = 0;
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                if self.is_cell_reachable(Cell::new(row, column)) {
                    free += 1;
                }
            }
        }
        free
    }

    // ── Tick engine ───────────────────────────────────────────────────────

    /// Run one discrete time step: a complete propose/resolve/commit
    /// transaction.  A started tick always commits; there is no partial
    /// state to roll back.
    pub fn tick(&mut self) {
        // ── Phase 1: clear the staging buffer ─────────────────────────────
        self.occupied_next.clear();

        let now = self.clock.current_tick;
        let mut population = self.population.lock().expect("population lock poisoned");
        let Population { live, evacuated } = &mut *population;

        // ── Phase 2: randomize processing order ───────────────────────────
        //
        // Processing order decides conflict winners; a fresh permutation per
        // tick prevents systematic bias toward any pedestrian.
        self.rng.shuffle(live);

        // ── Phase 3: resolve each pedestrian in order ─────────────────────
        let view = GridView {
            scenario: &self.scenario,
            occupied: &self.occupied,
        };

        let mut i = 0;
        while i < live.len() {
            if self.scenario.is_exit(live[i].cell()) {
                // Pedestrian evacuates; its cell is not claimed in the next
                // state.  The swapped-in pedestrian is processed at this
                // same index.
                let mut pedestrian = live.swap_remove(i);
                pedestrian.record_exit(now);
                evacuated.push(pedestrian);
                continue;
            }

            let proposal = live[i].choose_movement(&view, &mut self.rng);
            let current = live[i].cell();
            match proposal {
                // Destination still unclaimed: take it.
                Some(destination) if !self.occupied_next.get(destination) => {
                    self.occupied_next.set(destination, true);
                    live[i].move_to(destination);
                }
                // Claimed by an earlier pedestrian this tick, or no
                // candidate at all: stay and keep the current cell.
                _ => {
                    self.occupied_next.set(current, true);
                    live[i].stay();
                }
            }
            i += 1;
        }
        drop(population);

        // ── Phase 4: commit — make the next state current ──────────────────
        mem::swap(&mut self.occupied, &mut self.occupied_next);

        // ── Phase 5: advance time ─────────────────────────────────────────
        self.clock.advance();
    }

    /// Run ticks until every pedestrian has evacuated, the configured time
    /// limit is reached, or the observer requests a stop (checked once per
    /// tick, never mid-tick).
    ///
    /// `paint` is invoked once before the first tick and once after every
    /// tick.
    pub fn run<O: AutomatonObserver>(&mut self, observer: &mut O) {
        let max_ticks = self.clock.ticks_within_secs(self.parameters.time_limit_secs);

        observer.paint(&self.frame());
        while self.live_count() > 0 && self.clock.current_tick.0 < max_ticks {
            if observer.should_stop() {
                break;
            }
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.tick();
            let (live, evacuated) = {
                let population = self.lock_population();
                (population.live.len(), population.evacuated.len())
            };
            observer.on_tick_end(now, live, evacuated);
            observer.paint(&self.frame());
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Tear-free snapshot for a rendering collaborator.  The population
    /// lock is held only while copying sprite data, never while the
    /// observer paints.
    pub fn frame(&self) -> Frame<'_> {
        let pedestrians = {
            let population = self.lock_population();
            population
                .live
                .iter()
                .map(|p| PedestrianSprite {
                    id: p.id(),
                    cell: p.cell(),
                    velocity_percent: p.parameters().velocity_percent,
                })
                .collect()
        };
        Frame {
            tick: self.clock.current_tick,
            time_per_tick_secs: self.parameters.time_per_tick_secs,
            gui_time_factor: self.parameters.gui_time_factor,
            scenario: &self.scenario,
            pedestrians,
        }
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Aggregate statistics over the evacuated population.
    pub fn statistics(&self) -> Statistics {
        let population = self.lock_population();
        let steps: Vec<f64> = population
            .evacuated
            .iter()
            .map(|p| p.steps() as f64)
            .collect();
        let times: Vec<f64> = population
            .evacuated
            .iter()
            .flat_map(|p| p.exit_tick())
            .map(|t| self.clock.secs_for(t))
            .collect();

        Statistics {
            mean_steps: mean(&steps),
            median_steps: median(&steps),
            mean_evacuation_secs: mean(&times),
            median_evacuation_secs: median(&times),
            evacuated: population.evacuated.len(),
            remaining: population.live.len(),
        }
    }
}

// ── Tick helper shared with tests ─────────────────────────────────────────────

impl Automaton {
    /// Debug check: `occupied` must exactly match the set of live-pedestrian
    /// positions, with no two pedestrians sharing a cell.
    #[doc(hidden)]
    pub fn check_occupancy_invariant(&self) -> bool {
        let population = self.lock_population();
        let mut seen = std::collections::HashSet::new();
        for p in &population.live {
            if !seen.insert(p.cell()) {
                return false;
            }
            if !self.occupied.get(p.cell()) {
                return false;
            }
        }
        self.occupied.count_occupied() == population.live.len()
    }
}
