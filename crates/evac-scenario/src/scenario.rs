//! Scenario description and builder.
//!
//! A `Scenario` is the immutable world of one evacuation run: grid
//! dimensions, the cell-to-meters scale, blocked cells (never traversable),
//! exit cells (absorbing), the adjacency model, and the static floor field.
//! Construction goes through [`ScenarioBuilder`], which validates the
//! description and computes the floor field exactly once in
//! [`build`](ScenarioBuilder::build).

use evac_core::{Cell, Rect};

use crate::{FloorField, Neighbourhood, ScenarioError, ScenarioResult};

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Immutable grid description plus its precomputed floor field.
///
/// All queries taking a `Cell` assert it is in bounds — out-of-range
/// coordinates indicate a caller bug, not runtime data.
pub struct Scenario {
    rows: u32,
    columns: u32,
    cell_dimension_m: f64,
    neighbourhood: Neighbourhood,
    /// Row-major blocked grid.
    blocked: Vec<bool>,
    /// Row-major exit grid.
    exit: Vec<bool>,
    /// Exit cells in row-major order (the Dijkstra sources).
    exits: Vec<Cell>,
    floor_field: FloorField,
}

impl Scenario {
    // ── Grid dimensions ───────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Side length of one (square) cell, in metres.
    #[inline]
    pub fn cell_dimension_m(&self) -> f64 {
        self.cell_dimension_m
    }

    /// The adjacency model shared by the floor field and the movement model.
    #[inline]
    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood
    }

    /// `true` if `cell` lies within this scenario's grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.rows, self.columns)
    }

    #[inline]
    fn flat(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "Scenario: cell {cell} outside {}×{} grid",
            self.rows,
            self.columns
        );
        cell.flat_index(self.columns)
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// `true` if `cell` is never traversable.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[self.flat(cell)]
    }

    /// `true` if `cell` is absorbing: a pedestrian located there is removed
    /// from the grid and recorded as evacuated.
    #[inline]
    pub fn is_exit(&self, cell: Cell) -> bool {
        self.exit[self.flat(cell)]
    }

    /// All exit cells in row-major order.
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// The precomputed distance-to-exit surface.
    #[inline]
    pub fn floor_field(&self) -> &FloorField {
        &self.floor_field
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// In-bounds neighbours of `cell` under this scenario's adjacency model.
    pub fn neighbours(&self, cell: Cell) -> Vec<Cell> {
        assert!(self.contains(cell), "Scenario::neighbours: cell {cell} out of bounds");
        self.neighbourhood.neighbours(cell, self.rows, self.columns)
    }

    /// Allocation-free variant of [`neighbours`](Self::neighbours).
    pub fn neighbours_into(&self, cell: Cell, out: &mut Vec<Cell>) {
        assert!(self.contains(cell), "Scenario::neighbours_into: cell {cell} out of bounds");
        self.neighbourhood
            .neighbours_into(cell, self.rows, self.columns, out);
    }
}

// ── ScenarioBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Scenario`] incrementally, then call [`build`](Self::build).
///
/// Marks accumulate in any order; `build()` validates the description
/// (positive dimensions, positive cell size, `blocked ∩ exit = ∅`) and runs
/// the one-time floor-field computation.
///
/// # Example
///
/// ```
/// use evac_core::Cell;
/// use evac_scenario::{Neighbourhood, ScenarioBuilder};
///
/// let scenario = ScenarioBuilder::new(10, 10, 0.4, Neighbourhood::Moore)
///     .exit(Cell::new(0, 0))
///     .block(Cell::new(5, 5))
///     .build()
///     .unwrap();
/// assert_eq!(scenario.floor_field().distance(Cell::new(0, 0)), 0.0);
/// ```
pub struct ScenarioBuilder {
    rows: u32,
    columns: u32,
    cell_dimension_m: f64,
    neighbourhood: Neighbourhood,
    blocked: Vec<bool>,
    exit: Vec<bool>,
}

impl ScenarioBuilder {
    pub fn new(rows: u32, columns: u32, cell_dimension_m: f64, neighbourhood: Neighbourhood) -> Self {
        let n = rows as usize * columns as usize;
        Self {
            rows,
            columns,
            cell_dimension_m,
            neighbourhood,
            blocked: vec![false; n],
            exit: vec![false; n],
        }
    }

    #[inline]
    fn flat(&self, cell: Cell) -> usize {
        assert!(
            cell.in_bounds(self.rows, self.columns),
            "ScenarioBuilder: cell {cell} outside {}×{} grid",
            self.rows,
            self.columns
        );
        cell.flat_index(self.columns)
    }

    /// Mark a single cell as blocked.
    pub fn block(mut self, cell: Cell) -> Self {
        let idx = self.flat(cell);
        self.blocked[idx] = true;
        self
    }

    /// Mark every cell of `rect` as blocked.
    pub fn block_rect(mut self, rect: Rect) -> Self {
        for cell in rect.cells() {
            let idx = self.flat(cell);
            self.blocked[idx] = true;
        }
        self
    }

    /// Mark a single cell as an exit.
    pub fn exit(mut self, cell: Cell) -> Self {
        let idx = self.flat(cell);
        self.exit[idx] = true;
        self
    }

    /// Mark every cell of `rect` as an exit.
    pub fn exit_rect(mut self, rect: Rect) -> Self {
        for cell in rect.cells() {
            let idx = self.flat(cell);
            self.exit[idx] = true;
        }
        self
    }

    /// Validate the description and compute the floor field.
    pub fn build(self) -> ScenarioResult<Scenario> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ScenarioError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !(self.cell_dimension_m > 0.0) || !self.cell_dimension_m.is_finite() {
            return Err(ScenarioError::InvalidCellDimension(self.cell_dimension_m));
        }

        let mut exits = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = Cell::new(row, column);
                let idx = cell.flat_index(self.columns);
                if self.blocked[idx] && self.exit[idx] {
                    return Err(ScenarioError::BlockedExitOverlap(cell));
                }
                if self.exit[idx] {
                    exits.push(cell);
                }
            }
        }

        let floor_field = FloorField::compute(
            self.rows,
            self.columns,
            &self.blocked,
            &exits,
            self.neighbourhood,
        );

        Ok(Scenario {
            rows: self.rows,
            columns: self.columns,
            cell_dimension_m: self.cell_dimension_m,
            neighbourhood: self.neighbourhood,
            blocked: self.blocked,
            exit: self.exit,
            exits,
            floor_field,
        })
    }
}
