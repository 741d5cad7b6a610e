//! Grid adjacency strategies.
//!
//! The neighbourhood is a configuration *value*, fixed for the lifetime of a
//! scenario, and shared by the floor-field graph and the movement model —
//! pathing with one adjacency and moving with another would produce an
//! inconsistent desirability gradient.
//!
//! # Cost units
//!
//! Step costs are fixed-point **milli-units** (u32): 1000 per orthogonal
//! step, 1414 (≈ √2 · 1000) per diagonal step.  Integer costs give the
//! Dijkstra heap a total order and deterministic tie-breaking; the public
//! floor-field surface divides back to `f64` cell units.

use evac_core::Cell;

/// Offsets in row-major scan order.
const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacency model of the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Neighbourhood {
    /// Orthogonal neighbours only (up to 4), unit edge weight.
    VonNeumann,
    /// Orthogonal plus diagonal neighbours (up to 8); diagonal edges
    /// weigh √2.
    Moore,
}

impl Neighbourhood {
    /// Cost of one orthogonal step, in milli-units.
    pub const ORTHOGONAL_COST_MILLI: u32 = 1_000;
    /// Cost of one diagonal step, in milli-units (≈ √2 · 1000).
    pub const DIAGONAL_COST_MILLI: u32 = 1_414;

    #[inline]
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Neighbourhood::VonNeumann => &VON_NEUMANN_OFFSETS,
            Neighbourhood::Moore => &MOORE_OFFSETS,
        }
    }

    /// Upper bound on the neighbour count of any cell.
    #[inline]
    pub fn max_neighbours(self) -> usize {
        self.offsets().len()
    }

    /// Append the in-bounds neighbours of `cell` to `out`, in row-major
    /// order.  `out` is cleared first; reuse one buffer across calls to keep
    /// the tick loop allocation-free.
    pub fn neighbours_into(self, cell: Cell, rows: u32, columns: u32, out: &mut Vec<Cell>) {
        out.clear();
        for &(d_row, d_column) in self.offsets() {
            if let Some(n) = cell.offset(d_row, d_column, rows, columns) {
                out.push(n);
            }
        }
    }

    /// The in-bounds neighbours of `cell`, in row-major order.
    pub fn neighbours(self, cell: Cell, rows: u32, columns: u32) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.max_neighbours());
        self.neighbours_into(cell, rows, columns, &mut out);
        out
    }

    /// Cost in milli-units of stepping between two adjacent cells.
    ///
    /// # Panics
    /// Debug-asserts that the cells are actually adjacent under `self`.
    #[inline]
    pub fn step_cost_milli(self, from: Cell, to: Cell) -> u32 {
        let d_row = from.row.abs_diff(to.row);
        let d_column = from.column.abs_diff(to.column);
        debug_assert!(
            d_row <= 1 && d_column <= 1 && d_row + d_column > 0,
            "step_cost_milli: {from} and {to} are not adjacent"
        );
        if d_row == 1 && d_column == 1 {
            debug_assert!(self == Neighbourhood::Moore, "diagonal step under von Neumann");
            Self::DIAGONAL_COST_MILLI
        } else {
            Self::ORTHOGONAL_COST_MILLI
        }
    }
}
