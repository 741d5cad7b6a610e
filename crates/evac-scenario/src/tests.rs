//! Unit tests for evac-scenario.

use evac_core::{Cell, Rect};

use crate::{Neighbourhood, Scenario, ScenarioBuilder, ScenarioError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Open `size × size` grid with a single exit at (0, 0).
fn open_grid(size: u32, neighbourhood: Neighbourhood) -> Scenario {
    ScenarioBuilder::new(size, size, 0.4, neighbourhood)
        .exit(Cell::new(0, 0))
        .build()
        .unwrap()
}

#[cfg(test)]
mod neighbourhood_tests {
    use super::*;

    #[test]
    fn von_neumann_interior_count_and_order() {
        let n = Neighbourhood::VonNeumann.neighbours(Cell::new(2, 2), 5, 5);
        assert_eq!(
            n,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 3),
                Cell::new(3, 2)
            ]
        );
    }

    #[test]
    fn moore_interior_count_and_order() {
        let n = Neighbourhood::Moore.neighbours(Cell::new(2, 2), 5, 5);
        assert_eq!(n.len(), 8);
        // Row-major: the row above comes first, left before right.
        assert_eq!(n[0], Cell::new(1, 1));
        assert_eq!(n[7], Cell::new(3, 3));
    }

    #[test]
    fn corners_are_clipped() {
        assert_eq!(
            Neighbourhood::VonNeumann.neighbours(Cell::new(0, 0), 5, 5).len(),
            2
        );
        assert_eq!(
            Neighbourhood::Moore.neighbours(Cell::new(0, 0), 5, 5).len(),
            3
        );
        assert_eq!(
            Neighbourhood::Moore.neighbours(Cell::new(4, 4), 5, 5).len(),
            3
        );
    }

    #[test]
    fn edges_are_clipped() {
        assert_eq!(
            Neighbourhood::VonNeumann.neighbours(Cell::new(0, 2), 5, 5).len(),
            3
        );
        assert_eq!(
            Neighbourhood::Moore.neighbours(Cell::new(0, 2), 5, 5).len(),
            5
        );
    }

    #[test]
    fn step_costs() {
        let a = Cell::new(1, 1);
        assert_eq!(
            Neighbourhood::VonNeumann.step_cost_milli(a, Cell::new(1, 2)),
            Neighbourhood::ORTHOGONAL_COST_MILLI
        );
        assert_eq!(
            Neighbourhood::Moore.step_cost_milli(a, Cell::new(2, 2)),
            Neighbourhood::DIAGONAL_COST_MILLI
        );
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn empty_grid_errors() {
        let result = ScenarioBuilder::new(0, 5, 0.4, Neighbourhood::VonNeumann).build();
        assert!(matches!(result, Err(ScenarioError::EmptyGrid { .. })));
    }

    #[test]
    fn invalid_cell_dimension_errors() {
        let result = ScenarioBuilder::new(5, 5, 0.0, Neighbourhood::VonNeumann).build();
        assert!(matches!(result, Err(ScenarioError::InvalidCellDimension(_))));
    }

    #[test]
    fn blocked_exit_overlap_errors() {
        let result = ScenarioBuilder::new(5, 5, 0.4, Neighbourhood::VonNeumann)
            .exit(Cell::new(2, 2))
            .block(Cell::new(2, 2))
            .build();
        assert!(matches!(
            result,
            Err(ScenarioError::BlockedExitOverlap(c)) if c == Cell::new(2, 2)
        ));
    }

    #[test]
    fn rect_marks_apply_to_every_cell() {
        let scenario = ScenarioBuilder::new(6, 6, 0.4, Neighbourhood::VonNeumann)
            .block_rect(Rect::new(2, 2, 2, 2))
            .exit_rect(Rect::new(0, 0, 1, 2))
            .build()
            .unwrap();
        assert!(scenario.is_blocked(Cell::new(2, 2)));
        assert!(scenario.is_blocked(Cell::new(3, 3)));
        assert!(!scenario.is_blocked(Cell::new(4, 4)));
        assert_eq!(scenario.exits(), &[Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_mark_is_a_caller_bug() {
        let _ = ScenarioBuilder::new(5, 5, 0.4, Neighbourhood::VonNeumann).block(Cell::new(5, 0));
    }
}

#[cfg(test)]
mod floor_field_tests {
    use super::*;

    #[test]
    fn exits_have_distance_zero_and_potential_one() {
        let s = open_grid(5, Neighbourhood::VonNeumann);
        let field = s.floor_field();
        assert_eq!(field.distance(Cell::new(0, 0)), 0.0);
        assert_eq!(field.potential(Cell::new(0, 0)), 1.0);
    }

    #[test]
    fn orthogonal_exit_neighbours_are_one_away() {
        let s = open_grid(5, Neighbourhood::VonNeumann);
        let field = s.floor_field();
        assert_eq!(field.distance(Cell::new(0, 1)), 1.0);
        assert_eq!(field.distance(Cell::new(1, 0)), 1.0);
    }

    #[test]
    fn diagonal_exit_neighbours_are_at_most_sqrt2_away() {
        let s = open_grid(5, Neighbourhood::Moore);
        let field = s.floor_field();
        let d = field.distance(Cell::new(1, 1));
        assert!(d > 1.0 && d <= 2.0_f64.sqrt(), "got {d}");
    }

    #[test]
    fn far_corner_distance_von_neumann() {
        let s = open_grid(5, Neighbourhood::VonNeumann);
        assert_eq!(s.floor_field().distance(Cell::new(4, 4)), 8.0);
    }

    #[test]
    fn walled_off_region_is_unreachable() {
        // Exit at (0,0); cell (4,4) sealed behind a full wall on row 3 and
        // column 3.
        let scenario = ScenarioBuilder::new(5, 5, 0.4, Neighbourhood::Moore)
            .exit(Cell::new(0, 0))
            .block_rect(Rect::new(3, 0, 1, 5))
            .block_rect(Rect::new(3, 3, 2, 1))
            .build()
            .unwrap();
        let field = scenario.floor_field();
        assert_eq!(field.distance(Cell::new(4, 4)), f64::INFINITY);
        assert_eq!(field.potential(Cell::new(4, 4)), 0.0);
        assert!(!field.is_reachable_from_exit(Cell::new(4, 4)));
        // Cells on the open side are still fine.
        assert!(field.is_reachable_from_exit(Cell::new(2, 4)));
    }

    #[test]
    fn blocked_cells_are_never_destinations() {
        let scenario = ScenarioBuilder::new(5, 5, 0.4, Neighbourhood::VonNeumann)
            .exit(Cell::new(0, 0))
            .block(Cell::new(2, 2))
            .build()
            .unwrap();
        assert_eq!(scenario.floor_field().distance(Cell::new(2, 2)), f64::INFINITY);
    }

    #[test]
    fn distance_descends_monotonically_toward_exits() {
        // Every reachable non-exit cell must have a neighbour strictly
        // closer to an exit — following the gradient always terminates.
        for neighbourhood in [Neighbourhood::VonNeumann, Neighbourhood::Moore] {
            let scenario = ScenarioBuilder::new(8, 8, 0.4, neighbourhood)
                .exit(Cell::new(0, 0))
                .exit(Cell::new(7, 7))
                .block_rect(Rect::new(3, 1, 1, 5))
                .build()
                .unwrap();
            let field = scenario.floor_field();

            for row in 0..8 {
                for column in 0..8 {
                    let cell = Cell::new(row, column);
                    let d = field.distance(cell);
                    if !d.is_finite() || d == 0.0 {
                        continue;
                    }
                    let closer = scenario
                        .neighbours(cell)
                        .into_iter()
                        .any(|n| field.distance(n) < d);
                    assert!(closer, "no descent from {cell} (distance {d})");
                }
            }
        }
    }

    #[test]
    fn potential_inverts_distance_ordering() {
        let s = open_grid(5, Neighbourhood::VonNeumann);
        let field = s.floor_field();
        // Farthest reachable cell sits at the bottom of the potential.
        assert_eq!(field.potential(Cell::new(4, 4)), 0.0);
        assert!(field.potential(Cell::new(0, 1)) > field.potential(Cell::new(2, 2)));
        assert!(field.potential(Cell::new(2, 2)) > field.potential(Cell::new(4, 4)));
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    #[should_panic]
    fn out_of_bounds_query_fails_fast() {
        let s = open_grid(5, Neighbourhood::VonNeumann);
        s.is_blocked(Cell::new(9, 0));
    }

    #[test]
    fn neighbours_use_configured_adjacency() {
        let s = open_grid(5, Neighbourhood::Moore);
        assert_eq!(s.neighbours(Cell::new(2, 2)).len(), 8);
    }
}
