//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::PedestrianId;

    #[test]
    fn index_roundtrip() {
        let id = PedestrianId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PedestrianId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PedestrianId(0) < PedestrianId(1));
        assert!(PedestrianId(100) > PedestrianId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(PedestrianId::INVALID.0, u32::MAX);
        assert_eq!(PedestrianId::default(), PedestrianId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PedestrianId(7).to_string(), "PedestrianId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Rect};

    #[test]
    fn cell_bounds_and_flat_index() {
        let c = Cell::new(2, 3);
        assert!(c.in_bounds(5, 5));
        assert!(!c.in_bounds(5, 3));
        assert!(!c.in_bounds(2, 5));
        assert_eq!(c.flat_index(5), 13);
    }

    #[test]
    fn cell_offset_clips_at_edges() {
        let c = Cell::new(0, 0);
        assert_eq!(c.offset(-1, 0, 5, 5), None);
        assert_eq!(c.offset(0, -1, 5, 5), None);
        assert_eq!(c.offset(1, 1, 5, 5), Some(Cell::new(1, 1)));
        assert_eq!(Cell::new(4, 4).offset(1, 0, 5, 5), None);
    }

    #[test]
    fn cell_ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(3, 2) < Cell::new(3, 4));
    }

    #[test]
    fn rect_contains_and_edges() {
        let r = Rect::new(2, 3, 2, 4); // rows 2..=3, columns 3..=6
        assert_eq!(r.top(), 3);
        assert_eq!(r.right(), 6);
        assert!(r.contains_cell(Cell::new(2, 3)));
        assert!(r.contains_cell(Cell::new(3, 6)));
        assert!(!r.contains_cell(Cell::new(4, 3)));
        assert!(!r.contains_cell(Cell::new(2, 7)));
    }

    #[test]
    fn rect_intersections() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(2, 2, 3, 3); // overlaps a at (2,2)
        let c = Rect::new(3, 3, 2, 2); // disjoint from a
        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(!a.intersects(Rect::new(1, 1, 0, 5))); // empty never intersects
    }

    #[test]
    fn rect_manhattan_distance() {
        let r = Rect::new(2, 2, 2, 2); // rows 2..=3, columns 2..=3
        assert_eq!(r.manhattan_distance(Cell::new(2, 3)), 0); // inside
        assert_eq!(r.manhattan_distance(Cell::new(0, 2)), 2); // below
        assert_eq!(r.manhattan_distance(Cell::new(2, 6)), 3); // right
        assert_eq!(r.manhattan_distance(Cell::new(0, 0)), 4); // corner
    }

    #[test]
    fn rect_cells_row_major() {
        let r = Rect::new(1, 1, 2, 2);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2)
            ]
        );
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.4);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 0.8).abs() < 1e-12);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn ticks_within_floors() {
        let clock = SimClock::new(0.4);
        // 10 minutes at 0.4 s/tick = 1500 ticks exactly.
        assert_eq!(clock.ticks_within_secs(600.0), 1500);
        // A partial trailing tick is dropped, never added.
        assert_eq!(clock.ticks_within_secs(1.0), 2);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let draws_a: Vec<u32> = (0..32).map(|_| a.gen_range(0..1_000_000)).collect();
        let draws_b: Vec<u32> = (0..32).map(|_| b.gen_range(0..1_000_000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn bernoulli_degenerate_probabilities() {
        let mut rng = SimRng::new(3);
        assert!((0..64).all(|_| rng.bernoulli(1.0)));
        assert!((0..64).all(|_| !rng.bernoulli(0.0)));
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SimRng::new(11);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn discrete_frequencies_track_weights() {
        // Empirical selection frequency must converge to w_i / Σw.
        let weights = [1.0_f64, 2.0, 3.0, 4.0];
        let total: f64 = weights.iter().sum();
        let mut rng = SimRng::new(99);
        let mut counts = [0u32; 4];

        const DRAWS: u32 = 100_000;
        for _ in 0..DRAWS {
            counts[rng.discrete_by(&weights, |&w| w)] += 1;
        }
        for (i, &w) in weights.iter().enumerate() {
            let expected = w / total;
            let observed = counts[i] as f64 / DRAWS as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "weight {i}: observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn discrete_single_item() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.discrete_by(&[0.5], |&w| w), 0);
    }

    #[test]
    #[should_panic]
    fn discrete_zero_total_weight_is_fatal() {
        let mut rng = SimRng::new(0);
        rng.discrete_by(&[0.0, 0.0], |&w| w);
    }
}
