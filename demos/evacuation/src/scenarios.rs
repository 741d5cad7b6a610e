//! Scenario generation for the demo run.

use anyhow::Result;

use evac_core::{Rect, SimRng};
use evac_scenario::{Neighbourhood, Scenario, ScenarioBuilder};

/// Keep obstacles at least this many cells away from any exit so doors
/// never clog at spawn time.
const EXIT_CLEARANCE: u32 = 2;

/// Random indoor scenario: a rectangular hall with exits on the perimeter
/// and rectangular obstacles scattered across the floor.
///
/// Obstacles are drawn independently and rejected when they touch another
/// obstacle or crowd an exit, so the free space always stays connected
/// enough to evacuate through.
pub fn random_scenario(rng: &mut SimRng) -> Result<Scenario> {
    let rows = rng.gen_range(30..=50);
    let columns = rng.gen_range(40..=70);
    let cell_dimension_m = 0.4;

    let mut builder = ScenarioBuilder::new(rows, columns, cell_dimension_m, Neighbourhood::Moore);

    // ── Exits: three doors on the perimeter ───────────────────────────────
    let mut exits: Vec<Rect> = Vec::new();
    while exits.len() < 3 {
        let door = 3.min(rows.min(columns));
        let exit = match rng.gen_range(0..4u8) {
            // left / right wall
            0 => Rect::new(rng.gen_range(0..=rows - door), 0, door, 1),
            1 => Rect::new(rng.gen_range(0..=rows - door), columns - 1, door, 1),
            // top / bottom wall
            2 => Rect::new(0, rng.gen_range(0..=columns - door), 1, door),
            _ => Rect::new(rows - 1, rng.gen_range(0..=columns - door), 1, door),
        };
        if exits.iter().any(|e| e.intersects(exit)) {
            continue;
        }
        builder = builder.exit_rect(exit);
        exits.push(exit);
    }

    // ── Obstacles: random rectangles, rejected near exits ─────────────────
    let mut obstacles: Vec<Rect> = Vec::new();
    let target = rng.gen_range(10..=20usize);
    let mut attempts = 0;
    while obstacles.len() < target && attempts < 500 {
        attempts += 1;

        // Elongated walls half the time, compact blocks otherwise.
        let (height, width) = if rng.bernoulli(0.5) {
            (rng.gen_range(1..=2), rng.gen_range(3..=10))
        } else {
            (rng.gen_range(3..=10), rng.gen_range(1..=2))
        };
        if height + 2 > rows || width + 2 > columns {
            continue;
        }
        // Keep one free cell between obstacles and the outer wall.
        let obstacle = Rect::new(
            rng.gen_range(1..=rows - height - 1),
            rng.gen_range(1..=columns - width - 1),
            height,
            width,
        );

        let near_exit = exits.iter().any(|exit| {
            exit.cells()
                .any(|cell| obstacle.manhattan_distance(cell) <= EXIT_CLEARANCE)
        });
        let touches_other = obstacles.iter().any(|other| {
            other.cells().any(|cell| obstacle.manhattan_distance(cell) <= 1)
        });
        if near_exit || touches_other {
            continue;
        }

        builder = builder.block_rect(obstacle);
        obstacles.push(obstacle);
    }

    Ok(builder.build()?)
}
