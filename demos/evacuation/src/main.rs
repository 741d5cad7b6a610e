//! evacuation — demo run of the evac simulator.
//!
//! Generates a random indoor scenario, fills it with pedestrians of varied
//! temperament, runs the automaton headless to completion (or the time
//! limit), prints evacuation statistics, and writes the JSON trace plus CSV
//! summaries to `./output/`.

mod scenarios;

use std::fs;
use std::fs::File;
use std::path::Path;

use anyhow::Result;

use evac_core::{SimRng, Tick};
use evac_output::{CsvSummaryWriter, PedestrianSummaryRow, RunSummaryRow, Trace};
use evac_sim::{Automaton, AutomatonObserver, AutomatonParameters, PedestrianParameters};

use scenarios::random_scenario;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TIME_LIMIT_SECS: f64 = 10.0 * 60.0; // 10 minutes to get everyone out
const WALKING_SPEED_MPS: f64 = 1.3; // fastest pedestrians
const PROGRESS_INTERVAL_TICKS: u64 = 100;
const OUTPUT_DIR: &str = "output";

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl AutomatonObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, live: usize, evacuated: usize) {
        if (tick.0 + 1) % PROGRESS_INTERVAL_TICKS == 0 {
            println!("{tick}: {live} in scenario, {evacuated} evacuated");
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        println!("run ended at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== evacuation — cellular automaton demo ===");
    println!("Seed: {SEED}  |  Time limit: {TIME_LIMIT_SECS} s");
    println!();

    // 1. Generate the scenario (the same seed always yields the same floor).
    let mut rng = SimRng::new(SEED);
    let scenario = random_scenario(&mut rng)?;
    println!(
        "Scenario: {}×{} cells, {} exit cells",
        scenario.rows(),
        scenario.columns(),
        scenario.exits().len()
    );

    // 2. Build the automaton.
    let parameters = AutomatonParameters::from_walking_speed(
        scenario.cell_dimension_m(),
        WALKING_SPEED_MPS,
        TIME_LIMIT_SECS,
        SEED,
    );
    let mut automaton = Automaton::new(scenario, parameters)?;

    // 3. Place pedestrians uniformly, each with its own temperament.
    let count = rng.gen_range(150..600usize);
    automaton.add_pedestrians_uniformly(count, || PedestrianParameters {
        field_attraction_bias: rng.gen_range(1.0..10.0),
        crowd_repulsion: rng.gen_range(0.1..0.5),
        velocity_percent: rng.gen_range(0.3..1.0),
    })?;
    println!("Placed {count} pedestrians");
    println!();

    // 4. Run headless.
    automaton.run(&mut ProgressPrinter);
    println!();
    println!("{}", automaton.statistics());
    println!();

    // 5. Write outputs.
    fs::create_dir_all(OUTPUT_DIR)?;
    let trace_path = Path::new(OUTPUT_DIR).join("trace.json");
    Trace::from_automaton(&automaton).write_json(File::create(&trace_path)?)?;
    println!("Trace written to {}", trace_path.display());

    let mut writer = CsvSummaryWriter::new(Path::new(OUTPUT_DIR))?;
    writer.write_pedestrians(&PedestrianSummaryRow::collect(&automaton))?;
    writer.write_run(&RunSummaryRow::from_automaton(&automaton))?;
    writer.finish()?;
    println!("Summaries written to {OUTPUT_DIR}/");

    Ok(())
}
