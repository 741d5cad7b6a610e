//! Observer hooks for progress reporting and rendering.

use evac_core::{Cell, PedestrianId, Tick};
use evac_scenario::Scenario;

/// Callbacks invoked by [`Automaton::run`][crate::Automaton::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A rendering collaborator implements
/// [`paint`](Self::paint); any animation pacing (sleeping to match real
/// time, divided by the frame's `gui_time_factor`) belongs inside that
/// implementation — the engine itself never delays, so headless runs are
/// exact.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl AutomatonObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, live: usize, evacuated: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {live} in scenario, {evacuated} evacuated");
///         }
///     }
/// }
/// ```
pub trait AutomatonObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick commits, with the population split.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize, _evacuated: usize) {}

    /// Called with a tear-free frame snapshot once before the first tick and
    /// once after every tick.
    fn paint(&mut self, _frame: &Frame<'_>) {}

    /// Cooperative cancellation, polled once per tick boundary — a `true`
    /// here ends the run before the next tick starts, never mid-tick.
    fn should_stop(&mut self) -> bool {
        false
    }

    /// Called once after the run loop ends.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// An [`AutomatonObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl AutomatonObserver for NoopObserver {}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// One pedestrian as a rendering collaborator sees it.
#[derive(Copy, Clone, Debug)]
pub struct PedestrianSprite {
    pub id: PedestrianId,
    pub cell: Cell,
    /// Useful for shading: slower pedestrians can be drawn darker.
    pub velocity_percent: f64,
}

/// A consistent snapshot of the simulation for one `paint` call: positions
/// copied under the population lock (released before the observer runs)
/// plus a scenario borrow for the blocked/exit layout.
pub struct Frame<'a> {
    pub tick: Tick,
    pub time_per_tick_secs: f64,
    /// Configured animation speed-up relative to real time.
    pub gui_time_factor: u32,
    pub scenario: &'a Scenario,
    pub pedestrians: Vec<PedestrianSprite>,
}
