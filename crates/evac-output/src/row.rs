//! Plain data rows written by the CSV backend.

use evac_sim::Automaton;

/// Summary of one pedestrian's run (live or evacuated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PedestrianSummaryRow {
    pub pedestrian_id: u32,
    pub steps: u32,
    /// Tick at which the pedestrian reached an exit; `None` if still in the
    /// scenario when the run ended.
    pub exit_tick: Option<u64>,
    /// `exit_tick` converted to simulated seconds.
    pub evacuation_secs: Option<f64>,
}

impl PedestrianSummaryRow {
    /// One row per pedestrian, ascending by identifier.
    pub fn collect(automaton: &Automaton) -> Vec<Self> {
        automaton
            .records()
            .iter()
            .map(|r| Self {
                pedestrian_id: r.id.0,
                steps: r.steps,
                exit_tick: r.exit_tick.map(|t| t.0),
                evacuation_secs: r.exit_tick.map(|t| automaton.clock().secs_for(t)),
            })
            .collect()
    }
}

/// One-row aggregate of the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub total_ticks: u64,
    pub evacuated: u64,
    pub remaining: u64,
    pub mean_steps: f64,
    pub median_steps: f64,
    pub mean_evacuation_secs: f64,
    pub median_evacuation_secs: f64,
}

impl RunSummaryRow {
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let stats = automaton.statistics();
        Self {
            total_ticks: automaton.tick_count(),
            evacuated: stats.evacuated as u64,
            remaining: stats.remaining as u64,
            mean_steps: stats.mean_steps,
            median_steps: stats.median_steps,
            mean_evacuation_secs: stats.mean_evacuation_secs,
            median_evacuation_secs: stats.median_evacuation_secs,
        }
    }
}
