//! Descriptive statistics over a finished (or interrupted) run.

use std::fmt;

/// Arithmetic mean.  Returns 0.0 for empty input so summaries of runs with
/// no evacuees stay printable.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median (average of the two middle values for even counts).  Returns 0.0
/// for empty input.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Aggregate statistics of one simulation run.
///
/// Step and time statistics are computed over the evacuated population only;
/// `remaining` counts pedestrians still in the scenario when the run ended.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub mean_steps: f64,
    pub median_steps: f64,
    pub mean_evacuation_secs: f64,
    pub median_evacuation_secs: f64,
    pub evacuated: usize,
    pub remaining: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evacuated {} pedestrians, {} remaining", self.evacuated, self.remaining)?;
        writeln!(
            f,
            "steps: mean {:.2}, median {:.2}",
            self.mean_steps, self.median_steps
        )?;
        write!(
            f,
            "evacuation time: mean {:.2} s, median {:.2} s",
            self.mean_evacuation_secs, self.median_evacuation_secs
        )
    }
}
