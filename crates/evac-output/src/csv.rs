//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `pedestrian_summaries.csv` — one row per pedestrian
//! - `run_summary.csv` — one row for the whole run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, PedestrianSummaryRow, RunSummaryRow};

/// Writes run summaries to two CSV files.
pub struct CsvSummaryWriter {
    pedestrians: Writer<File>,
    run: Writer<File>,
    finished: bool,
}

impl CsvSummaryWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut pedestrians = Writer::from_path(dir.join("pedestrian_summaries.csv"))?;
        pedestrians.write_record(["pedestrian_id", "steps", "exit_tick", "evacuation_secs"])?;

        let mut run = Writer::from_path(dir.join("run_summary.csv"))?;
        run.write_record([
            "total_ticks",
            "evacuated",
            "remaining",
            "mean_steps",
            "median_steps",
            "mean_evacuation_secs",
            "median_evacuation_secs",
        ])?;

        Ok(Self {
            pedestrians,
            run,
            finished: false,
        })
    }

    /// Write a batch of pedestrian summaries.  Non-evacuees get empty
    /// exit-tick and evacuation-time fields.
    pub fn write_pedestrians(&mut self, rows: &[PedestrianSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.pedestrians.write_record(&[
                row.pedestrian_id.to_string(),
                row.steps.to_string(),
                row.exit_tick.map(|t| t.to_string()).unwrap_or_default(),
                row.evacuation_secs.map(|s| s.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Write the run-level summary row.
    pub fn write_run(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.run.write_record(&[
            row.total_ticks.to_string(),
            row.evacuated.to_string(),
            row.remaining.to_string(),
            row.mean_steps.to_string(),
            row.median_steps.to_string(),
            row.mean_evacuation_secs.to_string(),
            row.median_evacuation_secs.to_string(),
        ])?;
        Ok(())
    }

    /// Flush both files.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.pedestrians.flush()?;
        self.run.flush()?;
        Ok(())
    }
}
