//! `evac-output` — persistence surfaces for the evac simulator.
//!
//! Two output families:
//!
//! | Module    | Output                                                      |
//! |-----------|-------------------------------------------------------------|
//! | [`trace`] | JSON trace: per-tick crowd snapshots for every pedestrian   |
//! | [`csv`]   | `pedestrian_summaries.csv`, `run_summary.csv`               |
//!
//! Both consume the automaton's read-only record surface after (or between)
//! runs; nothing here touches simulation state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvSummaryWriter, Trace};
//!
//! let trace = Trace::from_automaton(&automaton);
//! trace.write_json(File::create("trace.json")?)?;
//!
//! let mut writer = CsvSummaryWriter::new(Path::new("./output"))?;
//! writer.write_pedestrians(&PedestrianSummaryRow::collect(&automaton))?;
//! writer.write_run(&RunSummaryRow::from_automaton(&automaton))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod trace;


pub use csv::CsvSummaryWriter;
pub use error::{OutputError, OutputResult};
pub use row::{PedestrianSummaryRow, RunSummaryRow};
pub use trace::{Snapshot, Trace, TracedPedestrian};
