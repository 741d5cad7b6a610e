//! JSON trace of every pedestrian's movement through the scenario.
//!
//! The trace is a sequence of per-tick snapshots.  Snapshot `t` lists every
//! pedestrian whose path extends to tick `t` — pedestrians disappear from
//! snapshots after their evacuation tick — in ascending identifier order.
//!
//! # Schema
//!
//! ```json
//! {
//!   "snapshots": [
//!     {
//!       "timestamp": 0.4,
//!       "crowd": [
//!         { "id": 0, "location": { "domain": 0, "coordinates": { "X": 3, "Y": 7 } } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `X` is the column and `Y` the row; `timestamp` is simulated seconds
//! (tick × tick duration).

use std::io::Write;

use serde::{Deserialize, Serialize};

use evac_sim::Automaton;

use crate::OutputResult;

/// The single simulation domain.  Multi-domain routing is out of scope; the
/// field exists so traces stay readable by multi-domain consumers.
const DOMAIN: u32 = 0;

/// Cell coordinates as consumers expect them: `X` = column, `Y` = row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceCoordinates {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
}

/// Where a pedestrian stood at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLocation {
    pub domain: u32,
    pub coordinates: TraceCoordinates,
}

/// One pedestrian within one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedPedestrian {
    pub id: u32,
    pub location: TraceLocation,
}

/// All pedestrian positions at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulated seconds since the start of the run.
    pub timestamp: f64,
    pub crowd: Vec<TracedPedestrian>,
}

/// The full movement trace of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Build the trace from the automaton's pedestrian records, one snapshot
    /// per elapsed tick.
    pub fn from_automaton(automaton: &Automaton) -> Trace {
        let records = automaton.records(); // ascending by id
        let time_per_tick = automaton.clock().time_per_tick_secs;

        let snapshots = (0..automaton.tick_count())
            .map(|t| Snapshot {
                timestamp: t as f64 * time_per_tick,
                crowd: records
                    .iter()
                    .filter_map(|record| {
                        record.path.get(t as usize).map(|cell| TracedPedestrian {
                            id: record.id.0,
                            location: TraceLocation {
                                domain: DOMAIN,
                                coordinates: TraceCoordinates {
                                    x: cell.column,
                                    y: cell.row,
                                },
                            },
                        })
                    })
                    .collect(),
            })
            .collect();

        Trace { snapshots }
    }

    /// Serialize as pretty-printed JSON into `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> OutputResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Serialize as a pretty-printed JSON string.
    pub fn to_json_string(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
