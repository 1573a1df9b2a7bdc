//! Run report: timestamps, wall-clock duration and per-worker totals.

use crate::core::Item;
use crate::pool::WorkerSnapshot;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Timestamp format used in log lines and the summary.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Outcome of one assembly line run.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    /// Seed used to shuffle the workload
    pub seed: u64,
    /// Wall-clock time recorded before the workers started
    pub started_at: DateTime<Local>,
    /// Wall-clock time recorded after every worker stopped
    pub finished_at: DateTime<Local>,
    /// Elapsed time between the two, measured on a monotonic clock
    pub elapsed: Duration,
    /// Number of items in the workload
    pub total_items: usize,
    /// Items of each kind in the workload
    pub composition: BTreeMap<Item, usize>,
    /// Completion records found in the sink after it was closed
    pub completions: usize,
    /// Final statistics of every worker, in id order
    pub workers: Vec<WorkerSnapshot>,
}

impl RunReport {
    /// Sum of every worker's processed count.
    pub fn total_processed(&self) -> u64 {
        self.workers.iter().map(|w| w.processed).sum()
    }

    /// Whether processed counts and completion records both match the workload.
    pub fn is_balanced(&self) -> bool {
        self.total_processed() == self.total_items as u64 && self.completions == self.total_items
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finished at: {}", self.finished_at.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Total time: {:?}", self.elapsed)?;
        writeln!(f)?;
        writeln!(f, "Items processed per worker:")?;
        for worker in &self.workers {
            writeln!(
                f,
                "  Worker {}: {} items ({:?} busy)",
                worker.id, worker.processed, worker.busy
            )?;
        }
        write!(f, "Total: {}/{} items", self.total_processed(), self.total_items)
    }
}
