//! Schedule (simulation output) model.
//!
//! A schedule result holds one row per process, the Gantt slices recorded
//! while simulating, and the aggregate metrics derived from the rows.

use serde::{Deserialize, Serialize};

use super::{Process, TimeSlice};

/// Per-process outcome of a simulation.
///
/// Always satisfies `turnaround == burst + wait` and
/// `completion == arrival + wait + burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub id: i64,
    /// Priority label copied from the input.
    pub priority: i64,
    /// CPU time required.
    pub burst: i64,
    /// Arrival tick.
    pub arrival: i64,
    /// Ticks spent eligible but not running.
    pub wait: i64,
    /// Arrival-to-completion span.
    pub turnaround: i64,
    /// Completion tick.
    pub completion: i64,
}

impl ScheduleRow {
    /// Builds a row from the process and its wait time.
    pub fn with_wait(process: &Process, wait: i64) -> Self {
        Self {
            id: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            wait,
            turnaround: process.burst + wait,
            completion: process.arrival + wait + process.burst,
        }
    }

    /// Builds a row from the process and the tick it finished at.
    pub fn completed_at(process: &Process, completion: i64) -> Self {
        Self::with_wait(process, completion - process.burst - process.arrival)
    }
}

/// A complete simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// One row per process, in the order the algorithm visited them.
    pub rows: Vec<ScheduleRow>,
    /// Recorded CPU ownership intervals.
    pub gantt: Vec<TimeSlice>,
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Processes completed per tick of elapsed time.
    pub throughput: f64,
    /// Latest completion tick.
    pub makespan: i64,
}

impl ScheduleResult {
    /// Finds the row for a given process ID.
    pub fn row_for(&self, id: i64) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Process IDs ordered by completion tick (ties keep row order).
    pub fn completion_order(&self) -> Vec<i64> {
        let mut rows: Vec<&ScheduleRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.completion);
        rows.into_iter().map(|r| r.id).collect()
    }

    /// Total ticks covered by Gantt slices.
    pub fn busy_time(&self) -> i64 {
        self.gantt.iter().map(|s| s.duration()).sum()
    }
}
