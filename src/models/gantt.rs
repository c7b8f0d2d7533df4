//! Gantt recording.
//!
//! Accumulates the intervals during which each process held the CPU.

use serde::{Deserialize, Serialize};

/// A contiguous span of CPU ownership by one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process holding the CPU.
    pub process_id: i64,
    /// Start tick (inclusive).
    pub start: i64,
    /// Stop tick (exclusive).
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Gantt recorder.
///
/// Empty or inverted spans are dropped. A span that continues the previous
/// slice of the same process is merged into it, so unit-stepped simulations
/// produce one slice per run segment rather than one per tick.
#[derive(Debug, Clone, Default)]
pub struct GanttChart {
    slices: Vec<TimeSlice>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `process_id` ran over `[start, stop)`.
    pub fn record(&mut self, process_id: i64, start: i64, stop: i64) {
        if stop <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.slices.push(TimeSlice::new(process_id, start, stop));
    }

    /// Recorded slices in recording order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Consumes the chart, returning its slices.
    pub fn into_slices(self) -> Vec<TimeSlice> {
        self.slices
    }
}
