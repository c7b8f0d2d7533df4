//! Non-preemptive shortest job, ordered by `(arrival, burst)`.
//!
//! Reported under the "Priority" title for compatibility with existing
//! reports, but the priority field plays no part in ordering: processes
//! are sorted by arrival, shorter bursts first among equal arrivals, and
//! then run to completion in that order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use log::debug;

use super::metrics::finish;
use super::{check_input, SchedulingAlgorithm};
use crate::error::SchedulingError;
use crate::models::{GanttChart, Process, ScheduleResult, ScheduleRow};

/// Non-preemptive shortest-job scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJob;

impl SchedulingAlgorithm for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF-NP"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError> {
        check_input(processes)?;

        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| (p.arrival, p.burst));

        let mut t: i64 = 0;
        let mut rows = Vec::with_capacity(order.len());
        let mut gantt = GanttChart::new();

        for p in order {
            let wait = if p.arrival > t {
                debug!("SJF-NP: idle {t}..{} waiting for process {}", p.arrival, p.id);
                t = p.arrival;
                0
            } else {
                t - p.arrival
            };

            t += p.burst;
            gantt.record(p.id, t - p.burst, t);
            rows.push(ScheduleRow::with_wait(p, wait));
        }

        finish(self.name(), rows, gantt)
    }
}
