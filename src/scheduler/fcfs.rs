//! First-come, first-serve.
//!
//! # Algorithm
//!
//! Single pass over the processes in the order given. A service clock
//! tracks when the CPU next becomes free; each process starts at
//! `max(clock, arrival)` and runs to completion.
//!
//! The input is NOT sorted here. Callers present processes in arrival
//! order; otherwise the schedule is valid but not first-come order.
//! `SimulationConfig::require_arrival_order` turns that into an error.
//!
//! # Complexity
//! O(n).

use log::{debug, warn};

use super::metrics::finish;
use super::{check_input, FcfsWaitPolicy, SchedulingAlgorithm, SimulationConfig};
use crate::error::SchedulingError;
use crate::models::{first_out_of_order, GanttChart, Process, ScheduleResult, ScheduleRow};

/// First-come, first-serve scheduler.
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    wait_policy: FcfsWaitPolicy,
    require_arrival_order: bool,
}

impl Fcfs {
    /// Creates a scheduler with the default wait policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from the shared configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            wait_policy: config.fcfs_wait,
            require_arrival_order: config.require_arrival_order,
        }
    }

    /// Sets the wait policy.
    pub fn with_wait_policy(mut self, policy: FcfsWaitPolicy) -> Self {
        self.wait_policy = policy;
        self
    }

    /// Rejects input not sorted by arrival.
    pub fn with_arrival_order_check(mut self, enabled: bool) -> Self {
        self.require_arrival_order = enabled;
        self
    }
}

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError> {
        check_input(processes)?;
        if self.require_arrival_order {
            if let Some(index) = first_out_of_order(processes) {
                return Err(SchedulingError::UnsortedArrivals { index });
            }
        }
        if self.wait_policy == FcfsWaitPolicy::CarryOver {
            warn!("FCFS: carry-over wait policy active; rows for tick-0 arrivals reuse the previous wait");
        }

        let mut clock: i64 = 0;
        let mut wait: i64 = 0;
        let mut rows = Vec::with_capacity(processes.len());
        let mut gantt = GanttChart::new();

        for p in processes {
            let start = clock.max(p.arrival);
            if start > clock {
                debug!("FCFS: idle {clock}..{start} waiting for process {}", p.id);
            }

            match self.wait_policy {
                FcfsWaitPolicy::Recompute => wait = start - p.arrival,
                FcfsWaitPolicy::CarryOver => {
                    if p.arrival > 0 {
                        wait = start - p.arrival;
                    }
                }
            }

            clock = start + p.burst;
            gantt.record(p.id, start, clock);
            rows.push(ScheduleRow::with_wait(p, wait));
        }

        finish(self.name(), rows, gantt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    #[test]
    fn test_fcfs_two_processes() {
        let ps = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
        let r = Fcfs::new().schedule(&ps).unwrap();

        let waits: Vec<i64> = r.rows.iter().map(|row| row.wait).collect();
        let completions: Vec<i64> = r.rows.iter().map(|row| row.completion).collect();
        assert_eq!(waits, vec![0, 4]);
        assert_eq!(completions, vec![5, 8]);
        assert_eq!(r.gantt, vec![TimeSlice::new(1, 0, 5), TimeSlice::new(2, 5, 8)]);
        assert!((r.average_wait - 2.0).abs() < 1e-10);
        assert!((r.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_keeps_input_order() {
        // Not sorted by arrival: scheduled as given.
        let ps = vec![Process::new(1, 2, 3), Process::new(2, 2, 0)];
        let r = Fcfs::new().schedule(&ps).unwrap();
        assert_eq!(r.rows[0].id, 1);
        assert_eq!(r.rows[0].wait, 0);
        assert_eq!(r.rows[1].wait, 5); // starts at 5, arrived at 0
        assert_eq!(r.rows[1].completion, 7);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let ps = vec![Process::new(1, 2, 0), Process::new(2, 3, 10)];
        let r = Fcfs::new().schedule(&ps).unwrap();
        assert_eq!(r.rows[1].wait, 0);
        assert_eq!(r.rows[1].completion, 13);
        assert_eq!(r.gantt[1], TimeSlice::new(2, 10, 13));
        assert_eq!(r.makespan, 13);
    }

    #[test]
    fn test_fcfs_zero_arrivals_recompute() {
        let ps = vec![Process::new(1, 4, 0), Process::new(2, 2, 0)];
        let r = Fcfs::new().schedule(&ps).unwrap();
        assert_eq!(r.rows[1].wait, 4);
        assert_eq!(r.rows[1].completion, 6);
    }

    #[test]
    fn test_fcfs_zero_arrivals_carry_over() {
        let ps = vec![
            Process::new(1, 4, 0),
            Process::new(2, 2, 1),
            Process::new(3, 3, 0),
        ];
        let r = Fcfs::new()
            .with_wait_policy(FcfsWaitPolicy::CarryOver)
            .schedule(&ps)
            .unwrap();
        // Process 3 reuses process 2's wait of 3 instead of its real wait of 6.
        assert_eq!(r.rows[1].wait, 3);
        assert_eq!(r.rows[2].wait, 3);
        assert_eq!(r.rows[2].completion, 6);
        // The chart still reflects when the CPU actually ran it.
        assert_eq!(r.gantt[2], TimeSlice::new(3, 6, 9));
    }

    #[test]
    fn test_fcfs_strict_order() {
        let ps = vec![
            Process::new(1, 2, 0),
            Process::new(2, 2, 4),
            Process::new(3, 2, 1),
        ];
        let err = Fcfs::new()
            .with_arrival_order_check(true)
            .schedule(&ps)
            .unwrap_err();
        assert_eq!(err, SchedulingError::UnsortedArrivals { index: 2 });
    }

    #[test]
    fn test_fcfs_empty() {
        assert_eq!(Fcfs::new().schedule(&[]), Err(SchedulingError::EmptyInput));
    }
}
