//! Round-robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (stable, so simultaneous arrivals keep
//!    their input order).
//! 2. Keep a FIFO ready queue and an admission cursor: the number of
//!    sorted processes admitted so far. The cursor only ever moves
//!    forward, so every process is admitted exactly once.
//! 3. Pop the front process and run it for `min(remaining, quantum)`.
//! 4. Admit every process that has arrived by the new clock, then put the
//!    popped process back at the tail if it still has work left.
//! 5. If the queue drains while processes are still unadmitted, jump the
//!    clock to the next arrival.
//!
//! Rows are emitted in arrival order.

use std::collections::VecDeque;

use log::debug;

use super::metrics::finish;
use super::{check_input, GanttMode, SchedulingAlgorithm, SimulationConfig, DEFAULT_QUANTUM};
use crate::error::SchedulingError;
use crate::models::{arrival_order, GanttChart, Process, ScheduleResult, ScheduleRow};

/// Round-robin scheduler.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
    gantt_mode: GanttMode,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            gantt_mode: GanttMode::Coarse,
        }
    }

    /// Creates a scheduler from the shared configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            quantum: config.quantum,
            gantt_mode: config.gantt_mode,
        }
    }

    /// Sets the Gantt recording mode.
    pub fn with_gantt_mode(mut self, mode: GanttMode) -> Self {
        self.gantt_mode = mode;
        self
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

/// Admits, in arrival order, every unadmitted process arrived by `clock`.
fn admit_arrivals(
    sorted: &[&Process],
    admitted: &mut usize,
    clock: i64,
    queue: &mut VecDeque<usize>,
) {
    while *admitted < sorted.len() && sorted[*admitted].has_arrived(clock) {
        queue.push_back(*admitted);
        *admitted += 1;
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError> {
        if self.quantum <= 0 {
            return Err(SchedulingError::InvalidQuantum(self.quantum));
        }
        check_input(processes)?;

        let sorted: Vec<&Process> = arrival_order(processes)
            .into_iter()
            .map(|i| &processes[i])
            .collect();
        let n = sorted.len();

        let mut remaining: Vec<i64> = sorted.iter().map(|p| p.burst).collect();
        let mut completions: Vec<i64> = vec![0; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut gantt = GanttChart::new();
        let mut admitted = 0;
        let mut clock: i64 = 0;

        loop {
            if queue.is_empty() {
                if admitted == n {
                    break;
                }
                let next = sorted[admitted].arrival;
                if next > clock {
                    debug!("RR: idle {clock}..{next}");
                    clock = next;
                }
                admit_arrivals(&sorted, &mut admitted, clock, &mut queue);
                continue;
            }

            let Some(pos) = queue.pop_front() else {
                break;
            };
            let p = sorted[pos];
            let run = remaining[pos].min(self.quantum);

            if self.gantt_mode == GanttMode::Exact {
                gantt.record(p.id, clock, clock + run);
            }
            clock += run;
            remaining[pos] -= run;

            admit_arrivals(&sorted, &mut admitted, clock, &mut queue);

            if remaining[pos] == 0 {
                debug!("RR: process {} completes at t={clock}", p.id);
                completions[pos] = clock;
                if self.gantt_mode == GanttMode::Coarse {
                    gantt.record(p.id, clock - p.burst, clock);
                }
            } else {
                debug!(
                    "RR: process {} preempted at t={clock}, {} remaining",
                    p.id, remaining[pos]
                );
                queue.push_back(pos);
            }
        }

        let rows = sorted
            .iter()
            .zip(&completions)
            .map(|(p, &c)| ScheduleRow::completed_at(p, c))
            .collect();

        finish(self.name(), rows, gantt)
    }
}
