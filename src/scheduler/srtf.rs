//! Shortest-remaining-time-first (preemptive SJF).
//!
//! # Algorithm
//!
//! Unit-stepped simulation from t=0. Every tick, among arrived and
//! unfinished processes, the one with the smallest remaining burst runs
//! for one tick. Ties go to the lowest input index. When nothing is
//! eligible the clock jumps to the next arrival with no slice recorded,
//! so idle gaps cost nothing.
//!
//! Rows are emitted in input order.
//!
//! # Complexity
//! O(B * n) where B is the total burst. Intended for workloads of tens
//! to a few hundred ticks of CPU time.

use log::debug;

use super::metrics::finish;
use super::{check_input, GanttMode, SchedulingAlgorithm, SimulationConfig};
use crate::error::SchedulingError;
use crate::models::{GanttChart, Process, ScheduleResult, ScheduleRow};

/// Preemptive shortest-remaining-time-first scheduler.
#[derive(Debug, Clone, Default)]
pub struct Srtf {
    gantt_mode: GanttMode,
}

impl Srtf {
    /// Creates a scheduler recording coarse Gantt slices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from the shared configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            gantt_mode: config.gantt_mode,
        }
    }

    /// Sets the Gantt recording mode.
    pub fn with_gantt_mode(mut self, mode: GanttMode) -> Self {
        self.gantt_mode = mode;
        self
    }
}

/// Index of the arrived, unfinished process with the least remaining time.
fn select_shortest(processes: &[Process], remaining: &[i64], t: i64) -> Option<usize> {
    (0..processes.len())
        .filter(|&i| remaining[i] > 0 && processes[i].has_arrived(t))
        .min_by_key(|&i| remaining[i])
}

/// Earliest arrival among unfinished processes.
fn next_arrival(processes: &[Process], remaining: &[i64]) -> Option<i64> {
    processes
        .iter()
        .zip(remaining)
        .filter(|&(_, &r)| r > 0)
        .map(|(p, _)| p.arrival)
        .min()
}

impl SchedulingAlgorithm for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError> {
        check_input(processes)?;

        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut completions: Vec<Option<i64>> = vec![None; n];
        let mut gantt = GanttChart::new();
        let mut done = 0;
        let mut t: i64 = 0;
        let mut running: Option<usize> = None;

        while done < n {
            let Some(i) = select_shortest(processes, &remaining, t) else {
                match next_arrival(processes, &remaining) {
                    Some(next) if next > t => {
                        debug!("SRTF: idle {t}..{next}");
                        t = next;
                    }
                    _ => t += 1,
                }
                continue;
            };

            if let Some(prev) = running {
                if prev != i && remaining[prev] > 0 {
                    debug!(
                        "SRTF: t={t} process {} preempts {} (remaining {} < {})",
                        processes[i].id, processes[prev].id, remaining[i], remaining[prev]
                    );
                }
            }
            running = Some(i);

            if self.gantt_mode == GanttMode::Exact {
                gantt.record(processes[i].id, t, t + 1);
            }
            remaining[i] -= 1;
            t += 1;

            if remaining[i] == 0 {
                let p = &processes[i];
                debug!("SRTF: process {} completes at t={t}", p.id);
                completions[i] = Some(t);
                done += 1;
                if self.gantt_mode == GanttMode::Coarse {
                    gantt.record(p.id, t - p.burst, t);
                }
            }
        }

        let rows = processes
            .iter()
            .zip(&completions)
            .filter_map(|(p, c)| c.map(|c| ScheduleRow::completed_at(p, c)))
            .collect();

        finish(self.name(), rows, gantt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;

    fn textbook() -> Vec<Process> {
        vec![
            Process::new(1, 8, 0),
            Process::new(2, 4, 1),
            Process::new(3, 9, 2),
            Process::new(4, 5, 3),
        ]
    }

    #[test]
    fn test_srtf_textbook() {
        let r = Srtf::new().schedule(&textbook()).unwrap();

        assert_eq!(r.completion_order(), vec![2, 4, 1, 3]);
        let completions: Vec<i64> = r.rows.iter().map(|row| row.completion).collect();
        assert_eq!(completions, vec![17, 5, 26, 10]);
        let waits: Vec<i64> = r.rows.iter().map(|row| row.wait).collect();
        assert_eq!(waits, vec![9, 0, 15, 2]);
        assert!(waits.iter().all(|&w| w >= 0));
        assert!((r.average_wait - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_exact_gantt() {
        let r = Srtf::new()
            .with_gantt_mode(GanttMode::Exact)
            .schedule(&textbook())
            .unwrap();
        assert_eq!(
            r.gantt,
            vec![
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 5),
                TimeSlice::new(4, 5, 10),
                TimeSlice::new(1, 10, 17),
                TimeSlice::new(3, 17, 26),
            ]
        );
        assert_eq!(r.busy_time(), 26);
    }

    #[test]
    fn test_srtf_coarse_gantt_one_slice_per_process() {
        let r = Srtf::new().schedule(&textbook()).unwrap();
        assert_eq!(r.gantt.len(), 4);
        assert_eq!(r.gantt[0], TimeSlice::new(2, 1, 5));
        assert_eq!(r.gantt[2], TimeSlice::new(1, 9, 17));
    }

    #[test]
    fn test_srtf_tie_goes_to_lowest_index() {
        let ps = vec![Process::new(10, 3, 0), Process::new(20, 3, 0)];
        let r = Srtf::new().schedule(&ps).unwrap();
        assert_eq!(r.completion_order(), vec![10, 20]);
        assert_eq!(r.row_for(20).unwrap().wait, 3);
    }

    #[test]
    fn test_srtf_idle_before_first_arrival() {
        let ps = vec![Process::new(1, 2, 4)];
        let r = Srtf::new().schedule(&ps).unwrap();
        assert_eq!(r.rows[0].wait, 0);
        assert_eq!(r.rows[0].completion, 6);
        assert_eq!(r.gantt, vec![TimeSlice::new(1, 4, 6)]);
    }

    #[test]
    fn test_srtf_skips_long_idle_gap() {
        let ps = vec![Process::new(1, 1, 2_000_000_000)];
        let started = std::time::Instant::now();
        let r = Srtf::new().schedule(&ps).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(r.rows[0].completion, 2_000_000_001);
        assert_eq!(r.rows[0].wait, 0);
        assert_eq!(r.gantt, vec![TimeSlice::new(1, 2_000_000_000, 2_000_000_001)]);
    }

    #[test]
    fn test_srtf_idle_gap_between_processes() {
        let ps = vec![Process::new(1, 2, 0), Process::new(2, 3, 1_000_000)];
        let r = Srtf::new()
            .with_gantt_mode(GanttMode::Exact)
            .schedule(&ps)
            .unwrap();
        assert_eq!(
            r.gantt,
            vec![TimeSlice::new(1, 0, 2), TimeSlice::new(2, 1_000_000, 1_000_003)]
        );
        assert_eq!(r.row_for(2).unwrap().wait, 0);
    }

    #[test]
    fn test_srtf_empty() {
        assert_eq!(Srtf::new().schedule(&[]), Err(SchedulingError::EmptyInput));
    }
}
