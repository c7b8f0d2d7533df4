//! Process model.
//!
//! A process is the static description of one schedulable unit: when it
//! becomes eligible and how much CPU time it needs.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable input to every algorithm. `priority` is carried through to the
/// schedule rows but does not influence ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: i64,
    /// Tick at which the process becomes eligible.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Priority label (default: 0).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: i64, burst: i64, arrival: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority label.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by tick `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival <= t
    }
}

/// Returns the indices of `processes` ordered by arrival (stable).
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);
    order
}

/// Whether `processes` is sorted by non-decreasing arrival.
///
/// Returns the first offending index otherwise.
pub(crate) fn first_out_of_order(processes: &[Process]) -> Option<usize> {
    processes
        .windows(2)
        .position(|w| w[1].arrival < w[0].arrival)
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 5, 2).with_priority(3);
        assert_eq!(p.id, 7);
        assert_eq!(p.burst, 5);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.priority, 3);
        assert!(!p.has_arrived(1));
        assert!(p.has_arrived(2));
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let ps = vec![
            Process::new(1, 3, 4),
            Process::new(2, 3, 0),
            Process::new(3, 3, 4),
            Process::new(4, 3, 1),
        ];
        assert_eq!(arrival_order(&ps), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_first_out_of_order() {
        let sorted = vec![Process::new(1, 1, 0), Process::new(2, 1, 0), Process::new(3, 1, 5)];
        assert_eq!(first_out_of_order(&sorted), None);

        let unsorted = vec![Process::new(1, 1, 3), Process::new(2, 1, 1)];
        assert_eq!(first_out_of_order(&unsorted), Some(1));
    }

    #[test]
    fn test_priority_defaults_in_json() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":4}"#).unwrap();
        assert_eq!(p.priority, 0);
        assert_eq!(p, Process::new(1, 4, 0));
    }
}
