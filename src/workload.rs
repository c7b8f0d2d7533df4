//! Seeded random workloads.
//!
//! Generates deterministic process sets for exercising the schedulers
//! across many inputs. The same `(count, seed, shape)` always yields the
//! same processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Value ranges for generated processes (inclusive bounds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadShape {
    /// Latest possible arrival tick.
    pub max_arrival: i64,
    /// Shortest burst.
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Largest priority label (labels drawn from `0..=max_priority`).
    pub max_priority: i64,
}

impl Default for WorkloadShape {
    fn default() -> Self {
        Self {
            max_arrival: 20,
            min_burst: 1,
            max_burst: 12,
            max_priority: 5,
        }
    }
}

/// Generates `count` processes with IDs `1..=count` in ID order.
///
/// Arrivals are not sorted; sort the result if the consumer needs it.
///
/// # Example
/// ```
/// use cpu_schedule::workload::{random_processes, WorkloadShape};
///
/// let a = random_processes(5, 42, &WorkloadShape::default());
/// let b = random_processes(5, 42, &WorkloadShape::default());
/// assert_eq!(a, b);
/// ```
pub fn random_processes(count: usize, seed: u64, shape: &WorkloadShape) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let min_burst = shape.min_burst.max(1);
    let max_burst = shape.max_burst.max(min_burst);

    (1..=count as i64)
        .map(|id| {
            let arrival = rng.random_range(0..=shape.max_arrival.max(0));
            let burst = rng.random_range(min_burst..=max_burst);
            let priority = rng.random_range(0..=shape.max_priority.max(0));
            Process::new(id, burst, arrival).with_priority(priority)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_deterministic() {
        let shape = WorkloadShape::default();
        assert_eq!(random_processes(10, 1, &shape), random_processes(10, 1, &shape));
        assert_ne!(random_processes(10, 1, &shape), random_processes(10, 2, &shape));
    }

    #[test]
    fn test_respects_shape() {
        let shape = WorkloadShape {
            max_arrival: 3,
            min_burst: 2,
            max_burst: 4,
            max_priority: 0,
        };
        let ps = random_processes(50, 9, &shape);
        assert_eq!(ps.len(), 50);
        assert!(validate_processes(&ps).is_ok());
        for p in &ps {
            assert!((0..=3).contains(&p.arrival));
            assert!((2..=4).contains(&p.burst));
            assert_eq!(p.priority, 0);
        }
    }

    #[test]
    fn test_degenerate_shape_still_valid() {
        let shape = WorkloadShape {
            max_arrival: -5,
            min_burst: 0,
            max_burst: 0,
            max_priority: 0,
        };
        let ps = random_processes(3, 0, &shape);
        assert!(validate_processes(&ps).is_ok());
        assert!(ps.iter().all(|p| p.burst == 1 && p.arrival == 0));
    }
}
