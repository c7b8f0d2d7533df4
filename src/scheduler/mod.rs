//! CPU scheduling algorithms and schedule metrics.
//!
//! Each algorithm is a pure function of a read-only process slice: it
//! sorts a private copy of indices when it needs an order, keeps all
//! working state local, and returns a `ScheduleResult`.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Order |
//! |-----------|-----------|-------|
//! | `Fcfs` | no | input order (caller sorts by arrival) |
//! | `Srtf` | yes | smallest remaining burst, lowest index on ties |
//! | `ShortestJob` | no | `(arrival, burst)` |
//! | `RoundRobin` | yes | arrival, then FIFO with a fixed quantum |
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{Algorithm, SimulationConfig};
//!
//! let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
//! let fcfs = Algorithm::Fcfs.build(&SimulationConfig::default());
//! let result = fcfs.schedule(&processes).unwrap();
//! assert_eq!(result.row_for(2).unwrap().wait, 4);
//! ```

mod config;
mod fcfs;
mod metrics;
mod round_robin;
mod shortest_job;
mod srtf;

pub use config::{FcfsWaitPolicy, GanttMode, SimulationConfig, DEFAULT_QUANTUM};
pub use fcfs::Fcfs;
pub use metrics::ScheduleMetrics;
pub use round_robin::RoundRobin;
pub use shortest_job::ShortestJob;
pub use srtf::Srtf;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::SchedulingError;
use crate::models::{Process, ScheduleResult};
use crate::validation::validate_processes;

/// A CPU scheduling discipline.
///
/// Implementations never mutate the input slice, so several algorithms
/// may run concurrently over the same processes.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Short algorithm name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates the processes and returns the schedule.
    ///
    /// # Errors
    /// `EmptyInput` for an empty slice, `InvalidInput` when validation fails,
    /// plus algorithm-specific errors.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError>;
}

/// Rejects empty or structurally invalid process sets.
pub(crate) fn check_input(processes: &[Process]) -> Result<(), SchedulingError> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyInput);
    }
    validate_processes(processes)?;
    Ok(())
}

/// Selector for the built-in algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come, first-serve.
    Fcfs,
    /// Preemptive shortest-remaining-time-first.
    Srtf,
    /// Non-preemptive shortest job, sorted by `(arrival, burst)`.
    ShortestJob,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Srtf,
        Algorithm::ShortestJob,
        Algorithm::RoundRobin,
    ];

    /// Report title.
    ///
    /// `ShortestJob` keeps its historical "Priority" label even though it
    /// never reads the priority field.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Srtf => "Shortest-job-first",
            Algorithm::ShortestJob => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }

    /// Instantiates the algorithm with its share of `config`.
    pub fn build(&self, config: &SimulationConfig) -> Box<dyn SchedulingAlgorithm> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs::from_config(config)),
            Algorithm::Srtf => Box::new(Srtf::from_config(config)),
            Algorithm::ShortestJob => Box::new(ShortestJob),
            Algorithm::RoundRobin => Box::new(RoundRobin::from_config(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "srtf" | "sjf" => Ok(Algorithm::Srtf),
            "priority" | "sjf-np" => Ok(Algorithm::ShortestJob),
            "rr" | "round-robin" => Ok(Algorithm::RoundRobin),
            other => Err(format!(
                "unknown algorithm '{other}' (expected fcfs, sjf, priority or rr)"
            )),
        }
    }
}

/// Runs every built-in algorithm over the same processes.
///
/// Results are returned in `Algorithm::ALL` order; one algorithm failing
/// does not prevent the others from running.
pub fn run_all(
    processes: &[Process],
    config: &SimulationConfig,
) -> Vec<(Algorithm, Result<ScheduleResult, SchedulingError>)> {
    Algorithm::ALL
        .iter()
        .map(|&alg| (alg, alg.build(config).schedule(processes)))
        .collect()
}
