//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;

/// Default round-robin time quantum (ticks).
pub const DEFAULT_QUANTUM: i64 = 6;

/// How preemptive algorithms record Gantt slices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GanttMode {
    /// One slice per completed process, `[completion - burst, completion]`.
    ///
    /// Approximates the run history; slices of preempted processes may overlap.
    #[default]
    Coarse,
    /// One slice per contiguous run segment.
    Exact,
}

/// How FCFS derives the wait of processes arriving at tick 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FcfsWaitPolicy {
    /// Every process gets `max(0, clock - arrival)`.
    #[default]
    Recompute,
    /// A process arriving at tick 0 reuses the previous process's wait.
    ///
    /// Reproduces legacy reports; rows may disagree with the Gantt chart.
    CarryOver,
}

/// Configuration shared by all algorithms.
///
/// # Example
/// ```
/// use cpu_schedule::scheduler::{GanttMode, SimulationConfig};
///
/// let config = SimulationConfig::new()
///     .with_quantum(4)
///     .with_gantt_mode(GanttMode::Exact);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time quantum (ticks).
    pub quantum: i64,
    /// Gantt recording granularity for SRTF and round-robin.
    pub gantt_mode: GanttMode,
    /// FCFS wait derivation.
    pub fcfs_wait: FcfsWaitPolicy,
    /// Reject FCFS input that is not sorted by arrival.
    pub require_arrival_order: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            gantt_mode: GanttMode::Coarse,
            fcfs_wait: FcfsWaitPolicy::Recompute,
            require_arrival_order: false,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the Gantt recording mode.
    pub fn with_gantt_mode(mut self, mode: GanttMode) -> Self {
        self.gantt_mode = mode;
        self
    }

    /// Sets the FCFS wait policy.
    pub fn with_fcfs_wait(mut self, policy: FcfsWaitPolicy) -> Self {
        self.fcfs_wait = policy;
        self
    }

    /// Requires FCFS input to be sorted by arrival.
    pub fn with_arrival_order_check(mut self, enabled: bool) -> Self {
        self.require_arrival_order = enabled;
        self
    }

    /// Checks the configuration values.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.quantum <= 0 {
            return Err(SchedulingError::InvalidQuantum(self.quantum));
        }
        Ok(())
    }
}
