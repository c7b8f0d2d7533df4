//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling disciplines over a fixed,
//! fully known process set and reports per-process and aggregate
//! performance metrics.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `TimeSlice`, `GanttChart`, `ScheduleRow`, `ScheduleResult`
//! - **`scheduler`**: FCFS, SRTF, non-preemptive shortest job, round-robin,
//!   plus `SimulationConfig` and `ScheduleMetrics`
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, arrivals)
//! - **`error`**: `SchedulingError`
//! - **`input`**: Comma-separated process record loader
//! - **`report`**: Gantt strip and schedule table rendering
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{run_all, SimulationConfig};
//!
//! let processes = vec![Process::new(1, 10, 0), Process::new(2, 4, 1)];
//! for (algorithm, result) in run_all(&processes, &SimulationConfig::default()) {
//!     let result = result.unwrap();
//!     assert_eq!(result.rows.len(), 2, "{algorithm}");
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SchedulingError;
