//! Schedule metrics.
//!
//! Computes aggregate performance indicators from the rows of a
//! completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Wait | Mean of per-process wait |
//! | Average Turnaround | Mean of per-process turnaround (burst + wait) |
//! | Throughput | Process count / latest completion |
//! | Makespan | Latest completion tick |
//! | Max Wait | Largest single wait |

use log::info;

use crate::error::SchedulingError;
use crate::models::{GanttChart, ScheduleResult, ScheduleRow};

/// Aggregate schedule indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Mean wait time.
    pub average_wait: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Largest wait of any single process.
    pub max_wait: i64,
}

impl ScheduleMetrics {
    /// Computes metrics from schedule rows.
    ///
    /// # Errors
    /// - `EmptyInput` if `rows` is empty.
    /// - `ZeroElapsedTime` if the latest completion is not after tick 0.
    pub fn calculate(rows: &[ScheduleRow]) -> Result<Self, SchedulingError> {
        if rows.is_empty() {
            return Err(SchedulingError::EmptyInput);
        }

        let makespan = rows.iter().map(|r| r.completion).max().unwrap_or(0);
        if makespan <= 0 {
            return Err(SchedulingError::ZeroElapsedTime);
        }

        let count = rows.len() as f64;
        // i128 so a few near-limit rows cannot overflow the totals
        let total_wait: i128 = rows.iter().map(|r| i128::from(r.wait)).sum();
        let total_turnaround: i128 = rows.iter().map(|r| i128::from(r.turnaround)).sum();
        let max_wait = rows.iter().map(|r| r.wait).max().unwrap_or(0);

        Ok(Self {
            average_wait: total_wait as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            throughput: count / makespan as f64,
            makespan,
            max_wait,
        })
    }
}

/// Assembles a result from the rows and Gantt chart of a finished run.
pub(crate) fn finish(
    algorithm: &str,
    rows: Vec<ScheduleRow>,
    gantt: GanttChart,
) -> Result<ScheduleResult, SchedulingError> {
    let metrics = ScheduleMetrics::calculate(&rows)?;
    info!(
        "{algorithm}: {} processes, {} gantt slices, makespan {}, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}",
        rows.len(),
        gantt.slices().len(),
        metrics.makespan,
        metrics.average_wait,
        metrics.average_turnaround,
        metrics.throughput
    );

    Ok(ScheduleResult {
        rows,
        gantt: gantt.into_slices(),
        average_wait: metrics.average_wait,
        average_turnaround: metrics.average_turnaround,
        throughput: metrics.throughput,
        makespan: metrics.makespan,
    })
}
