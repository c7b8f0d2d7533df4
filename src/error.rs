//! Scheduling errors.
//!
//! Every error is reported synchronously to the caller of the algorithm
//! that detected it. Nothing here is retried: simulations are
//! deterministic.

use std::error::Error;
use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// No processes were supplied.
    EmptyInput,
    /// The process set failed structural validation.
    InvalidInput(Vec<ValidationError>),
    /// FCFS input is not sorted by arrival (only when strict ordering is enabled).
    UnsortedArrivals {
        /// Index of the first process arriving earlier than its predecessor.
        index: usize,
    },
    /// Round-robin quantum is not positive.
    InvalidQuantum(i64),
    /// The last process completed at tick 0, so throughput is undefined.
    ZeroElapsedTime,
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no processes to schedule"),
            Self::InvalidInput(errors) => {
                write!(f, "invalid process set: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::UnsortedArrivals { index } => write!(
                f,
                "process at index {index} arrives before its predecessor; input must be sorted by arrival"
            ),
            Self::InvalidQuantum(q) => write!(f, "time quantum must be positive, got {q}"),
            Self::ZeroElapsedTime => {
                write!(f, "elapsed time is zero; throughput is undefined")
            }
        }
    }
}

impl Error for SchedulingError {}

impl From<Vec<ValidationError>> for SchedulingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
