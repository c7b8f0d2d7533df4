//! Input validation for process sets.
//!
//! Checks structural integrity of the processes before simulation.
//! Detects:
//! - Duplicate process IDs
//! - Bursts that are zero or negative
//! - Negative arrival times
//! - Time horizons (latest arrival plus total burst) beyond `i64`
//!
//! Arrival ordering is not checked here; only FCFS cares about it and
//! only when configured to (see `SimulationConfig::require_arrival_order`).

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires no CPU time (or a negative amount).
    NonPositiveBurst,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
    /// Latest arrival plus total burst does not fit in an `i64` tick.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is > 0
/// 3. Every arrival is >= 0
/// 4. Latest arrival + sum of bursts fits in `i64`, which bounds every
///    clock value an algorithm can reach
///
/// An empty slice is valid here; the engine reports it separately.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    let horizon = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst.max(0)))
        .and_then(|total| {
            let latest = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
            total.checked_add(latest)
        });
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
