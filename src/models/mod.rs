//! Simulation domain models.
//!
//! Provides the input and output types shared by every scheduling
//! algorithm.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Static input record |
//! | `TimeSlice` / `GanttChart` | CPU ownership intervals |
//! | `ScheduleRow` | Per-process outcome |
//! | `ScheduleResult` | Rows, Gantt slices and aggregate metrics |

mod gantt;
mod process;
mod schedule;

pub use gantt::{GanttChart, TimeSlice};
pub use process::Process;
pub(crate) use process::{arrival_order, first_out_of_order};
pub use schedule::{ScheduleResult, ScheduleRow};
