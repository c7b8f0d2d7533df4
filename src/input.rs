//! Process record loading.
//!
//! Reads comma-separated records, one process per line:
//!
//! ```text
//! id,burst,arrival[,priority]
//! ```
//!
//! Fields are trimmed; blank lines are skipped. A missing priority
//! defaults to 0. Any malformed line aborts the load.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::models::Process;

/// An error while loading process records.
#[derive(Debug)]
pub struct LoadError {
    /// 1-based line number, `0` when the error is not tied to a line.
    pub line: usize,
    /// What went wrong.
    pub kind: LoadErrorKind,
}

/// Categories of load errors.
#[derive(Debug)]
pub enum LoadErrorKind {
    /// Reading the source failed.
    Io(io::Error),
    /// A line has fewer than 3 or more than 4 fields.
    FieldCount(usize),
    /// A field is not a valid integer.
    InvalidNumber {
        /// Field name.
        field: &'static str,
        /// Raw text.
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::Io(e) => write!(f, "read error: {e}"),
            LoadErrorKind::FieldCount(n) => write!(
                f,
                "line {}: expected 3 or 4 fields (id,burst,arrival[,priority]), found {n}",
                self.line
            ),
            LoadErrorKind::InvalidNumber { field, value } => {
                write!(f, "line {}: invalid {field} '{value}'", self.line)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            LoadErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

const FIELDS: [&str; 4] = ["id", "burst", "arrival", "priority"];

fn parse_field(line: usize, index: usize, raw: &str) -> Result<i64, LoadError> {
    raw.parse().map_err(|_| LoadError {
        line,
        kind: LoadErrorKind::InvalidNumber {
            field: FIELDS[index],
            value: raw.to_string(),
        },
    })
}

fn parse_line(line: usize, text: &str) -> Result<Process, LoadError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(LoadError {
            line,
            kind: LoadErrorKind::FieldCount(fields.len()),
        });
    }

    let mut values = [0i64; 4];
    for (i, raw) in fields.iter().enumerate() {
        values[i] = parse_field(line, i, raw)?;
    }
    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, burst, arrival).with_priority(priority))
}

/// Parses process records from a reader.
///
/// # Example
/// ```
/// use cpu_schedule::input::parse_processes;
///
/// let ps = parse_processes("1,5,0\n2,3,1,2\n".as_bytes()).unwrap();
/// assert_eq!(ps.len(), 2);
/// assert_eq!(ps[1].priority, 2);
/// ```
pub fn parse_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let text = line.map_err(|e| LoadError {
            line: line_no,
            kind: LoadErrorKind::Io(e),
        })?;
        if text.trim().is_empty() {
            continue;
        }
        processes.push(parse_line(line_no, &text)?);
    }
    Ok(processes)
}

/// Opens and parses a process file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let file = File::open(path.as_ref()).map_err(|e| LoadError {
        line: 0,
        kind: LoadErrorKind::Io(e),
    })?;
    parse_processes(BufReader::new(file))
}
