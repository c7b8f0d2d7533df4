//! Text and JSON rendering of schedule results.
//!
//! A text report has three parts: a title banner, a Gantt strip, and a
//! schedule table whose footer carries the averages and throughput.
//!
//! ```text
//! --------------
//!     Round-robin
//! --------------
//! Gantt schedule
//! |   1   |   2   |
//! 0	6	10
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------+
//! | ID | PRIORITY | BURST | ARRIVAL |  WAIT   | TURNAROUND | EXIT |
//! ...
//! ```

use std::io::{self, Write};

use crate::models::{ScheduleResult, TimeSlice};

const HEADERS: [&str; 7] = [
    "ID",
    "PRIORITY",
    "BURST",
    "ARRIVAL",
    "WAIT",
    "TURNAROUND",
    "EXIT",
];

/// Width of one Gantt cell.
const GANTT_CELL: usize = 8;

/// Writes the title banner.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt strip: process IDs, then slice start ticks with the
/// final stop tick closing the line.
pub fn write_gantt<W: Write>(w: &mut W, gantt: &[TimeSlice]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in gantt {
        let pid = slice.process_id.to_string();
        let pad = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{pad}{pid}{pad}|")?;
    }
    writeln!(w)?;
    for (i, slice) in gantt.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == gantt.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn table_line(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {cell:^width$} |"));
    }
    line
}

/// Writes the schedule table with its averages footer.
pub fn write_table<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = result
        .rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let blank = String::new;
    let footer_labels = [
        blank(),
        blank(),
        blank(),
        blank(),
        "AVERAGE".to_string(),
        "AVERAGE".to_string(),
        "THROUGHPUT".to_string(),
    ];
    let footer_values = [
        blank(),
        blank(),
        blank(),
        blank(),
        format!("{:.2}", result.average_wait),
        format!("{:.2}", result.average_turnaround),
        format!("{:.2}/t", result.throughput),
    ];
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in body.iter().chain([&footer_labels, &footer_values]) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = border(&widths);
    writeln!(w, "{rule}")?;
    writeln!(w, "{}", table_line(&widths, &header))?;
    writeln!(w, "{rule}")?;
    for row in &body {
        writeln!(w, "{}", table_line(&widths, row))?;
    }
    writeln!(w, "{rule}")?;
    writeln!(w, "{}", table_line(&widths, &footer_labels))?;
    writeln!(w, "{}", table_line(&widths, &footer_values))?;
    writeln!(w, "{rule}")
}

/// Writes the full text report for one algorithm.
pub fn write_report<W: Write>(w: &mut W, title: &str, result: &ScheduleResult) -> io::Result<()> {
    write_title(w, title)?;
    write_gantt(w, &result.gantt)?;
    write_table(w, result)
}

/// Writes the result as pretty-printed JSON.
pub fn write_json<W: Write>(w: &mut W, result: &ScheduleResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{Fcfs, SchedulingAlgorithm};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> ScheduleResult {
        Fcfs::new()
            .schedule(&[Process::new(1, 5, 0), Process::new(2, 3, 1)])
            .unwrap()
    }

    #[test]
    fn test_title_banner() {
        let out = render(|w| write_title(w, "Round-robin"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(22));
        assert_eq!(lines[1], "      Round-robin");
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn test_gantt_strip() {
        let out = render(|w| write_gantt(w, &sample().gantt));
        assert_eq!(out, "Gantt schedule\n|   1   |   2   |\n0\t5\t8\n\n");
    }

    #[test]
    fn test_gantt_empty() {
        let out = render(|w| write_gantt(w, &[]));
        assert_eq!(out, "Gantt schedule\n|\n\n\n");
    }

    #[test]
    fn test_table_footer_two_decimals() {
        let out = render(|w| write_table(w, &sample()));
        assert!(out.starts_with("Schedule table\n+"));
        assert!(out.contains("TURNAROUND"));
        assert!(out.contains("2.00"));
        assert!(out.contains("6.00"));
        assert!(out.contains("0.25/t"));
        // header, two rows, two footer lines, four rules, title
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_json_output() {
        let out = render(|w| write_json(w, &sample()));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["rows"][1]["wait"], 4);
        assert_eq!(v["makespan"], 8);
    }
}
