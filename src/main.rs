use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use log::error;

use cpu_schedule::input::load_file;
use cpu_schedule::models::Process;
use cpu_schedule::report::{write_json, write_report};
use cpu_schedule::scheduler::{
    Algorithm, FcfsWaitPolicy, GanttMode, SimulationConfig, DEFAULT_QUANTUM,
};

fn cli() -> Command {
    Command::new("cpu-schedule")
        .about("Simulate CPU scheduling algorithms over a process file")
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Process records, one per line: id,burst,arrival[,priority]"),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .default_value("all")
                .help("fcfs, sjf, priority, rr or all"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .value_parser(value_parser!(i64))
                .help("Round-robin time quantum [default: 6]"),
        )
        .arg(
            Arg::new("exact-gantt")
                .long("exact-gantt")
                .action(ArgAction::SetTrue)
                .help("Record every run segment of preemptive algorithms"),
        )
        .arg(
            Arg::new("legacy-fcfs-wait")
                .long("legacy-fcfs-wait")
                .action(ArgAction::SetTrue)
                .help("Reuse the previous wait for FCFS processes arriving at tick 0"),
        )
        .arg(
            Arg::new("strict-order")
                .long("strict-order")
                .action(ArgAction::SetTrue)
                .help("Reject FCFS input not sorted by arrival"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
}

fn selected_algorithms(name: &str) -> Result<Vec<Algorithm>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    let alg = name.parse::<Algorithm>().map_err(anyhow::Error::msg)?;
    Ok(vec![alg])
}

fn run() -> Result<bool> {
    let matches = cli().get_matches();

    let path = matches
        .get_one::<PathBuf>("file")
        .context("missing process file")?;
    let algorithm = matches
        .get_one::<String>("algorithm")
        .map(String::as_str)
        .unwrap_or("all");
    let quantum = matches
        .get_one::<i64>("quantum")
        .copied()
        .unwrap_or(DEFAULT_QUANTUM);

    let config = SimulationConfig::new()
        .with_quantum(quantum)
        .with_gantt_mode(if matches.get_flag("exact-gantt") {
            GanttMode::Exact
        } else {
            GanttMode::Coarse
        })
        .with_fcfs_wait(if matches.get_flag("legacy-fcfs-wait") {
            FcfsWaitPolicy::CarryOver
        } else {
            FcfsWaitPolicy::Recompute
        })
        .with_arrival_order_check(matches.get_flag("strict-order"));
    config.validate()?;

    let algorithms = selected_algorithms(algorithm)?;
    let processes = load_file(path)
        .with_context(|| format!("loading processes from {}", path.display()))?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let all_ok = simulate(
        &mut stdout.lock(),
        &mut stderr.lock(),
        &algorithms,
        &config,
        &processes,
        matches.get_flag("json"),
    )?;

    Ok(all_ok)
}

/// Runs each algorithm, writing reports to `out` and failures to `err`.
///
/// Returns `false` if any algorithm failed.
fn simulate<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    algorithms: &[Algorithm],
    config: &SimulationConfig,
    processes: &[Process],
    json: bool,
) -> io::Result<bool> {
    let mut all_ok = true;
    for &alg in algorithms {
        match alg.build(config).schedule(processes) {
            Ok(result) => {
                if json {
                    write_json(out, &result)?;
                } else {
                    write_report(out, alg.title(), &result)?;
                }
            }
            Err(e) => {
                error!("{alg}: {e}");
                writeln!(err, "{alg}: {e}")?;
                all_ok = false;
            }
        }
    }
    out.flush()?;
    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_reach_stderr() {
        let ps = vec![Process::new(1, 4, 0)];
        let config = SimulationConfig::new().with_quantum(0);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let ok = simulate(
            &mut out,
            &mut err,
            &[Algorithm::Fcfs, Algorithm::RoundRobin],
            &config,
            &ps,
            false,
        )
        .unwrap();

        assert!(!ok);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Round-robin: "), "{err}");
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("First-come, first-serve"));
        assert!(!out.contains("Round-robin"));
    }

    #[test]
    fn test_success_leaves_stderr_empty() {
        let ps = vec![Process::new(1, 4, 0), Process::new(2, 2, 1)];
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let ok = simulate(
            &mut out,
            &mut err,
            &Algorithm::ALL,
            &SimulationConfig::default(),
            &ps,
            true,
        )
        .unwrap();
        assert!(ok);
        assert!(err.is_empty());
        assert!(!out.is_empty());
    }
}
