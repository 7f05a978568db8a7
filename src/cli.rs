use std::env;

use crate::battle::NeverCrit;
use crate::data::combatant::DEFAULT_ROSTER_PATH;
use crate::data::validate::validate_roster;
use crate::sim::pool::WorkerPool;
use crate::sim::script::{demo_script, load_script, run_script};
use crate::sim::sweep::run_sweep_batches;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Sweep,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("sweep") => Some(Command::Sweep),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Sweep) => handle_sweep(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: animus <simulate|sweep|validate>");
            2
        }
    }
}

/// `animus simulate [script.json]`: replay a duel script (default: the
/// bundled demo) with crits off and print the report as JSON.
fn handle_simulate(args: &[String]) -> i32 {
    let script = match args.get(2) {
        Some(path) => match load_script(path) {
            Ok(script) => script,
            Err(err) => {
                eprintln!("{err}");
                return 1;
            }
        },
        None => demo_script(),
    };

    match run_script(&script, Box::new(NeverCrit)) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize duel report: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("simulation failed: {err}");
            1
        }
    }
}

/// `animus sweep [runs] [crit_percent] [seed]`: seed sweep of the demo
/// duel with a chance-based crit policy. `ANIMUS_WORKERS` caps the thread
/// count (0 or unset: all cores).
fn handle_sweep(args: &[String]) -> i32 {
    let runs = parse_u32_arg(args.get(2), "runs", 500);
    let crit_percent = parse_f64_arg(args.get(3), "crit_percent", 15.0);
    let seed = parse_u64_arg(args.get(4), "seed", 7);
    let workers = env::var("ANIMUS_WORKERS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let pool = WorkerPool::with_workers(workers);

    let script = demo_script();
    match run_sweep_batches(&script, runs, crit_percent / 100.0, seed, &pool) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize sweep report: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("sweep failed: {err}");
            1
        }
    }
}

/// `animus validate [roster.json]`: boundary validation of a roster file.
fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_ROSTER_PATH);

    match validate_roster(path) {
        Ok(report) if report.diagnostics.is_empty() => {
            println!("validation passed: {path}");
            0
        }
        Ok(report) => {
            for diag in &report.diagnostics {
                eprintln!("- {diag}");
            }
            if report.has_errors() {
                eprintln!("validation failed: {path}");
                1
            } else {
                println!("validation passed with warnings: {path}");
                0
            }
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn parse_u32_arg(raw: Option<&String>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_f64_arg(raw: Option<&String>, name: &str, default: f64) -> f64 {
    raw.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}
