//! Seed sweeps: replay one script under a chance-based crit policy across
//! many seeds and aggregate the outcomes. Criticals pierce guards, so the
//! spread shows how much a matchup leans on defended turns.

use rayon::prelude::*;
use serde::Serialize;

use crate::battle::SeededCrit;
use crate::sim::pool::WorkerPool;
use crate::sim::script::{run_script, DuelScript, Side};

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub runs: u32,
    pub crit_chance: f64,
    pub base_seed: u64,
    pub left_wins: u32,
    pub right_wins: u32,
    pub draws: u32,
    pub left_win_rate: f64,
    pub avg_left_hp_remaining: f64,
    pub avg_right_hp_remaining: f64,
}

pub fn run_sweep(
    script: &DuelScript,
    runs: u32,
    crit_chance: f64,
    base_seed: u64,
) -> Result<SweepReport, String> {
    run_sweep_with_parallelism(script, runs, crit_chance, base_seed, false)
}

/// Like [run_sweep] but distributes seeds across all CPU cores via Rayon.
pub fn run_sweep_parallel(
    script: &DuelScript,
    runs: u32,
    crit_chance: f64,
    base_seed: u64,
) -> Result<SweepReport, String> {
    run_sweep_with_parallelism(script, runs, crit_chance, base_seed, true)
}

/// Convenience that runs the parallel sweep inside [WorkerPool::install]
/// when a custom worker count is set.
pub fn run_sweep_batches(
    script: &DuelScript,
    runs: u32,
    crit_chance: f64,
    base_seed: u64,
    pool: &WorkerPool,
) -> Result<SweepReport, String> {
    pool.install(|| run_sweep_parallel(script, runs, crit_chance, base_seed))
}

fn run_sweep_with_parallelism(
    script: &DuelScript,
    runs: u32,
    crit_chance: f64,
    base_seed: u64,
    parallel: bool,
) -> Result<SweepReport, String> {
    if runs == 0 {
        return Err("sweep needs at least one run".to_string());
    }

    let seeds: Vec<u64> = (0..u64::from(runs))
        .map(|i| base_seed.wrapping_add(i))
        .collect();
    let run_one =
        |seed: &u64| run_script(script, Box::new(SeededCrit::new(crit_chance, *seed)));
    let reports: Result<Vec<_>, String> = if parallel {
        seeds.par_iter().map(run_one).collect()
    } else {
        seeds.iter().map(run_one).collect()
    };
    let reports = reports?;

    let mut left_wins = 0u32;
    let mut right_wins = 0u32;
    let mut draws = 0u32;
    let mut left_hp_sum = 0.0;
    let mut right_hp_sum = 0.0;
    for report in &reports {
        match report.winner {
            Some(Side::Left) => left_wins += 1,
            Some(Side::Right) => right_wins += 1,
            None => draws += 1,
        }
        left_hp_sum += report.left_hp_remaining;
        right_hp_sum += report.right_hp_remaining;
    }

    let total = f64::from(runs);
    Ok(SweepReport {
        runs,
        crit_chance,
        base_seed,
        left_wins,
        right_wins,
        draws,
        left_win_rate: f64::from(left_wins) / total,
        avg_left_hp_remaining: left_hp_sum / total,
        avg_right_hp_remaining: right_hp_sum / total,
    })
}
