//! Simulation engine — plays N independent trials of the door game.
//!
//! A trial is a strict five-step sequence: draw the car door, draw the
//! player's guess, host reveal, optional switch, score. [`run_simulation`]
//! executes trials sequentially with a single owned generator and narrates
//! each trial in verbose mode. [`simulate_batch`] fans trials out over rayon
//! with one derived generator per trial, so a given seed reproduces the same
//! aggregate regardless of thread count.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::SimConfig;
use crate::game_mechanics::{host_reveal, pick_random_door, switch_guess};

// ── Results ───────────────────────────────────────────────────────────────

/// Aggregate outcome of a simulation run.
pub struct SimulationResult {
    pub trials: u64,
    pub wins: u64,
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Fraction of trials won.
    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.trials as f64
    }
}

/// Serializable run summary for JSON output.
#[derive(Serialize)]
pub struct SimulationSummary {
    pub door_count: usize,
    pub trials: u64,
    pub wins: u64,
    pub win_rate: f64,
    pub switch_strategy: bool,
    pub seed: u64,
}

impl SimulationSummary {
    pub fn new(config: &SimConfig, result: &SimulationResult, seed: u64) -> Self {
        SimulationSummary {
            door_count: config.door_count,
            trials: result.trials,
            wins: result.wins,
            win_rate: result.win_rate(),
            switch_strategy: config.switch_strategy,
            seed,
        }
    }
}

// ── Single trial ──────────────────────────────────────────────────────────

/// Everything that happened in one trial.
#[derive(Clone, Debug)]
pub struct TrialRecord {
    pub car_door: usize,
    pub player_guess: usize,
    pub host_opened: Vec<usize>,
    pub final_guess: usize,
    pub won: bool,
}

impl TrialRecord {
    /// Per-trial narration (verbose mode). Large reveals are summarized
    /// instead of listed.
    fn narrate(&self, door_count: usize, switched: bool) {
        println!("Car is behind door {}", self.car_door);
        println!("Player guesses door {}", self.player_guess);
        if self.host_opened.len() <= 8 {
            println!("Host opens doors {:?}", self.host_opened);
        } else {
            println!(
                "Host opens {} doors, leaving door {} closed",
                self.host_opened.len(),
                switch_guess(self.player_guess, &self.host_opened, door_count)
            );
        }
        if switched {
            println!("Player switches to door {}", self.final_guess);
        } else {
            println!("Player stays with door {}", self.final_guess);
        }
        if self.won {
            println!("Player wins!");
        } else {
            println!("Player loses");
        }
        println!();
    }
}

/// Run one trial, returning the full record.
pub fn run_trial_recorded(rng: &mut SmallRng, door_count: usize, switch: bool) -> TrialRecord {
    let car_door = pick_random_door(rng, door_count);
    let player_guess = pick_random_door(rng, door_count);
    let host_opened = host_reveal(car_door, player_guess, door_count);
    let final_guess = if switch {
        switch_guess(player_guess, &host_opened, door_count)
    } else {
        player_guess
    };
    TrialRecord {
        car_door,
        player_guess,
        host_opened,
        final_guess,
        won: final_guess == car_door,
    }
}

/// Run one trial, returning only win/lose.
pub fn run_trial(rng: &mut SmallRng, door_count: usize, switch: bool) -> bool {
    run_trial_recorded(rng, door_count, switch).won
}

// ── Batch engines ─────────────────────────────────────────────────────────

/// Run the configured number of trials sequentially with one owned
/// generator. Narrates each trial when `config.verbose`.
pub fn run_simulation(config: &SimConfig, seed: u64) -> Result<SimulationResult, String> {
    config.validate()?;
    let start = Instant::now();

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut wins = 0u64;
    for _ in 0..config.trial_count {
        if config.verbose {
            let record = run_trial_recorded(&mut rng, config.door_count, config.switch_strategy);
            record.narrate(config.door_count, config.switch_strategy);
            if record.won {
                wins += 1;
            }
        } else if run_trial(&mut rng, config.door_count, config.switch_strategy) {
            wins += 1;
        }
    }

    Ok(SimulationResult {
        trials: config.trial_count as u64,
        wins,
        elapsed: start.elapsed(),
    })
}

/// Run the configured number of trials in parallel.
///
/// Each trial owns an independent generator seeded from `seed + i`, so the
/// aggregate is deterministic for a given seed no matter how rayon splits
/// the range. Wins are accumulated by reduction; trial ordering is
/// irrelevant to the result.
pub fn simulate_batch(config: &SimConfig, seed: u64) -> Result<SimulationResult, String> {
    config.validate()?;
    let start = Instant::now();

    let wins = (0..config.trial_count)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            run_trial(&mut rng, config.door_count, config.switch_strategy) as u64
        })
        .sum();

    Ok(SimulationResult {
        trials: config.trial_count as u64,
        wins,
        elapsed: start.elapsed(),
    })
}
