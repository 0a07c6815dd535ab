//! Switch-vs-stay sweep across door counts.
//!
//! Simulates both strategies at each door count and prints the empirical
//! win rate beside the exact probability (stay: `1/n`, switch: `(n-1)/n`).
//! The intuition-builder: as doors are added, staying collapses toward 0
//! while switching climbs toward 1.

use monty::config::SimConfig;
use monty::simulation::simulate_batch;

/// Door counts to sweep. 3 is the classic game.
const DOOR_COUNTS: &[usize] = &[3, 4, 5, 6, 8, 10, 20, 50, 100];

struct Args {
    num_trials: usize,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_trials = 100_000usize;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--help" | "-h" => {
                println!("Usage: monty-sweep [--trials N] [--seed S]");
                println!();
                println!("Win rate for switch and stay across door counts.");
                println!("  --trials N   Trials per strategy per door count (default: 100000)");
                println!("  --seed S     RNG seed (default: 42)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { num_trials, seed }
}

fn main() {
    let Args { num_trials, seed } = parse_args();

    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .unwrap();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Monty Hall Sweep: Switch vs Stay ({} trials per cell)", num_trials);
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!(
        "{:>6} {:>12} {:>10} {:>12} {:>10}",
        "doors", "stay", "exact", "switch", "exact"
    );

    for &door_count in DOOR_COUNTS {
        let mut rates = [0.0f64; 2];
        for (slot, switch_strategy) in [(0, false), (1, true)] {
            let config = SimConfig {
                door_count,
                trial_count: num_trials,
                switch_strategy,
                verbose: false,
            };
            // Same seed for both strategies: the cells share car/guess draws,
            // so the comparison is paired.
            let result = simulate_batch(&config, seed).unwrap_or_else(|err| {
                eprintln!("{}", err);
                std::process::exit(1);
            });
            rates[slot] = result.win_rate();
        }

        let n = door_count as f64;
        println!(
            "{:>6} {:>12.6} {:>10.6} {:>12.6} {:>10.6}",
            door_count,
            rates[0],
            1.0 / n,
            rates[1],
            (n - 1.0) / n
        );
    }
}
