//! Monty Hall simulation entry point.
//!
//! Runs N independent trials under a fixed strategy and prints the win rate.
//! Verbose mode narrates every trial and runs sequentially; otherwise trials
//! run as a parallel batch.

use monty::config::SimConfig;
use monty::simulation::{SimulationSummary, run_simulation, simulate_batch};

struct Args {
    config: SimConfig,
    seed: u64,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut seed = 42u64;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    config.trial_count = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--doors" => {
                i += 1;
                if i < args.len() {
                    config.door_count = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --doors value: {}", args[i]);
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
            "--stay" => {
                config.switch_strategy = false;
            }
            "--switch" => {
                config.switch_strategy = true;
            }
            "--verbose" => {
                config.verbose = true;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: monty-simulate [--trials N] [--doors N] [--stay] [--seed S] [--verbose] [--json]"
                );
                println!();
                println!("Simulate the Monty Hall game and report the win rate.");
                println!("  --trials N   Number of trials (default: 10000)");
                println!("  --doors N    Number of doors, at least 3 (default: 3)");
                println!("  --stay       Player keeps the original guess (default: switch)");
                println!("  --seed S     RNG seed (default: 42)");
                println!("  --verbose    Narrate every trial (runs sequentially)");
                println!("  --json       Print the summary as JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args { config, seed, json }
}

fn main() {
    let Args { config, seed, json } = parse_args();

    if let Err(err) = config.validate() {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .unwrap();

    if !json {
        println!("Monty Hall Simulation ({} trials)", config.trial_count);
        println!("  Doors:    {}", config.door_count);
        println!(
            "  Strategy: {}",
            if config.switch_strategy {
                "switch"
            } else {
                "stay"
            }
        );
        println!("  Seed:     {}", seed);
        println!();
    }

    // Narration needs trials in order; quiet runs use the parallel batch.
    let result = if config.verbose {
        run_simulation(&config, seed)
    } else {
        simulate_batch(&config, seed)
    };
    let result = result.unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if json {
        let summary = SimulationSummary::new(&config, &result, seed);
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        println!("Trials: {}", result.trials);
        println!("Wins: {}", result.wins);
        println!("------------------------------");
        println!("Win rate: {:.6}", result.win_rate());
        println!(
            "Elapsed: {:.1} ms",
            result.elapsed.as_secs_f64() * 1000.0
        );
    }
}
