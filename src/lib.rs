//! # Monty — Monty Hall Problem Simulator
//!
//! Simulates the Monty Hall game over many independent trials: a car is
//! hidden behind one of `door_count` doors, the player guesses a door, the
//! host opens every goat door except one, and the player either stays with
//! the original guess or switches to the one remaining closed door.
//!
//! With the host opening all-but-one goat doors the exact win rates are:
//!
//! | Strategy | Win rate        |
//! |----------|-----------------|
//! | stay     | `1/n`           |
//! | switch   | `(n - 1)/n`     |
//!
//! For the classic 3-door game that is the famously counter-intuitive
//! 1/3 vs 2/3. The gap widens with more doors: at `n = 100` the switcher
//! wins 99% of the time.
//!
//! ## Modules
//!
//! - [`config`]: simulation parameters and validation
//! - [`game_mechanics`]: per-trial rules (door draw, host reveal, switch)
//! - [`simulation`]: trial execution, sequential and parallel batch engines

pub mod config;
pub mod game_mechanics;
pub mod simulation;
