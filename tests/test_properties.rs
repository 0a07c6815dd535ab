//! Property-based tests for trial mechanics, plus convergence checks on the
//! simulation engines.

use proptest::prelude::*;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use monty::config::SimConfig;
use monty::game_mechanics::{host_reveal, pick_random_door, switch_guess};
use monty::simulation::{run_simulation, run_trial_recorded, simulate_batch};

/// Strategy: generate a valid door count.
fn door_count_strategy() -> impl Strategy<Value = usize> {
    3..=40usize
}

proptest! {
    // 1. Both random draws land inside the door range
    #[test]
    fn draws_are_in_range(door_count in door_count_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let car = pick_random_door(&mut rng, door_count);
        let guess = pick_random_door(&mut rng, door_count);
        prop_assert!(car < door_count);
        prop_assert!(guess < door_count);
    }

    // 2. The host opens exactly door_count - 2 doors, never the car or the guess
    #[test]
    fn host_opens_all_but_one_goat_door(
        door_count in door_count_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let car = pick_random_door(&mut rng, door_count);
        let guess = pick_random_door(&mut rng, door_count);
        let opened = host_reveal(car, guess, door_count);
        prop_assert_eq!(opened.len(), door_count - 2);
        prop_assert!(!opened.contains(&car));
        prop_assert!(!opened.contains(&guess));
    }

    // 3. After the reveal exactly one switch candidate remains, and
    //    switch_guess finds it
    #[test]
    fn switch_target_is_the_unique_remaining_door(
        door_count in door_count_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let car = pick_random_door(&mut rng, door_count);
        let guess = pick_random_door(&mut rng, door_count);
        let opened = host_reveal(car, guess, door_count);

        let candidates: Vec<usize> = (0..door_count)
            .filter(|&d| d != guess && !opened.contains(&d))
            .collect();
        prop_assert_eq!(candidates.len(), 1);
        prop_assert_eq!(switch_guess(guess, &opened, door_count), candidates[0]);
    }

    // 4. Staying never changes the guess
    #[test]
    fn stay_keeps_the_original_guess(
        door_count in door_count_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let record = run_trial_recorded(&mut rng, door_count, false);
        prop_assert_eq!(record.final_guess, record.player_guess);
    }

    // 5. The switcher wins exactly when the first guess was wrong
    #[test]
    fn switch_wins_iff_first_guess_was_wrong(
        door_count in door_count_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let record = run_trial_recorded(&mut rng, door_count, true);
        prop_assert_eq!(record.won, record.player_guess != record.car_door);
    }
}

// ── Convergence ───────────────────────────────────────────────────────────

fn config(door_count: usize, trial_count: usize, switch: bool) -> SimConfig {
    SimConfig {
        door_count,
        trial_count,
        switch_strategy: switch,
        verbose: false,
    }
}

#[test]
fn switch_converges_to_two_thirds() {
    let result = simulate_batch(&config(3, 100_000, true), 42).unwrap();
    let rate = result.win_rate();
    assert!(
        (rate - 2.0 / 3.0).abs() < 0.02,
        "switch win rate {rate} too far from 2/3"
    );
}

#[test]
fn stay_converges_to_one_third() {
    let result = simulate_batch(&config(3, 100_000, false), 42).unwrap();
    let rate = result.win_rate();
    assert!(
        (rate - 1.0 / 3.0).abs() < 0.02,
        "stay win rate {rate} too far from 1/3"
    );
}

#[test]
fn sequential_engine_converges_too() {
    let result = run_simulation(&config(3, 100_000, true), 42).unwrap();
    let rate = result.win_rate();
    assert!(
        (rate - 2.0 / 3.0).abs() < 0.02,
        "switch win rate {rate} too far from 2/3"
    );
}

#[test]
fn many_doors_make_switching_near_certain() {
    // Exact rate at 100 doors is 0.99
    let result = simulate_batch(&config(100, 20_000, true), 42).unwrap();
    assert!(result.win_rate() > 0.97, "win rate {}", result.win_rate());
}
