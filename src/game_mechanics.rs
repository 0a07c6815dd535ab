//! Per-trial game rules: door draws, the host's reveal rule, and the switch
//! rule.
//!
//! Doors are indexed `0..door_count`. The door set is never materialized;
//! every rule is a scan over the index range. All functions here assume a
//! validated configuration (`door_count >= 3`, see
//! [`crate::config::SimConfig::validate`]).

use rand::Rng;
use rand::rngs::SmallRng;

/// Draw a door uniformly from `[0, door_count)`.
#[inline(always)]
pub fn pick_random_door(rng: &mut SmallRng, door_count: usize) -> usize {
    rng.random_range(0..door_count)
}

/// The doors the host opens: an ascending scan that skips `car_door` and
/// `player_guess`, stopping once `door_count - 2` doors are open.
///
/// Exactly one non-guess door is left closed. When the player guessed the
/// car there are `door_count - 1` goat doors and the cap leaves the last of
/// them closed; otherwise the car door itself is the one the host avoids.
/// Every goat door is equivalent, so the rule is deterministic — no
/// randomness is spent on the host.
pub fn host_reveal(car_door: usize, player_guess: usize, door_count: usize) -> Vec<usize> {
    let mut opened = Vec::with_capacity(door_count - 2);
    for d in 0..door_count {
        if opened.len() == door_count - 2 {
            break;
        }
        if d == car_door || d == player_guess {
            continue;
        }
        opened.push(d);
    }
    debug_assert_eq!(opened.len(), door_count - 2);
    opened
}

/// The door the player switches to: the unique door that is neither the
/// current guess nor one the host opened.
///
/// `host_opened` must be ascending, as [`host_reveal`] produces it; the scan
/// walks both sequences in lockstep instead of probing with `contains`, so a
/// million-door game stays O(n).
pub fn switch_guess(player_guess: usize, host_opened: &[usize], door_count: usize) -> usize {
    let mut next_open = 0;
    for d in 0..door_count {
        if next_open < host_opened.len() && host_opened[next_open] == d {
            next_open += 1;
            continue;
        }
        if d == player_guess {
            continue;
        }
        return d;
    }
    unreachable!("host left no closed door to switch to")
}
