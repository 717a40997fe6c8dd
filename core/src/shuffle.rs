//! Answer-choice shuffling with correct-index tracking.

use crate::rng::DailyRng;

/// Shuffle the choices in place and return the new position of the
/// correct answer.
///
/// Fisher–Yates over the slice, so every permutation is equally likely.
/// The tracked index follows the correct text through each swap:
/// whichever swapped position held it moves to the other. Slices of 0 or
/// 1 elements are left untouched.
pub fn shuffle_choices(choices: &mut [String], correct: usize, rng: &mut DailyRng) -> usize {
    if choices.len() < 2 {
        return correct;
    }

    let mut tracked = correct;
    for i in (1..choices.len()).rev() {
        let j = rng.index_below(i + 1);
        choices.swap(i, j);
        if i == tracked {
            tracked = j;
        } else if j == tracked {
            tracked = i;
        }
    }
    tracked
}
