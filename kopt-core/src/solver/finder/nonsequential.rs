#[cfg(test)]
#[path = "../../../tests/unit/solver/finder/nonsequential_test.rs"]
mod nonsequential_test;

use super::Improvement;
use crate::models::common::Length;
use crate::models::solution::Tour;
use crate::solver::{KMove, count_cycles};

/// Tries to combine pairs of moves deleting different edges into one move forming a single cycle.
/// Returns the combination with the largest gain.
pub(super) fn combine_moves(tour: &Tour, moves: &[Improvement], min_improvement: Length) -> Option<Improvement> {
    let mut best: Option<Improvement> = None;

    for (idx, first) in moves.iter().enumerate() {
        for second in moves.iter().skip(idx + 1) {
            let gain = first.gain + second.gain;

            if gain <= min_improvement || best.as_ref().is_some_and(|best| best.gain >= gain) {
                continue;
            }

            if !first.kmove.is_disjoint(&second.kmove) || shares_addition(&first.kmove, &second.kmove) {
                continue;
            }

            let kmove = &first.kmove + &second.kmove;
            if count_cycles(tour, &kmove) == Some(1) {
                best = Some(Improvement { kmove, gain });
            }
        }
    }

    best
}

fn shares_addition(first: &KMove, second: &KMove) -> bool {
    second.starts.iter().zip(second.ends.iter()).any(|(&start, &end)| first.has_addition(start, end))
}
