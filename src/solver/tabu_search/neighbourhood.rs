use rayon::prelude::*;

use crate::domain::types::DistanceMatrix;
use crate::evaluation::fitness::{move_delta, Move};

/// Score every swap and 2-opt move over positions `1..n`, best first.
pub fn find_neighbours(order: &[usize], dm: &DistanceMatrix) -> Vec<(i64, Move)> {
    let n = order.len();

    // Reversing two adjacent positions is the same tour as swapping them.
    let moves: Vec<Move> = (1..n)
        .flat_map(|i| {
            ((i + 1)..n).flat_map(move |j| {
                std::iter::once(Move::Swap(i, j)).chain((j > i + 1).then_some(Move::Reverse(i, j)))
            })
        })
        .collect();

    let mut candidates: Vec<(i64, Move)> = moves
        .par_iter()
        .map(|&mv| (move_delta(order, dm, mv), mv))
        .collect();

    candidates.par_sort_unstable();
    candidates
}
