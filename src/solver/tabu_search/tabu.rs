use std::collections::VecDeque;

use crate::evaluation::fitness::Move;

/// Picks the best-scoring move that is not tabu. A tabu move is still allowed
/// when it would beat the best distance found so far. If every move is tabu the
/// best-scoring one is taken anyway.
pub fn choose_best_candidate(
    candidates: &[(i64, Move)],
    tabu_list: &VecDeque<Move>,
    current_distance: u64,
    best_distance: u64,
) -> Option<(i64, Move)> {
    candidates
        .iter()
        .find(|(delta, mv)| {
            !tabu_list.contains(mv) || (current_distance as i64 + delta) < (best_distance as i64)
        })
        .or_else(|| candidates.first())
        .copied()
}

pub fn insert_and_adjust_tabu_list(tabu_list: &mut VecDeque<Move>, mv: Move, len_tabu_list: usize) {
    tabu_list.push_front(mv);

    while tabu_list.len() > len_tabu_list {
        tabu_list.pop_back();
    }
}
