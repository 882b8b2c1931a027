use itertools::Itertools;

use crate::domain::types::DistanceMatrix;

/// Neighbourhood move over tour positions `i < j`. Position 0 holds the depot
/// and is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Swap(usize, usize),
    /// Reverses the segment `i..=j` (2-opt).
    Reverse(usize, usize),
}

impl Move {
    pub fn positions(self) -> (usize, usize) {
        match self {
            Move::Swap(i, j) | Move::Reverse(i, j) => (i, j),
        }
    }

    pub fn apply(self, order: &mut [usize]) {
        match self {
            Move::Swap(i, j) => order.swap(i, j),
            Move::Reverse(i, j) => order[i..=j].reverse(),
        }
    }
}

/// Length of the closed tour, including the leg from the last stop back to the first.
pub fn find_distance(order: &[usize], dm: &DistanceMatrix) -> u64 {
    if order.len() < 2 {
        return 0;
    }

    order
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(&from, &to)| dm.get(from, to))
        .sum()
}

/// Change in closed-tour length if `mv` were applied to `order`.
pub fn move_delta(order: &[usize], dm: &DistanceMatrix, mv: Move) -> i64 {
    let n = order.len();
    let d = |a: usize, b: usize| dm.get(order[a], order[b]) as i64;
    let (i, j) = mv.positions();
    let (pi, nj) = (i - 1, (j + 1) % n);

    match mv {
        Move::Swap(..) if j == i + 1 => {
            let old = d(pi, i) + d(i, j) + d(j, nj);
            let new = d(pi, j) + d(j, i) + d(i, nj);
            new - old
        }
        Move::Swap(..) => {
            let old = d(pi, i) + d(i, i + 1) + d(j - 1, j) + d(j, nj);
            let new = d(pi, j) + d(j, i + 1) + d(j - 1, i) + d(i, nj);
            new - old
        }
        Move::Reverse(..) => {
            // Inner edges keep their endpoints but flip direction.
            let inner: i64 = (i..j).map(|k| d(k + 1, k) - d(k, k + 1)).sum();
            d(pi, j) + d(i, nj) - d(pi, i) - d(j, nj) + inner
        }
    }
}
