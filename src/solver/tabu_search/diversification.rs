use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;

/// Kick used when the search stagnates: reverse a random segment, then rotate
/// three random positions. Position 0 (the depot) is never moved.
pub fn final_mutation(order: &mut [usize], rng: &mut ChaCha8Rng) {
    let n = order.len();
    if n < 3 {
        return;
    }

    let mut pair: Vec<usize> = (1..n).choose_multiple(rng, 2);
    pair.sort_unstable();
    let (a, b) = (pair[0], pair[1]);
    order[a..=b].reverse();

    if n >= 4 {
        let mut triple: Vec<usize> = (1..n).choose_multiple(rng, 3);
        triple.sort_unstable();
        let (x, y, z) = (triple[0], triple[1], triple[2]);
        order.swap(x, y);
        order.swap(y, z);
    }
}
