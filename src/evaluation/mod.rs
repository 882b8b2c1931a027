pub mod fitness;

pub use fitness::{find_distance, move_delta, Move};
