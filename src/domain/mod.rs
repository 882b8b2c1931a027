pub mod solution;
pub mod types;

pub use solution::{Improvement, Route, Solution};
pub use types::{Coordinate, DistanceMatrix, ProblemInstance, Stop};
