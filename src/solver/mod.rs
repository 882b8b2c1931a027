//! Single-vehicle route optimisation.
//!
//! Both solvers start from a cheapest-arc construction rooted at the depot.
//! [`TabuSearch`] then improves the tour with swap and 2-opt moves.

pub mod construction;
pub mod tabu_search;

pub use construction::{path_cheapest_arc, CheapestArc};
pub use tabu_search::{SolverConfig, TabuSearch};

use crate::domain::solution::Solution;
use crate::domain::types::DistanceMatrix;
use crate::error::TspError;

pub trait RouteSolver {
    /// Returns a closed tour over every stop in `dm`, starting at `depot`.
    fn solve(&self, dm: &DistanceMatrix, depot: usize) -> Result<Solution, TspError>;
}
