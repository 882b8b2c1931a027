pub mod diversification;
pub mod neighbourhood;
pub mod search;
pub mod tabu;

pub use search::{calculate_max_no_improvement, SolverConfig, TabuSearch};
