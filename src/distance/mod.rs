pub mod batching;
pub mod matrix;
pub mod providers;

pub use batching::plan_batches;
pub use matrix::create_dm;
pub use providers::{GoogleDistanceMatrix, MatrixSource};
