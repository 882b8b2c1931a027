pub mod google;

pub use google::GoogleDistanceMatrix;

use crate::error::TspError;

/// Anything that can answer an origins x destinations distance query in meters.
#[allow(async_fn_in_trait)]
pub trait MatrixSource {
    /// Returns one row per origin, one column per destination, in request order.
    async fn rows(&self, origins: &[String], destinations: &[String]) -> Result<Vec<Vec<u64>>, TspError>;
}
