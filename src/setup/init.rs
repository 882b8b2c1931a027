use std::path::Path;

use tracing::info;

use super::input::read_stops;
use crate::distance::matrix::create_dm;
use crate::distance::providers::MatrixSource;
use crate::domain::types::ProblemInstance;
use crate::error::TspError;

/// Reads the stops file and acquires the distance matrix for it.
pub async fn setup<S: MatrixSource>(
    input: &Path,
    source: &S,
    max_elements: usize,
) -> Result<ProblemInstance, TspError> {
    let stops = read_stops(input)?;
    info!("Starting setup with {} stops", stops.len());

    let distance_matrix = create_dm(source, &stops, max_elements).await?;

    info!("Setup completed successfully");
    Ok(ProblemInstance {
        stops,
        distance_matrix,
    })
}
