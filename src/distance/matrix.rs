use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::batching::plan_batches;
use super::providers::MatrixSource;
use crate::domain::types::{DistanceMatrix, Stop};
use crate::error::TspError;

/// Builds the full distance matrix for `stops`, one request per origin batch.
///
/// Requests are issued one after another and their rows concatenated in origin
/// order. Every request uses all stops as destinations.
pub async fn create_dm<S: MatrixSource>(
    source: &S,
    stops: &[Stop],
    max_elements: usize,
) -> Result<DistanceMatrix, TspError> {
    let batches = plan_batches(stops.len(), max_elements)?;
    info!(
        "Creating distance matrix for {} stops in {} requests (quota {} elements)",
        stops.len(),
        batches.len(),
        max_elements
    );

    let locations: Vec<String> = stops.iter().map(|s| s.location.clone()).collect();
    let destinations: &[String] = &locations;

    let rows = stream::iter(batches)
        .then(move |batch| {
            debug!("Fetching rows {}..{}", batch.start, batch.end);
            source.rows(&destinations[batch], destinations)
        })
        .try_concat()
        .await?;

    let dm = DistanceMatrix::new(rows)?;
    if dm.len() != stops.len() {
        return Err(TspError::MatrixShape(format!(
            "assembled {} rows for {} stops",
            dm.len(),
            stops.len()
        )));
    }

    info!("Successfully created {}x{} distance matrix", dm.len(), dm.len());
    Ok(dm)
}
