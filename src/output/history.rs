use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::domain::solution::Improvement;
use crate::error::TspError;

/// Writes every best-so-far improvement of a solver run as CSV.
pub fn save_history(improvements: &[Improvement], path: impl AsRef<Path>) -> Result<(), TspError> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["iteration", "best_distance_m"])?;
    for improvement in improvements {
        wtr.write_record([improvement.iteration.to_string(), improvement.distance.to_string()])?;
    }

    wtr.flush()?;
    info!("Saved {} improvements to {}", improvements.len(), path.display());
    Ok(())
}
