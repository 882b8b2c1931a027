use std::ops::Range;

use crate::error::TspError;

/// Splits `0..num_stops` into contiguous origin batches so that
/// `batch_len * num_stops` never exceeds `max_elements`.
///
/// Every request uses all stops as destinations, so the row budget per request
/// is `max_elements / num_stops`. Full batches come first, then one partial
/// batch for the remainder.
pub fn plan_batches(num_stops: usize, max_elements: usize) -> Result<Vec<Range<usize>>, TspError> {
    if num_stops == 0 {
        return Ok(vec![]);
    }

    let max_rows = max_elements / num_stops;
    if max_rows == 0 {
        return Err(TspError::QuotaExceeded {
            num_stops,
            max_elements,
        });
    }

    let (q, r) = (num_stops / max_rows, num_stops % max_rows);
    let mut batches: Vec<Range<usize>> = (0..q).map(|i| i * max_rows..(i + 1) * max_rows).collect();
    if r > 0 {
        batches.push(q * max_rows..q * max_rows + r);
    }

    Ok(batches)
}
