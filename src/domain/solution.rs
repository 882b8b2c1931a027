use crate::error::TspError;

/// Visiting order starting at the depot; the return leg to the depot is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub order: Vec<usize>,
    pub distance: u64,
}

impl Route {
    /// Checks the order is a permutation of `0..num_stops` that starts at `depot`.
    pub fn validate(&self, num_stops: usize, depot: usize) -> Result<(), TspError> {
        if self.order.len() != num_stops {
            return Err(TspError::InvalidRoute(format!(
                "route visits {} stops, expected {}",
                self.order.len(),
                num_stops
            )));
        }

        if num_stops > 0 && self.order[0] != depot {
            return Err(TspError::InvalidRoute(format!(
                "route starts at {} instead of depot {}",
                self.order[0], depot
            )));
        }

        let mut seen = vec![false; num_stops];
        for &stop in &self.order {
            if stop >= num_stops {
                return Err(TspError::InvalidRoute(format!("stop index {} out of range", stop)));
            }
            if seen[stop] {
                return Err(TspError::InvalidRoute(format!("stop {} visited twice", stop)));
            }
            seen[stop] = true;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Improvement {
    pub iteration: usize,
    pub distance: u64,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub route: Route,
    pub improvements: Vec<Improvement>,
}
