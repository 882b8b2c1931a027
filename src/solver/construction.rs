use tracing::{debug, info};

use super::RouteSolver;
use crate::domain::solution::{Improvement, Route, Solution};
use crate::domain::types::DistanceMatrix;
use crate::error::TspError;
use crate::evaluation::fitness::find_distance;

/// Builds a path from `depot` by always following the cheapest arc from the
/// current path end to an unvisited stop. Ties go to the lowest stop index.
pub fn path_cheapest_arc(dm: &DistanceMatrix, depot: usize) -> Result<Vec<usize>, TspError> {
    let n = dm.len();
    if n == 0 {
        return Err(TspError::NoStops);
    }
    if depot >= n {
        return Err(TspError::InvalidRoute(format!(
            "depot {} out of range for {} stops",
            depot, n
        )));
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[depot] = true;
    order.push(depot);

    let mut current = depot;
    while let Some(next) = (0..n)
        .filter(|&j| !visited[j])
        .min_by_key(|&j| (dm.get(current, j), j))
    {
        visited[next] = true;
        order.push(next);
        current = next;
    }

    debug!("Cheapest-arc construction: {:?}", order);
    Ok(order)
}

/// Construction-only solver: the cheapest-arc path, closed back to the depot.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheapestArc;

impl RouteSolver for CheapestArc {
    fn solve(&self, dm: &DistanceMatrix, depot: usize) -> Result<Solution, TspError> {
        let order = path_cheapest_arc(dm, depot)?;
        let distance = find_distance(&order, dm);
        info!("Cheapest-arc route: {} m", distance);

        let route = Route { order, distance };
        route.validate(dm.len(), depot)?;

        Ok(Solution {
            route,
            improvements: vec![Improvement {
                iteration: 0,
                distance,
            }],
        })
    }
}
