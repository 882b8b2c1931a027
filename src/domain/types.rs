use std::fmt;

use tracing::debug;

use crate::error::TspError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

// Rendered the way both the distance matrix API and the maps URL expect it.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub label: String,
    pub coord: Coordinate,
    /// `lat,lng` as written in the stops file; sent to the API and the maps URL unchanged.
    pub location: String,
}

impl Stop {
    /// Stop whose location text is the rendered coordinate.
    pub fn new(label: impl Into<String>, coord: Coordinate) -> Self {
        Self {
            label: label.into(),
            location: coord.to_string(),
            coord,
        }
    }
}

/// Square table of travel distances in meters, row = origin, column = destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<u64>>,
}

impl DistanceMatrix {
    /// Checks the rows form a square table and zeroes the diagonal.
    pub fn new(mut rows: Vec<Vec<u64>>) -> Result<Self, TspError> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(TspError::MatrixShape(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }

        for (i, row) in rows.iter_mut().enumerate() {
            if row[i] != 0 {
                debug!("Normalising diagonal entry ({}, {}) from {} to 0", i, i, row[i]);
                row[i] = 0;
            }
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.rows[from][to]
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }
}

#[derive(Debug, Clone)]
pub struct ProblemInstance {
    pub stops: Vec<Stop>,
    pub distance_matrix: DistanceMatrix,
}
