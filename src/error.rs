//! Error type shared by every stage of the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TspError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode distance matrix response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("input file contains no stops")]
    NoStops,

    #[error("stops file has no {0} column")]
    MissingColumn(&'static str),

    #[error("row {row}: {column} value {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { row: usize, lat: f64, lng: f64 },

    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("{num_stops} stops exceed the per-request quota of {max_elements} elements")]
    QuotaExceeded { num_stops: usize, max_elements: usize },

    #[error("distance matrix API returned status {status}: {message}")]
    ApiStatus { status: String, message: String },

    #[error("no route from origin {origin} to destination {destination} (status {status})")]
    UnreachableElement {
        origin: usize,
        destination: usize,
        status: String,
    },

    #[error("distance matrix has unexpected shape: {0}")]
    MatrixShape(String),

    #[error("invalid route: {0}")]
    InvalidRoute(String),
}
