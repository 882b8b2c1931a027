use std::env;

use dotenv::dotenv;
use tracing::{info, warn};

use crate::error::TspError;

pub mod constant {
    /// Per-request element quota of the distance matrix API (origins x destinations).
    pub const MAX_ELEMENTS: usize = 100;
    pub const DEPOT: usize = 0;
    pub const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";
    pub const MAPS_DIR_URL: &str = "https://www.google.com/maps/dir/";
    pub const RUNS: usize = 1000;
    pub const SEED: u64 = 64;
    pub const TABU_TENURE_MIN: usize = 5;
    pub const TABU_TENURE_MAX: usize = 15;
}

/// Runtime settings resolved from the environment (`.env` included).
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub distance_matrix_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, TspError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TspError> {
        let api_key = match lookup("GOOGLE_API_KEY") {
            Some(key) if !key.trim().is_empty() => {
                info!("Loaded Google Maps API key from environment");
                key.trim().to_string()
            }
            _ => return Err(TspError::MissingApiKey),
        };

        let distance_matrix_url = lookup("DISTANCE_MATRIX_URL")
            .unwrap_or_else(|| constant::DISTANCE_MATRIX_URL.to_string());
        if distance_matrix_url != constant::DISTANCE_MATRIX_URL {
            warn!("Using non-default distance matrix endpoint: {}", distance_matrix_url);
        }

        Ok(Self {
            api_key,
            distance_matrix_url,
        })
    }
}
