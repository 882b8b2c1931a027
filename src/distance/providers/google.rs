use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, trace};

use super::MatrixSource;
use crate::error::TspError;

/// Client for the Google Distance Matrix API.
#[derive(Debug, Clone)]
pub struct GoogleDistanceMatrix {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleDistanceMatrix {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl MatrixSource for GoogleDistanceMatrix {
    async fn rows(&self, origins: &[String], destinations: &[String]) -> Result<Vec<Vec<u64>>, TspError> {
        let origins_param = origins.join("|");
        let destinations_param = destinations.join("|");

        debug!(
            "Requesting {}x{} distance matrix from {}",
            origins.len(),
            destinations.len(),
            self.base_url
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("units", "metric"),
                ("origins", origins_param.as_str()),
                ("destinations", destinations_param.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        trace!("Distance matrix response: {} bytes", text.len());

        let body: DistanceMatrixResponse = serde_json::from_str(&text)?;
        parse_rows(body, origins.len(), destinations.len())
    }
}

fn parse_rows(
    body: DistanceMatrixResponse,
    num_origins: usize,
    num_destinations: usize,
) -> Result<Vec<Vec<u64>>, TspError> {
    if body.status != "OK" {
        return Err(TspError::ApiStatus {
            status: body.status,
            message: body.error_message.unwrap_or_default(),
        });
    }

    if body.rows.len() != num_origins {
        return Err(TspError::MatrixShape(format!(
            "got {} rows for {} origins",
            body.rows.len(),
            num_origins
        )));
    }

    let mut dist_matrix = Vec::with_capacity(num_origins);
    for (origin, row) in body.rows.into_iter().enumerate() {
        if row.elements.len() != num_destinations {
            return Err(TspError::MatrixShape(format!(
                "row {} has {} elements for {} destinations",
                origin,
                row.elements.len(),
                num_destinations
            )));
        }

        let mut row_data = Vec::with_capacity(num_destinations);
        for (destination, element) in row.elements.into_iter().enumerate() {
            match element.distance {
                Some(distance) if element.status == "OK" => row_data.push(distance.value),
                _ => {
                    return Err(TspError::UnreachableElement {
                        origin,
                        destination,
                        status: element.status,
                    })
                }
            }
        }
        dist_matrix.push(row_data);
    }

    Ok(dist_matrix)
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Debug, Deserialize)]
struct Distance {
    value: u64, // meters
}
