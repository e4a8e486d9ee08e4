//! [Open-Elevation](https://open-elevation.com) lookup client.

use crate::{ElevationError, ElevationSource};
use geo::Point;
use serde::{Deserialize, Serialize};

/// Public Open-Elevation instance.
///
/// Free to use, rate limited. Self-hosted deployments expose the same
/// API under their own URL.
pub const DEFAULT_BASE_URL: &str = "https://api.open-elevation.com";

/// Elevation lookups backed by an Open-Elevation compatible service.
#[derive(Clone, Debug)]
pub struct OpenElevation {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct LookupRequest {
    locations: Vec<Location>,
}

#[derive(Debug, Serialize)]
struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

impl OpenElevation {
    /// Returns a client for the public Open-Elevation instance.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Returns a client for an alternate deployment of the service.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for OpenElevation {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevationSource for OpenElevation {
    async fn elevations(&self, locations: &[Point<f64>]) -> Result<Vec<f64>, ElevationError> {
        let request = LookupRequest {
            locations: locations
                .iter()
                .map(|point| Location {
                    latitude: point.y(),
                    longitude: point.x(),
                })
                .collect(),
        };

        let url = format!("{}/api/v1/lookup", self.base_url);
        let response: LookupResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.results.len() != locations.len() {
            return Err(ElevationError::MalformedResponse {
                expected: locations.len(),
                actual: response.results.len(),
            });
        }

        Ok(response
            .results
            .into_iter()
            .map(|result| result.elevation)
            .collect())
    }
}
